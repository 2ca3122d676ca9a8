use super::*;

/// Tests a partial staff update including a role change.
///
/// Expected: Ok(Some) with the new role and department, other fields kept
#[tokio::test]
async fn updates_role_and_department() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Staff)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let staff = factory::staff::StaffFactory::new(db)
        .first_name("Alex")
        .build()
        .await?;

    let repo = StaffRepository::new(db);
    let updated = repo
        .update(
            staff.id,
            UpdateStaffParam {
                role: Some(StaffRole::Manager),
                department: Some("Management".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.first_name, "Alex");
    assert_eq!(updated.role, StaffRole::Manager);
    assert_eq!(updated.department.as_deref(), Some("Management"));

    Ok(())
}

/// Tests updating a staff account that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Staff)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StaffRepository::new(db);
    assert!(repo.update(42, UpdateStaffParam::default()).await?.is_none());
    assert!(!repo.delete(42).await?);

    Ok(())
}
