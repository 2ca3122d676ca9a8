use super::*;

/// Tests finding a staff account by email.
///
/// Expected: Ok(Some) with parsed role
#[tokio::test]
async fn finds_admin_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Staff)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;

    let repo = StaffRepository::new(db);
    let found = repo.find_by_email(&admin.email).await?.unwrap();

    assert!(found.role.is_admin());
    assert_eq!(found.id, admin.id);

    Ok(())
}

/// Tests loading a staff row whose role isn't a known role.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_for_unknown_stored_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Staff)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let staff = factory::staff::StaffFactory::new(db)
        .role("JANITOR")
        .build()
        .await?;

    let repo = StaffRepository::new(db);
    let result = repo.find_by_email(&staff.email).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
