use super::*;

/// Tests creating a staff account.
///
/// Expected: Ok with role and workload stored
#[tokio::test]
async fn creates_staff() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Staff)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StaffRepository::new(db);
    let staff = repo
        .create(CreateStaffParam {
            email: "lisa@example.com".to_string(),
            password_hash: "hash".to_string(),
            first_name: "Lisa".to_string(),
            last_name: "Anderson".to_string(),
            phone: None,
            role: StaffRole::Supervisor,
            department: Some("Quality Assurance".to_string()),
            workload: 6,
        })
        .await?;

    assert_eq!(staff.role, StaffRole::Supervisor);
    assert_eq!(staff.workload, 6);
    assert!(repo.exists_by_email("lisa@example.com").await?);
    assert_eq!(repo.count().await?, 1);

    Ok(())
}
