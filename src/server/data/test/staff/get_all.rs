use super::*;

/// Tests listing all staff accounts.
///
/// Expected: Ok with accounts in insertion order
#[tokio::test]
async fn returns_all_staff_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Staff)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_staff(db).await?;
    let second = factory::create_admin(db).await?;

    let repo = StaffRepository::new(db);
    let all = repo.get_all().await?;

    assert_eq!(all.len(), 2);
    assert_eq!(all[0].email, first.email);
    assert_eq!(all[1].email, second.email);

    Ok(())
}
