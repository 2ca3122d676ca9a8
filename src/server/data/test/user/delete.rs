use super::*;

/// Tests deleting an account.
///
/// Expected: Ok(true) then Ok(false) for the same ID
#[tokio::test]
async fn deletes_user_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    assert!(repo.delete(user.id).await?);
    assert!(!repo.delete(user.id).await?);
    assert_eq!(repo.count().await?, 0);

    Ok(())
}
