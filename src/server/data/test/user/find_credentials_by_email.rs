use super::*;

/// Tests loading credentials for an existing account.
///
/// Expected: Ok(Some) carrying the stored hash
#[tokio::test]
async fn returns_hash_for_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .password_hash("stored-hash")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let credentials = repo.find_credentials_by_email(&user.email).await?;

    let credentials = credentials.unwrap();
    assert_eq!(credentials.password_hash, "stored-hash");
    assert_eq!(credentials.user.id, user.id);

    Ok(())
}

/// Tests loading credentials for an unknown email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let credentials = repo.find_credentials_by_email("nobody@example.com").await?;

    assert!(credentials.is_none());

    Ok(())
}
