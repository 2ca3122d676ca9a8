use super::*;

/// Tests marking an account's email as verified.
///
/// Expected: Ok(true) and the flag stored
#[tokio::test]
async fn marks_email_verified() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    assert!(repo.set_email_verified(&user.email).await?);

    let stored = repo.find_by_email(&user.email).await?.unwrap();
    assert!(stored.email_verified);

    Ok(())
}

/// Tests verifying an unknown email.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    assert!(!repo.set_email_verified("nobody@example.com").await?);

    Ok(())
}
