use super::*;

fn param(email: &str) -> CreateUserParam {
    CreateUserParam {
        email: email.to_string(),
        password_hash: "hash".to_string(),
        full_name: "Jane Doe".to_string(),
        phone_number: Some("1234567890".to_string()),
        address: None,
    }
}

/// Tests creating a customer account.
///
/// Verifies that a new account gets the default notification preferences and
/// starts unverified.
///
/// Expected: Ok with account created
#[tokio::test]
async fn creates_user_with_defaults() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(param("jane@example.com")).await?;

    assert_eq!(user.email, "jane@example.com");
    assert_eq!(user.full_name, "Jane Doe");
    assert!(user.email_notifications);
    assert!(!user.sms_notifications);
    assert!(!user.marketing_emails);
    assert!(!user.email_verified);
    assert!(repo.exists_by_email("jane@example.com").await?);

    Ok(())
}

/// Tests creating two accounts with the same email.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn fails_for_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(param("jane@example.com")).await?;
    let result = repo.create(param("jane@example.com")).await;

    assert!(result.is_err());

    Ok(())
}
