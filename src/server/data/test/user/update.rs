use super::*;

/// Tests a partial profile update.
///
/// Verifies that fields set to `Some` change while `None` fields keep their
/// stored values.
///
/// Expected: Ok(Some) with only the given fields changed
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .full_name("Jane Doe")
        .phone_number("1234567890")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            user.id,
            UpdateUserParam {
                city: Some("Springfield".to_string()),
                sms_notifications: Some(true),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.full_name, "Jane Doe");
    assert_eq!(updated.phone_number.as_deref(), Some("1234567890"));
    assert_eq!(updated.city.as_deref(), Some("Springfield"));
    assert!(updated.sms_notifications);
    assert!(updated.updated_at >= user.updated_at);

    Ok(())
}

/// Tests changing the stored password hash.
///
/// Expected: Ok with the new hash returned by credential lookup
#[tokio::test]
async fn updates_password_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.update(
        user.id,
        UpdateUserParam {
            password_hash: Some("new-hash".to_string()),
            ..Default::default()
        },
    )
    .await?;

    let credentials = repo.find_credentials_by_email(&user.email).await?.unwrap();
    assert_eq!(credentials.password_hash, "new-hash");

    Ok(())
}

/// Tests updating an account that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.update(9999, UpdateUserParam::default()).await?;

    assert!(result.is_none());

    Ok(())
}
