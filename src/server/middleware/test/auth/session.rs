use super::*;

/// Tests storing, reading and clearing the principal.
///
/// Expected: principal readable after login, gone after clear
#[tokio::test]
async fn stores_and_clears_principal() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let user = factory::user::create_user(db).await?;

    log_in_user(session, &user).await?;
    let auth_session = AuthSession::new(session);
    let principal = auth_session.get_principal().await?;

    assert_eq!(principal.map(|p| p.email), Some(user.email));
    assert!(auth_session.is_authenticated().await?);

    auth_session.clear().await;

    assert!(!auth_session.is_authenticated().await?);

    Ok(())
}
