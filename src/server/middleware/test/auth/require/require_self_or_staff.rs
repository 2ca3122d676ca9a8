use super::*;

/// Tests a customer accessing their own data.
///
/// Expected: Ok(Actor::User)
#[tokio::test]
async fn grants_access_to_self() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Staff)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let user = factory::user::create_user(db).await?;
    log_in_user(session, &user).await?;

    let actor = require(db, session, &[Permission::SelfOrStaff(user.email.clone())]).await?;

    assert!(matches!(actor, Actor::User(ref u) if u.id == user.id));

    Ok(())
}

/// Tests a customer accessing another customer's data.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_other_customer() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Staff)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    log_in_user(session, &user).await?;

    let result = require(db, session, &[Permission::SelfOrStaff(other.email)]).await;

    assert!(is_access_denied(&result));

    Ok(())
}

/// Tests staff accessing a customer's data.
///
/// Expected: Ok(Actor::Staff)
#[tokio::test]
async fn grants_access_to_staff() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Staff)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let staff = factory::staff::create_staff(db).await?;
    log_in_staff(session, &staff).await?;

    let result = require(
        db,
        session,
        &[Permission::SelfOrStaff("someone@example.com".to_string())],
    )
    .await;

    assert!(result.is_ok());

    Ok(())
}
