use super::*;

/// Tests a supervisor against the staff check.
///
/// Expected: Ok(Actor::Staff)
#[tokio::test]
async fn grants_access_to_any_staff_role() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Staff)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let supervisor = factory::staff::StaffFactory::new(db)
        .role("SUPERVISOR")
        .build()
        .await?;
    log_in_staff(session, &supervisor).await?;

    let actor = require(db, session, &[Permission::Staff]).await?;

    assert!(actor.is_staff());
    assert!(!actor.is_admin());

    Ok(())
}

/// Tests a customer against the staff check.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_customer() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Staff)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let user = factory::user::create_user(db).await?;
    log_in_user(session, &user).await?;

    let result = require(db, session, &[Permission::Staff]).await;

    assert!(is_access_denied(&result));

    Ok(())
}
