use super::*;

/// Tests an admin account passing the admin check.
///
/// Expected: Ok(Actor::Staff) with is_admin() true
#[tokio::test]
async fn grants_access_to_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Staff)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let admin = factory::staff::create_admin(db).await?;
    log_in_staff(session, &admin).await?;

    let actor = require(db, session, &[Permission::Admin]).await?;

    assert!(actor.is_admin());
    assert_eq!(actor.email(), admin.email);

    Ok(())
}

/// Tests the non-admin staff roles against the admin check.
///
/// Expected: Err(AuthError::AccessDenied) for STAFF, SUPERVISOR and MANAGER
#[tokio::test]
async fn denies_access_to_other_roles() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Staff)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    for role in ["STAFF", "SUPERVISOR", "MANAGER"] {
        let staff = factory::staff::StaffFactory::new(db).role(role).build().await?;
        log_in_staff(session, &staff).await?;

        let result = require(db, session, &[Permission::Admin]).await;

        assert!(is_access_denied(&result), "role {} passed admin check", role);
    }

    Ok(())
}

/// Tests a customer against the admin check.
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

    let result = require(db, session, &[Permission::Admin]).await;

    assert!(is_access_denied(&result));

    Ok(())
}
