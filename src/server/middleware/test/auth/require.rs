use super::*;

mod require_admin;
mod require_complaint_owner;
mod require_self_or_staff;
mod require_staff;

/// Tests a request without a logged-in account.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn rejects_missing_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Staff)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = require(db, session, &[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a session whose account has since been deleted.
///
/// Expected: Err(AuthError::AccountNotFound) with the stored email
#[tokio::test]
async fn rejects_deleted_account() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Staff)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let staff = factory::staff::create_staff(db).await?;
    log_in_staff(session, &staff).await?;

    crate::server::data::staff::StaffRepository::new(db)
        .delete(staff.id)
        .await?;
    let result = require(db, session, &[]).await;

    match result {
        Err(AppError::AuthErr(AuthError::AccountNotFound(email))) => {
            assert_eq!(email, staff.email)
        }
        other => panic!("expected AccountNotFound, got {:?}", other.map(|a| a.email().to_string())),
    }

    Ok(())
}

/// Tests that every permission in the list is checked.
///
/// Expected: plain staff passes Staff alone but fails Staff + Admin
#[tokio::test]
async fn requires_all_permissions() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Staff)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let staff = factory::staff::create_staff(db).await?;
    log_in_staff(session, &staff).await?;

    let staff_only = require(db, session, &[Permission::Staff]).await;
    let both = require(db, session, &[Permission::Staff, Permission::Admin]).await;

    assert!(staff_only.is_ok());
    assert!(is_access_denied(&both));

    Ok(())
}
