use super::*;

/// Tests owner, other customer and unknown complaint against the owner check.
///
/// Expected: owner passes, other customer is denied, unknown complaint is NotFound
#[tokio::test]
async fn checks_complaint_owner() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Staff)
        .with_complaint_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let (owner, complaint) = factory::helpers::create_complaint_with_owner(db).await?;
    let other = factory::user::create_user(db).await?;
    let permission = Permission::ComplaintOwnerOrStaff(complaint.complaint_id.clone());

    log_in_user(session, &owner).await?;
    let owner_result = require(db, session, &[permission]).await;
    let unknown = require(
        db,
        session,
        &[Permission::ComplaintOwnerOrStaff("CMP-404".to_string())],
    )
    .await;

    log_in_user(session, &other).await?;
    let other_result = require(
        db,
        session,
        &[Permission::ComplaintOwnerOrStaff(complaint.complaint_id.clone())],
    )
    .await;

    assert!(owner_result.is_ok());
    assert!(matches!(unknown, Err(AppError::NotFound(_))));
    assert!(is_access_denied(&other_result));

    Ok(())
}

/// Tests staff against a complaint they are not assigned to.
///
/// Expected: Ok, staff see every complaint
#[tokio::test]
async fn grants_access_to_staff() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Staff)
        .with_complaint_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let complaint = factory::complaint::create_complaint(db, "jane@example.com").await?;
    let staff = factory::staff::create_staff(db).await?;
    log_in_staff(session, &staff).await?;

    let result = require(
        db,
        session,
        &[Permission::ComplaintOwnerOrStaff(complaint.complaint_id)],
    )
    .await;

    assert!(result.is_ok());

    Ok(())
}
