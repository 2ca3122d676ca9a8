use super::*;

/// Tests marking a single notification as read.
///
/// Expected: Ok(true) and the unread count drops by one
#[tokio::test]
async fn marks_notification_read() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let notification = factory::create_notification(db, "jane@example.com").await?;
    factory::create_notification(db, "jane@example.com").await?;

    let repo = NotificationRepository::new(db);
    assert!(repo.mark_read(notification.id).await?);

    assert_eq!(repo.count_unread("jane@example.com").await?, 1);
    assert!(repo.find_by_id(notification.id).await?.unwrap().is_read);

    Ok(())
}

/// Tests marking an unknown notification.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NotificationRepository::new(db);
    assert!(!repo.mark_read(404).await?);

    Ok(())
}
