use super::*;

/// Tests creating a notification.
///
/// Expected: Ok with an unread notification of the given type
#[tokio::test]
async fn creates_unread_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NotificationRepository::new(db);
    let notification = repo
        .create(CreateNotificationParam {
            user_email: "jane@example.com".to_string(),
            title: "Complaint Update".to_string(),
            message: "Your complaint CMP-1 is now RESOLVED".to_string(),
            notification_type: NotificationType::Success,
        })
        .await?;

    assert!(!notification.is_read);
    assert_eq!(notification.notification_type, "SUCCESS");
    assert_eq!(repo.count_unread("jane@example.com").await?, 1);

    Ok(())
}
