use super::*;

/// Tests marking all of a customer's notifications as read.
///
/// Expected: Ok with the number changed, other customers untouched
#[tokio::test]
async fn marks_only_that_users_notifications() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_notification(db, "jane@example.com").await?;
    factory::create_notification(db, "jane@example.com").await?;
    NotificationFactory::new(db, "jane@example.com")
        .is_read(true)
        .build()
        .await?;
    factory::create_notification(db, "other@example.com").await?;

    let repo = NotificationRepository::new(db);
    let changed = repo.mark_all_read("jane@example.com").await?;

    assert_eq!(changed, 2);
    assert_eq!(repo.count_unread("jane@example.com").await?, 0);
    assert_eq!(repo.count_unread("other@example.com").await?, 1);

    Ok(())
}
