use super::*;

/// Tests listing a customer's notifications.
///
/// Expected: Ok with notifications newest first
#[tokio::test]
async fn returns_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    NotificationFactory::new(db, "jane@example.com")
        .title("older")
        .created_at(now - Duration::hours(1))
        .build()
        .await?;
    NotificationFactory::new(db, "jane@example.com")
        .title("newer")
        .created_at(now)
        .build()
        .await?;
    factory::create_notification(db, "other@example.com").await?;

    let repo = NotificationRepository::new(db);
    let notifications = repo.get_by_user_email("jane@example.com").await?;

    assert_eq!(notifications.len(), 2);
    assert_eq!(notifications[0].title, "newer");
    assert_eq!(notifications[1].title, "older");

    Ok(())
}
