//! Customer notifications.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::notification::NotificationRepository,
    error::AppError,
    model::notification::{CreateNotificationParam, Notification, NotificationType},
};

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds an unread notification for a customer.
    pub async fn notify(
        &self,
        user_email: &str,
        title: &str,
        message: &str,
        notification_type: NotificationType,
    ) -> Result<Notification, AppError> {
        Ok(NotificationRepository::new(self.db)
            .create(CreateNotificationParam {
                user_email: user_email.to_string(),
                title: title.to_string(),
                message: message.to_string(),
                notification_type,
            })
            .await?)
    }

    /// Retrieves a customer's notifications, newest first.
    pub async fn get_for_user(&self, user_email: &str) -> Result<Vec<Notification>, AppError> {
        Ok(NotificationRepository::new(self.db)
            .get_by_user_email(user_email)
            .await?)
    }

    pub async fn unread_count(&self, user_email: &str) -> Result<u64, AppError> {
        Ok(NotificationRepository::new(self.db)
            .count_unread(user_email)
            .await?)
    }

    /// Retrieves one notification.
    ///
    /// # Returns
    /// - `Ok(Notification)` - The notification
    /// - `Err(AppError::NotFound)` - "Notification not found"
    pub async fn get(&self, id: i32) -> Result<Notification, AppError> {
        NotificationRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)
    }

    /// Marks one notification as read.
    ///
    /// # Returns
    /// - `Ok(())` - Notification is now read
    /// - `Err(AppError::NotFound)` - "Notification not found"
    pub async fn mark_read(&self, id: i32) -> Result<(), AppError> {
        if NotificationRepository::new(self.db).mark_read(id).await? {
            Ok(())
        } else {
            Err(not_found())
        }
    }

    /// Marks every notification of a customer as read.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of notifications that were unread
    pub async fn mark_all_read(&self, user_email: &str) -> Result<u64, AppError> {
        Ok(NotificationRepository::new(self.db)
            .mark_all_read(user_email)
            .await?)
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Notification not found".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::builder::TestBuilder;

    /// Tests notifying, reading and marking notifications.
    ///
    /// Expected: unread count follows mark_read and mark_all_read
    #[tokio::test]
    async fn tracks_unread_notifications() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Notification)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let service = NotificationService::new(db);

        let first = service
            .notify("jane@example.com", "One", "First", NotificationType::Info)
            .await?;
        service
            .notify("jane@example.com", "Two", "Second", NotificationType::Warning)
            .await?;
        assert_eq!(service.unread_count("jane@example.com").await?, 2);

        service.mark_read(first.id).await?;
        assert_eq!(service.unread_count("jane@example.com").await?, 1);

        assert_eq!(service.mark_all_read("jane@example.com").await?, 1);
        assert_eq!(service.unread_count("jane@example.com").await?, 0);

        Ok(())
    }

    /// Tests marking a notification that doesn't exist.
    ///
    /// Expected: NotFound
    #[tokio::test]
    async fn mark_read_unknown() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Notification)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let result = NotificationService::new(db).mark_read(999).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));

        Ok(())
    }
}
