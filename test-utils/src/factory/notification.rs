//! Notification factory for creating test notifications.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test notifications with customizable fields.
pub struct NotificationFactory<'a> {
    db: &'a DatabaseConnection,
    user_email: String,
    title: String,
    message: String,
    notification_type: String,
    is_read: bool,
    created_at: DateTime<Utc>,
}

impl<'a> NotificationFactory<'a> {
    /// Creates a new unread `INFO` notification factory for the given user.
    pub fn new(db: &'a DatabaseConnection, user_email: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            user_email: user_email.into(),
            title: format!("Notification {}", id),
            message: format!("Test notification {}", id),
            notification_type: "INFO".to_string(),
            is_read: false,
            created_at: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn notification_type(mut self, notification_type: impl Into<String>) -> Self {
        self.notification_type = notification_type.into();
        self
    }

    pub fn is_read(mut self, is_read: bool) -> Self {
        self.is_read = is_read;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the notification entity into the database.
    pub async fn build(self) -> Result<entity::notification::Model, DbErr> {
        entity::notification::ActiveModel {
            user_email: ActiveValue::Set(self.user_email),
            title: ActiveValue::Set(self.title),
            message: ActiveValue::Set(self.message),
            notification_type: ActiveValue::Set(self.notification_type),
            is_read: ActiveValue::Set(self.is_read),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unread notification for the given user email.
pub async fn create_notification(
    db: &DatabaseConnection,
    user_email: &str,
) -> Result<entity::notification::Model, DbErr> {
    NotificationFactory::new(db, user_email).build().await
}
