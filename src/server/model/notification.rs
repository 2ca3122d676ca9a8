//! Notification domain models.

use chrono::{DateTime, Utc};

use crate::model::notification::NotificationDto;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Success => "SUCCESS",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: i32,
    pub user_email: String,
    pub title: String,
    pub message: String,
    /// Stored type name. Kept as text since the frontend only displays it.
    pub notification_type: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            user_email: self.user_email,
            title: self.title,
            message: self.message,
            notification_type: self.notification_type,
            is_read: self.is_read,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::notification::Model) -> Self {
        Self {
            id: entity.id,
            user_email: entity.user_email,
            title: entity.title,
            message: entity.message,
            notification_type: entity.notification_type,
            is_read: entity.is_read,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateNotificationParam {
    pub user_email: String,
    pub title: String,
    pub message: String,
    pub notification_type: NotificationType,
}
