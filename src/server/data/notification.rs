//! Notification repository.
//!
//! Notifications belong to customers by email and are only ever marked read, never
//! edited.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::notification::{CreateNotificationParam, Notification};

use entity::notification::Column;

pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an unread notification.
    pub async fn create(&self, param: CreateNotificationParam) -> Result<Notification, DbErr> {
        let entity = entity::notification::ActiveModel {
            user_email: ActiveValue::Set(param.user_email),
            title: ActiveValue::Set(param.title),
            message: ActiveValue::Set(param.message),
            notification_type: ActiveValue::Set(param.notification_type.as_str().to_string()),
            is_read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Notification::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Notification>, DbErr> {
        let entity = entity::prelude::Notification::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Notification::from_entity))
    }

    /// Retrieves a customer's notifications, newest first.
    pub async fn get_by_user_email(&self, user_email: &str) -> Result<Vec<Notification>, DbErr> {
        let entities = entity::prelude::Notification::find()
            .filter(Column::UserEmail.eq(user_email))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Notification::from_entity).collect())
    }

    pub async fn count_unread(&self, user_email: &str) -> Result<u64, DbErr> {
        entity::prelude::Notification::find()
            .filter(Column::UserEmail.eq(user_email))
            .filter(Column::IsRead.eq(false))
            .count(self.db)
            .await
    }

    /// Marks one notification as read.
    ///
    /// # Returns
    /// - `Ok(true)` - Notification found and marked
    /// - `Ok(false)` - No notification with that ID
    pub async fn mark_read(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Notification::update_many()
            .filter(Column::Id.eq(id))
            .col_expr(Column::IsRead, Expr::value(true))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Marks every unread notification of a customer as read.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of notifications changed
    pub async fn mark_all_read(&self, user_email: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::Notification::update_many()
            .filter(Column::UserEmail.eq(user_email))
            .filter(Column::IsRead.eq(false))
            .col_expr(Column::IsRead, Expr::value(true))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
