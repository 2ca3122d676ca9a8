//! Complaint comment repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::comment::{Comment, CreateCommentParam};

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a comment on a complaint.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The created comment
    /// - `Err(DbErr)` - Database error, including a foreign key violation for an
    ///   unknown complaint
    pub async fn create(&self, param: CreateCommentParam) -> Result<Comment, DbErr> {
        let entity = entity::comment::ActiveModel {
            complaint_id: ActiveValue::Set(param.complaint_id),
            author_email: ActiveValue::Set(param.author_email),
            author_type: ActiveValue::Set(param.author_type.as_str().to_string()),
            message: ActiveValue::Set(param.message),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Comment::from_entity(entity)
    }

    /// Retrieves the comments on a complaint, oldest first.
    pub async fn get_by_complaint(&self, complaint_id: &str) -> Result<Vec<Comment>, DbErr> {
        entity::prelude::Comment::find()
            .filter(entity::comment::Column::ComplaintId.eq(complaint_id))
            .order_by_asc(entity::comment::Column::CreatedAt)
            .order_by_asc(entity::comment::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Comment::from_entity)
            .collect()
    }
}
