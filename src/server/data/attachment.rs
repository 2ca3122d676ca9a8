//! Complaint attachment repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct AttachmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttachmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records the stored path of an uploaded file for a complaint.
    pub async fn create(&self, complaint_id: &str, file_path: &str) -> Result<(), DbErr> {
        entity::complaint_attachment::ActiveModel {
            complaint_id: ActiveValue::Set(complaint_id.to_string()),
            file_path: ActiveValue::Set(file_path.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Retrieves the attachment paths of a complaint in upload order.
    pub async fn get_paths_by_complaint(&self, complaint_id: &str) -> Result<Vec<String>, DbErr> {
        let entities = entity::prelude::ComplaintAttachment::find()
            .filter(entity::complaint_attachment::Column::ComplaintId.eq(complaint_id))
            .order_by_asc(entity::complaint_attachment::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(|a| a.file_path).collect())
    }
}
