//! Staff note repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::staff_note::{CreateStaffNoteParam, StaffNote};

pub struct StaffNoteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StaffNoteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateStaffNoteParam) -> Result<StaffNote, DbErr> {
        let entity = entity::staff_note::ActiveModel {
            complaint_id: ActiveValue::Set(param.complaint_id),
            staff_email: ActiveValue::Set(param.staff_email),
            note: ActiveValue::Set(param.note),
            is_internal: ActiveValue::Set(param.is_internal),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(StaffNote::from_entity(entity))
    }

    /// Retrieves notes on a complaint, newest first.
    ///
    /// # Arguments
    /// - `complaint_id` - Public complaint ID
    /// - `internal_only` - Return only notes hidden from the customer
    pub async fn get_by_complaint(
        &self,
        complaint_id: &str,
        internal_only: bool,
    ) -> Result<Vec<StaffNote>, DbErr> {
        let mut query = entity::prelude::StaffNote::find()
            .filter(entity::staff_note::Column::ComplaintId.eq(complaint_id));

        if internal_only {
            query = query.filter(entity::staff_note::Column::IsInternal.eq(true));
        }

        let entities = query
            .order_by_desc(entity::staff_note::Column::CreatedAt)
            .order_by_desc(entity::staff_note::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(StaffNote::from_entity).collect())
    }
}
