//! Satisfaction rating repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::rating::{CreateRatingParam, Rating};

pub struct RatingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RatingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a rating. A complaint holds at most one rating.
    ///
    /// # Returns
    /// - `Ok(Rating)` - The created rating
    /// - `Err(DbErr)` - Database error, including a unique violation on complaint ID
    pub async fn create(&self, param: CreateRatingParam) -> Result<Rating, DbErr> {
        let entity = entity::rating::ActiveModel {
            complaint_id: ActiveValue::Set(param.complaint_id),
            user_email: ActiveValue::Set(param.user_email),
            staff_email: ActiveValue::Set(param.staff_email),
            rating: ActiveValue::Set(param.rating),
            feedback: ActiveValue::Set(param.feedback),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Rating::from_entity(entity))
    }

    pub async fn find_by_complaint(&self, complaint_id: &str) -> Result<Option<Rating>, DbErr> {
        let entity = entity::prelude::Rating::find()
            .filter(entity::rating::Column::ComplaintId.eq(complaint_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Rating::from_entity))
    }

    pub async fn exists_for_complaint(&self, complaint_id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Rating::find()
            .filter(entity::rating::Column::ComplaintId.eq(complaint_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Retrieves every rating attributed to a staff member, newest first.
    pub async fn get_by_staff(&self, staff_email: &str) -> Result<Vec<Rating>, DbErr> {
        let entities = entity::prelude::Rating::find()
            .filter(entity::rating::Column::StaffEmail.eq(staff_email))
            .order_by_desc(entity::rating::Column::CreatedAt)
            .order_by_desc(entity::rating::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Rating::from_entity).collect())
    }
}
