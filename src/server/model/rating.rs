//! Customer satisfaction rating domain models.

use chrono::{DateTime, Utc};

use crate::model::{rating::RatingDto, staff::StaffRatingsDto};

/// Lowest accepted rating.
pub const MIN_RATING: i32 = 1;
/// Highest accepted rating.
pub const MAX_RATING: i32 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Rating {
    pub id: i32,
    pub complaint_id: String,
    pub user_email: String,
    pub staff_email: Option<String>,
    pub rating: i32,
    pub feedback: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Rating {
    pub fn into_dto(self) -> RatingDto {
        RatingDto {
            id: self.id,
            complaint_id: self.complaint_id,
            user_email: self.user_email,
            staff_email: self.staff_email,
            rating: self.rating,
            feedback: self.feedback,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::rating::Model) -> Self {
        Self {
            id: entity.id,
            complaint_id: entity.complaint_id,
            user_email: entity.user_email,
            staff_email: entity.staff_email,
            rating: entity.rating,
            feedback: entity.feedback,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateRatingParam {
    pub complaint_id: String,
    pub user_email: String,
    pub staff_email: Option<String>,
    pub rating: i32,
    pub feedback: Option<String>,
}

/// Rating statistics for one staff member.
#[derive(Debug, Clone, PartialEq)]
pub struct StaffRatingSummary {
    /// Mean rating rounded to one decimal, `0.0` when unrated.
    pub average_rating: f64,
    pub total_ratings: u64,
    /// Resolved over assigned, rounded to two decimals.
    pub resolution_rate: f64,
}

impl StaffRatingSummary {
    pub fn into_dto(self) -> StaffRatingsDto {
        StaffRatingsDto {
            average_rating: self.average_rating,
            total_ratings: self.total_ratings,
            resolution_rate: self.resolution_rate,
        }
    }
}
