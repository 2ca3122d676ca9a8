use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct SubmitRatingDto {
    pub complaint_id: String,
    pub rating: i32,
    pub feedback: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RatingDto {
    pub id: i32,
    pub complaint_id: String,
    pub user_email: String,
    pub staff_email: Option<String>,
    pub rating: i32,
    pub feedback: Option<String>,
    pub created_at: DateTime<Utc>,
}
