use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct AddCommentDto {
    pub complaint_id: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: i32,
    pub complaint_id: String,
    pub author_email: String,
    /// `USER` or `STAFF`
    pub author_type: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
