use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{complaint::ComplaintDto, notification::NotificationDto};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDashboardDto {
    pub first_name: String,
    pub email: String,
    pub total_complaints: u64,
    pub pending_complaints: u64,
    pub in_progress_complaints: u64,
    pub resolved_complaints: u64,
    pub recent_complaints: Vec<ComplaintDto>,
    pub notifications: Vec<NotificationDto>,
    pub unread_notifications: u64,
}
