use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::complaint::ComplaintDto;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StaffDto {
    pub id: i32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub role: String,
    pub department: Option<String>,
    pub workload: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StaffSummaryDto {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub department: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StaffLoginResponseDto {
    pub status: String,
    pub message: String,
    pub staff: StaffSummaryDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StaffDashboardDto {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
    pub department: Option<String>,
    pub total_complaints: u64,
    pub pending_complaints: u64,
    pub in_progress_complaints: u64,
    pub resolved_complaints: u64,
    pub recent_complaints: Vec<ComplaintDto>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateStatusDto {
    pub status: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct AssignComplaintDto {
    pub complaint_id: String,
    pub staff_email: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct BulkUpdateDto {
    pub complaint_ids: Vec<String>,
    pub status: Option<String>,
    pub assign_to: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct AddNoteDto {
    pub complaint_id: String,
    pub note: String,
    pub is_internal: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StaffNoteDto {
    pub id: i32,
    pub complaint_id: String,
    pub staff_email: String,
    pub note: String,
    pub is_internal: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StaffPerformanceDto {
    pub total_assigned: u64,
    pub resolved: u64,
    pub in_progress: u64,
    pub pending: u64,
    /// Percentage of assigned complaints that are resolved, two decimals.
    pub resolution_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StaffRatingsDto {
    pub average_rating: f64,
    pub total_ratings: u64,
    /// Fraction of assigned complaints that are resolved, between 0 and 1.
    pub resolution_rate: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateStaffProfileDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
}
