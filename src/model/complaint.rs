use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct SubmitComplaintDto {
    pub order_id: String,
    /// `YYYY-MM-DD`
    pub order_date: Option<String>,
    pub issue_type: String,
    pub issue_title: Option<String>,
    pub issue_description: String,
    pub priority: Option<String>,
    pub contact_phone: Option<String>,
    pub expected_resolution: Option<String>,
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct SubmitComplaintQuery {
    pub user_email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintSubmittedDto {
    pub status: String,
    pub message: String,
    pub complaint_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintDto {
    pub id: i32,
    pub complaint_id: String,
    pub user_email: String,
    pub order_id: String,
    pub order_date: Option<NaiveDate>,
    pub issue_type: String,
    pub title: Option<String>,
    pub description: String,
    pub status: String,
    pub priority: Option<String>,
    pub priority_level: i32,
    pub contact_phone: Option<String>,
    pub expected_resolution: Option<String>,
    pub assigned_to: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintDetailDto {
    #[serde(flatten)]
    pub complaint: ComplaintDto,
    pub attachments: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(default, rename_all = "camelCase")]
pub struct ComplaintSearchQuery {
    pub complaint_id: Option<String>,
    pub status: Option<String>,
    /// `YYYY-MM-DD`
    pub from_date: Option<String>,
    /// `YYYY-MM-DD`
    pub to_date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(default)]
pub struct ExportQuery {
    pub format: Option<String>,
}
