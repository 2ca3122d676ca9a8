use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthDto {
    /// `SUCCESS` or `ERROR`
    pub status: String,
    pub message: String,
    pub database: Option<String>,
    pub user_count: Option<u64>,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}
