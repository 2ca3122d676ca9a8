use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;

use crate::{
    model::health::HealthDto,
    server::{data::user::UserRepository, state::AppState},
};

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Report whether the backend and its database are reachable.
///
/// Needs no login. A failed database ping is reported in the body with a 500 status
/// rather than as an `AppError`, so monitors always get the health envelope.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Backend and database are up", body = HealthDto),
        (status = 500, description = "Database unreachable", body = HealthDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let timestamp = Utc::now().timestamp_millis();

    let user_count = match state.db.ping().await {
        Ok(()) => UserRepository::new(&state.db).count().await,
        Err(err) => Err(err),
    };

    match user_count {
        Ok(user_count) => (
            StatusCode::OK,
            Json(HealthDto {
                status: "SUCCESS".to_string(),
                message: "ResolveIT backend is running".to_string(),
                database: Some("connected".to_string()),
                user_count: Some(user_count),
                timestamp,
            }),
        ),
        Err(err) => {
            tracing::error!("Health check failed: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthDto {
                    status: "ERROR".to_string(),
                    message: "Database connection failed".to_string(),
                    database: Some("disconnected".to_string()),
                    user_count: None,
                    timestamp,
                }),
            )
        }
    }
}
