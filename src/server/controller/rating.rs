use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        rating::{RatingDto, SubmitRatingDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::rating::RatingService,
        state::AppState,
    },
};

/// Tag for grouping rating endpoints in OpenAPI documentation
pub static RATING_TAG: &str = "rating";

/// Rate the handling of a complaint.
///
/// One rating per complaint. The rated staff member is the complaint's assignee at
/// the time of rating.
///
/// # Access Control
/// - Logged in as the customer who filed the complaint
///
/// # Returns
/// - `201 Created` - The stored rating
/// - `400 Bad Request` - Rating outside 1 to 5, or already rated
/// - `403 Forbidden` - Not the complaint owner
/// - `404 Not Found` - Unknown complaint
#[utoipa::path(
    post,
    path = "/api/ratings/submit",
    tag = RATING_TAG,
    request_body = SubmitRatingDto,
    responses(
        (status = 201, description = "Rating stored", body = RatingDto),
        (status = 400, description = "Invalid or duplicate rating", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Complaint not found", body = ErrorDto)
    ),
)]
pub async fn submit_rating(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SubmitRatingDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let rating = RatingService::new(&state.db)
        .submit(
            actor.email(),
            &payload.complaint_id,
            payload.rating,
            payload.feedback,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(rating.into_dto())))
}

/// Get the rating of a complaint.
///
/// # Access Control
/// - `ComplaintOwnerOrStaff` - The customer who filed it or any staff member
#[utoipa::path(
    get,
    path = "/api/ratings/complaint/{complaint_id}",
    tag = RATING_TAG,
    params(("complaint_id" = String, Path, description = "Complaint ID")),
    responses(
        (status = 200, description = "Rating", body = RatingDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Rating not found", body = ErrorDto)
    ),
)]
pub async fn get_rating(
    State(state): State<AppState>,
    session: Session,
    Path(complaint_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ComplaintOwnerOrStaff(complaint_id.clone())])
        .await?;

    let rating = RatingService::new(&state.db)
        .get_for_complaint(&complaint_id)
        .await?;

    Ok(Json(rating.into_dto()))
}
