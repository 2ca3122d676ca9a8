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
        comment::{AddCommentDto, CommentDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::comment::{AuthorType, Comment},
        service::comment::CommentService,
        state::AppState,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

/// Get the comment thread of a complaint, oldest first.
///
/// # Access Control
/// - `ComplaintOwnerOrStaff` - The customer who filed it or any staff member
#[utoipa::path(
    get,
    path = "/api/comments/complaint/{complaint_id}",
    tag = COMMENT_TAG,
    params(("complaint_id" = String, Path, description = "Complaint ID")),
    responses(
        (status = 200, description = "Comments", body = Vec<CommentDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Complaint not found", body = ErrorDto)
    ),
)]
pub async fn get_comments(
    State(state): State<AppState>,
    session: Session,
    Path(complaint_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ComplaintOwnerOrStaff(complaint_id.clone())])
        .await?;

    let comments = CommentService::new(&state.db)
        .get_for_complaint(&complaint_id)
        .await?;

    Ok(Json(
        comments
            .into_iter()
            .map(Comment::into_dto)
            .collect::<Vec<_>>(),
    ))
}

/// Add a comment to a complaint.
///
/// The author email and type come from the logged-in account, never from the body.
///
/// # Access Control
/// - `ComplaintOwnerOrStaff` - The customer who filed it or any staff member
///
/// # Returns
/// - `201 Created` - The stored comment
/// - `400 Bad Request` - Empty message after sanitizing
/// - `404 Not Found` - Unknown complaint
#[utoipa::path(
    post,
    path = "/api/comments/add",
    tag = COMMENT_TAG,
    request_body = AddCommentDto,
    responses(
        (status = 201, description = "Comment added", body = CommentDto),
        (status = 400, description = "Message is required", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Complaint not found", body = ErrorDto)
    ),
)]
pub async fn add_comment(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<AddCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ComplaintOwnerOrStaff(
            payload.complaint_id.clone(),
        )])
        .await?;

    let author_type = if actor.is_staff() {
        AuthorType::Staff
    } else {
        AuthorType::User
    };

    let comment = CommentService::new(&state.db)
        .add(
            &payload.complaint_id,
            actor.email(),
            author_type,
            &payload.message,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(comment.into_dto())))
}
