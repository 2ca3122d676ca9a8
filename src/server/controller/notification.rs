use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        notification::{NotificationDto, UnreadCountDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::notification::Notification,
        service::notification::NotificationService,
        state::AppState,
    },
};

/// Tag for grouping notification endpoints in OpenAPI documentation
pub static NOTIFICATION_TAG: &str = "notification";

/// Get a customer's notifications, newest first.
///
/// # Access Control
/// - `SelfOrStaff` - The customer themself or any staff member
#[utoipa::path(
    get,
    path = "/api/notifications/user/{email}",
    tag = NOTIFICATION_TAG,
    params(("email" = String, Path, description = "Customer email")),
    responses(
        (status = 200, description = "Notifications", body = Vec<NotificationDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto)
    ),
)]
pub async fn get_notifications(
    State(state): State<AppState>,
    session: Session,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SelfOrStaff(email.clone())])
        .await?;

    let notifications = NotificationService::new(&state.db)
        .get_for_user(&email)
        .await?;

    Ok(Json(
        notifications
            .into_iter()
            .map(Notification::into_dto)
            .collect::<Vec<_>>(),
    ))
}

/// Count a customer's unread notifications.
///
/// # Access Control
/// - `SelfOrStaff` - The customer themself or any staff member
#[utoipa::path(
    get,
    path = "/api/notifications/unread-count/{email}",
    tag = NOTIFICATION_TAG,
    params(("email" = String, Path, description = "Customer email")),
    responses(
        (status = 200, description = "Unread count", body = UnreadCountDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto)
    ),
)]
pub async fn get_unread_count(
    State(state): State<AppState>,
    session: Session,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SelfOrStaff(email.clone())])
        .await?;

    let count = NotificationService::new(&state.db)
        .unread_count(&email)
        .await?;

    Ok(Json(UnreadCountDto { count }))
}

/// Mark one notification read.
///
/// # Access Control
/// - `SelfOrStaff` - The notification's recipient or any staff member
///
/// # Returns
/// - `200 OK` - Marked read
/// - `404 Not Found` - Unknown notification ID
#[utoipa::path(
    put,
    path = "/api/notifications/{id}/read",
    tag = NOTIFICATION_TAG,
    params(("id" = i32, Path, description = "Notification ID")),
    responses(
        (status = 200, description = "Marked read", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto)
    ),
)]
pub async fn mark_read(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &session);
    let actor = guard.require(&[]).await?;

    let notification_service = NotificationService::new(&state.db);
    let notification = notification_service.get(id).await?;
    guard
        .check(&actor, &Permission::SelfOrStaff(notification.user_email))
        .await?;

    notification_service.mark_read(id).await?;

    Ok(Json(MessageDto::new("Notification marked as read")))
}

/// Mark every notification of a customer read.
///
/// # Access Control
/// - `SelfOrStaff` - The customer themself or any staff member
#[utoipa::path(
    put,
    path = "/api/notifications/mark-all-read/{email}",
    tag = NOTIFICATION_TAG,
    params(("email" = String, Path, description = "Customer email")),
    responses(
        (status = 200, description = "All marked read", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto)
    ),
)]
pub async fn mark_all_read(
    State(state): State<AppState>,
    session: Session,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SelfOrStaff(email.clone())])
        .await?;

    NotificationService::new(&state.db)
        .mark_all_read(&email)
        .await?;

    Ok(Json(MessageDto::new("All notifications marked as read")))
}
