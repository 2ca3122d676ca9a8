use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        complaint::{ComplaintDto, ComplaintSearchQuery, ExportQuery},
        dashboard::UserDashboardDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::complaint::{Complaint, ComplaintSearchParam},
        service::{
            complaint::{ComplaintService, ExportFormat},
            dashboard::DashboardService,
        },
        state::AppState,
    },
};

/// Tag for grouping customer dashboard endpoints in OpenAPI documentation
pub static DASHBOARD_TAG: &str = "dashboard";

/// Get a customer's dashboard.
///
/// Returns the customer's first name, complaint counts by status, the five most
/// recently updated complaints, all notifications and the unread count.
///
/// # Access Control
/// - `SelfOrStaff` - The customer themself or any staff member
///
/// # Returns
/// - `200 OK` - Dashboard
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Another customer's dashboard
#[utoipa::path(
    get,
    path = "/api/dashboard/{email}",
    tag = DASHBOARD_TAG,
    params(("email" = String, Path, description = "Customer email")),
    responses(
        (status = 200, description = "Customer dashboard", body = UserDashboardDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    session: Session,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SelfOrStaff(email.clone())])
        .await?;

    let dashboard = DashboardService::new(&state.db)
        .get_user_dashboard(&email)
        .await?;

    Ok(Json(dashboard.into_dto()))
}

/// Seed sample complaints and notifications for a customer.
///
/// Complaints are only created when the customer has none; notifications only when
/// they have no unread ones.
///
/// # Access Control
/// - `SelfOrStaff` - The customer themself or any staff member
#[utoipa::path(
    post,
    path = "/api/dashboard/init/{email}",
    tag = DASHBOARD_TAG,
    params(("email" = String, Path, description = "Customer email")),
    responses(
        (status = 200, description = "Sample data initialized", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto)
    ),
)]
pub async fn init_sample_data(
    State(state): State<AppState>,
    session: Session,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SelfOrStaff(email.clone())])
        .await?;

    DashboardService::new(&state.db)
        .init_sample_data(&email)
        .await?;

    Ok(Json(MessageDto::new("Sample data initialized successfully")))
}

/// Get a single complaint for the dashboard detail view.
///
/// # Access Control
/// - `ComplaintOwnerOrStaff` - The customer who filed it or any staff member
#[utoipa::path(
    get,
    path = "/api/dashboard/complaint/{complaint_id}",
    tag = DASHBOARD_TAG,
    params(("complaint_id" = String, Path, description = "Complaint ID")),
    responses(
        (status = 200, description = "Complaint", body = ComplaintDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Complaint not found", body = ErrorDto)
    ),
)]
pub async fn get_complaint(
    State(state): State<AppState>,
    session: Session,
    Path(complaint_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ComplaintOwnerOrStaff(complaint_id.clone())])
        .await?;

    let complaint = ComplaintService::new(&state.db).get(&complaint_id).await?;

    Ok(Json(complaint.into_dto()))
}

/// Search a customer's complaints.
///
/// All filters are optional and combined. `complaintId` matches a substring and
/// `status` matches exactly, both case-insensitively. `fromDate` and `toDate` take
/// `YYYY-MM-DD` and bound the creation time by whole days.
///
/// # Access Control
/// - `SelfOrStaff` - The customer themself or any staff member
///
/// # Returns
/// - `200 OK` - Matching complaints, newest first
/// - `400 Bad Request` - A date is not `YYYY-MM-DD`
#[utoipa::path(
    get,
    path = "/api/dashboard/search/{email}",
    tag = DASHBOARD_TAG,
    params(
        ("email" = String, Path, description = "Customer email"),
        ComplaintSearchQuery
    ),
    responses(
        (status = 200, description = "Matching complaints", body = Vec<ComplaintDto>),
        (status = 400, description = "Invalid date", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto)
    ),
)]
pub async fn search_complaints(
    State(state): State<AppState>,
    session: Session,
    Path(email): Path<String>,
    Query(query): Query<ComplaintSearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SelfOrStaff(email.clone())])
        .await?;

    let param = ComplaintSearchParam::from_query(email, query).map_err(AppError::BadRequest)?;
    let complaints = ComplaintService::new(&state.db).search(param).await?;

    Ok(Json(
        complaints
            .into_iter()
            .map(Complaint::into_dto)
            .collect::<Vec<_>>(),
    ))
}

/// Export a customer's complaints as a CSV download.
///
/// # Access Control
/// - `SelfOrStaff` - The customer themself or any staff member
///
/// # Returns
/// - `200 OK` - `text/csv` attachment named `complaints.csv`
/// - `400 Bad Request` - Format other than `csv`
#[utoipa::path(
    get,
    path = "/api/dashboard/export/{email}",
    tag = DASHBOARD_TAG,
    params(
        ("email" = String, Path, description = "Customer email"),
        ExportQuery
    ),
    responses(
        (status = 200, description = "CSV export", content_type = "text/csv", body = String),
        (status = 400, description = "Unsupported format", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto)
    ),
)]
pub async fn export_complaints(
    State(state): State<AppState>,
    session: Session,
    Path(email): Path<String>,
    Query(query): Query<ExportQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SelfOrStaff(email.clone())])
        .await?;

    let format = ExportFormat::parse(query.format.as_deref())?;
    let csv = ComplaintService::new(&state.db)
        .export(&email, format)
        .await?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"complaints.csv\"",
            ),
        ],
        csv,
    ))
}
