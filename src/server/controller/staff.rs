use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        audit::AuditLogDto,
        complaint::{ComplaintDetailDto, ComplaintDto},
        staff::{
            AddNoteDto, AssignComplaintDto, BulkUpdateDto, StaffDashboardDto, StaffDto,
            StaffLoginResponseDto, StaffNoteDto, StaffPerformanceDto, StaffRatingsDto,
            UpdateStaffProfileDto, UpdateStatusDto,
        },
        user::LoginDto,
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::{
            auth::{AuthGuard, Permission},
            session::AuthSession,
        },
        model::{
            audit::{AuditContext, AuditEntry},
            auth::{Principal, PrincipalKind},
            complaint::{BulkUpdateParam, Complaint},
            staff::{Staff, UpdateStaffParam},
            staff_note::StaffNote,
        },
        service::{complaint::ComplaintService, seed::SeedService, staff::StaffService},
        state::AppState,
        util::request::ClientIp,
    },
};

/// Tag for grouping staff console endpoints in OpenAPI documentation
pub static STAFF_TAG: &str = "staff";

/// Log in as a staff member.
///
/// Stores the staff account in the session. Missing names in the response summary
/// read "Staff"/"Member" and a missing department reads "N/A".
///
/// # Returns
/// - `200 OK` - Logged in
/// - `401 Unauthorized` - Unknown email or wrong password
#[utoipa::path(
    post,
    path = "/api/staff/login",
    tag = STAFF_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = StaffLoginResponseDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let staff = StaffService::new(&state.db)
        .login(&payload.email, &payload.password)
        .await?;

    AuthSession::new(&session)
        .set_principal(&Principal {
            kind: PrincipalKind::Staff,
            id: staff.id,
            email: staff.email.clone(),
        })
        .await?;

    tracing::info!("Staff {} ({}) logged in", staff.email, staff.role);

    Ok(Json(StaffLoginResponseDto {
        status: "success".to_string(),
        message: "Login successful".to_string(),
        staff: staff.into_summary_dto(),
    }))
}

/// Get a staff member's dashboard.
///
/// Counts and lists the complaints assigned to that staff email; the ten most recent
/// by creation time are included.
///
/// # Access Control
/// - `Staff`
///
/// # Returns
/// - `200 OK` - Dashboard
/// - `404 Not Found` - Unknown staff email
#[utoipa::path(
    get,
    path = "/api/staff/dashboard/{email}",
    tag = STAFF_TAG,
    params(("email" = String, Path, description = "Staff email")),
    responses(
        (status = 200, description = "Staff dashboard", body = StaffDashboardDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Staff not found", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    session: Session,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let dashboard = StaffService::new(&state.db).get_dashboard(&email).await?;

    Ok(Json(dashboard.into_dto()))
}

/// Get every complaint, newest first.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    get,
    path = "/api/staff/queue",
    tag = STAFF_TAG,
    responses(
        (status = 200, description = "All complaints", body = Vec<ComplaintDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto)
    ),
)]
pub async fn get_queue(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let complaints = StaffService::new(&state.db).get_queue().await?;

    Ok(Json(to_complaint_dtos(complaints)))
}

/// Get the complaints assigned to one staff email.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    get,
    path = "/api/staff/my-queue/{email}",
    tag = STAFF_TAG,
    params(("email" = String, Path, description = "Staff email")),
    responses(
        (status = 200, description = "Assigned complaints", body = Vec<ComplaintDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto)
    ),
)]
pub async fn get_my_queue(
    State(state): State<AppState>,
    session: Session,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let complaints = StaffService::new(&state.db)
        .get_assigned_queue(&email)
        .await?;

    Ok(Json(to_complaint_dtos(complaints)))
}

/// Get a complaint with its attachment paths.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    get,
    path = "/api/staff/complaint/{complaint_id}",
    tag = STAFF_TAG,
    params(("complaint_id" = String, Path, description = "Complaint ID")),
    responses(
        (status = 200, description = "Complaint with attachments", body = ComplaintDetailDto),
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
        .require(&[Permission::Staff])
        .await?;

    let detail = ComplaintService::new(&state.db)
        .get_detail(&complaint_id)
        .await?;

    Ok(Json(detail.into_dto()))
}

/// Set a complaint's status.
///
/// Any status may follow any other. The change is audited under the acting staff
/// email with the request IP, and the complaint owner is notified.
///
/// # Access Control
/// - `Staff`
///
/// # Returns
/// - `200 OK` - Updated complaint
/// - `400 Bad Request` - Unknown status
/// - `404 Not Found` - Unknown complaint
#[utoipa::path(
    put,
    path = "/api/staff/complaint/{complaint_id}/status",
    tag = STAFF_TAG,
    params(("complaint_id" = String, Path, description = "Complaint ID")),
    request_body = UpdateStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ComplaintDto),
        (status = 400, description = "Invalid status", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Complaint not found", body = ErrorDto)
    ),
)]
pub async fn update_status(
    State(state): State<AppState>,
    session: Session,
    ClientIp(ip): ClientIp,
    Path(complaint_id): Path<String>,
    Json(payload): Json<UpdateStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let ctx = AuditContext::new(actor.email(), ip);
    let complaint = StaffService::new(&state.db)
        .update_status(&ctx, &complaint_id, &payload.status)
        .await?;

    Ok(Json(complaint.into_dto()))
}

/// Assign a complaint to a staff email.
///
/// # Access Control
/// - `Staff`
///
/// # Returns
/// - `200 OK` - Updated complaint
/// - `400 Bad Request` - Complaint ID or staff email missing
/// - `404 Not Found` - Unknown complaint
#[utoipa::path(
    put,
    path = "/api/staff/assign",
    tag = STAFF_TAG,
    request_body = AssignComplaintDto,
    responses(
        (status = 200, description = "Complaint assigned", body = ComplaintDto),
        (status = 400, description = "Missing fields", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Complaint not found", body = ErrorDto)
    ),
)]
pub async fn assign_complaint(
    State(state): State<AppState>,
    session: Session,
    ClientIp(ip): ClientIp,
    Json(payload): Json<AssignComplaintDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let ctx = AuditContext::new(actor.email(), ip);
    let complaint = StaffService::new(&state.db)
        .assign(&ctx, &payload.complaint_id, &payload.staff_email)
        .await?;

    Ok(Json(complaint.into_dto()))
}

/// Apply a status and/or assignee to many complaints at once.
///
/// Unknown complaint IDs are skipped.
///
/// # Access Control
/// - `Staff`
///
/// # Returns
/// - `200 OK` - "<n> complaints updated successfully"
/// - `400 Bad Request` - Unknown status
#[utoipa::path(
    put,
    path = "/api/staff/bulk-update",
    tag = STAFF_TAG,
    request_body = BulkUpdateDto,
    responses(
        (status = 200, description = "Complaints updated", body = MessageDto),
        (status = 400, description = "Invalid status", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto)
    ),
)]
pub async fn bulk_update(
    State(state): State<AppState>,
    session: Session,
    ClientIp(ip): ClientIp,
    Json(payload): Json<BulkUpdateDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let param = BulkUpdateParam::from_dto(payload).map_err(AppError::BadRequest)?;
    let ctx = AuditContext::new(actor.email(), ip);
    let updated = StaffService::new(&state.db).bulk_update(&ctx, param).await?;

    Ok(Json(MessageDto::new(format!(
        "{} complaints updated successfully",
        updated
    ))))
}

/// Add a note to a complaint as the logged-in staff member.
///
/// `isInternal` defaults to `true`.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    post,
    path = "/api/staff/note",
    tag = STAFF_TAG,
    request_body = AddNoteDto,
    responses(
        (status = 201, description = "Note added", body = StaffNoteDto),
        (status = 400, description = "Note is required", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Complaint not found", body = ErrorDto)
    ),
)]
pub async fn add_note(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<AddNoteDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let note = StaffService::new(&state.db)
        .add_note(
            actor.email(),
            &payload.complaint_id,
            &payload.note,
            payload.is_internal.unwrap_or(true),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(note.into_dto())))
}

/// Get all notes on a complaint, newest first.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    get,
    path = "/api/staff/notes/{complaint_id}",
    tag = STAFF_TAG,
    params(("complaint_id" = String, Path, description = "Complaint ID")),
    responses(
        (status = 200, description = "Notes", body = Vec<StaffNoteDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto)
    ),
)]
pub async fn get_notes(
    State(state): State<AppState>,
    session: Session,
    Path(complaint_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    notes(state, session, complaint_id, false).await
}

/// Get only the internal notes on a complaint, newest first.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    get,
    path = "/api/staff/internal-notes/{complaint_id}",
    tag = STAFF_TAG,
    params(("complaint_id" = String, Path, description = "Complaint ID")),
    responses(
        (status = 200, description = "Internal notes", body = Vec<StaffNoteDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto)
    ),
)]
pub async fn get_internal_notes(
    State(state): State<AppState>,
    session: Session,
    Path(complaint_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    notes(state, session, complaint_id, true).await
}

async fn notes(
    state: AppState,
    session: Session,
    complaint_id: String,
    internal_only: bool,
) -> Result<Json<Vec<StaffNoteDto>>, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let notes = StaffService::new(&state.db)
        .get_notes(&complaint_id, internal_only)
        .await?;

    Ok(Json(notes.into_iter().map(StaffNote::into_dto).collect()))
}

/// Get resolution statistics for one staff email.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    get,
    path = "/api/staff/performance/{email}",
    tag = STAFF_TAG,
    params(("email" = String, Path, description = "Staff email")),
    responses(
        (status = 200, description = "Performance figures", body = StaffPerformanceDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto)
    ),
)]
pub async fn get_performance(
    State(state): State<AppState>,
    session: Session,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let performance = StaffService::new(&state.db).get_performance(&email).await?;

    Ok(Json(performance.into_dto()))
}

/// Get the audit trail of one complaint, newest first.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    get,
    path = "/api/staff/complaint/{complaint_id}/history",
    tag = STAFF_TAG,
    params(("complaint_id" = String, Path, description = "Complaint ID")),
    responses(
        (status = 200, description = "Audit entries", body = Vec<AuditLogDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto)
    ),
)]
pub async fn get_history(
    State(state): State<AppState>,
    session: Session,
    Path(complaint_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let history = StaffService::new(&state.db)
        .get_history(&complaint_id)
        .await?;

    Ok(Json(
        history
            .into_iter()
            .map(AuditEntry::into_dto)
            .collect::<Vec<_>>(),
    ))
}

/// Get the rating summary for one staff email.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    get,
    path = "/api/staff/ratings/{email}",
    tag = STAFF_TAG,
    params(("email" = String, Path, description = "Staff email")),
    responses(
        (status = 200, description = "Rating summary", body = StaffRatingsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto)
    ),
)]
pub async fn get_ratings(
    State(state): State<AppState>,
    session: Session,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let summary = StaffService::new(&state.db)
        .get_rating_summary(&email)
        .await?;

    Ok(Json(summary.into_dto()))
}

/// Get a staff profile.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    get,
    path = "/api/staff/profile/{email}",
    tag = STAFF_TAG,
    params(("email" = String, Path, description = "Staff email")),
    responses(
        (status = 200, description = "Staff profile", body = StaffDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Staff not found", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    session: Session,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let staff = StaffService::new(&state.db).get_profile(&email).await?;

    Ok(Json(staff.into_dto()))
}

/// Update a staff profile's name, phone and department.
///
/// # Access Control
/// - `Staff` - Only the staff member themself, or an admin
///
/// # Returns
/// - `200 OK` - Updated profile
/// - `403 Forbidden` - Editing another staff member without admin role
/// - `404 Not Found` - Unknown staff email
#[utoipa::path(
    put,
    path = "/api/staff/profile/{email}",
    tag = STAFF_TAG,
    params(("email" = String, Path, description = "Staff email")),
    request_body = UpdateStaffProfileDto,
    responses(
        (status = 200, description = "Updated profile", body = StaffDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Staff not found", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Path(email): Path<String>,
    Json(payload): Json<UpdateStaffProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    if actor.email() != email && !actor.is_admin() {
        return Err(AuthError::AccessDenied(
            actor.email().to_string(),
            format!("attempted to edit the profile of {}", email),
        )
        .into());
    }

    let staff = StaffService::new(&state.db)
        .update_profile(&email, UpdateStaffParam::from_profile_dto(payload))
        .await?;

    Ok(Json(staff.into_dto()))
}

/// List every staff account.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    get,
    path = "/api/staff/all",
    tag = STAFF_TAG,
    responses(
        (status = 200, description = "Staff accounts", body = Vec<StaffDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto)
    ),
)]
pub async fn get_all_staff(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Staff])
        .await?;

    let staff = StaffService::new(&state.db).get_all().await?;

    Ok(Json(staff.into_iter().map(Staff::into_dto).collect::<Vec<_>>()))
}

/// Ensure the default accounts and the sample staff and customer directory exist.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/staff/init",
    tag = STAFF_TAG,
    responses(
        (status = 200, description = "Accounts initialized", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto)
    ),
)]
pub async fn init_accounts(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let seed_service = SeedService::new(&state.db);
    let defaults = seed_service
        .seed_default_accounts(
            &state.default_passwords.staff,
            &state.default_passwords.admin,
        )
        .await?;
    let summary = seed_service.seed_sample_directory().await?;

    Ok(Json(MessageDto::new(format!(
        "Accounts initialized: {} default, {} staff, {} customers created",
        defaults, summary.staff_created, summary.users_created
    ))))
}

fn to_complaint_dtos(complaints: Vec<Complaint>) -> Vec<ComplaintDto> {
    complaints.into_iter().map(Complaint::into_dto).collect()
}
