use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        admin::{
            AdminDashboardDto, BackupDto, CreateStaffDto, CreateUserDto, SystemReportDto,
            SystemSettingDto, UpdateStaffDto, UpdateUserDto, UpsertSettingDto,
        },
        api::{ErrorDto, MessageDto},
        audit::AuditLogDto,
        complaint::ComplaintDto,
        staff::{StaffDto, UpdateStaffProfileDto},
        user::UserProfileDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            admin::{
                AdminCreateStaffParam, AdminCreateUserParam, AdminUpdateStaffParam,
                AdminUpdateUserParam,
            },
            audit::{AuditContext, AuditEntry},
            auth::Actor,
            complaint::Complaint,
            setting::{SystemSetting, UpsertSettingParam},
            staff::{Staff, UpdateStaffParam},
            user::User,
        },
        service::{admin::AdminService, setting::SettingService},
        state::AppState,
        util::request::ClientIp,
    },
};

/// Tag for grouping admin console endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// Get the admin overview.
///
/// Returns the admin's profile, account and complaint totals, complaints resolved
/// since midnight UTC and the ten newest complaints.
///
/// # Access Control
/// - `Admin`
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - Session for authentication
/// - `email` - Email of the admin account to show
///
/// # Returns
/// - `200 OK` - Dashboard
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin, or `email` is not an admin account
#[utoipa::path(
    get,
    path = "/api/admin/dashboard/{email}",
    tag = ADMIN_TAG,
    params(("email" = String, Path, description = "Admin email")),
    responses(
        (status = 200, description = "Admin dashboard", body = AdminDashboardDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    session: Session,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let dashboard = AdminService::new(&state.db).get_dashboard(&email).await?;

    Ok(Json(dashboard.into_dto()))
}

/// List every customer account without password hashes.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Customer accounts", body = Vec<UserProfileDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let users = AdminService::new(&state.db).get_users().await?;

    Ok(Json(users.into_iter().map(User::into_dto).collect::<Vec<_>>()))
}

/// List every staff account without password hashes.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/staff",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Staff accounts", body = Vec<StaffDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto)
    ),
)]
pub async fn get_staff(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let staff = AdminService::new(&state.db).get_staff().await?;

    Ok(Json(staff.into_iter().map(Staff::into_dto).collect::<Vec<_>>()))
}

/// Create a customer account.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - The new account
/// - `400 Bad Request` - Invalid fields or email already exists
#[utoipa::path(
    post,
    path = "/api/admin/user",
    tag = ADMIN_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Customer created", body = UserProfileDto),
        (status = 400, description = "Invalid account data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    session: Session,
    ClientIp(ip): ClientIp,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = require_admin(&state, &session).await?;

    let user = AdminService::new(&state.db)
        .create_user(
            &AuditContext::new(actor.email(), ip),
            AdminCreateUserParam::from_dto(payload),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Update a customer account by ID.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Updated account
/// - `404 Not Found` - Unknown ID
#[utoipa::path(
    put,
    path = "/api/admin/user/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Customer ID")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Customer updated", body = UserProfileDto),
        (status = 400, description = "Invalid account data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    session: Session,
    ClientIp(ip): ClientIp,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = require_admin(&state, &session).await?;

    let user = AdminService::new(&state.db)
        .update_user(
            &AuditContext::new(actor.email(), ip),
            id,
            AdminUpdateUserParam::from_dto(payload),
        )
        .await?;

    Ok(Json(user.into_dto()))
}

/// Delete a customer account by ID.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/admin/user/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer deleted", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    ClientIp(ip): ClientIp,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = require_admin(&state, &session).await?;

    AdminService::new(&state.db)
        .delete_user(&AuditContext::new(actor.email(), ip), id)
        .await?;

    Ok(Json(MessageDto::new("User deleted successfully")))
}

/// Create a staff account. The role defaults to `STAFF`.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `201 Created` - The new account
/// - `400 Bad Request` - Invalid fields, unknown role or email already exists
#[utoipa::path(
    post,
    path = "/api/admin/staff",
    tag = ADMIN_TAG,
    request_body = CreateStaffDto,
    responses(
        (status = 201, description = "Staff created", body = StaffDto),
        (status = 400, description = "Invalid account data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto)
    ),
)]
pub async fn create_staff(
    State(state): State<AppState>,
    session: Session,
    ClientIp(ip): ClientIp,
    Json(payload): Json<CreateStaffDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = require_admin(&state, &session).await?;

    let param = AdminCreateStaffParam::from_dto(payload).map_err(AppError::BadRequest)?;
    let staff = AdminService::new(&state.db)
        .create_staff(&AuditContext::new(actor.email(), ip), param)
        .await?;

    Ok((StatusCode::CREATED, Json(staff.into_dto())))
}

/// Update a staff account by ID, including its role.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/admin/staff/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Staff ID")),
    request_body = UpdateStaffDto,
    responses(
        (status = 200, description = "Staff updated", body = StaffDto),
        (status = 400, description = "Invalid account data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Staff not found", body = ErrorDto)
    ),
)]
pub async fn update_staff(
    State(state): State<AppState>,
    session: Session,
    ClientIp(ip): ClientIp,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateStaffDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = require_admin(&state, &session).await?;

    let param = AdminUpdateStaffParam::from_dto(payload).map_err(AppError::BadRequest)?;
    let staff = AdminService::new(&state.db)
        .update_staff(&AuditContext::new(actor.email(), ip), id, param)
        .await?;

    Ok(Json(staff.into_dto()))
}

/// Delete a staff account by ID.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/admin/staff/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "Staff ID")),
    responses(
        (status = 200, description = "Staff deleted", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Staff not found", body = ErrorDto)
    ),
)]
pub async fn delete_staff(
    State(state): State<AppState>,
    session: Session,
    ClientIp(ip): ClientIp,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = require_admin(&state, &session).await?;

    AdminService::new(&state.db)
        .delete_staff(&AuditContext::new(actor.email(), ip), id)
        .await?;

    Ok(Json(MessageDto::new("Staff deleted successfully")))
}

/// Delete a complaint together with its attachments, comments, notes and rating.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    delete,
    path = "/api/admin/complaint/{complaint_id}",
    tag = ADMIN_TAG,
    params(("complaint_id" = String, Path, description = "Complaint ID")),
    responses(
        (status = 200, description = "Complaint deleted", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Complaint not found", body = ErrorDto)
    ),
)]
pub async fn delete_complaint(
    State(state): State<AppState>,
    session: Session,
    ClientIp(ip): ClientIp,
    Path(complaint_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let actor = require_admin(&state, &session).await?;

    AdminService::new(&state.db)
        .delete_complaint(&AuditContext::new(actor.email(), ip), &complaint_id)
        .await?;

    Ok(Json(MessageDto::new("Complaint deleted successfully")))
}

/// List every system setting.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/settings",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Settings", body = Vec<SystemSettingDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto)
    ),
)]
pub async fn get_settings(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let settings = SettingService::new(&state.db).get_all().await?;

    Ok(Json(
        settings
            .into_iter()
            .map(SystemSetting::into_dto)
            .collect::<Vec<_>>(),
    ))
}

/// Upsert a batch of settings by key.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - The stored settings
/// - `400 Bad Request` - A setting has an empty key
#[utoipa::path(
    put,
    path = "/api/admin/settings",
    tag = ADMIN_TAG,
    request_body = Vec<UpsertSettingDto>,
    responses(
        (status = 200, description = "Settings stored", body = Vec<SystemSettingDto>),
        (status = 400, description = "Invalid setting", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto)
    ),
)]
pub async fn update_settings(
    State(state): State<AppState>,
    session: Session,
    ClientIp(ip): ClientIp,
    Json(payload): Json<Vec<UpsertSettingDto>>,
) -> Result<impl IntoResponse, AppError> {
    let actor = require_admin(&state, &session).await?;

    let params = payload
        .into_iter()
        .map(UpsertSettingParam::from_dto)
        .collect();
    let settings = SettingService::new(&state.db)
        .update_all(&AuditContext::new(actor.email(), ip), params)
        .await?;

    Ok(Json(
        settings
            .into_iter()
            .map(SystemSetting::into_dto)
            .collect::<Vec<_>>(),
    ))
}

/// Get the system report: totals, counts by status and the latest audit entries.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/reports",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "System report", body = SystemReportDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto)
    ),
)]
pub async fn get_report(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let report = AdminService::new(&state.db).get_report().await?;

    Ok(Json(report.into_dto()))
}

/// Get the full audit log, newest first.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/audit-logs",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Audit entries", body = Vec<AuditLogDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto)
    ),
)]
pub async fn get_audit_logs(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let entries = AdminService::new(&state.db).get_audit_logs().await?;

    Ok(Json(
        entries
            .into_iter()
            .map(AuditEntry::into_dto)
            .collect::<Vec<_>>(),
    ))
}

/// Record a backup marker in the audit log.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/admin/backup",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Backup recorded", body = BackupDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto)
    ),
)]
pub async fn create_backup(
    State(state): State<AppState>,
    session: Session,
    ClientIp(ip): ClientIp,
) -> Result<impl IntoResponse, AppError> {
    let actor = require_admin(&state, &session).await?;

    let backup_id = AdminService::new(&state.db)
        .create_backup(&AuditContext::new(actor.email(), ip))
        .await?;

    Ok(Json(BackupDto {
        status: "success".to_string(),
        message: "Backup created successfully".to_string(),
        backup_id,
    }))
}

/// List every complaint, newest first.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/complaints",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "All complaints", body = Vec<ComplaintDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto)
    ),
)]
pub async fn get_complaints(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let complaints = AdminService::new(&state.db).get_complaints().await?;

    Ok(Json(
        complaints
            .into_iter()
            .map(Complaint::into_dto)
            .collect::<Vec<_>>(),
    ))
}

/// Get an admin profile.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Profile
/// - `404 Not Found` - `email` is not an admin account
#[utoipa::path(
    get,
    path = "/api/admin/profile/{email}",
    tag = ADMIN_TAG,
    params(("email" = String, Path, description = "Admin email")),
    responses(
        (status = 200, description = "Admin profile", body = StaffDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Admin not found", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    session: Session,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let admin = AdminService::new(&state.db).get_profile(&email).await?;

    Ok(Json(admin.into_dto()))
}

/// Update an admin's name, phone and department.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/admin/profile/{email}",
    tag = ADMIN_TAG,
    params(("email" = String, Path, description = "Admin email")),
    request_body = UpdateStaffProfileDto,
    responses(
        (status = 200, description = "Updated profile", body = StaffDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Admin not found", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    ClientIp(ip): ClientIp,
    Path(email): Path<String>,
    Json(payload): Json<UpdateStaffProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = require_admin(&state, &session).await?;

    let admin = AdminService::new(&state.db)
        .update_profile(
            &AuditContext::new(actor.email(), ip),
            &email,
            UpdateStaffParam::from_profile_dto(payload),
        )
        .await?;

    Ok(Json(admin.into_dto()))
}

async fn require_admin(state: &AppState, session: &Session) -> Result<Actor, AppError> {
    AuthGuard::new(&state.db, session)
        .require(&[Permission::Admin])
        .await
}
