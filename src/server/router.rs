use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{admin, auth, comment, complaint, dashboard, health, notification, rating, staff},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ResolveIT API",
        description = "Customer complaint management: submission, triage, assignment and resolution"
    ),
    paths(
        auth::register,
        auth::login,
        auth::logout,
        auth::get_profile,
        auth::update_profile,
        auth::forgot_password,
        auth::reset_password,
        auth::send_verification,
        auth::verify_email,
        complaint::submit_complaint,
        complaint::submit_complaint_with_files,
        complaint::get_user_complaints,
        complaint::get_complaint,
        complaint::create_sample_complaints,
        dashboard::get_dashboard,
        dashboard::init_sample_data,
        dashboard::get_complaint,
        dashboard::search_complaints,
        dashboard::export_complaints,
        staff::login,
        staff::get_dashboard,
        staff::get_queue,
        staff::get_my_queue,
        staff::get_complaint,
        staff::update_status,
        staff::assign_complaint,
        staff::bulk_update,
        staff::add_note,
        staff::get_notes,
        staff::get_internal_notes,
        staff::get_performance,
        staff::get_history,
        staff::get_ratings,
        staff::get_profile,
        staff::update_profile,
        staff::get_all_staff,
        staff::init_accounts,
        admin::get_dashboard,
        admin::get_users,
        admin::get_staff,
        admin::create_user,
        admin::update_user,
        admin::delete_user,
        admin::create_staff,
        admin::update_staff,
        admin::delete_staff,
        admin::delete_complaint,
        admin::get_settings,
        admin::update_settings,
        admin::get_report,
        admin::get_audit_logs,
        admin::create_backup,
        admin::get_complaints,
        admin::get_profile,
        admin::update_profile,
        comment::get_comments,
        comment::add_comment,
        rating::submit_rating,
        rating::get_rating,
        notification::get_notifications,
        notification::get_unread_count,
        notification::mark_read,
        notification::mark_all_read,
        health::health,
    ),
    tags(
        (name = "auth", description = "Customer registration, login and account recovery"),
        (name = "complaint", description = "Complaint submission and lookup"),
        (name = "dashboard", description = "Customer dashboard, search and export"),
        (name = "staff", description = "Staff console: queues, status, assignment and notes"),
        (name = "admin", description = "Admin console: accounts, settings, reports and audit"),
        (name = "comment", description = "Complaint comment threads"),
        (name = "rating", description = "Customer ratings of resolved complaints"),
        (name = "notification", description = "Customer notifications"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

/// Builds every `/api` route plus the Swagger UI at `/api/docs`.
///
/// `max_upload_bytes` caps the body of the multipart submission endpoint. Session,
/// CORS, tracing and rate limit layers are added by the caller.
pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        // Customer auth
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route(
            "/api/auth/profile/{email}",
            get(auth::get_profile).put(auth::update_profile),
        )
        .route("/api/auth/forgot-password", post(auth::forgot_password))
        .route("/api/auth/reset-password", post(auth::reset_password))
        .route("/api/auth/send-verification", post(auth::send_verification))
        .route("/api/auth/verify-email", post(auth::verify_email))
        // Complaints
        .route("/api/complaints/submit", post(complaint::submit_complaint))
        .route(
            "/api/complaints/submit-with-files",
            post(complaint::submit_complaint_with_files)
                .layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route(
            "/api/complaints/user/{email}",
            get(complaint::get_user_complaints),
        )
        .route(
            "/api/complaints/create-sample",
            post(complaint::create_sample_complaints),
        )
        .route(
            "/api/complaints/{complaint_id}",
            get(complaint::get_complaint),
        )
        // Customer dashboard
        .route("/api/dashboard/{email}", get(dashboard::get_dashboard))
        .route("/api/dashboard/init/{email}", post(dashboard::init_sample_data))
        .route(
            "/api/dashboard/complaint/{complaint_id}",
            get(dashboard::get_complaint),
        )
        .route(
            "/api/dashboard/search/{email}",
            get(dashboard::search_complaints),
        )
        .route(
            "/api/dashboard/export/{email}",
            get(dashboard::export_complaints),
        )
        // Staff console
        .route("/api/staff/login", post(staff::login))
        .route("/api/staff/logout", post(auth::logout))
        .route("/api/staff/dashboard/{email}", get(staff::get_dashboard))
        .route("/api/staff/queue", get(staff::get_queue))
        .route("/api/staff/my-queue/{email}", get(staff::get_my_queue))
        .route(
            "/api/staff/complaint/{complaint_id}",
            get(staff::get_complaint),
        )
        .route(
            "/api/staff/complaint/{complaint_id}/status",
            put(staff::update_status),
        )
        .route(
            "/api/staff/complaint/{complaint_id}/history",
            get(staff::get_history),
        )
        .route("/api/staff/assign", put(staff::assign_complaint))
        .route("/api/staff/bulk-update", put(staff::bulk_update))
        .route("/api/staff/note", post(staff::add_note))
        .route("/api/staff/notes/{complaint_id}", get(staff::get_notes))
        .route(
            "/api/staff/internal-notes/{complaint_id}",
            get(staff::get_internal_notes),
        )
        .route("/api/staff/performance/{email}", get(staff::get_performance))
        .route("/api/staff/ratings/{email}", get(staff::get_ratings))
        .route(
            "/api/staff/profile/{email}",
            get(staff::get_profile).put(staff::update_profile),
        )
        .route("/api/staff/all", get(staff::get_all_staff))
        .route("/api/staff/init", post(staff::init_accounts))
        // Admin console
        .route("/api/admin/dashboard/{email}", get(admin::get_dashboard))
        .route("/api/admin/users", get(admin::get_users))
        .route("/api/admin/staff", get(admin::get_staff).post(admin::create_staff))
        .route("/api/admin/user", post(admin::create_user))
        .route(
            "/api/admin/user/{id}",
            put(admin::update_user).delete(admin::delete_user),
        )
        .route(
            "/api/admin/staff/{id}",
            put(admin::update_staff).delete(admin::delete_staff),
        )
        .route(
            "/api/admin/complaint/{complaint_id}",
            delete(admin::delete_complaint),
        )
        .route(
            "/api/admin/settings",
            get(admin::get_settings).put(admin::update_settings),
        )
        .route("/api/admin/reports", get(admin::get_report))
        .route("/api/admin/audit-logs", get(admin::get_audit_logs))
        .route("/api/admin/backup", post(admin::create_backup))
        .route("/api/admin/complaints", get(admin::get_complaints))
        .route(
            "/api/admin/profile/{email}",
            get(admin::get_profile).put(admin::update_profile),
        )
        // Comments, ratings, notifications
        .route(
            "/api/comments/complaint/{complaint_id}",
            get(comment::get_comments),
        )
        .route("/api/comments/add", post(comment::add_comment))
        .route("/api/ratings/submit", post(rating::submit_rating))
        .route(
            "/api/ratings/complaint/{complaint_id}",
            get(rating::get_rating),
        )
        .route(
            "/api/notifications/user/{email}",
            get(notification::get_notifications),
        )
        .route(
            "/api/notifications/unread-count/{email}",
            get(notification::get_unread_count),
        )
        .route("/api/notifications/{id}/read", put(notification::mark_read))
        .route(
            "/api/notifications/mark-all-read/{email}",
            put(notification::mark_all_read),
        )
        .route("/api/health", get(health::health))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}
