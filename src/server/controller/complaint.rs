use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        complaint::{
            ComplaintDetailDto, ComplaintDto, ComplaintSubmittedDto, SubmitComplaintDto,
            SubmitComplaintQuery,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::complaint::{Complaint, SubmitComplaintParam, UploadedFile},
        service::{complaint::ComplaintService, upload::UploadService},
        state::AppState,
    },
};

/// Tag for grouping complaint endpoints in OpenAPI documentation
pub static COMPLAINT_TAG: &str = "complaint";

/// Multipart field carrying attachment files. May repeat.
const ATTACHMENTS_FIELD: &str = "attachments";

/// Submit a complaint.
///
/// Sanitizes the text fields, creates a `PENDING` complaint with a `CMP-<millis>` ID
/// and sends the owner a "Complaint Submitted" notification.
///
/// # Access Control
/// - `SelfOrStaff` - The customer filing the complaint, or staff filing on their behalf
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - Session for authentication
/// - `query` - Email of the customer the complaint belongs to
/// - `payload` - Complaint fields
///
/// # Returns
/// - `201 Created` - Complaint stored, body carries the new complaint ID
/// - `400 Bad Request` - A required field is missing or a field is malformed
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Filing for another customer
#[utoipa::path(
    post,
    path = "/api/complaints/submit",
    tag = COMPLAINT_TAG,
    params(SubmitComplaintQuery),
    request_body = SubmitComplaintDto,
    responses(
        (status = 201, description = "Complaint submitted", body = ComplaintSubmittedDto),
        (status = 400, description = "Invalid complaint data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_complaint(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<SubmitComplaintQuery>,
    Json(payload): Json<SubmitComplaintDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SelfOrStaff(query.user_email.clone())])
        .await?;

    let complaint = ComplaintService::new(&state.db)
        .submit(SubmitComplaintParam::from_dto(query.user_email, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(submitted(&complaint))))
}

/// Submit a complaint with attachment files.
///
/// Takes the same fields as the JSON endpoint as multipart text fields, plus
/// `userEmail` and any number of `attachments` files. Empty files are skipped. Stored
/// files land under `<upload dir>/<complaint ID>/`.
///
/// # Access Control
/// - `SelfOrStaff` - The customer in `userEmail`, or any staff member
///
/// # Returns
/// - `201 Created` - Complaint and attachments stored
/// - `400 Bad Request` - Malformed multipart body or invalid complaint data
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Filing for another customer
/// - `500 Internal Server Error` - Attachment could not be written; nothing is stored
#[utoipa::path(
    post,
    path = "/api/complaints/submit-with-files",
    tag = COMPLAINT_TAG,
    request_body(
        content = SubmitComplaintDto,
        content_type = "multipart/form-data",
        description = "Complaint fields, `userEmail`, and repeated `attachments` files"
    ),
    responses(
        (status = 201, description = "Complaint submitted", body = ComplaintSubmittedDto),
        (status = 400, description = "Invalid complaint data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_complaint_with_files(
    State(state): State<AppState>,
    session: Session,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut user_email = String::new();
    let mut payload = SubmitComplaintDto::default();
    let mut files = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();

        if name == ATTACHMENTS_FIELD {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let bytes = field.bytes().await?;
            files.push(UploadedFile {
                file_name,
                bytes: bytes.to_vec(),
            });
            continue;
        }

        let value = field.text().await?;
        match name.as_str() {
            "userEmail" => user_email = value,
            "orderId" => payload.order_id = value,
            "orderDate" => payload.order_date = Some(value),
            "issueType" => payload.issue_type = value,
            "issueTitle" => payload.issue_title = Some(value),
            "issueDescription" => payload.issue_description = value,
            "priority" => payload.priority = Some(value),
            "contactPhone" => payload.contact_phone = Some(value),
            "expectedResolution" => payload.expected_resolution = Some(value),
            _ => tracing::debug!("Ignoring unknown multipart field {}", name),
        }
    }

    if user_email.trim().is_empty() {
        return Err(AppError::BadRequest("User email is required".to_string()));
    }

    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SelfOrStaff(user_email.clone())])
        .await?;

    let (complaint, _) = ComplaintService::new(&state.db)
        .submit_with_attachments(
            SubmitComplaintParam::from_dto(user_email, payload),
            files,
            &UploadService::new(&state.upload_dir),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(submitted(&complaint))))
}

/// Get every complaint filed by a customer, most recently updated first.
///
/// # Access Control
/// - `SelfOrStaff` - The customer themself or any staff member
#[utoipa::path(
    get,
    path = "/api/complaints/user/{email}",
    tag = COMPLAINT_TAG,
    params(("email" = String, Path, description = "Customer email")),
    responses(
        (status = 200, description = "Customer complaints", body = Vec<ComplaintDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto)
    ),
)]
pub async fn get_user_complaints(
    State(state): State<AppState>,
    session: Session,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SelfOrStaff(email.clone())])
        .await?;

    let complaints = ComplaintService::new(&state.db)
        .get_user_complaints(&email)
        .await?;

    Ok(Json(
        complaints
            .into_iter()
            .map(Complaint::into_dto)
            .collect::<Vec<_>>(),
    ))
}

/// Get a complaint with its attachment paths.
///
/// # Access Control
/// - `ComplaintOwnerOrStaff` - The customer who filed it or any staff member
#[utoipa::path(
    get,
    path = "/api/complaints/{complaint_id}",
    tag = COMPLAINT_TAG,
    params(("complaint_id" = String, Path, description = "Complaint ID, e.g. CMP-1700000000000")),
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
        .require(&[Permission::ComplaintOwnerOrStaff(complaint_id.clone())])
        .await?;

    let detail = ComplaintService::new(&state.db)
        .get_detail(&complaint_id)
        .await?;

    Ok(Json(detail.into_dto()))
}

/// Create the three sample complaints `CMP-0001` to `CMP-0003`.
///
/// IDs that already exist are skipped.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/complaints/create-sample",
    tag = COMPLAINT_TAG,
    responses(
        (status = 201, description = "Samples created", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto)
    ),
)]
pub async fn create_sample_complaints(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let created = ComplaintService::new(&state.db).create_samples().await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto::new(format!(
            "{} sample complaints created",
            created
        ))),
    ))
}

fn submitted(complaint: &Complaint) -> ComplaintSubmittedDto {
    ComplaintSubmittedDto {
        status: "success".to_string(),
        message: "Complaint submitted successfully".to_string(),
        complaint_id: complaint.complaint_id.clone(),
    }
}
