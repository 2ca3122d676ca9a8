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
        user::{
            EmailDto, LoginDto, RegisterUserDto, ResetPasswordDto, UpdateProfileDto,
            UserLoginResponseDto, UserProfileDto, VerifyEmailDto,
        },
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            session::AuthSession,
        },
        model::{
            auth::{Principal, PrincipalKind},
            user::{RegisterUserParam, UpdateProfileParam},
        },
        service::{auth::AuthService, recovery::RecoveryService},
        state::AppState,
    },
};

/// Tag for grouping customer authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a customer account.
///
/// # Returns
/// - `201 Created` - Account created
/// - `400 Bad Request` - Missing or invalid fields, or the email is taken
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "Account created", body = MessageDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state.db)
        .register(RegisterUserParam::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto::new("User registered successfully")),
    ))
}

/// Log in as a customer.
///
/// Stores the customer in the session on success. The response carries the profile
/// without the password hash.
///
/// # Returns
/// - `200 OK` - Logged in
/// - `400 Bad Request` - Email or password missing
/// - `401 Unauthorized` - Unknown email or wrong password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserLoginResponseDto),
        (status = 400, description = "Email or password missing", body = ErrorDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .login(&payload.email, &payload.password)
        .await?;

    AuthSession::new(&session)
        .set_principal(&Principal {
            kind: PrincipalKind::User,
            id: user.id,
            email: user.email.clone(),
        })
        .await?;

    tracing::info!("Customer {} logged in", user.email);

    Ok(Json(UserLoginResponseDto {
        status: "success".to_string(),
        message: "Login successful".to_string(),
        user: user.into_dto(),
    }))
}

/// Log out the current account, customer or staff.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(Json(MessageDto::new("Logged out successfully")))
}

/// Get a customer profile.
///
/// # Access Control
/// - `SelfOrStaff` - The customer themself or any staff member
///
/// # Returns
/// - `200 OK` - Profile without the password hash
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Another customer's profile
/// - `404 Not Found` - Unknown email
#[utoipa::path(
    get,
    path = "/api/auth/profile/{email}",
    tag = AUTH_TAG,
    params(("email" = String, Path, description = "Customer email")),
    responses(
        (status = 200, description = "Customer profile", body = UserProfileDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    session: Session,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SelfOrStaff(email.clone())])
        .await?;

    let user = AuthService::new(&state.db).get_profile(&email).await?;

    Ok(Json(user.into_dto()))
}

/// Update a customer profile.
///
/// Only fields present in the body change, except the three notification flags which
/// are always written. Changing the password needs the current password.
///
/// # Access Control
/// - `SelfOrStaff` - The customer themself or any staff member
///
/// # Returns
/// - `200 OK` - Updated profile
/// - `400 Bad Request` - Current password missing or wrong, or new password too short
/// - `404 Not Found` - Unknown email
#[utoipa::path(
    put,
    path = "/api/auth/profile/{email}",
    tag = AUTH_TAG,
    params(("email" = String, Path, description = "Customer email")),
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Updated profile", body = UserProfileDto),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Path(email): Path<String>,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SelfOrStaff(email.clone())])
        .await?;

    let user = AuthService::new(&state.db)
        .update_profile(&email, UpdateProfileParam::from_dto(payload))
        .await?;

    Ok(Json(user.into_dto()))
}

/// Send a password reset code to a registered email.
#[utoipa::path(
    post,
    path = "/api/auth/forgot-password",
    tag = AUTH_TAG,
    request_body = EmailDto,
    responses(
        (status = 200, description = "Code sent", body = MessageDto),
        (status = 400, description = "Email not found", body = ErrorDto)
    ),
)]
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(payload): Json<EmailDto>,
) -> Result<impl IntoResponse, AppError> {
    RecoveryService::new(&state.db, &state.otp_service, state.mailer.as_ref())
        .forgot_password(&payload.email)
        .await?;

    Ok(Json(MessageDto::new(
        "Password reset instructions sent to your email",
    )))
}

/// Reset a password with a one-time code.
#[utoipa::path(
    post,
    path = "/api/auth/reset-password",
    tag = AUTH_TAG,
    request_body = ResetPasswordDto,
    responses(
        (status = 200, description = "Password reset", body = MessageDto),
        (status = 400, description = "Invalid code or password", body = ErrorDto)
    ),
)]
pub async fn reset_password(
    State(state): State<AppState>,
    Json(payload): Json<ResetPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    RecoveryService::new(&state.db, &state.otp_service, state.mailer.as_ref())
        .reset_password(&payload.email, &payload.otp, &payload.new_password)
        .await?;

    Ok(Json(MessageDto::new("Password reset successfully")))
}

/// Send an email verification code.
#[utoipa::path(
    post,
    path = "/api/auth/send-verification",
    tag = AUTH_TAG,
    request_body = EmailDto,
    responses(
        (status = 200, description = "Code sent", body = MessageDto),
        (status = 400, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn send_verification(
    State(state): State<AppState>,
    Json(payload): Json<EmailDto>,
) -> Result<impl IntoResponse, AppError> {
    RecoveryService::new(&state.db, &state.otp_service, state.mailer.as_ref())
        .send_verification(&payload.email)
        .await?;

    Ok(Json(MessageDto::new("Verification code sent to your email")))
}

/// Mark an email as verified with a one-time code.
#[utoipa::path(
    post,
    path = "/api/auth/verify-email",
    tag = AUTH_TAG,
    request_body = VerifyEmailDto,
    responses(
        (status = 200, description = "Email verified", body = MessageDto),
        (status = 400, description = "Invalid or expired code", body = ErrorDto)
    ),
)]
pub async fn verify_email(
    State(state): State<AppState>,
    Json(payload): Json<VerifyEmailDto>,
) -> Result<impl IntoResponse, AppError> {
    RecoveryService::new(&state.db, &state.otp_service, state.mailer.as_ref())
        .verify_email(&payload.email, &payload.otp)
        .await?;

    Ok(Json(MessageDto::new("Email verified successfully")))
}
