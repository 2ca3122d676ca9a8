use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No principal stored in the session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No authenticated account in session")]
    UserNotInSession,

    /// The session references an account that no longer exists.
    ///
    /// Results in a 401 Unauthorized response so the client logs in again.
    #[error("Account {0} from session no longer exists")]
    AccountNotFound(String),

    /// Customer login with an unknown email or wrong password.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid customer credentials")]
    InvalidUserCredentials,

    /// Staff login with an unknown email or wrong password.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid staff credentials")]
    InvalidStaffCredentials,

    /// The account is authenticated but lacks a required permission.
    ///
    /// Results in a 403 Forbidden response. The fields hold the account email and
    /// a description of the denied access for the server log.
    #[error("Access denied for {0}: {1}")]
    AccessDenied(String, String),

    /// One-time code missing, wrong, expired or already used.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Invalid or expired one-time code")]
    InvalidOtp,
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level while client-facing messages stay generic.
///
/// # Returns
/// - 400 Bad Request - For `InvalidOtp`
/// - 401 Unauthorized - For missing sessions, removed accounts and bad credentials
/// - 403 Forbidden - For `AccessDenied`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::AccountNotFound(_) => {
                (StatusCode::UNAUTHORIZED, "Please log in to continue")
            }
            Self::InvalidUserCredentials => (StatusCode::UNAUTHORIZED, "Invalid email or password"),
            Self::InvalidStaffCredentials => (StatusCode::UNAUTHORIZED, "Invalid credentials"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Access denied"),
            Self::InvalidOtp => (StatusCode::BAD_REQUEST, "Invalid or expired OTP"),
        };

        (status, Json(ErrorDto::new(message))).into_response()
    }
}
