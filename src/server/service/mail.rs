//! Outbound account mail.
//!
//! One-time codes reach account holders through the `Mailer` trait. The shipped
//! `LogMailer` writes each message to the tracing log, which is enough for local
//! development. A transport-backed mailer can be swapped in through `AppState`.

use async_trait::async_trait;

use crate::server::error::AppError;

/// Why a one-time code was issued. Determines the message wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpPurpose {
    PasswordReset,
    EmailVerification,
}

impl OtpPurpose {
    pub fn subject(&self) -> &'static str {
        match self {
            Self::PasswordReset => "ResolveIT password reset",
            Self::EmailVerification => "ResolveIT email verification",
        }
    }
}

#[async_trait]
pub trait Mailer: Send + Sync {
    /// Delivers a one-time code to an account email.
    async fn send_otp(
        &self,
        email: &str,
        code: &str,
        purpose: OtpPurpose,
        validity_minutes: u64,
    ) -> Result<(), AppError>;
}

/// Mailer that logs messages instead of sending them.
#[derive(Debug, Default, Clone)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send_otp(
        &self,
        email: &str,
        code: &str,
        purpose: OtpPurpose,
        validity_minutes: u64,
    ) -> Result<(), AppError> {
        tracing::info!(
            to = email,
            subject = purpose.subject(),
            "Your code is {}. It expires in {} minutes.",
            code,
            validity_minutes
        );
        Ok(())
    }
}
