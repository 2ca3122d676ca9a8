//! Application state shared across all request handlers.
//!
//! `AppState` is initialized once during startup and cloned for each request through
//! Axum's state extraction. It holds:
//! - Database connection pool for data persistence
//! - One-time code store for password resets and email verification
//! - Mailer used to deliver those codes
//! - Upload directory for complaint attachments
//! - Passwords for the default accounts recreated by the staff init endpoint

use sea_orm::DatabaseConnection;
use std::{path::PathBuf, sync::Arc};

use crate::server::service::{mail::Mailer, otp::OtpService};

/// Passwords given to the default staff and admin accounts when they are created.
#[derive(Debug, Clone)]
pub struct DefaultPasswords {
    pub staff: String,
    pub admin: String,
}

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `OtpService` uses an `Arc` for its code map
/// - `Arc<dyn Mailer>` is a reference-counted pointer
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// In-memory store of one-time codes keyed by email.
    pub otp_service: OtpService,

    /// Delivers one-time codes to account holders.
    pub mailer: Arc<dyn Mailer>,

    /// Root directory under which complaint attachments are written.
    pub upload_dir: PathBuf,

    pub default_passwords: Arc<DefaultPasswords>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `otp_service` - One-time code store
    /// - `mailer` - Code delivery implementation
    /// - `upload_dir` - Attachment root directory
    /// - `default_passwords` - Passwords for seeded default accounts
    pub fn new(
        db: DatabaseConnection,
        otp_service: OtpService,
        mailer: Arc<dyn Mailer>,
        upload_dir: PathBuf,
        default_passwords: DefaultPasswords,
    ) -> Self {
        Self {
            db,
            otp_service,
            mailer,
            upload_dir,
            default_passwords: Arc::new(default_passwords),
        }
    }
}
