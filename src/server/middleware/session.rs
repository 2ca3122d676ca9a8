//! Type-safe session management wrappers.
//!
//! `AuthSession` wraps the tower-sessions `Session` and exposes only the operations the
//! login flows need, so the session key and the stored type live in one place.

use tower_sessions::Session;

use crate::server::{error::AppError, model::auth::Principal};

const SESSION_AUTH_PRINCIPAL: &str = "auth:principal";

/// Authentication session management.
///
/// Stores the `Principal` written at customer or staff login and clears it on logout.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the logged-in principal.
    ///
    /// The session ID is cycled first so an ID issued before login is never reused
    /// for an authenticated session.
    ///
    /// # Returns
    /// - `Ok(())` - Principal stored
    /// - `Err(AppError::SessionErr(_))` - Failed to write to the session
    pub async fn set_principal(&self, principal: &Principal) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session
            .insert(SESSION_AUTH_PRINCIPAL, principal)
            .await?;
        Ok(())
    }

    /// Retrieves the logged-in principal.
    ///
    /// # Returns
    /// - `Ok(Some(principal))` - An account is logged in
    /// - `Ok(None)` - No account in session
    /// - `Err(AppError::SessionErr(_))` - Failed to read the session
    pub async fn get_principal(&self) -> Result<Option<Principal>, AppError> {
        Ok(self.session.get::<Principal>(SESSION_AUTH_PRINCIPAL).await?)
    }

    pub async fn is_authenticated(&self) -> Result<bool, AppError> {
        Ok(self.get_principal().await?.is_some())
    }

    /// Clears all data from the session. Used during logout.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
