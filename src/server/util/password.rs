//! Password hashing with bcrypt on the blocking thread pool.

use crate::server::error::{internal::InternalError, AppError};

/// Minimum accepted password length.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Whether a password is under the minimum length, counted in characters.
pub fn is_too_short(password: &str) -> bool {
    password.chars().count() < MIN_PASSWORD_LENGTH
}

#[cfg(not(test))]
const HASH_COST: u32 = bcrypt::DEFAULT_COST;
#[cfg(test)]
const HASH_COST: u32 = 4;

/// Hashes a password with bcrypt.
///
/// # Returns
/// - `Ok(String)` - The bcrypt hash
/// - `Err(AppError::BcryptErr)` - Hashing failed
/// - `Err(AppError::InternalErr)` - The blocking task failed
pub async fn hash_password(password: &str) -> Result<String, AppError> {
    let password = password.to_string();
    let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, HASH_COST))
        .await
        .map_err(InternalError::from)??;
    Ok(hash)
}

/// Checks a password against a stored bcrypt hash.
///
/// A stored value that isn't a valid bcrypt hash never verifies.
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match or the hash is malformed
/// - `Err(AppError::InternalErr)` - The blocking task failed
pub async fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let password = password.to_string();
    let hash = hash.to_string();
    let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(InternalError::from)?;

    match matches {
        Ok(matches) => Ok(matches),
        Err(e) => {
            tracing::debug!("Stored password hash rejected: {}", e);
            Ok(false)
        }
    }
}
