//! One-time code service for password resets and email verification.
//!
//! This module provides the `OtpService` for generating and validating short-lived numeric
//! codes. Codes are held in memory keyed by email, one per email, and are invalidated after
//! successful use or once they expire. A scheduled job purges expired codes that were never
//! presented.

use rand::Rng;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Number of digits in a generated code.
const OTP_DIGITS: usize = 6;

/// Stored code with expiration timestamp.
#[derive(Clone)]
struct Otp {
    code: String,
    expires_at: Instant,
}

impl Otp {
    fn new(code: String, validity: Duration) -> Self {
        Self {
            code,
            expires_at: Instant::now() + validity,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    fn matches(&self, input: &str) -> bool {
        self.code == input.trim()
    }
}

/// Service for managing per-email one-time codes.
///
/// Cloning shares the underlying code map, so the copy held in `AppState` and the one
/// given to the cleanup job see the same codes.
#[derive(Clone)]
pub struct OtpService {
    codes: Arc<RwLock<HashMap<String, Otp>>>,
    validity: Duration,
}

impl OtpService {
    /// Creates an OtpService whose codes stay valid for `validity`.
    ///
    /// # Arguments
    /// - `validity` - Lifetime of each generated code
    ///
    /// # Returns
    /// - `OtpService` - New service instance with no stored codes
    pub fn new(validity: Duration) -> Self {
        Self {
            codes: Arc::new(RwLock::new(HashMap::new())),
            validity,
        }
    }

    /// Lifetime of each generated code.
    pub fn validity(&self) -> Duration {
        self.validity
    }

    /// Generates a zero-padded 6-digit code for an email.
    ///
    /// Any code previously issued for the same email is replaced.
    ///
    /// # Arguments
    /// - `email` - Account email the code is issued for
    ///
    /// # Returns
    /// - `String` - The generated code
    pub async fn generate(&self, email: &str) -> String {
        let code = Self::generate_random_code();
        let otp = Otp::new(code.clone(), self.validity);
        self.codes.write().await.insert(email.to_string(), otp);
        code
    }

    /// Validates a code for an email and consumes it on success.
    ///
    /// An expired code is removed and fails validation. A wrong code leaves the stored
    /// code in place so the user can retry.
    ///
    /// # Returns
    /// - `true` - Code matched and was unexpired, code has been consumed
    /// - `false` - No code, expired code, or mismatch
    pub async fn verify_and_consume(&self, email: &str, input_code: &str) -> bool {
        let mut codes = self.codes.write().await;

        let Some(stored) = codes.get(email) else {
            return false;
        };

        if stored.is_expired() {
            codes.remove(email);
            return false;
        }

        if stored.matches(input_code) {
            codes.remove(email);
            return true;
        }

        false
    }

    /// Checks whether an unexpired code exists for an email.
    pub async fn has_valid_code(&self, email: &str) -> bool {
        self.codes
            .read()
            .await
            .get(email)
            .is_some_and(|otp| !otp.is_expired())
    }

    /// Removes any code issued for an email.
    pub async fn invalidate(&self, email: &str) {
        self.codes.write().await.remove(email);
    }

    /// Removes every expired code.
    ///
    /// # Returns
    /// - `usize` - Number of codes removed
    pub async fn purge_expired(&self) -> usize {
        let mut codes = self.codes.write().await;
        let before = codes.len();
        codes.retain(|_, otp| !otp.is_expired());
        before - codes.len()
    }

    fn generate_random_code() -> String {
        let mut rng = rand::rng();
        let value: u32 = rng.random_range(0..1_000_000);
        format!("{:0width$}", value, width = OTP_DIGITS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    const SHORT_VALIDITY: Duration = Duration::from_millis(50);

    fn service() -> OtpService {
        OtpService::new(Duration::from_secs(300))
    }

    /// Tests generating a code.
    ///
    /// Expected: six ASCII digits and a valid stored code
    #[tokio::test]
    async fn test_generate_code() {
        let service = service();
        assert!(!service.has_valid_code("jane@example.com").await);

        let code = service.generate("jane@example.com").await;
        assert_eq!(code.len(), OTP_DIGITS);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
        assert!(service.has_valid_code("jane@example.com").await);
    }

    /// Tests validating a correct code.
    ///
    /// Expected: validation succeeds once and the code is consumed
    #[tokio::test]
    async fn test_verify_correct_code() {
        let service = service();
        let code = service.generate("jane@example.com").await;

        assert!(service.verify_and_consume("jane@example.com", &code).await);
        assert!(!service.has_valid_code("jane@example.com").await);
        assert!(!service.verify_and_consume("jane@example.com", &code).await);
    }

    /// Tests validating a wrong code.
    ///
    /// Expected: validation fails and the stored code survives
    #[tokio::test]
    async fn test_verify_incorrect_code() {
        let service = service();
        let code = service.generate("jane@example.com").await;
        let wrong = if code == "000000" { "111111" } else { "000000" };

        assert!(!service.verify_and_consume("jane@example.com", wrong).await);
        assert!(service.has_valid_code("jane@example.com").await);
    }

    /// Tests that codes are scoped to their email.
    ///
    /// Expected: another email's code never validates
    #[tokio::test]
    async fn test_codes_are_per_email() {
        let service = service();
        let code = service.generate("jane@example.com").await;

        assert!(!service.verify_and_consume("john@example.com", &code).await);
        assert!(service.has_valid_code("jane@example.com").await);
    }

    /// Tests that a new code replaces the previous one.
    ///
    /// Expected: only the latest code validates
    #[tokio::test]
    async fn test_regenerate_replaces_code() {
        let service = service();
        let first = service.generate("jane@example.com").await;
        let mut second = service.generate("jane@example.com").await;
        while second == first {
            second = service.generate("jane@example.com").await;
        }

        assert!(!service.verify_and_consume("jane@example.com", &first).await);
        assert!(service.verify_and_consume("jane@example.com", &second).await);
    }

    /// Tests manual invalidation.
    ///
    /// Expected: code removed
    #[tokio::test]
    async fn test_invalidate_code() {
        let service = service();
        service.generate("jane@example.com").await;

        service.invalidate("jane@example.com").await;
        assert!(!service.has_valid_code("jane@example.com").await);
    }

    /// Tests that codes expire.
    ///
    /// Expected: valid initially, rejected after the validity window
    #[tokio::test]
    async fn test_code_expires() {
        let service = OtpService::new(SHORT_VALIDITY);
        let code = service.generate("jane@example.com").await;
        assert!(service.has_valid_code("jane@example.com").await);

        sleep(SHORT_VALIDITY * 2).await;

        assert!(!service.has_valid_code("jane@example.com").await);
        assert!(!service.verify_and_consume("jane@example.com", &code).await);
    }

    /// Tests purging expired codes.
    ///
    /// Expected: only the expired code is removed
    #[tokio::test]
    async fn test_purge_expired() {
        let short = OtpService::new(SHORT_VALIDITY);
        short.generate("old@example.com").await;
        sleep(SHORT_VALIDITY * 2).await;

        let shared = OtpService {
            codes: short.codes.clone(),
            validity: Duration::from_secs(300),
        };
        shared.generate("new@example.com").await;

        assert_eq!(shared.purge_expired().await, 1);
        assert!(shared.has_valid_code("new@example.com").await);
        assert_eq!(shared.purge_expired().await, 0);
    }
}
