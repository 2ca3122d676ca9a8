//! Password reset and email verification through one-time codes.
//!
//! Both flows issue a code with `OtpService`, deliver it through the configured
//! `Mailer` and later consume it. A code is single-use; a failed check leaves it in
//! place until it expires.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::UpdateUserParam,
    service::{
        mail::{Mailer, OtpPurpose},
        otp::OtpService,
    },
    util::password::{hash_password, is_too_short, MIN_PASSWORD_LENGTH},
};

pub struct RecoveryService<'a> {
    db: &'a DatabaseConnection,
    otp_service: &'a OtpService,
    mailer: &'a dyn Mailer,
}

impl<'a> RecoveryService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        otp_service: &'a OtpService,
        mailer: &'a dyn Mailer,
    ) -> Self {
        Self {
            db,
            otp_service,
            mailer,
        }
    }

    /// Issues a password reset code to a registered customer.
    ///
    /// # Returns
    /// - `Ok(())` - Code generated and handed to the mailer
    /// - `Err(AppError::BadRequest)` - "Email not found"
    pub async fn forgot_password(&self, email: &str) -> Result<(), AppError> {
        let email = email.trim();

        if !UserRepository::new(self.db).exists_by_email(email).await? {
            return Err(AppError::BadRequest("Email not found".to_string()));
        }

        self.issue(email, OtpPurpose::PasswordReset).await
    }

    /// Sets a new password after checking the reset code.
    ///
    /// The password length is checked before the code so a rejected password does not
    /// use up the code.
    ///
    /// # Returns
    /// - `Ok(())` - Password replaced
    /// - `Err(AppError::BadRequest)` - Password too short or unknown email
    /// - `Err(AuthError::InvalidOtp)` - Code missing, wrong or expired
    pub async fn reset_password(
        &self,
        email: &str,
        code: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        let email = email.trim();

        if is_too_short(new_password) {
            return Err(AppError::BadRequest(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        let user_repo = UserRepository::new(self.db);
        let Some(user) = user_repo.find_by_email(email).await? else {
            return Err(AppError::BadRequest("User not found".to_string()));
        };

        if !self.otp_service.verify_and_consume(email, code).await {
            return Err(AuthError::InvalidOtp.into());
        }

        let password_hash = hash_password(new_password).await?;
        user_repo
            .update(
                user.id,
                UpdateUserParam {
                    password_hash: Some(password_hash),
                    ..Default::default()
                },
            )
            .await?;

        tracing::info!("Password reset for {}", email);

        Ok(())
    }

    /// Issues an email verification code to a registered customer.
    ///
    /// # Returns
    /// - `Ok(())` - Code generated and handed to the mailer
    /// - `Err(AppError::BadRequest)` - "User not found"
    pub async fn send_verification(&self, email: &str) -> Result<(), AppError> {
        let email = email.trim();

        if !UserRepository::new(self.db).exists_by_email(email).await? {
            return Err(AppError::BadRequest("User not found".to_string()));
        }

        self.issue(email, OtpPurpose::EmailVerification).await
    }

    /// Marks an email as verified after checking the verification code.
    ///
    /// # Returns
    /// - `Ok(())` - Email verified
    /// - `Err(AppError::BadRequest)` - "User not found"
    /// - `Err(AuthError::InvalidOtp)` - Code missing, wrong or expired
    pub async fn verify_email(&self, email: &str, code: &str) -> Result<(), AppError> {
        let email = email.trim();
        let user_repo = UserRepository::new(self.db);

        if !user_repo.exists_by_email(email).await? {
            return Err(AppError::BadRequest("User not found".to_string()));
        }

        if !self.otp_service.verify_and_consume(email, code).await {
            return Err(AuthError::InvalidOtp.into());
        }

        user_repo.set_email_verified(email).await?;

        Ok(())
    }

    async fn issue(&self, email: &str, purpose: OtpPurpose) -> Result<(), AppError> {
        let code = self.otp_service.generate(email).await;
        let validity_minutes = self.otp_service.validity().as_secs() / 60;

        self.mailer
            .send_otp(email, &code, purpose, validity_minutes)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::{service::mail::test::RecordingMailer, util::password::verify_password};
    use std::time::Duration;
    use test_utils::{builder::TestBuilder, factory};

    /// Tests the full password reset flow.
    ///
    /// Expected: the mailed code resets the password once and cannot be reused
    #[tokio::test]
    async fn resets_password_with_mailed_code() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::create_user(db).await?;
        let otp_service = OtpService::new(Duration::from_secs(300));
        let mailer = RecordingMailer::default();
        let service = RecoveryService::new(db, &otp_service, &mailer);

        service.forgot_password(&user.email).await?;
        let code = mailer.last_code_for(&user.email).unwrap();

        service.reset_password(&user.email, &code, "brandnew").await?;
        let reused = service.reset_password(&user.email, &code, "another1").await;

        let credentials = UserRepository::new(db)
            .find_credentials_by_email(&user.email)
            .await?
            .unwrap();
        assert!(verify_password("brandnew", &credentials.password_hash).await?);
        assert!(matches!(reused, Err(AppError::AuthErr(AuthError::InvalidOtp))));

        Ok(())
    }

    /// Tests requesting a reset for an unknown email.
    ///
    /// Expected: BadRequest "Email not found" and nothing mailed
    #[tokio::test]
    async fn forgot_password_unknown_email() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let otp_service = OtpService::new(Duration::from_secs(300));
        let mailer = RecordingMailer::default();

        let result = RecoveryService::new(db, &otp_service, &mailer)
            .forgot_password("ghost@example.com")
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(ref msg)) if msg == "Email not found"));
        assert!(mailer.last_code_for("ghost@example.com").is_none());

        Ok(())
    }

    /// Tests a short new password with a valid code.
    ///
    /// Expected: BadRequest and the code stays usable
    #[tokio::test]
    async fn short_password_keeps_code() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::create_user(db).await?;
        let otp_service = OtpService::new(Duration::from_secs(300));
        let mailer = RecordingMailer::default();
        let service = RecoveryService::new(db, &otp_service, &mailer);

        service.forgot_password(&user.email).await?;
        let code = mailer.last_code_for(&user.email).unwrap();

        let result = service.reset_password(&user.email, &code, "123").await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
        assert!(otp_service.has_valid_code(&user.email).await);

        Ok(())
    }

    /// Tests verifying an email with a wrong code, then the right one.
    ///
    /// Expected: InvalidOtp first, then the account is marked verified
    #[tokio::test]
    async fn verifies_email() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::create_user(db).await?;
        let otp_service = OtpService::new(Duration::from_secs(300));
        let mailer = RecordingMailer::default();
        let service = RecoveryService::new(db, &otp_service, &mailer);

        service.send_verification(&user.email).await?;
        let code = mailer.last_code_for(&user.email).unwrap();
        let wrong = if code == "000000" { "111111" } else { "000000" };

        let rejected = service.verify_email(&user.email, wrong).await;
        service.verify_email(&user.email, &code).await?;

        let verified = UserRepository::new(db)
            .find_by_email(&user.email)
            .await?
            .unwrap();
        assert!(matches!(rejected, Err(AppError::AuthErr(AuthError::InvalidOtp))));
        assert!(verified.email_verified);

        Ok(())
    }
}
