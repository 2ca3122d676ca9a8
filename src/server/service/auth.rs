//! Customer account service.
//!
//! This module provides the `AuthService` for customer registration, login and
//! self-service profile management. Passwords are hashed with bcrypt before they reach
//! the data layer and are never returned from it except for verification.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParam, RegisterUserParam, UpdateProfileParam, UpdateUserParam, User},
    util::{
        password::{hash_password, is_too_short, verify_password, MIN_PASSWORD_LENGTH},
        sanitize::is_valid_email,
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new customer account.
    ///
    /// Fields are validated in order: full name, email presence, email format, password
    /// length. The first failing check decides the error message.
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::BadRequest)` - Validation failed or the email is taken
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(&self, param: RegisterUserParam) -> Result<User, AppError> {
        let full_name = param.full_name.trim();
        let email = param.email.trim();

        if full_name.is_empty() {
            return Err(AppError::BadRequest("Full name is required".to_string()));
        }
        if email.is_empty() {
            return Err(AppError::BadRequest("Email is required".to_string()));
        }
        if !is_valid_email(email) {
            return Err(AppError::BadRequest("Invalid email format".to_string()));
        }
        if is_too_short(&param.password) {
            return Err(AppError::BadRequest(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        let user_repo = UserRepository::new(self.db);

        if user_repo.exists_by_email(email).await? {
            return Err(AppError::BadRequest("Email already exists".to_string()));
        }

        let password_hash = hash_password(&param.password).await?;

        let user = user_repo
            .create(CreateUserParam {
                email: email.to_string(),
                password_hash,
                full_name: full_name.to_string(),
                phone_number: param.phone_number.filter(|p| !p.trim().is_empty()),
                address: None,
            })
            .await?;

        tracing::info!("Registered customer {}", user.email);

        Ok(user)
    }

    /// Checks customer credentials.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials valid
    /// - `Err(AppError::BadRequest)` - Email or password missing
    /// - `Err(AuthError::InvalidUserCredentials)` - Unknown email or wrong password
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let email = email.trim();

        if email.is_empty() {
            return Err(AppError::BadRequest("Email is required".to_string()));
        }
        if password.is_empty() {
            return Err(AppError::BadRequest("Password is required".to_string()));
        }

        let Some(credentials) = UserRepository::new(self.db)
            .find_credentials_by_email(email)
            .await?
        else {
            return Err(AuthError::InvalidUserCredentials.into());
        };

        if !verify_password(password, &credentials.password_hash).await? {
            return Err(AuthError::InvalidUserCredentials.into());
        }

        Ok(credentials.user)
    }

    /// Retrieves a customer profile by email.
    ///
    /// # Returns
    /// - `Ok(User)` - Profile without credentials
    /// - `Err(AppError::NotFound)` - No customer with that email
    pub async fn get_profile(&self, email: &str) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Applies a self-service profile update.
    ///
    /// A new password is only accepted together with the correct current password.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated profile
    /// - `Err(AppError::NotFound)` - No customer with that email
    /// - `Err(AppError::BadRequest)` - Current password missing or wrong, or new password too short
    pub async fn update_profile(
        &self,
        email: &str,
        param: UpdateProfileParam,
    ) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(credentials) = user_repo.find_credentials_by_email(email).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        let new_password = param.new_password.filter(|p| !p.is_empty());
        let password_hash = match new_password {
            Some(new_password) => {
                let Some(current) = param.current_password.filter(|p| !p.is_empty()) else {
                    return Err(AppError::BadRequest(
                        "Current password is required to change password".to_string(),
                    ));
                };
                if !verify_password(&current, &credentials.password_hash).await? {
                    return Err(AppError::BadRequest(
                        "Current password is incorrect".to_string(),
                    ));
                }
                if is_too_short(&new_password) {
                    return Err(AppError::BadRequest(format!(
                        "Password must be at least {} characters",
                        MIN_PASSWORD_LENGTH
                    )));
                }
                Some(hash_password(&new_password).await?)
            }
            None => None,
        };

        let update = UpdateUserParam {
            full_name: param.full_name,
            phone_number: param.phone_number,
            date_of_birth: param.date_of_birth,
            address: param.address,
            city: param.city,
            state: param.state,
            zip_code: param.zip_code,
            country: param.country,
            email_notifications: Some(param.email_notifications),
            sms_notifications: Some(param.sms_notifications),
            marketing_emails: Some(param.marketing_emails),
            password_hash,
        };

        user_repo
            .update(credentials.user.id, update)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}
