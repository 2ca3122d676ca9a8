//! Customer account domain models and parameters.
//!
//! Customers file complaints and own notifications. The password hash never leaves
//! the data layer except through `UserCredentials`, which is used only for login
//! and password changes.

use chrono::{DateTime, NaiveDate, Utc};

use crate::model::user::{RegisterUserDto, UpdateProfileDto, UserProfileDto};

/// Customer account without credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub full_name: String,
    pub phone_number: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    pub email_notifications: bool,
    pub sms_notifications: bool,
    pub marketing_emails: bool,
    pub email_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// First word of the full name, or `"User"` when the name is blank.
    pub fn first_name(&self) -> String {
        self.full_name
            .split_whitespace()
            .next()
            .unwrap_or("User")
            .to_string()
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserProfileDto {
        UserProfileDto {
            id: self.id,
            email: self.email,
            full_name: self.full_name,
            phone_number: self.phone_number,
            date_of_birth: self.date_of_birth,
            address: self.address,
            city: self.city,
            state: self.state,
            zip_code: self.zip_code,
            country: self.country,
            email_notifications: self.email_notifications,
            sms_notifications: self.sms_notifications,
            marketing_emails: self.marketing_emails,
            email_verified: self.email_verified,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            full_name: entity.full_name,
            phone_number: entity.phone_number,
            date_of_birth: entity.date_of_birth,
            address: entity.address,
            city: entity.city,
            state: entity.state,
            zip_code: entity.zip_code,
            country: entity.country,
            email_notifications: entity.email_notifications,
            sms_notifications: entity.sms_notifications,
            marketing_emails: entity.marketing_emails,
            email_verified: entity.email_verified,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Login material for a customer account.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

impl UserCredentials {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        let password_hash = entity.password_hash.clone();
        Self {
            user: User::from_entity(entity),
            password_hash,
        }
    }
}

/// Parameters for creating a customer account.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub email: String,
    /// Already hashed with bcrypt.
    pub password_hash: String,
    pub full_name: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
}

/// Parameters for a partial profile update.
///
/// `None` leaves a column unchanged. The notification flags are optional here so
/// that admin edits, which don't carry them, can reuse the same update.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParam {
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    pub email_notifications: Option<bool>,
    pub sms_notifications: Option<bool>,
    pub marketing_emails: Option<bool>,
    /// Already hashed with bcrypt.
    pub password_hash: Option<String>,
}

/// Registration fields as submitted, before validation.
#[derive(Debug, Clone, Default)]
pub struct RegisterUserParam {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub phone_number: Option<String>,
}

impl RegisterUserParam {
    pub fn from_dto(dto: RegisterUserDto) -> Self {
        Self {
            full_name: dto.full_name,
            email: dto.email,
            password: dto.password,
            phone_number: dto.phone_number,
        }
    }
}

/// Self-service profile update.
///
/// Absent profile fields are left unchanged. The notification flags are always
/// written. A password change needs the current password.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileParam {
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    pub email_notifications: bool,
    pub sms_notifications: bool,
    pub marketing_emails: bool,
    pub current_password: Option<String>,
    pub new_password: Option<String>,
}

impl UpdateProfileParam {
    pub fn from_dto(dto: UpdateProfileDto) -> Self {
        Self {
            full_name: dto.full_name,
            phone_number: dto.phone_number,
            date_of_birth: dto.date_of_birth,
            address: dto.address,
            city: dto.city,
            state: dto.state,
            zip_code: dto.zip_code,
            country: dto.country,
            email_notifications: dto.email_notifications,
            sms_notifications: dto.sms_notifications,
            marketing_emails: dto.marketing_emails,
            current_password: dto.current_password,
            new_password: dto.new_password,
        }
    }
}
