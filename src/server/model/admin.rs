//! Account management parameters used by the admin console.
//!
//! These carry plain-text passwords from the request; the admin service hashes them
//! before anything reaches the data layer.

use crate::{
    model::admin::{CreateStaffDto, CreateUserDto, UpdateStaffDto, UpdateUserDto},
    server::model::staff::StaffRole,
};

#[derive(Debug, Clone, Default)]
pub struct AdminCreateUserParam {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
}

impl AdminCreateUserParam {
    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            full_name: dto.full_name,
            email: dto.email,
            password: dto.password,
            phone_number: dto.phone_number,
            address: dto.address,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AdminUpdateUserParam {
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    /// Replaces the password when present and non-empty.
    pub password: Option<String>,
}

impl AdminUpdateUserParam {
    pub fn from_dto(dto: UpdateUserDto) -> Self {
        Self {
            full_name: dto.full_name,
            phone_number: dto.phone_number,
            address: dto.address,
            password: dto.password,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AdminCreateStaffParam {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub role: StaffRole,
    pub department: Option<String>,
}

impl AdminCreateStaffParam {
    /// Converts the request body, defaulting a missing role to `STAFF`.
    ///
    /// # Returns
    /// - `Err(String)` - The role is not a known role
    pub fn from_dto(dto: CreateStaffDto) -> Result<Self, String> {
        let role = match dto.role.filter(|r| !r.trim().is_empty()) {
            Some(role) => role.parse::<StaffRole>()?,
            None => StaffRole::Staff,
        };

        Ok(Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            password: dto.password,
            phone: dto.phone,
            role,
            department: dto.department,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct AdminUpdateStaffParam {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub role: Option<StaffRole>,
    /// Replaces the password when present and non-empty.
    pub password: Option<String>,
}

impl AdminUpdateStaffParam {
    /// # Returns
    /// - `Err(String)` - The role is not a known role
    pub fn from_dto(dto: UpdateStaffDto) -> Result<Self, String> {
        let role = dto
            .role
            .filter(|r| !r.trim().is_empty())
            .map(|r| r.parse::<StaffRole>())
            .transpose()?;

        Ok(Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            phone: dto.phone,
            department: dto.department,
            role,
            password: dto.password,
        })
    }
}
