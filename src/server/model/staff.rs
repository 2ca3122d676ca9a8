//! Staff account domain models and parameters.
//!
//! Staff accounts carry a role string. Only `ADMIN` grants additional permissions;
//! `SUPERVISOR` and `MANAGER` behave like `STAFF`.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use std::{fmt, str::FromStr};

use crate::model::staff::{StaffDto, StaffSummaryDto, UpdateStaffProfileDto};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaffRole {
    Staff,
    Admin,
    Supervisor,
    Manager,
}

impl StaffRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Staff => "STAFF",
            Self::Admin => "ADMIN",
            Self::Supervisor => "SUPERVISOR",
            Self::Manager => "MANAGER",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StaffRole {
    type Err = String;

    /// Parses a role name case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "STAFF" => Ok(Self::Staff),
            "ADMIN" => Ok(Self::Admin),
            "SUPERVISOR" => Ok(Self::Supervisor),
            "MANAGER" => Ok(Self::Manager),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// Staff account without credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct Staff {
    pub id: i32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub role: StaffRole,
    pub department: Option<String>,
    pub workload: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Staff {
    pub fn into_dto(self) -> StaffDto {
        StaffDto {
            id: self.id,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            phone: self.phone,
            role: self.role.to_string(),
            department: self.department,
            workload: self.workload,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Login summary with display fallbacks for missing names and department.
    pub fn into_summary_dto(self) -> StaffSummaryDto {
        StaffSummaryDto {
            email: self.email,
            first_name: non_blank_or(self.first_name, "Staff"),
            last_name: non_blank_or(self.last_name, "Member"),
            role: self.role.to_string(),
            department: self
                .department
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| "N/A".to_string()),
        }
    }

    /// Converts an entity model to a staff domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Staff)` - The converted domain model
    /// - `Err(DbErr::Custom)` - The stored role is not a known role
    pub fn from_entity(entity: entity::staff::Model) -> Result<Self, DbErr> {
        let role = entity
            .role
            .parse::<StaffRole>()
            .map_err(|e| DbErr::Custom(format!("staff {}: {}", entity.id, e)))?;

        Ok(Self {
            id: entity.id,
            email: entity.email,
            first_name: entity.first_name,
            last_name: entity.last_name,
            phone: entity.phone,
            role,
            department: entity.department,
            workload: entity.workload,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

fn non_blank_or(value: String, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value
    }
}

/// Login material for a staff account.
#[derive(Debug, Clone)]
pub struct StaffCredentials {
    pub staff: Staff,
    pub password_hash: String,
}

impl StaffCredentials {
    pub fn from_entity(entity: entity::staff::Model) -> Result<Self, DbErr> {
        let password_hash = entity.password_hash.clone();
        Ok(Self {
            staff: Staff::from_entity(entity)?,
            password_hash,
        })
    }
}

/// Parameters for creating a staff account.
#[derive(Debug, Clone)]
pub struct CreateStaffParam {
    pub email: String,
    /// Already hashed with bcrypt.
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub role: StaffRole,
    pub department: Option<String>,
    pub workload: i32,
}

/// Parameters for a partial staff update. `None` leaves a column unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateStaffParam {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub role: Option<StaffRole>,
    /// Already hashed with bcrypt.
    pub password_hash: Option<String>,
}

impl UpdateStaffParam {
    /// Converts a self-service profile edit. Role and password are never taken from it.
    pub fn from_profile_dto(dto: UpdateStaffProfileDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            phone: dto.phone,
            department: dto.department,
            ..Default::default()
        }
    }
}
