//! Staff factory for creating test staff and admin accounts.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test staff members with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let admin = StaffFactory::new(&db)
///     .email("boss@example.com")
///     .role("ADMIN")
///     .build()
///     .await?;
/// ```
pub struct StaffFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    first_name: String,
    last_name: String,
    password_hash: String,
    role: String,
    department: Option<String>,
    workload: i32,
}

impl<'a> StaffFactory<'a> {
    /// Creates a new StaffFactory with default values.
    ///
    /// Defaults:
    /// - email: `"staff{id}@example.com"`
    /// - first_name / last_name: `"Staff"` / `"{id}"`
    /// - role: `"STAFF"`
    /// - department: `"Customer Support"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("staff{}@example.com", id),
            first_name: "Staff".to_string(),
            last_name: id.to_string(),
            password_hash: "unusable".to_string(),
            role: "STAFF".to_string(),
            department: Some("Customer Support".to_string()),
            workload: 0,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    /// Sets the stored password hash. Callers hash the password themselves.
    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    /// Sets the role string (`STAFF`, `ADMIN`, `SUPERVISOR`, `MANAGER`).
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn department(mut self, department: Option<&str>) -> Self {
        self.department = department.map(str::to_string);
        self
    }

    pub fn workload(mut self, workload: i32) -> Self {
        self.workload = workload;
        self
    }

    /// Builds and inserts the staff entity into the database.
    pub async fn build(self) -> Result<entity::staff::Model, DbErr> {
        let now = Utc::now();
        entity::staff::ActiveModel {
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(self.password_hash),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            phone: ActiveValue::Set(None),
            role: ActiveValue::Set(self.role),
            department: ActiveValue::Set(self.department),
            workload: ActiveValue::Set(self.workload),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a staff member with role `STAFF`.
pub async fn create_staff(db: &DatabaseConnection) -> Result<entity::staff::Model, DbErr> {
    StaffFactory::new(db).build().await
}

/// Creates a staff member with role `ADMIN`.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::staff::Model, DbErr> {
    StaffFactory::new(db).role("ADMIN").build().await
}
