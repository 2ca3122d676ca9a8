//! Complaint factory for creating test complaints.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test complaints with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let complaint = ComplaintFactory::new(&db, "jane@example.com")
///     .status("IN_PROGRESS")
///     .assigned_to("agent@example.com")
///     .build()
///     .await?;
/// ```
pub struct ComplaintFactory<'a> {
    db: &'a DatabaseConnection,
    complaint_id: String,
    user_email: String,
    order_id: String,
    issue_type: String,
    description: String,
    status: String,
    priority: Option<String>,
    priority_level: i32,
    assigned_to: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl<'a> ComplaintFactory<'a> {
    /// Creates a new ComplaintFactory with default values.
    ///
    /// Defaults:
    /// - complaint_id: `"CMP-T{id}"`
    /// - order_id: `"ORD-{id}"`
    /// - issue_type: `"Product Quality"`
    /// - status: `"PENDING"`
    /// - created_at / updated_at: now
    pub fn new(db: &'a DatabaseConnection, user_email: impl Into<String>) -> Self {
        let id = next_id();
        let now = Utc::now();
        Self {
            db,
            complaint_id: format!("CMP-T{}", id),
            user_email: user_email.into(),
            order_id: format!("ORD-{}", id),
            issue_type: "Product Quality".to_string(),
            description: format!("Test complaint {}", id),
            status: "PENDING".to_string(),
            priority: Some("Medium".to_string()),
            priority_level: 2,
            assigned_to: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn complaint_id(mut self, complaint_id: impl Into<String>) -> Self {
        self.complaint_id = complaint_id.into();
        self
    }

    pub fn order_id(mut self, order_id: impl Into<String>) -> Self {
        self.order_id = order_id.into();
        self
    }

    pub fn issue_type(mut self, issue_type: impl Into<String>) -> Self {
        self.issue_type = issue_type.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the status string (`PENDING`, `IN_PROGRESS`, `RESOLVED`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn priority(mut self, priority: impl Into<String>, level: i32) -> Self {
        self.priority = Some(priority.into());
        self.priority_level = level;
        self
    }

    pub fn assigned_to(mut self, staff_email: impl Into<String>) -> Self {
        self.assigned_to = Some(staff_email.into());
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = updated_at;
        self
    }

    /// Builds and inserts the complaint entity into the database.
    pub async fn build(self) -> Result<entity::complaint::Model, DbErr> {
        entity::complaint::ActiveModel {
            complaint_id: ActiveValue::Set(self.complaint_id),
            user_email: ActiveValue::Set(self.user_email),
            order_id: ActiveValue::Set(self.order_id),
            order_date: ActiveValue::Set(None),
            issue_type: ActiveValue::Set(self.issue_type),
            title: ActiveValue::Set(None),
            description: ActiveValue::Set(self.description),
            status: ActiveValue::Set(self.status),
            priority: ActiveValue::Set(self.priority),
            priority_level: ActiveValue::Set(self.priority_level),
            contact_phone: ActiveValue::Set(None),
            expected_resolution: ActiveValue::Set(None),
            assigned_to: ActiveValue::Set(self.assigned_to),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.updated_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending complaint for the given user email.
pub async fn create_complaint(
    db: &DatabaseConnection,
    user_email: &str,
) -> Result<entity::complaint::Model, DbErr> {
    ComplaintFactory::new(db, user_email).build().await
}
