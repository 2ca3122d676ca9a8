//! Audit log domain models.
//!
//! Audit entries are append-only. They are written by services wherever a mutation
//! happens and are never updated or deleted.

use chrono::{DateTime, Utc};

use crate::model::audit::AuditLogDto;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditAction {
    Create,
    Update,
    Delete,
    StatusChange,
    Assign,
    Backup,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
            Self::StatusChange => "STATUS_CHANGE",
            Self::Assign => "ASSIGN",
            Self::Backup => "BACKUP",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditEntityType {
    User,
    Staff,
    Complaint,
    System,
    AdminProfile,
}

impl AuditEntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Staff => "STAFF",
            Self::Complaint => "COMPLAINT",
            Self::System => "SYSTEM",
            Self::AdminProfile => "ADMIN_PROFILE",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuditEntry {
    pub id: i32,
    pub user_email: String,
    pub action: String,
    pub entity_type: String,
    pub entity_id: String,
    pub details: String,
    pub ip_address: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl AuditEntry {
    pub fn into_dto(self) -> AuditLogDto {
        AuditLogDto {
            id: self.id,
            user_email: self.user_email,
            action: self.action,
            entity_type: self.entity_type,
            entity_id: self.entity_id,
            details: self.details,
            ip_address: self.ip_address,
            timestamp: self.timestamp,
        }
    }

    pub fn from_entity(entity: entity::audit_log::Model) -> Self {
        Self {
            id: entity.id,
            user_email: entity.user_email,
            action: entity.action,
            entity_type: entity.entity_type,
            entity_id: entity.entity_id,
            details: entity.details,
            ip_address: entity.ip_address,
            timestamp: entity.timestamp,
        }
    }
}

/// Parameters for appending an audit entry.
#[derive(Debug, Clone)]
pub struct RecordAuditParam {
    /// Email of the account that performed the action.
    pub actor_email: String,
    pub action: AuditAction,
    pub entity_type: AuditEntityType,
    pub entity_id: String,
    pub details: String,
    pub ip_address: Option<String>,
}

/// Who performed a mutation and from which address.
///
/// Controllers build this from the authenticated actor and the request so services can
/// attribute audit entries without seeing HTTP types.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditContext {
    pub actor_email: String,
    pub ip_address: Option<String>,
}

impl AuditContext {
    pub fn new(actor_email: impl Into<String>, ip_address: Option<String>) -> Self {
        Self {
            actor_email: actor_email.into(),
            ip_address,
        }
    }

    /// Builds the audit record for an action by this actor.
    pub fn record(
        &self,
        action: AuditAction,
        entity_type: AuditEntityType,
        entity_id: impl Into<String>,
        details: impl Into<String>,
    ) -> RecordAuditParam {
        RecordAuditParam {
            actor_email: self.actor_email.clone(),
            action,
            entity_type,
            entity_id: entity_id.into(),
            details: details.into(),
            ip_address: self.ip_address.clone(),
        }
    }
}
