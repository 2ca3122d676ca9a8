//! Audit trail service.
//!
//! Every mutating staff and admin operation appends an entry here. Entries are never
//! updated or removed.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::audit_log::AuditLogRepository,
    error::AppError,
    model::audit::{AuditEntityType, AuditEntry, RecordAuditParam},
};

/// Number of entries shown in the admin report.
pub const RECENT_ACTIVITY_LIMIT: u64 = 10;

pub struct AuditService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuditService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends an audit entry.
    ///
    /// # Arguments
    /// - `param` - Actor, action, target entity, details and request IP
    ///
    /// # Returns
    /// - `Ok(AuditEntry)` - The stored entry
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn record(&self, param: RecordAuditParam) -> Result<AuditEntry, AppError> {
        let entry = AuditLogRepository::new(self.db).create(param).await?;

        tracing::info!(
            actor = %entry.user_email,
            action = %entry.action,
            entity = %entry.entity_type,
            entity_id = %entry.entity_id,
            "{}",
            entry.details
        );

        Ok(entry)
    }

    /// Retrieves every entry, newest first.
    pub async fn get_all(&self) -> Result<Vec<AuditEntry>, AppError> {
        Ok(AuditLogRepository::new(self.db).get_latest(None).await?)
    }

    /// Retrieves the `limit` newest entries.
    pub async fn get_latest(&self, limit: u64) -> Result<Vec<AuditEntry>, AppError> {
        Ok(AuditLogRepository::new(self.db)
            .get_latest(Some(limit))
            .await?)
    }

    /// Retrieves the history of one entity, newest first.
    pub async fn get_entity_history(
        &self,
        entity_type: AuditEntityType,
        entity_id: &str,
    ) -> Result<Vec<AuditEntry>, AppError> {
        Ok(AuditLogRepository::new(self.db)
            .get_by_entity(entity_type, entity_id)
            .await?)
    }
}
