//! Append-only audit log repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::audit::{AuditEntityType, AuditEntry, RecordAuditParam};

use entity::audit_log::Column;

pub struct AuditLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuditLogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends an audit entry timestamped now.
    pub async fn create(&self, param: RecordAuditParam) -> Result<AuditEntry, DbErr> {
        let entity = entity::audit_log::ActiveModel {
            user_email: ActiveValue::Set(param.actor_email),
            action: ActiveValue::Set(param.action.as_str().to_string()),
            entity_type: ActiveValue::Set(param.entity_type.as_str().to_string()),
            entity_id: ActiveValue::Set(param.entity_id),
            details: ActiveValue::Set(param.details),
            ip_address: ActiveValue::Set(param.ip_address),
            timestamp: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(AuditEntry::from_entity(entity))
    }

    /// Retrieves audit entries, newest first.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of entries, or `None` for all
    pub async fn get_latest(&self, limit: Option<u64>) -> Result<Vec<AuditEntry>, DbErr> {
        let entities = entity::prelude::AuditLog::find()
            .order_by_desc(Column::Timestamp)
            .order_by_desc(Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(AuditEntry::from_entity).collect())
    }

    /// Retrieves entries recorded against one entity, newest first.
    pub async fn get_by_entity(
        &self,
        entity_type: AuditEntityType,
        entity_id: &str,
    ) -> Result<Vec<AuditEntry>, DbErr> {
        let entities = entity::prelude::AuditLog::find()
            .filter(Column::EntityType.eq(entity_type.as_str()))
            .filter(Column::EntityId.eq(entity_id))
            .order_by_desc(Column::Timestamp)
            .order_by_desc(Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(AuditEntry::from_entity).collect())
    }
}
