use crate::server::{
    data::audit_log::AuditLogRepository,
    model::audit::{AuditAction, AuditEntityType, RecordAuditParam},
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod get_by_entity;
mod get_latest;

fn param(action: AuditAction, entity_type: AuditEntityType, entity_id: &str) -> RecordAuditParam {
    RecordAuditParam {
        actor_email: "admin@example.com".to_string(),
        action,
        entity_type,
        entity_id: entity_id.to_string(),
        details: format!("{} {}", action.as_str(), entity_id),
        ip_address: Some("127.0.0.1".to_string()),
    }
}
