//! System settings.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::system_setting::SystemSettingRepository,
    error::AppError,
    model::{
        audit::{AuditAction, AuditContext, AuditEntityType},
        setting::{SystemSetting, UpsertSettingParam},
    },
    service::audit::AuditService,
};

pub struct SettingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every setting ordered by category and key.
    pub async fn get_all(&self) -> Result<Vec<SystemSetting>, AppError> {
        Ok(SystemSettingRepository::new(self.db).get_all().await?)
    }

    /// Upserts a batch of settings by key.
    ///
    /// Keys are checked before anything is written. One `SYSTEM` `UPDATE` audit entry
    /// lists the changed keys.
    ///
    /// # Returns
    /// - `Ok(Vec<SystemSetting>)` - The stored settings, in input order
    /// - `Err(AppError::BadRequest)` - A setting has an empty key
    pub async fn update_all(
        &self,
        ctx: &AuditContext,
        settings: Vec<UpsertSettingParam>,
    ) -> Result<Vec<SystemSetting>, AppError> {
        if settings.iter().any(|s| s.key.trim().is_empty()) {
            return Err(AppError::BadRequest("Setting key is required".to_string()));
        }

        let setting_repo = SystemSettingRepository::new(self.db);
        let mut stored = Vec::with_capacity(settings.len());
        for setting in settings {
            stored.push(setting_repo.upsert(setting).await?);
        }

        let keys: Vec<&str> = stored.iter().map(|s| s.key.as_str()).collect();
        AuditService::new(self.db)
            .record(ctx.record(
                AuditAction::Update,
                AuditEntityType::System,
                "settings",
                format!("Updated settings: {}", keys.join(", ")),
            ))
            .await?;

        Ok(stored)
    }
}
