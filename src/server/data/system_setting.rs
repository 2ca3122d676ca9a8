//! System setting repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::setting::{SystemSetting, UpsertSettingParam, DEFAULT_SETTING_CATEGORY};

use entity::system_setting::Column;

pub struct SystemSettingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SystemSettingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all settings ordered by category then key.
    pub async fn get_all(&self) -> Result<Vec<SystemSetting>, DbErr> {
        let entities = entity::prelude::SystemSetting::find()
            .order_by_asc(Column::Category)
            .order_by_asc(Column::Key)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(SystemSetting::from_entity).collect())
    }

    pub async fn find_by_key(&self, key: &str) -> Result<Option<SystemSetting>, DbErr> {
        let entity = entity::prelude::SystemSetting::find()
            .filter(Column::Key.eq(key))
            .one(self.db)
            .await?;

        Ok(entity.map(SystemSetting::from_entity))
    }

    /// Inserts a setting or updates the existing setting with the same key.
    ///
    /// An existing setting keeps its description and category unless new ones are
    /// provided. A new setting without a category gets `GENERAL`.
    ///
    /// # Returns
    /// - `Ok(SystemSetting)` - The stored setting
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertSettingParam) -> Result<SystemSetting, DbErr> {
        let existing = entity::prelude::SystemSetting::find()
            .filter(Column::Key.eq(&param.key))
            .one(self.db)
            .await?;

        let entity = match existing {
            Some(existing) => {
                let mut active: entity::system_setting::ActiveModel = existing.into();
                active.value = ActiveValue::Set(param.value);
                if let Some(description) = param.description {
                    active.description = ActiveValue::Set(Some(description));
                }
                if let Some(category) = param.category {
                    active.category = ActiveValue::Set(category);
                }
                active.updated_at = ActiveValue::Set(Utc::now());
                active.update(self.db).await?
            }
            None => {
                entity::system_setting::ActiveModel {
                    key: ActiveValue::Set(param.key),
                    value: ActiveValue::Set(param.value),
                    description: ActiveValue::Set(param.description),
                    category: ActiveValue::Set(
                        param
                            .category
                            .unwrap_or_else(|| DEFAULT_SETTING_CATEGORY.to_string()),
                    ),
                    updated_at: ActiveValue::Set(Utc::now()),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
            }
        };

        Ok(SystemSetting::from_entity(entity))
    }
}
