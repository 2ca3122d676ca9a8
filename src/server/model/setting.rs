//! System setting domain models.

use chrono::{DateTime, Utc};

use crate::model::admin::{SystemSettingDto, UpsertSettingDto};

/// Category assigned to settings saved without one.
pub const DEFAULT_SETTING_CATEGORY: &str = "GENERAL";

#[derive(Debug, Clone, PartialEq)]
pub struct SystemSetting {
    pub id: i32,
    pub key: String,
    pub value: String,
    pub description: Option<String>,
    pub category: String,
    pub updated_at: DateTime<Utc>,
}

impl SystemSetting {
    pub fn into_dto(self) -> SystemSettingDto {
        SystemSettingDto {
            id: self.id,
            key: self.key,
            value: self.value,
            description: self.description,
            category: self.category,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(entity: entity::system_setting::Model) -> Self {
        Self {
            id: entity.id,
            key: entity.key,
            value: entity.value,
            description: entity.description,
            category: entity.category,
            updated_at: entity.updated_at,
        }
    }
}

/// Parameters for inserting or updating a setting by key.
#[derive(Debug, Clone)]
pub struct UpsertSettingParam {
    pub key: String,
    pub value: String,
    pub description: Option<String>,
    pub category: Option<String>,
}

impl UpsertSettingParam {
    pub fn from_dto(dto: UpsertSettingDto) -> Self {
        Self {
            key: dto.key,
            value: dto.value,
            description: dto.description,
            category: dto.category,
        }
    }
}
