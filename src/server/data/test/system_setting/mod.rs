use crate::server::{
    data::system_setting::SystemSettingRepository,
    model::setting::{UpsertSettingParam, DEFAULT_SETTING_CATEGORY},
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod upsert;
