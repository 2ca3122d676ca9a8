use crate::server::{
    data::notification::NotificationRepository,
    model::notification::{CreateNotificationParam, NotificationType},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::notification::NotificationFactory};

mod create;
mod get_by_user_email;
mod mark_all_read;
mod mark_read;
