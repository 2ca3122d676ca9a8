use crate::server::{
    data::complaint::ComplaintRepository,
    model::complaint::{ComplaintSearchParam, ComplaintStatus, CreateComplaintParam},
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory, factory::complaint::ComplaintFactory};

mod assign;
mod count_by_user_email;
mod count_resolved_since;
mod create;
mod delete_with_children;
mod get_by_user_email;
mod search;
mod update_status;
