use crate::server::{
    data::staff::StaffRepository,
    model::staff::{CreateStaffParam, StaffRole, UpdateStaffParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_email;
mod get_all;
mod update;
