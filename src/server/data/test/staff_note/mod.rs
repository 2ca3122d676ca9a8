use crate::server::{data::staff_note::StaffNoteRepository, model::staff_note::CreateStaffNoteParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_complaint;
