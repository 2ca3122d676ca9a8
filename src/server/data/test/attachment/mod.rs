use crate::server::data::attachment::AttachmentRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_paths_by_complaint;
