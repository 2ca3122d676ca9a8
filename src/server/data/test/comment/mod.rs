use crate::server::{
    data::comment::CommentRepository,
    model::comment::{AuthorType, CreateCommentParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_complaint;
