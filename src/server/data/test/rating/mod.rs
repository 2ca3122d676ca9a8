use crate::server::{data::rating::RatingRepository, model::rating::CreateRatingParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_staff;

fn param(complaint_id: &str, staff_email: Option<&str>, rating: i32) -> CreateRatingParam {
    CreateRatingParam {
        complaint_id: complaint_id.to_string(),
        user_email: "jane@example.com".to_string(),
        staff_email: staff_email.map(str::to_string),
        rating,
        feedback: None,
    }
}
