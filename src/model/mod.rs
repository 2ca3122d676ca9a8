//! Request and response bodies exchanged over the REST API.
//!
//! Field names are serialized in camelCase. Server-side domain models live in
//! `server::model` and convert into these types at the controller boundary.

pub mod admin;
pub mod api;
pub mod audit;
pub mod comment;
pub mod complaint;
pub mod dashboard;
pub mod health;
pub mod notification;
pub mod rating;
pub mod staff;
pub mod user;
