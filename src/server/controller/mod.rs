//! HTTP request handlers.
//!
//! Each handler checks access with `AuthGuard`, converts the request DTO into a
//! service parameter, calls the service and converts the result back into a DTO.

pub mod admin;
pub mod auth;
pub mod comment;
pub mod complaint;
pub mod dashboard;
pub mod health;
pub mod notification;
pub mod rating;
pub mod staff;
