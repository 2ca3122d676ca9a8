//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.

pub mod admin;
pub mod audit;
pub mod auth;
pub mod comment;
pub mod complaint;
pub mod dashboard;
pub mod notification;
pub mod rating;
pub mod setting;
pub mod staff;
pub mod staff_note;
pub mod user;
