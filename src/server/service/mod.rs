//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing validation and complaint workflow rules
//! - **Orchestration**: Coordinating repository calls, notifications and audit entries
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod admin;
pub mod audit;
pub mod auth;
pub mod comment;
pub mod complaint;
pub mod dashboard;
pub mod mail;
pub mod notification;
pub mod otp;
pub mod rating;
pub mod recovery;
pub mod seed;
pub mod setting;
pub mod staff;
pub mod upload;
