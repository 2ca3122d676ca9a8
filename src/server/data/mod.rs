//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! table in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! All database queries, inserts, updates, and deletes are performed through these repositories.

pub mod attachment;
pub mod audit_log;
pub mod comment;
pub mod complaint;
pub mod notification;
pub mod rating;
pub mod staff;
pub mod staff_note;
pub mod system_setting;
pub mod user;

#[cfg(test)]
mod test;
