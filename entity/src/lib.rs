//! SeaORM entity models for the ResolveIT database schema.
//!
//! One module per table. Entities are generated to mirror the migrations in the
//! `migration` crate and are used by the repositories in the server's data layer as
//! well as by the `test-utils` crate to build in-memory schemas.

pub mod prelude;

pub mod audit_log;
pub mod comment;
pub mod complaint;
pub mod complaint_attachment;
pub mod notification;
pub mod rating;
pub mod staff;
pub mod staff_note;
pub mod system_setting;
pub mod user;
