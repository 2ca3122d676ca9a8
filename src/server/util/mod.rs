//! Small helpers shared by controllers and services.

pub mod csv;
pub mod password;
pub mod request;
pub mod sanitize;
