//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::user::create_user(&db).await?;
//!     let complaint = factory::complaint::create_complaint(&db, &user.email).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let staff = factory::staff::StaffFactory::new(&db)
//!     .email("agent@example.com")
//!     .role("ADMIN")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Customer accounts
//! - `staff` - Staff and admin accounts
//! - `complaint` - Complaints
//! - `notification` - User notifications
//! - `helpers` - ID generation and multi-entity convenience methods

pub mod complaint;
pub mod helpers;
pub mod notification;
pub mod staff;
pub mod user;

pub use complaint::create_complaint;
pub use notification::create_notification;
pub use staff::{create_admin, create_staff};
pub use user::create_user;
