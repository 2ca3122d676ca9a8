//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a customer together with one complaint they filed.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, complaint))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_complaint_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::complaint::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let complaint = crate::factory::complaint::create_complaint(db, &user.email).await?;

    Ok((user, complaint))
}
