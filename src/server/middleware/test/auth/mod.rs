use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{auth::AuthGuard, auth::Permission, session::AuthSession},
    model::auth::{Actor, Principal, PrincipalKind},
};
use test_utils::{builder::TestBuilder, factory};

mod require;
mod session;

/// Stores a customer principal in the session.
async fn log_in_user(session: &Session, user: &entity::user::Model) -> Result<(), AppError> {
    AuthSession::new(session)
        .set_principal(&Principal {
            kind: PrincipalKind::User,
            id: user.id,
            email: user.email.clone(),
        })
        .await
}

/// Stores a staff principal in the session.
async fn log_in_staff(session: &Session, staff: &entity::staff::Model) -> Result<(), AppError> {
    AuthSession::new(session)
        .set_principal(&Principal {
            kind: PrincipalKind::Staff,
            id: staff.id,
            email: staff.email.clone(),
        })
        .await
}

async fn require(
    db: &DatabaseConnection,
    session: &Session,
    permissions: &[Permission],
) -> Result<Actor, AppError> {
    AuthGuard::new(db, session).require(permissions).await
}

fn is_access_denied(result: &Result<Actor, AppError>) -> bool {
    matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    )
}
