use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::{complaint::ComplaintRepository, staff::StaffRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::auth::{Actor, Principal, PrincipalKind},
};

pub enum Permission {
    /// Any staff account, whatever its role.
    Staff,
    /// A staff account with role `ADMIN`.
    Admin,
    /// The customer with this email, or any staff account.
    SelfOrStaff(String),
    /// The customer who filed the complaint with this ID, or any staff account.
    ComplaintOwnerOrStaff(String),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Loads the logged-in account and checks every permission against it.
    ///
    /// The account is reloaded from the database, so a deleted account or a changed
    /// role applies to sessions that are already open.
    ///
    /// # Returns
    /// - `Ok(Actor)` - The account passes every permission
    /// - `Err(AuthError::UserNotInSession)` - Not logged in
    /// - `Err(AuthError::AccountNotFound)` - The session's account was deleted
    /// - `Err(AuthError::AccessDenied)` - A permission is not met
    /// - `Err(AppError::NotFound)` - A customer referenced an unknown complaint
    pub async fn require(&self, permissions: &[Permission]) -> Result<Actor, AppError> {
        let Some(principal) = AuthSession::new(self.session).get_principal().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let actor = self.load_actor(principal).await?;

        for permission in permissions {
            self.check(&actor, permission).await?;
        }

        Ok(actor)
    }

    /// Checks one permission against an already loaded actor.
    ///
    /// Used by handlers that only learn the owning email after a lookup, such as
    /// marking a notification read.
    pub async fn check(&self, actor: &Actor, permission: &Permission) -> Result<(), AppError> {
        let denied = |reason: String| -> AppError {
            AuthError::AccessDenied(actor.email().to_string(), reason).into()
        };

        match permission {
            Permission::Staff => {
                if !actor.is_staff() {
                    return Err(denied("staff access required".to_string()));
                }
            }
            Permission::Admin => {
                if !actor.is_admin() {
                    return Err(denied("admin access required".to_string()));
                }
            }
            Permission::SelfOrStaff(email) => {
                if !actor.is_staff() && actor.email() != email {
                    return Err(denied(format!("attempted to access data of {}", email)));
                }
            }
            Permission::ComplaintOwnerOrStaff(complaint_id) => {
                if actor.is_staff() {
                    return Ok(());
                }

                let Some(complaint) = ComplaintRepository::new(self.db)
                    .find_by_complaint_id(complaint_id)
                    .await?
                else {
                    return Err(AppError::NotFound("Complaint not found".to_string()));
                };

                if complaint.user_email != actor.email() {
                    return Err(denied(format!(
                        "attempted to access complaint {}",
                        complaint_id
                    )));
                }
            }
        }

        Ok(())
    }

    async fn load_actor(&self, principal: Principal) -> Result<Actor, AppError> {
        let actor = match principal.kind {
            PrincipalKind::User => UserRepository::new(self.db)
                .find_by_id(principal.id)
                .await?
                .map(Actor::User),
            PrincipalKind::Staff => StaffRepository::new(self.db)
                .find_by_id(principal.id)
                .await?
                .map(|staff| Actor::Staff {
                    id: staff.id,
                    email: staff.email,
                    role: staff.role,
                }),
        };

        actor.ok_or_else(|| AuthError::AccountNotFound(principal.email).into())
    }
}
