//! Authenticated principal stored in the session.

use serde::{Deserialize, Serialize};

use crate::server::model::{staff::StaffRole, user::User};

/// Which account table a principal belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrincipalKind {
    User,
    Staff,
}

/// The logged-in account as recorded at login.
///
/// The guard reloads the account on every request, so a deleted account or a changed
/// role takes effect immediately even though the session still holds this value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub kind: PrincipalKind,
    pub id: i32,
    pub email: String,
}

/// A principal after the guard has checked it against the database.
#[derive(Debug, Clone, PartialEq)]
pub enum Actor {
    User(User),
    Staff { id: i32, email: String, role: StaffRole },
}

impl Actor {
    pub fn email(&self) -> &str {
        match self {
            Self::User(user) => &user.email,
            Self::Staff { email, .. } => email,
        }
    }

    pub fn is_staff(&self) -> bool {
        matches!(self, Self::Staff { .. })
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Staff { role, .. } if role.is_admin())
    }
}
