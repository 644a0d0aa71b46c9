//! Authentication session state.
//!
//! # Invariants
//! - `is_authenticated == true` implies `role` and `user` are both set.
//! - `loading` and `error` are transient and never persisted.

use crate::model::role::Role;
use crate::model::RecordId;
use serde::{Deserialize, Serialize};

/// Profile of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: RecordId,
    pub name: String,
    pub email: String,
}

/// Current authentication state as observed by the UI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub is_authenticated: bool,
    pub role: Option<Role>,
    pub user: Option<UserProfile>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Session {
    /// Builds an authenticated session for `user` acting as `role`.
    pub fn authenticated(role: Role, user: UserProfile) -> Self {
        Self {
            is_authenticated: true,
            role: Some(role),
            user: Some(user),
            loading: false,
            error: None,
        }
    }

    /// Returns the active role only when the session is authenticated.
    pub fn active_role(&self) -> Option<Role> {
        if self.is_authenticated {
            self.role
        } else {
            None
        }
    }

    /// Returns the persisted subset of this session.
    pub fn snapshot(&self) -> PersistedSession {
        PersistedSession {
            is_authenticated: self.is_authenticated,
            role: self.role,
            user: self.user.clone(),
        }
    }
}

/// Session fields written to storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSession {
    pub is_authenticated: bool,
    pub role: Option<Role>,
    pub user: Option<UserProfile>,
}

impl From<PersistedSession> for Session {
    fn from(value: PersistedSession) -> Self {
        // A half-written snapshot (flag without identity) restores as signed out.
        match (value.is_authenticated, value.role, value.user) {
            (true, Some(role), Some(user)) => Session::authenticated(role, user),
            _ => Session::default(),
        }
    }
}
