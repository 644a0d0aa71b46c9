//! Session store: simulated login/logout against credential fixtures.
//!
//! # Responsibility
//! - Restore the persisted session on open.
//! - Validate credentials for the selected role and hold the result.
//!
//! # Invariants
//! - `login` and `logout` never return errors; failures surface through
//!   `Session::error` and logs.
//! - Credentials and emails are never written to logs.
//! - `logout` returns every field to `Session::default()`.

use crate::fixtures::CredentialFixtures;
use crate::model::role::Role;
use crate::model::session::{PersistedSession, Session, UserProfile};
use crate::storage::SharedStorage;
use crate::store::SESSION_STORAGE_KEY;
use log::{error, info, warn};
use std::thread;
use std::time::{Duration, Instant};

const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

pub struct SessionStore {
    storage: SharedStorage,
    fixtures: CredentialFixtures,
    login_delay: Duration,
    state: Session,
}

impl SessionStore {
    /// Opens the store, restoring any persisted session.
    ///
    /// Unreadable snapshots restore as signed out.
    pub fn open(
        storage: SharedStorage,
        fixtures: CredentialFixtures,
        login_delay: Duration,
    ) -> Self {
        let state = restore_session(&storage);
        info!(
            "event=session_restore module=session status=ok authenticated={} role={}",
            state.is_authenticated,
            role_label(state.role)
        );
        Self {
            storage,
            fixtures,
            login_delay,
            state,
        }
    }

    pub fn session(&self) -> &Session {
        &self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated
    }

    pub fn role(&self) -> Option<Role> {
        self.state.active_role()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.state.user.as_ref()
    }

    /// Checks `email`/`password` against the fixture for `role`.
    ///
    /// Blocks for the configured login delay before answering. On failure
    /// the session is signed out and `error` carries a message.
    pub fn login(&mut self, email: &str, password: &str, role: Role) -> bool {
        let started_at = Instant::now();
        self.state.loading = true;
        self.state.error = None;

        if !self.login_delay.is_zero() {
            thread::sleep(self.login_delay);
        }

        let matched = self
            .fixtures
            .for_role(role)
            .filter(|record| record.matches(email, password))
            .map(|record| record.user.clone());

        let success = match matched {
            Some(user) => {
                self.state = Session::authenticated(role, user);
                info!(
                    "event=login module=session status=ok role={role} duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                true
            }
            None => {
                let message = if self.fixtures.for_role(role).is_some() {
                    INVALID_CREDENTIALS_MESSAGE.to_string()
                } else {
                    format!("No account is configured for the {role} portal")
                };
                self.state = Session {
                    error: Some(message),
                    ..Session::default()
                };
                warn!(
                    "event=login module=session status=error role={role} duration_ms={} error_code=invalid_credentials",
                    started_at.elapsed().as_millis()
                );
                false
            }
        };

        self.persist();
        success
    }

    /// Clears every session field and the persisted snapshot.
    pub fn logout(&mut self) {
        let role = self.state.role;
        self.state = Session::default();
        self.persist();
        info!(
            "event=logout module=session status=ok role={}",
            role_label(role)
        );
    }

    /// Clears a displayed login error without touching authentication.
    pub fn clear_error(&mut self) {
        self.state.error = None;
    }

    fn persist(&self) {
        let snapshot = match serde_json::to_string(&self.state.snapshot()) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                error!(
                    "event=session_persist module=session status=error error_code=serialize_failed error={err}"
                );
                return;
            }
        };
        if let Err(err) = self.storage.set_item(SESSION_STORAGE_KEY, &snapshot) {
            error!(
                "event=session_persist module=session status=error error_code=storage_write_failed error={err}"
            );
        }
    }
}

fn restore_session(storage: &SharedStorage) -> Session {
    let raw = match storage.get_item(SESSION_STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Session::default(),
        Err(err) => {
            warn!(
                "event=session_restore module=session status=error error_code=storage_read_failed error={err}"
            );
            return Session::default();
        }
    };

    match serde_json::from_str::<PersistedSession>(&raw) {
        Ok(snapshot) => Session::from(snapshot),
        Err(err) => {
            warn!(
                "event=session_restore module=session status=error error_code=snapshot_corrupt error={err}"
            );
            Session::default()
        }
    }
}

fn role_label(role: Option<Role>) -> &'static str {
    role.map_or("none", Role::as_str)
}

#[cfg(test)]
mod tests {
    use super::SessionStore;
    use crate::fixtures::CredentialFixtures;
    use crate::model::role::Role;
    use crate::model::session::Session;
    use crate::storage::{MemorySessionStorage, SessionStorage, SharedStorage};
    use crate::store::SESSION_STORAGE_KEY;
    use std::time::Duration;

    fn open(storage: SharedStorage) -> SessionStore {
        let fixtures = CredentialFixtures::builtin().expect("builtin fixtures");
        SessionStore::open(storage, fixtures, Duration::ZERO)
    }

    #[test]
    fn login_with_fixture_credentials_succeeds() {
        let mut store = open(MemorySessionStorage::shared());
        assert!(store.login("manager@company.com", "manager123", Role::Manager));
        assert!(store.is_authenticated());
        assert_eq!(store.role(), Some(Role::Manager));
        assert_eq!(
            store.user().map(|user| user.name.as_str()),
            Some("Mark Manager")
        );
        assert!(store.session().error.is_none());
        assert!(!store.session().loading);
    }

    #[test]
    fn credentials_of_another_role_are_rejected() {
        let mut store = open(MemorySessionStorage::shared());
        assert!(!store.login("manager@company.com", "manager123", Role::Admin));
        assert!(!store.is_authenticated());
        assert!(!store.session().error.as_deref().unwrap_or("").is_empty());
    }

    #[test]
    fn failed_login_signs_out_previous_session() {
        let mut store = open(MemorySessionStorage::shared());
        assert!(store.login("admin@company.com", "admin123", Role::Admin));
        assert!(!store.login("admin@company.com", "wrong", Role::Admin));
        assert!(!store.is_authenticated());
        assert_eq!(store.role(), None);
    }

    #[test]
    fn missing_fixture_reports_role_specific_error() {
        let fixtures = CredentialFixtures::from_records(Vec::new()).expect("empty fixtures");
        let mut store =
            SessionStore::open(MemorySessionStorage::shared(), fixtures, Duration::ZERO);
        assert!(!store.login("x@y.io", "p", Role::Superadmin));
        let error = store.session().error.clone().expect("error message");
        assert!(error.contains("superadmin"));
    }

    #[test]
    fn session_survives_reopen_and_logout_clears_it() {
        let storage = MemorySessionStorage::shared();
        let mut store = open(storage.clone());
        assert!(store.login("employee@company.com", "employee123", Role::Employee));

        let mut reopened = open(storage.clone());
        assert!(reopened.is_authenticated());
        assert_eq!(reopened.role(), Some(Role::Employee));

        reopened.logout();
        assert_eq!(reopened.session(), &Session::default());
        assert!(!open(storage).is_authenticated());
    }

    #[test]
    fn corrupt_snapshot_restores_signed_out() {
        let storage = MemorySessionStorage::shared();
        storage
            .set_item(SESSION_STORAGE_KEY, "not json")
            .expect("seed corrupt snapshot");
        assert_eq!(open(storage).session(), &Session::default());
    }
}
