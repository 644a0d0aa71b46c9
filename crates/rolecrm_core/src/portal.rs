//! Portal state: one instance of every store over a shared session storage.
//!
//! # Responsibility
//! - Open the storage backend selected by `PortalConfig`.
//! - Construct every store and the route table for UI shells.
//!
//! # Invariants
//! - Stores are independent; this type never mutates two stores in one call.

use crate::config::PortalConfig;
use crate::fixtures::{CredentialFixtures, FixtureError};
use crate::guard::{Navigation, RouteTable};
use crate::repo::RepoError;
use crate::storage::{MemorySessionStorage, SharedStorage, SqliteSessionStorage, StorageError};
use crate::store::employee_store::EmployeeStore;
use crate::store::manager_store::ManagerStore;
use crate::store::note_store::NoteStore;
use crate::store::notification_store::NotificationStore;
use crate::store::schedule_store::ScheduleStore;
use crate::store::session_store::SessionStore;
use crate::store::task_store::TaskStore;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

pub struct PortalState {
    pub session: SessionStore,
    pub tasks: TaskStore,
    pub employees: EmployeeStore,
    pub managers: ManagerStore,
    pub notes: NoteStore,
    pub notifications: NotificationStore,
    pub schedules: ScheduleStore,
    routes: RouteTable,
    storage: SharedStorage,
}

impl PortalState {
    /// Opens storage per `config` and restores every store from it.
    pub fn open(config: &PortalConfig) -> Result<Self, PortalError> {
        let storage: SharedStorage = match config.db_path.as_ref() {
            Some(path) => Arc::new(SqliteSessionStorage::open(path)?),
            None => MemorySessionStorage::shared(),
        };
        Self::with_storage(config, storage, CredentialFixtures::builtin()?)
    }

    /// Restores every store from an existing storage handle.
    pub fn with_storage(
        config: &PortalConfig,
        storage: SharedStorage,
        fixtures: CredentialFixtures,
    ) -> Result<Self, PortalError> {
        let state = Self {
            session: SessionStore::open(storage.clone(), fixtures, config.login_delay),
            tasks: TaskStore::open(storage.clone())?,
            employees: EmployeeStore::open(storage.clone(), config.employee_limit)?,
            managers: ManagerStore::open(storage.clone())?,
            notes: NoteStore::open(storage.clone())?,
            notifications: NotificationStore::open(storage.clone())?,
            schedules: ScheduleStore::open(storage.clone())?,
            routes: RouteTable::portal(),
            storage,
        };
        info!(
            "event=portal_open module=portal status=ok tasks={} employees={} managers={}",
            state.tasks.tasks().len(),
            state.employees.employees().len(),
            state.managers.managers().len()
        );
        Ok(state)
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Resolves `path` against the current session.
    pub fn navigate(&self, path: &str) -> Navigation {
        self.routes.navigate(self.session.session(), path)
    }

    pub fn storage(&self) -> &SharedStorage {
        &self.storage
    }
}

#[derive(Debug)]
pub enum PortalError {
    Storage(StorageError),
    Repo(RepoError),
    Fixtures(FixtureError),
}

impl Display for PortalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "session storage unavailable: {err}"),
            Self::Repo(err) => write!(f, "store restore failed: {err}"),
            Self::Fixtures(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PortalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::Fixtures(err) => Some(err),
        }
    }
}

impl From<StorageError> for PortalError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<RepoError> for PortalError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<FixtureError> for PortalError {
    fn from(value: FixtureError) -> Self {
        Self::Fixtures(value)
    }
}
