//! Core domain logic for the RoleCRM portals.
//! This crate is the single source of truth for session, store and routing
//! invariants; UI shells only call into it.

pub mod config;
pub mod db;
pub mod fixtures;
pub mod guard;
pub mod logging;
pub mod model;
pub mod portal;
pub mod repo;
pub mod storage;
pub mod store;

pub use config::{ConfigError, PortalConfig};
pub use fixtures::{CredentialFixtures, CredentialRecord, FixtureError};
pub use guard::{guard_route, GuardDecision, Navigation, RouteAccess, RouteTable};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingStatus};
pub use model::employee::{
    Employee, EmployeePatch, EmploymentStatus, Manager, ManagerPatch, NewEmployee, NewManager,
};
pub use model::note::{Note, NotePatch};
pub use model::notification::{NewNotification, Notification, NotificationKind};
pub use model::role::{parse_role, Role, RoleParseError};
pub use model::schedule::{NewScheduleEvent, ScheduleEvent, SchedulePatch};
pub use model::session::{Session, UserProfile};
pub use model::task::{NewTask, Task, TaskAction, TaskActivity, TaskPatch, TaskPriority, TaskStatus};
pub use model::{RecordId, ValidationError};
pub use portal::{PortalError, PortalState};
pub use repo::{Collection, Record, RepoError, RepoResult};
pub use storage::{
    MemorySessionStorage, SessionStorage, SharedStorage, SqliteSessionStorage, StorageError,
};
pub use store::employee_store::EmployeeStore;
pub use store::manager_store::ManagerStore;
pub use store::note_store::NoteStore;
pub use store::notification_store::NotificationStore;
pub use store::schedule_store::ScheduleStore;
pub use store::session_store::SessionStore;
pub use store::task_store::TaskStore;
pub use store::{StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
