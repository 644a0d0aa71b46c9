//! Session store and per-entity domain stores.
//!
//! # Responsibility
//! - Expose use-case level mutators and derived queries per entity.
//! - Keep every store independent: no cross-store transactions.
//!
//! # Invariants
//! - Each store persists under its own storage key.
//! - A failed mutation leaves the store unchanged.

use crate::model::{RecordId, ValidationError};
use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod employee_store;
pub mod manager_store;
pub mod note_store;
pub mod notification_store;
pub mod schedule_store;
pub mod session_store;
pub mod task_store;

pub const SESSION_STORAGE_KEY: &str = "auth-storage";
pub const TASK_STORAGE_KEY: &str = "task-storage";
pub const EMPLOYEE_STORAGE_KEY: &str = "employee-storage";
pub const MANAGER_STORAGE_KEY: &str = "manager-storage";
pub const NOTE_STORAGE_KEY: &str = "note-storage";
pub const NOTIFICATION_STORAGE_KEY: &str = "notification-storage";
pub const SCHEDULE_STORAGE_KEY: &str = "schedule-storage";

pub type StoreResult<T> = Result<T, StoreError>;

/// Error returned by domain store mutators.
#[derive(Debug)]
pub enum StoreError {
    /// Record-level validation rejected the input.
    Validation(ValidationError),
    /// Target record does not exist.
    NotFound(RecordId),
    /// Directory already holds the configured number of employees.
    EmployeeLimitReached { limit: usize },
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::EmployeeLimitReached { limit } => {
                write!(f, "employee limit reached: at most {limit} employees allowed")
            }
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::NotFound(_) | Self::EmployeeLimitReached { .. } => None,
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NotFound(id),
            other => Self::Repo(other),
        }
    }
}
