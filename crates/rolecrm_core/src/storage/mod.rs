//! Session-scoped key-value storage.
//!
//! # Responsibility
//! - Define the `SessionStorage` contract every store persists through.
//! - Provide in-memory and SQLite-backed implementations.
//!
//! # Invariants
//! - Values are opaque UTF-8 strings (JSON snapshots in practice).
//! - `set_item` fully replaces any previous value for the key.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

mod memory;
mod sqlite;

pub use memory::MemorySessionStorage;
pub use sqlite::SqliteSessionStorage;

pub type StorageResult<T> = Result<T, StorageError>;

/// Shared handle used by every store opened over the same session.
pub type SharedStorage = Arc<dyn SessionStorage + Send + Sync>;

/// Key-value contract mirroring browser session storage.
pub trait SessionStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;
    fn remove_item(&self, key: &str) -> StorageResult<()>;
    /// Drops every key of the session.
    fn clear(&self) -> StorageResult<()>;
    /// Lists stored keys in ascending order.
    fn keys(&self) -> StorageResult<Vec<String>>;
}

#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
    /// A lock guarding the backend was poisoned by a panicking writer.
    Poisoned(&'static str),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Poisoned(backend) => write!(f, "{backend} storage lock poisoned"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Poisoned(_) => None,
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
