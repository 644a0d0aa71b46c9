//! Generic JSON-snapshotted collection.

use crate::model::RecordId;
use crate::storage::{SharedStorage, StorageError};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// A record that can live in a `Collection`.
pub trait Record: Clone + Serialize + DeserializeOwned {
    fn id(&self) -> RecordId;
}

#[derive(Debug)]
pub enum RepoError {
    Storage(StorageError),
    Serialization(serde_json::Error),
    NotFound(RecordId),
    DuplicateId(RecordId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Serialization(err) => write!(f, "snapshot serialization failed: {err}"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::DuplicateId(id) => write!(f, "record id already exists: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Serialization(err) => Some(err),
            Self::NotFound(_) | Self::DuplicateId(_) => None,
        }
    }
}

impl From<StorageError> for RepoError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value)
    }
}

/// Ordered records persisted under one storage key.
pub struct Collection<T: Record> {
    key: &'static str,
    storage: SharedStorage,
    items: Vec<T>,
    revision: u64,
}

impl<T: Record> Collection<T> {
    /// Restores the collection stored under `key`.
    ///
    /// A missing or unreadable snapshot yields an empty collection; only
    /// storage transport failures are returned as errors.
    pub fn load(storage: SharedStorage, key: &'static str) -> RepoResult<Self> {
        let items = match storage.get_item(key)? {
            Some(raw) => match serde_json::from_str::<Vec<T>>(&raw) {
                Ok(items) => items,
                Err(err) => {
                    warn!(
                        "event=snapshot_restore module=repo status=error key={key} error_code=snapshot_corrupt error={err}"
                    );
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        debug!(
            "event=snapshot_restore module=repo status=ok key={key} count={}",
            items.len()
        );

        Ok(Self {
            key,
            storage,
            items,
            revision: 0,
        })
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Monotonic counter bumped by every successful mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Linear scan returning owned matches in collection order.
    pub fn filter(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.items
            .iter()
            .filter(|item| predicate(*item))
            .cloned()
            .collect()
    }

    /// Appends `item`; rejects an id that is already present.
    pub fn insert(&mut self, item: T) -> RepoResult<()> {
        let id = item.id();
        if self.get(id).is_some() {
            return Err(RepoError::DuplicateId(id));
        }
        let mut next = self.items.clone();
        next.push(item);
        self.commit(next)
    }

    /// Applies `mutate` to the record with `id` and returns the new record.
    ///
    /// `mutate` may reject the change; the collection then stays untouched.
    pub fn update<E>(
        &mut self,
        id: RecordId,
        mutate: impl FnOnce(&mut T) -> Result<(), E>,
    ) -> Result<T, E>
    where
        E: From<RepoError>,
    {
        let index = self.position(id).ok_or(RepoError::NotFound(id))?;
        let mut next = self.items.clone();
        mutate(&mut next[index])?;
        let updated = next[index].clone();
        self.commit(next)?;
        Ok(updated)
    }

    /// Applies `mutate` to every record matching `predicate`.
    ///
    /// Returns the number of records changed. Writes nothing when no record
    /// matches.
    pub fn update_where(
        &mut self,
        predicate: impl Fn(&T) -> bool,
        mutate: impl Fn(&mut T),
    ) -> RepoResult<usize> {
        let mut next = self.items.clone();
        let mut changed = 0;
        for item in next.iter_mut().filter(|item| predicate(&**item)) {
            mutate(item);
            changed += 1;
        }
        if changed > 0 {
            self.commit(next)?;
        }
        Ok(changed)
    }

    /// Removes and returns the record with `id`.
    pub fn remove(&mut self, id: RecordId) -> RepoResult<T> {
        let index = self.position(id).ok_or(RepoError::NotFound(id))?;
        let mut next = self.items.clone();
        let removed = next.remove(index);
        self.commit(next)?;
        Ok(removed)
    }

    /// Removes every record matching `predicate`; returns how many went.
    pub fn remove_where(&mut self, predicate: impl Fn(&T) -> bool) -> RepoResult<usize> {
        let next: Vec<T> = self
            .items
            .iter()
            .filter(|item| !predicate(*item))
            .cloned()
            .collect();
        let removed = self.items.len() - next.len();
        if removed > 0 {
            self.commit(next)?;
        }
        Ok(removed)
    }

    fn position(&self, id: RecordId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    fn commit(&mut self, next: Vec<T>) -> RepoResult<()> {
        let snapshot = serde_json::to_string(&next)?;
        self.storage.set_item(self.key, &snapshot)?;
        self.items = next;
        self.revision += 1;
        Ok(())
    }
}
