use super::{SessionStorage, SharedStorage, StorageError, StorageResult};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Process-local storage; contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    items: Mutex<BTreeMap<String, String>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor returning a shareable handle.
    pub fn shared() -> SharedStorage {
        Arc::new(Self::new())
    }

    fn items(&self) -> StorageResult<MutexGuard<'_, BTreeMap<String, String>>> {
        self.items
            .lock()
            .map_err(|_| StorageError::Poisoned("memory"))
    }
}

impl SessionStorage for MemorySessionStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.items()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        self.items()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        self.items()?.remove(key);
        Ok(())
    }

    fn clear(&self) -> StorageResult<()> {
        self.items()?.clear();
        Ok(())
    }

    fn keys(&self) -> StorageResult<Vec<String>> {
        Ok(self.items()?.keys().cloned().collect())
    }
}
