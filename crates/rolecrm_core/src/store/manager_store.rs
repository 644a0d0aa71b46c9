//! Manager directory store.

use crate::model::employee::{Manager, ManagerPatch, NewManager};
use crate::model::{new_record_id, RecordId};
use crate::repo::{Collection, Record, RepoResult};
use crate::storage::SharedStorage;
use crate::store::{StoreError, StoreResult, MANAGER_STORAGE_KEY};
use log::info;

impl Record for Manager {
    fn id(&self) -> RecordId {
        self.id
    }
}

pub struct ManagerStore {
    managers: Collection<Manager>,
}

impl ManagerStore {
    pub fn open(storage: SharedStorage) -> RepoResult<Self> {
        Ok(Self {
            managers: Collection::load(storage, MANAGER_STORAGE_KEY)?,
        })
    }

    pub fn managers(&self) -> &[Manager] {
        self.managers.items()
    }

    pub fn get_manager(&self, id: RecordId) -> Option<&Manager> {
        self.managers.get(id)
    }

    pub fn revision(&self) -> u64 {
        self.managers.revision()
    }

    pub fn add_manager(&mut self, request: NewManager) -> StoreResult<Manager> {
        let manager = request.into_manager(new_record_id());
        manager.validate()?;
        self.managers.insert(manager.clone())?;
        info!(
            "event=manager_add module=manager status=ok manager_id={}",
            manager.id
        );
        Ok(manager)
    }

    pub fn update_manager(&mut self, id: RecordId, patch: ManagerPatch) -> StoreResult<Manager> {
        self.managers.update(id, |manager| {
            patch.apply_to(manager);
            manager.validate().map_err(StoreError::from)
        })
    }

    /// Removes the manager record only; employees keep their `managerId`.
    pub fn delete_manager(&mut self, id: RecordId) -> StoreResult<Manager> {
        let removed = self.managers.remove(id)?;
        info!("event=manager_delete module=manager status=ok manager_id={id}");
        Ok(removed)
    }
}
