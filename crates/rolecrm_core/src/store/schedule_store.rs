//! Calendar store backing the portal schedule views.

use crate::model::schedule::{NewScheduleEvent, ScheduleEvent, SchedulePatch};
use crate::model::{new_record_id, RecordId};
use crate::repo::{Collection, Record, RepoResult};
use crate::storage::SharedStorage;
use crate::store::{StoreError, StoreResult, SCHEDULE_STORAGE_KEY};
use log::info;

impl Record for ScheduleEvent {
    fn id(&self) -> RecordId {
        self.id
    }
}

pub struct ScheduleStore {
    events: Collection<ScheduleEvent>,
}

impl ScheduleStore {
    pub fn open(storage: SharedStorage) -> RepoResult<Self> {
        Ok(Self {
            events: Collection::load(storage, SCHEDULE_STORAGE_KEY)?,
        })
    }

    pub fn events(&self) -> &[ScheduleEvent] {
        self.events.items()
    }

    pub fn get_event(&self, id: RecordId) -> Option<&ScheduleEvent> {
        self.events.get(id)
    }

    pub fn revision(&self) -> u64 {
        self.events.revision()
    }

    pub fn add_event(&mut self, request: NewScheduleEvent) -> StoreResult<ScheduleEvent> {
        let event = request.into_event(new_record_id());
        event.validate()?;
        self.events.insert(event.clone())?;
        info!(
            "event=schedule_add module=schedule status=ok event_id={}",
            event.id
        );
        Ok(event)
    }

    pub fn update_event(&mut self, id: RecordId, patch: SchedulePatch) -> StoreResult<ScheduleEvent> {
        self.events.update(id, |event| {
            patch.apply_to(event);
            event.validate().map_err(StoreError::from)
        })
    }

    pub fn delete_event(&mut self, id: RecordId) -> StoreResult<ScheduleEvent> {
        Ok(self.events.remove(id)?)
    }

    /// Events of `user_id` ordered by start time.
    pub fn events_for_user(&self, user_id: RecordId) -> Vec<ScheduleEvent> {
        let mut events = self.events.filter(|event| event.user_id == user_id);
        events.sort_by_key(|event| event.start_at);
        events
    }

    /// Events of `user_id` overlapping the closed window `[from, to]`.
    pub fn events_between(&self, user_id: RecordId, from: i64, to: i64) -> Vec<ScheduleEvent> {
        let mut events = self.events_for_user(user_id);
        events.retain(|event| event.overlaps(from, to));
        events
    }
}
