//! Personal notes store.
//!
//! # Invariants
//! - `notes_for_user` returns pinned notes first, then most recently updated.
//! - Previews are recomputed whenever content changes.

use crate::model::note::{Note, NotePatch};
use crate::model::{new_record_id, now_epoch_ms, RecordId};
use crate::repo::{Collection, Record, RepoResult};
use crate::storage::SharedStorage;
use crate::store::{StoreError, StoreResult, NOTE_STORAGE_KEY};
use log::info;
use std::cmp::Reverse;

impl Record for Note {
    fn id(&self) -> RecordId {
        self.id
    }
}

pub struct NoteStore {
    notes: Collection<Note>,
}

impl NoteStore {
    pub fn open(storage: SharedStorage) -> RepoResult<Self> {
        Ok(Self {
            notes: Collection::load(storage, NOTE_STORAGE_KEY)?,
        })
    }

    pub fn notes(&self) -> &[Note] {
        self.notes.items()
    }

    pub fn get_note(&self, id: RecordId) -> Option<&Note> {
        self.notes.get(id)
    }

    pub fn revision(&self) -> u64 {
        self.notes.revision()
    }

    pub fn add_note(
        &mut self,
        user_id: RecordId,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> StoreResult<Note> {
        let note = Note::new(new_record_id(), user_id, title, content);
        note.validate()?;
        self.notes.insert(note.clone())?;
        info!("event=note_add module=note status=ok note_id={}", note.id);
        Ok(note)
    }

    pub fn update_note(&mut self, id: RecordId, patch: NotePatch) -> StoreResult<Note> {
        self.notes.update(id, |note| {
            patch.apply_to(note, now_epoch_ms());
            note.validate().map_err(StoreError::from)
        })
    }

    pub fn toggle_pin(&mut self, id: RecordId) -> StoreResult<Note> {
        self.notes.update(id, |note| {
            let pinned = !note.pinned;
            NotePatch {
                pinned: Some(pinned),
                ..NotePatch::default()
            }
            .apply_to(note, now_epoch_ms());
            Ok::<(), StoreError>(())
        })
    }

    pub fn delete_note(&mut self, id: RecordId) -> StoreResult<Note> {
        let removed = self.notes.remove(id)?;
        info!("event=note_delete module=note status=ok note_id={id}");
        Ok(removed)
    }

    pub fn notes_for_user(&self, user_id: RecordId) -> Vec<Note> {
        let mut notes = self.notes.filter(|note| note.user_id == user_id);
        notes.sort_by_key(|note| (Reverse(note.pinned), Reverse(note.updated_at)));
        notes
    }
}
