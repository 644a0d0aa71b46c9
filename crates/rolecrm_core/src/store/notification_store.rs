//! Per-user in-app notifications.

use crate::model::notification::{NewNotification, Notification};
use crate::model::{new_record_id, RecordId};
use crate::repo::{Collection, Record, RepoResult};
use crate::storage::SharedStorage;
use crate::store::{StoreError, StoreResult, NOTIFICATION_STORAGE_KEY};
use log::{debug, info};
use std::cmp::Reverse;

impl Record for Notification {
    fn id(&self) -> RecordId {
        self.id
    }
}

pub struct NotificationStore {
    notifications: Collection<Notification>,
}

impl NotificationStore {
    pub fn open(storage: SharedStorage) -> RepoResult<Self> {
        Ok(Self {
            notifications: Collection::load(storage, NOTIFICATION_STORAGE_KEY)?,
        })
    }

    pub fn notifications(&self) -> &[Notification] {
        self.notifications.items()
    }

    pub fn revision(&self) -> u64 {
        self.notifications.revision()
    }

    pub fn push(&mut self, request: NewNotification) -> StoreResult<Notification> {
        let notification = request.into_notification(new_record_id());
        notification.validate()?;
        self.notifications.insert(notification.clone())?;
        info!(
            "event=notification_push module=notification status=ok notification_id={}",
            notification.id
        );
        Ok(notification)
    }

    pub fn mark_read(&mut self, id: RecordId) -> StoreResult<Notification> {
        self.notifications.update(id, |notification| {
            notification.read = true;
            Ok::<(), StoreError>(())
        })
    }

    /// Marks every unread notification of `user_id`; returns how many changed.
    pub fn mark_all_read(&mut self, user_id: RecordId) -> StoreResult<usize> {
        let changed = self.notifications.update_where(
            |notification| notification.user_id == user_id && !notification.read,
            |notification| notification.read = true,
        )?;
        debug!("event=notification_mark_all module=notification status=ok changed={changed}");
        Ok(changed)
    }

    pub fn delete_notification(&mut self, id: RecordId) -> StoreResult<Notification> {
        Ok(self.notifications.remove(id)?)
    }

    /// Drops every notification addressed to `user_id`.
    pub fn clear_for_user(&mut self, user_id: RecordId) -> StoreResult<usize> {
        Ok(self
            .notifications
            .remove_where(|notification| notification.user_id == user_id)?)
    }

    /// Newest first.
    pub fn notifications_for_user(&self, user_id: RecordId) -> Vec<Notification> {
        let mut items = self
            .notifications
            .filter(|notification| notification.user_id == user_id);
        items.sort_by_key(|notification| Reverse(notification.created_at));
        items
    }

    pub fn unread_for_user(&self, user_id: RecordId) -> Vec<Notification> {
        let mut items = self.notifications_for_user(user_id);
        items.retain(|notification| !notification.read);
        items
    }

    pub fn unread_count(&self, user_id: RecordId) -> usize {
        self.notifications
            .items()
            .iter()
            .filter(|notification| notification.user_id == user_id && !notification.read)
            .count()
    }
}
