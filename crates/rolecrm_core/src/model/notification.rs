//! In-app notification record.

use crate::model::{now_epoch_ms, require_text, RecordId, ValidationError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
    /// Raised for task assignment and delegation.
    Task,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: RecordId,
    /// Recipient.
    pub user_id: RecordId,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub kind: NotificationKind,
    #[serde(default)]
    pub read: bool,
    pub created_at: i64,
    pub task_id: Option<RecordId>,
}

impl Notification {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("title", &self.title)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewNotification {
    pub user_id: RecordId,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub task_id: Option<RecordId>,
}

impl NewNotification {
    pub fn into_notification(self, id: RecordId) -> Notification {
        Notification {
            id,
            user_id: self.user_id,
            title: self.title,
            message: self.message,
            kind: self.kind,
            read: false,
            created_at: now_epoch_ms(),
            task_id: self.task_id,
        }
    }
}
