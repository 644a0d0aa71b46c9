//! Task record, activity trail and shallow-merge patch.
//!
//! # Invariants
//! - `activity` is append-only; events are never rewritten.
//! - `completed_at` is set iff `status == Completed` after a status change.
//! - Title must not be blank.

use crate::model::{now_epoch_ms, require_text, RecordId, ValidationError};
use serde::{Deserialize, Serialize};

/// Task lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    Overdue,
}

impl TaskStatus {
    /// Stable snake_case id, same as the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Overdue => "overdue",
        }
    }

    /// Whether no further work is expected.
    pub fn is_closed(self) -> bool {
        matches!(self, Self::Completed)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TaskPriority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Kind of change recorded in a task's activity trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskAction {
    Created,
    Updated,
    Assigned,
    Delegated,
    StatusChanged,
    Completed,
}

/// One entry in a task's activity trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskActivity {
    /// Epoch milliseconds.
    pub at: i64,
    pub action: TaskAction,
    /// User who triggered the change, when known.
    pub actor: Option<RecordId>,
    pub detail: Option<String>,
}

impl TaskActivity {
    pub fn now(action: TaskAction, actor: Option<RecordId>, detail: Option<String>) -> Self {
        Self {
            at: now_epoch_ms(),
            action,
            actor,
            detail,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: TaskPriority,
    /// Employee ids working on the task.
    #[serde(default)]
    pub assigned_to: Vec<RecordId>,
    pub assigned_to_manager: Option<RecordId>,
    pub delegated_by: Option<RecordId>,
    /// Epoch milliseconds.
    pub deadline: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
    pub completed_at: Option<i64>,
    #[serde(default)]
    pub activity: Vec<TaskActivity>,
}

impl Task {
    /// Validates record-level invariants.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("title", &self.title)
    }

    /// Whether `employee_id` is one of the assignees.
    pub fn is_assigned_to(&self, employee_id: RecordId) -> bool {
        self.assigned_to.contains(&employee_id)
    }

    /// Open task whose deadline has passed at `now`.
    pub fn is_past_deadline(&self, now: i64) -> bool {
        !self.status.is_closed() && self.deadline.is_some_and(|deadline| deadline < now)
    }

    pub(crate) fn record(&mut self, activity: TaskActivity) {
        self.updated_at = activity.at;
        self.activity.push(activity);
    }

    pub(crate) fn set_status(&mut self, status: TaskStatus, at: i64) {
        self.status = status;
        self.completed_at = if status == TaskStatus::Completed {
            Some(at)
        } else {
            None
        };
    }
}

/// Input for creating a task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub priority: TaskPriority,
    pub assigned_to: Vec<RecordId>,
    pub assigned_to_manager: Option<RecordId>,
    pub deadline: Option<i64>,
    /// Creator recorded on the `created` activity.
    pub created_by: Option<RecordId>,
}

impl NewTask {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Builds a pending task with a fresh id and a `created` activity.
    pub fn into_task(self, id: RecordId) -> Task {
        let created = TaskActivity::now(TaskAction::Created, self.created_by, None);
        Task {
            id,
            title: self.title,
            description: self.description,
            status: TaskStatus::Pending,
            priority: self.priority,
            assigned_to: self.assigned_to,
            assigned_to_manager: self.assigned_to_manager,
            delegated_by: None,
            deadline: self.deadline,
            created_at: created.at,
            updated_at: created.at,
            completed_at: None,
            activity: vec![created],
        }
    }
}

/// Shallow-merge patch for `Task`.
///
/// `None` leaves a field untouched. Nullable fields use `Some(None)` to clear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub assigned_to: Option<Vec<RecordId>>,
    pub assigned_to_manager: Option<Option<RecordId>>,
    pub delegated_by: Option<Option<RecordId>>,
    pub deadline: Option<Option<i64>>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Names of the fields this patch sets, for activity details.
    pub fn field_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.title.is_some() {
            names.push("title");
        }
        if self.description.is_some() {
            names.push("description");
        }
        if self.status.is_some() {
            names.push("status");
        }
        if self.priority.is_some() {
            names.push("priority");
        }
        if self.assigned_to.is_some() {
            names.push("assignedTo");
        }
        if self.assigned_to_manager.is_some() {
            names.push("assignedToManager");
        }
        if self.delegated_by.is_some() {
            names.push("delegatedBy");
        }
        if self.deadline.is_some() {
            names.push("deadline");
        }
        names
    }

    /// Merges the set fields into `task`.
    pub fn apply_to(self, task: &mut Task, at: i64) {
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(description) = self.description {
            task.description = description;
        }
        if let Some(status) = self.status {
            task.set_status(status, at);
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(assigned_to) = self.assigned_to {
            task.assigned_to = assigned_to;
        }
        if let Some(manager) = self.assigned_to_manager {
            task.assigned_to_manager = manager;
        }
        if let Some(delegated_by) = self.delegated_by {
            task.delegated_by = delegated_by;
        }
        if let Some(deadline) = self.deadline {
            task.deadline = deadline;
        }
    }
}
