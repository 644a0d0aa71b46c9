//! Calendar entries shown on portal schedules.
//!
//! # Invariants
//! - `end_at` should not be earlier than `start_at` when both are set.
//! - Title must not be blank.

use crate::model::{require_text, RecordId, ValidationError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEvent {
    pub id: RecordId,
    pub user_id: RecordId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Epoch milliseconds.
    pub start_at: i64,
    /// Epoch milliseconds; `None` for point events.
    pub end_at: Option<i64>,
    pub location: Option<String>,
}

impl ScheduleEvent {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("title", &self.title)?;
        if let Some(end) = self.end_at {
            if end < self.start_at {
                return Err(ValidationError::InvalidTimeRange {
                    start: self.start_at,
                    end,
                });
            }
        }
        Ok(())
    }

    /// Effective end used for overlap checks.
    pub fn effective_end(&self) -> i64 {
        self.end_at.unwrap_or(self.start_at)
    }

    /// Whether the event overlaps the closed window `[from, to]`.
    pub fn overlaps(&self, from: i64, to: i64) -> bool {
        self.start_at <= to && self.effective_end() >= from
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewScheduleEvent {
    pub user_id: RecordId,
    pub title: String,
    pub description: String,
    pub start_at: i64,
    pub end_at: Option<i64>,
    pub location: Option<String>,
}

impl NewScheduleEvent {
    pub fn into_event(self, id: RecordId) -> ScheduleEvent {
        ScheduleEvent {
            id,
            user_id: self.user_id,
            title: self.title,
            description: self.description,
            start_at: self.start_at,
            end_at: self.end_at,
            location: self.location,
        }
    }
}

/// Shallow-merge patch for `ScheduleEvent`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchedulePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_at: Option<i64>,
    pub end_at: Option<Option<i64>>,
    pub location: Option<Option<String>>,
}

impl SchedulePatch {
    pub fn apply_to(self, event: &mut ScheduleEvent) {
        if let Some(title) = self.title {
            event.title = title;
        }
        if let Some(description) = self.description {
            event.description = description;
        }
        if let Some(start_at) = self.start_at {
            event.start_at = start_at;
        }
        if let Some(end_at) = self.end_at {
            event.end_at = end_at;
        }
        if let Some(location) = self.location {
            event.location = location;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NewScheduleEvent;
    use crate::model::ValidationError;
    use uuid::Uuid;

    fn event(start_at: i64, end_at: Option<i64>) -> super::ScheduleEvent {
        NewScheduleEvent {
            user_id: Uuid::new_v4(),
            title: "standup".to_string(),
            start_at,
            end_at,
            ..NewScheduleEvent::default()
        }
        .into_event(Uuid::new_v4())
    }

    #[test]
    fn reversed_range_is_rejected() {
        assert_eq!(
            event(300, Some(100)).validate(),
            Err(ValidationError::InvalidTimeRange {
                start: 300,
                end: 100
            })
        );
        assert!(event(100, Some(100)).validate().is_ok());
    }

    #[test]
    fn point_event_overlaps_window_containing_start() {
        let point = event(50, None);
        assert!(point.overlaps(0, 50));
        assert!(!point.overlaps(51, 100));
    }
}
