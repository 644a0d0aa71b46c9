//! Portal domain records shared by stores, guard and FFI callers.
//!
//! # Responsibility
//! - Define the serialized shapes persisted in session storage.
//! - Own record-level validation rules and id generation.
//!
//! # Invariants
//! - Every record is identified by a `RecordId` generated from UUID v4, so
//!   ids created in a tight loop never collide.
//! - All records serialize with camelCase field names.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

pub mod employee;
pub mod note;
pub mod notification;
pub mod role;
pub mod schedule;
pub mod session;
pub mod task;

/// Stable identifier for every persisted portal record.
pub type RecordId = Uuid;

/// Generates a fresh record id.
pub fn new_record_id() -> RecordId {
    Uuid::new_v4()
}

/// Current wall-clock time in epoch milliseconds.
///
/// Falls back to `0` if the system clock is before the unix epoch.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

/// Record-level validation failures raised before any state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field is empty after trimming.
    BlankField(&'static str),
    /// Email does not look like `local@domain.tld`.
    InvalidEmail(String),
    /// Range end precedes range start.
    InvalidTimeRange { start: i64, end: i64 },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankField(field) => write!(f, "{field} must not be blank"),
            Self::InvalidEmail(value) => write!(f, "invalid email address: `{value}`"),
            Self::InvalidTimeRange { start, end } => {
                write!(f, "endAt ({end}) must be >= startAt ({start})")
            }
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::BlankField(field));
    }
    Ok(())
}
