//! Employee and manager directory records.
//!
//! # Invariants
//! - `Employee::manager_id` is a plain back-reference; nothing checks that
//!   the manager exists or cascades when it is removed.
//! - Names are non-blank and emails look like `local@domain.tld`.

use crate::model::{now_epoch_ms, require_text, RecordId, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

/// Checks the loose email shape accepted by the directory.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if EMAIL_RE.is_match(email.trim()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail(email.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    #[default]
    Active,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub department: Option<String>,
    pub position: Option<String>,
    pub manager_id: Option<RecordId>,
    #[serde(default)]
    pub status: EmploymentStatus,
    pub joined_at: i64,
}

impl Employee {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)?;
        validate_email(&self.email)
    }
}

/// Input for adding an employee.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub department: Option<String>,
    pub position: Option<String>,
    pub manager_id: Option<RecordId>,
}

impl NewEmployee {
    pub fn into_employee(self, id: RecordId) -> Employee {
        Employee {
            id,
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            department: self.department,
            position: self.position,
            manager_id: self.manager_id,
            status: EmploymentStatus::Active,
            joined_at: now_epoch_ms(),
        }
    }
}

/// Shallow-merge patch for `Employee`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<Option<String>>,
    pub position: Option<Option<String>>,
    pub manager_id: Option<Option<RecordId>>,
    pub status: Option<EmploymentStatus>,
}

impl EmployeePatch {
    pub fn apply_to(self, employee: &mut Employee) {
        if let Some(name) = self.name {
            employee.name = name;
        }
        if let Some(email) = self.email {
            employee.email = email;
        }
        if let Some(department) = self.department {
            employee.department = department;
        }
        if let Some(position) = self.position {
            employee.position = position;
        }
        if let Some(manager_id) = self.manager_id {
            employee.manager_id = manager_id;
        }
        if let Some(status) = self.status {
            employee.status = status;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manager {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub department: Option<String>,
    pub created_at: i64,
}

impl Manager {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)?;
        validate_email(&self.email)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewManager {
    pub name: String,
    pub email: String,
    pub department: Option<String>,
}

impl NewManager {
    pub fn into_manager(self, id: RecordId) -> Manager {
        Manager {
            id,
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            department: self.department,
            created_at: now_epoch_ms(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManagerPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<Option<String>>,
}

impl ManagerPatch {
    pub fn apply_to(self, manager: &mut Manager) {
        if let Some(name) = self.name {
            manager.name = name;
        }
        if let Some(email) = self.email {
            manager.email = email;
        }
        if let Some(department) = self.department {
            manager.department = department;
        }
    }
}
