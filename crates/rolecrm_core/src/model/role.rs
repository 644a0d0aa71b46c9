//! Portal roles and their navigation anchors.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Portal role; gates route access and dashboard selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Employee,
    Manager,
    Admin,
    Superadmin,
}

/// Wire value for the employee role.
pub const ROLE_EMPLOYEE: &str = "employee";
/// Wire value for the manager role.
pub const ROLE_MANAGER: &str = "manager";
/// Wire value for the admin role.
pub const ROLE_ADMIN: &str = "admin";
/// Wire value for the superadmin role.
pub const ROLE_SUPERADMIN: &str = "superadmin";

const SUPPORTED_ROLE_STRINGS: &[&str] = &[ROLE_EMPLOYEE, ROLE_MANAGER, ROLE_ADMIN, ROLE_SUPERADMIN];

impl Role {
    /// Every role, in portal order.
    pub const ALL: [Role; 4] = [Self::Employee, Self::Manager, Self::Admin, Self::Superadmin];

    /// Stable lowercase id used in storage and URLs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Employee => ROLE_EMPLOYEE,
            Self::Manager => ROLE_MANAGER,
            Self::Admin => ROLE_ADMIN,
            Self::Superadmin => ROLE_SUPERADMIN,
        }
    }

    /// Root of the role's route subtree, e.g. `/manager`.
    pub fn base_path(self) -> &'static str {
        match self {
            Self::Employee => "/employee",
            Self::Manager => "/manager",
            Self::Admin => "/admin",
            Self::Superadmin => "/superadmin",
        }
    }

    /// Public login page for this role.
    pub fn login_path(self) -> &'static str {
        match self {
            Self::Employee => "/employee/login",
            Self::Manager => "/manager/login",
            Self::Admin => "/admin/login",
            Self::Superadmin => "/superadmin/login",
        }
    }

    /// Dashboard root the role lands on after login.
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Self::Employee => "/employee/dashboard",
            Self::Manager => "/manager/dashboard",
            Self::Admin => "/admin/dashboard",
            Self::Superadmin => "/superadmin/dashboard",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns supported role strings.
pub fn supported_role_strings() -> &'static [&'static str] {
    SUPPORTED_ROLE_STRINGS
}

/// Parses one role from its lowercase wire value.
///
/// Surrounding whitespace is ignored; casing is not.
pub fn parse_role(value: &str) -> Result<Role, RoleParseError> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(RoleParseError::EmptyRole);
    }

    match normalized {
        ROLE_EMPLOYEE => Ok(Role::Employee),
        ROLE_MANAGER => Ok(Role::Manager),
        ROLE_ADMIN => Ok(Role::Admin),
        ROLE_SUPERADMIN => Ok(Role::Superadmin),
        other => Err(RoleParseError::UnsupportedRole(other.to_string())),
    }
}

/// Role parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleParseError {
    EmptyRole,
    UnsupportedRole(String),
}

impl Display for RoleParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyRole => write!(f, "role value must not be empty"),
            Self::UnsupportedRole(value) => write!(
                f,
                "role is unsupported: {value}; expected {}",
                supported_role_strings().join("|")
            ),
        }
    }
}

impl Error for RoleParseError {}
