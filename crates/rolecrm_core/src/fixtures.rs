//! Static login credentials standing in for an auth backend.
//!
//! # Invariants
//! - At most one record per role.
//! - Passwords are compared verbatim and never logged.

use crate::model::role::Role;
use crate::model::session::UserProfile;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

const BUILTIN_CREDENTIALS_JSON: &str = include_str!("../fixtures/credentials.json");

/// One login record for a portal role.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct CredentialRecord {
    pub role: Role,
    pub email: String,
    pub password: String,
    pub user: UserProfile,
}

impl CredentialRecord {
    /// Exact, case-sensitive match on both fields.
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}

impl Debug for CredentialRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialRecord")
            .field("role", &self.role)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("user", &self.user)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialFixtures {
    records: Vec<CredentialRecord>,
}

impl CredentialFixtures {
    /// Credentials compiled into the crate.
    pub fn builtin() -> Result<Self, FixtureError> {
        Self::from_json_str(BUILTIN_CREDENTIALS_JSON)
    }

    /// Parses a JSON array of credential records.
    pub fn from_json_str(raw: &str) -> Result<Self, FixtureError> {
        let records: Vec<CredentialRecord> = serde_json::from_str(raw)?;
        Self::from_records(records)
    }

    pub fn from_records(records: Vec<CredentialRecord>) -> Result<Self, FixtureError> {
        let mut seen = BTreeSet::new();
        for record in &records {
            if !seen.insert(record.role) {
                return Err(FixtureError::DuplicateRole(record.role));
            }
        }
        Ok(Self { records })
    }

    pub fn for_role(&self, role: Role) -> Option<&CredentialRecord> {
        self.records.iter().find(|record| record.role == role)
    }

    pub fn records(&self) -> &[CredentialRecord] {
        &self.records
    }
}

#[derive(Debug)]
pub enum FixtureError {
    Parse(serde_json::Error),
    DuplicateRole(Role),
}

impl Display for FixtureError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid credential fixtures: {err}"),
            Self::DuplicateRole(role) => {
                write!(f, "credential fixtures declare role `{role}` more than once")
            }
        }
    }
}

impl Error for FixtureError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::DuplicateRole(_) => None,
        }
    }
}

impl From<serde_json::Error> for FixtureError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}
