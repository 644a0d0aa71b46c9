//! Portal route table.

use super::{guard_route, GuardDecision};
use crate::model::role::Role;
use crate::model::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    Protected(Role),
}

/// Result of resolving a navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Render,
    Redirect(String),
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RouteEntry {
    path: String,
    access: RouteAccess,
    /// Matches nested paths below `path` too (e.g. `/tasks/{id}`).
    nested: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The four portals: `/` and each `/{role}/login` public, everything
    /// else under `/{role}` protected by that role.
    pub fn portal() -> Self {
        Role::ALL
            .into_iter()
            .fold(Self::new().public("/"), |table, role| {
                table
                    .protected(role.base_path(), role)
                    .public(role.login_path())
            })
    }

    /// Registers an exact public path.
    pub fn public(mut self, path: &str) -> Self {
        self.routes.push(RouteEntry {
            path: normalize_path(path),
            access: RouteAccess::Public,
            nested: false,
        });
        self
    }

    /// Registers a path, and everything below it, for `role`.
    pub fn protected(mut self, path: &str, role: Role) -> Self {
        self.routes.push(RouteEntry {
            path: normalize_path(path),
            access: RouteAccess::Protected(role),
            nested: true,
        });
        self
    }

    /// Access rule for `path`; the longest matching entry wins.
    pub fn access_for(&self, path: &str) -> Option<RouteAccess> {
        let target = normalize_path(path);
        self.routes
            .iter()
            .filter(|entry| entry.matches(&target))
            .max_by_key(|entry| entry.path.len())
            .map(|entry| entry.access)
    }

    /// Resolves a navigation attempt for `session`.
    pub fn navigate(&self, session: &Session, path: &str) -> Navigation {
        match self.access_for(path) {
            None => Navigation::NotFound,
            Some(RouteAccess::Public) => Navigation::Render,
            Some(RouteAccess::Protected(role)) => match guard_route(session, role) {
                GuardDecision::Render => Navigation::Render,
                GuardDecision::RedirectToLogin(target)
                | GuardDecision::RedirectToDashboard(target) => {
                    Navigation::Redirect(target.to_string())
                }
            },
        }
    }
}

impl RouteEntry {
    fn matches(&self, target: &str) -> bool {
        if self.path == target {
            return true;
        }
        self.nested
            && target
                .strip_prefix(self.path.as_str())
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

/// Drops query/fragment and trailing slashes; empty becomes `/`.
fn normalize_path(path: &str) -> String {
    let without_query = path
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim();
    let trimmed = without_query.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}
