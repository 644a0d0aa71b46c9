//! Role-based route guard.
//!
//! # Responsibility
//! - Decide whether a navigation target may render for the current session.
//! - Map URL paths to public or role-protected access rules.
//!
//! # Invariants
//! - Decisions are pure functions of `(Session, target)`; no side effects.
//! - Unauthenticated access always redirects to the required role's login.
//! - Role mismatch always redirects to the session role's own dashboard.

mod route;

pub use route::{Navigation, RouteAccess, RouteTable};

use crate::model::role::Role;
use crate::model::session::Session;

/// Outcome of checking one protected view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session may see the view.
    Render,
    /// Session is signed out; send it to this login page.
    RedirectToLogin(&'static str),
    /// Session belongs to another portal; send it to its own dashboard.
    RedirectToDashboard(&'static str),
}

impl GuardDecision {
    /// Redirect target, if any.
    pub fn redirect_path(self) -> Option<&'static str> {
        match self {
            Self::Render => None,
            Self::RedirectToLogin(path) | Self::RedirectToDashboard(path) => Some(path),
        }
    }
}

/// Checks whether `session` may view a page reserved for `required`.
pub fn guard_route(session: &Session, required: Role) -> GuardDecision {
    match session.active_role() {
        None => GuardDecision::RedirectToLogin(required.login_path()),
        Some(role) if role != required => GuardDecision::RedirectToDashboard(role.dashboard_path()),
        Some(_) => GuardDecision::Render,
    }
}
