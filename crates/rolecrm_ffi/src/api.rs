//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose session, routing and task use-cases to Dart via FRB.
//! - Own the process-wide `PortalState` behind one mutex.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Failures are reported through envelopes, never as Rust errors.

use log::warn;
use rolecrm_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, parse_role,
    ping as ping_inner, Navigation, NewTask, PortalConfig, PortalState, RecordId, Session, Task,
};
use std::sync::{Mutex, MutexGuard, OnceLock};
use uuid::Uuid;

static PORTAL: OnceLock<Result<Mutex<PortalState>, String>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Session view returned to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    pub is_authenticated: bool,
    /// Lowercase role id (`employee|manager|admin|superadmin`).
    pub role: Option<String>,
    pub user_id: Option<String>,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Login response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthResponse {
    pub ok: bool,
    /// Where the UI should navigate next.
    pub redirect_to: Option<String>,
    pub message: String,
}

/// Navigation decision envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteResponse {
    /// `render|redirect|not_found|error`.
    pub outcome: String,
    pub redirect_to: Option<String>,
}

/// Task item returned to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    pub id: String,
    pub title: String,
    pub status: String,
    pub priority: String,
    pub deadline: Option<i64>,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    pub ok: bool,
    pub record_id: Option<String>,
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, record_id: RecordId) -> Self {
        Self {
            ok: true,
            record_id: Some(record_id.to_string()),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            record_id: None,
            message: message.into(),
        }
    }
}

/// Validates credentials for `role` and opens a session.
///
/// # FFI contract
/// - Sync call; blocks for the configured login delay.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn auth_login(email: String, password: String, role: String) -> AuthResponse {
    let role = match parse_role(&role) {
        Ok(role) => role,
        Err(err) => {
            return AuthResponse {
                ok: false,
                redirect_to: None,
                message: err.to_string(),
            }
        }
    };
    let mut portal = match lock_portal() {
        Ok(portal) => portal,
        Err(message) => {
            return AuthResponse {
                ok: false,
                redirect_to: None,
                message,
            }
        }
    };

    if portal.session.login(&email, &password, role) {
        AuthResponse {
            ok: true,
            redirect_to: Some(role.dashboard_path().to_string()),
            message: "Signed in.".to_string(),
        }
    } else {
        AuthResponse {
            ok: false,
            redirect_to: None,
            message: portal
                .session
                .session()
                .error
                .clone()
                .unwrap_or_else(|| "Sign in failed.".to_string()),
        }
    }
}

/// Clears the session; returns empty string on success.
#[flutter_rust_bridge::frb(sync)]
pub fn auth_logout() -> String {
    match lock_portal() {
        Ok(mut portal) => {
            portal.session.logout();
            String::new()
        }
        Err(message) => message,
    }
}

/// Current session snapshot; signed-out view when the core is unavailable.
#[flutter_rust_bridge::frb(sync)]
pub fn auth_session() -> SessionView {
    match lock_portal() {
        Ok(portal) => to_session_view(portal.session.session()),
        Err(message) => SessionView {
            error: Some(message),
            ..to_session_view(&Session::default())
        },
    }
}

/// Resolves a navigation target against the current session.
#[flutter_rust_bridge::frb(sync)]
pub fn route_navigate(path: String) -> RouteResponse {
    let portal = match lock_portal() {
        Ok(portal) => portal,
        Err(message) => {
            warn!("event=route_navigate module=ffi status=error error={message}");
            return RouteResponse {
                outcome: "error".to_string(),
                redirect_to: None,
            };
        }
    };
    match portal.navigate(&path) {
        Navigation::Render => RouteResponse {
            outcome: "render".to_string(),
            redirect_to: None,
        },
        Navigation::Redirect(target) => RouteResponse {
            outcome: "redirect".to_string(),
            redirect_to: Some(target),
        },
        Navigation::NotFound => RouteResponse {
            outcome: "not_found".to_string(),
            redirect_to: None,
        },
    }
}

/// Creates a task owned by the signed-in user.
///
/// Manager sessions become the task's manager; other roles are recorded as
/// creator only.
#[flutter_rust_bridge::frb(sync)]
pub fn task_create(title: String, description: String, deadline: Option<i64>) -> ActionResponse {
    let mut portal = match lock_portal() {
        Ok(portal) => portal,
        Err(message) => return ActionResponse::failure(message),
    };
    let Some(user) = portal.session.user().cloned() else {
        return ActionResponse::failure("task_create requires a signed-in user");
    };
    let manager = (portal.session.role() == Some(rolecrm_core::Role::Manager)).then_some(user.id);

    let request = NewTask {
        title: title.trim().to_string(),
        description,
        deadline,
        assigned_to_manager: manager,
        created_by: Some(user.id),
        ..NewTask::default()
    };
    match portal.tasks.add_task(request) {
        Ok(task) => ActionResponse::success("Task created.", task.id),
        Err(err) => ActionResponse::failure(format!("task_create failed: {err}")),
    }
}

/// Marks a task completed on behalf of the signed-in user.
#[flutter_rust_bridge::frb(sync)]
pub fn task_complete(task_id: String) -> ActionResponse {
    let id = match Uuid::parse_str(task_id.trim()) {
        Ok(id) => id,
        Err(_) => return ActionResponse::failure(format!("invalid task id `{task_id}`")),
    };
    let mut portal = match lock_portal() {
        Ok(portal) => portal,
        Err(message) => return ActionResponse::failure(message),
    };
    let actor = portal.session.user().map(|user| user.id);
    match portal.tasks.complete_task(id, actor) {
        Ok(task) => ActionResponse::success("Task completed.", task.id),
        Err(err) => ActionResponse::failure(format!("task_complete failed: {err}")),
    }
}

/// Tasks relevant to the signed-in user: assigned tasks for employees,
/// managed tasks for managers, everything for admins.
#[flutter_rust_bridge::frb(sync)]
pub fn tasks_for_current_user() -> Vec<TaskItem> {
    let Ok(portal) = lock_portal() else {
        return Vec::new();
    };
    let (Some(role), Some(user)) = (portal.session.role(), portal.session.user()) else {
        return Vec::new();
    };
    let tasks = match role {
        rolecrm_core::Role::Employee => portal.tasks.tasks_for_employee(user.id),
        rolecrm_core::Role::Manager => portal.tasks.tasks_by_manager(user.id),
        rolecrm_core::Role::Admin | rolecrm_core::Role::Superadmin => portal.tasks.tasks().to_vec(),
    };
    tasks.iter().map(to_task_item).collect()
}

/// Unread notification count for the signed-in user; `0` when signed out.
#[flutter_rust_bridge::frb(sync)]
pub fn notifications_unread_count() -> u32 {
    let Ok(portal) = lock_portal() else {
        return 0;
    };
    portal
        .session
        .user()
        .map(|user| portal.notifications.unread_count(user.id))
        .map_or(0, |count| u32::try_from(count).unwrap_or(u32::MAX))
}

fn lock_portal() -> Result<MutexGuard<'static, PortalState>, String> {
    let portal = PORTAL.get_or_init(|| {
        PortalConfig::from_env()
            .map_err(|err| err.to_string())
            .and_then(|config| PortalState::open(&config).map_err(|err| err.to_string()))
            .map(Mutex::new)
    });
    match portal {
        Ok(mutex) => mutex
            .lock()
            .map_err(|_| "portal state lock poisoned".to_string()),
        Err(message) => Err(format!("portal unavailable: {message}")),
    }
}

fn to_session_view(session: &Session) -> SessionView {
    SessionView {
        is_authenticated: session.is_authenticated,
        role: session.role.map(|role| role.as_str().to_string()),
        user_id: session.user.as_ref().map(|user| user.id.to_string()),
        user_name: session.user.as_ref().map(|user| user.name.clone()),
        user_email: session.user.as_ref().map(|user| user.email.clone()),
        loading: session.loading,
        error: session.error.clone(),
    }
}

fn to_task_item(task: &Task) -> TaskItem {
    TaskItem {
        id: task.id.to_string(),
        title: task.title.clone(),
        status: task.status.as_str().to_string(),
        priority: task.priority.as_str().to_string(),
        deadline: task.deadline,
    }
}
