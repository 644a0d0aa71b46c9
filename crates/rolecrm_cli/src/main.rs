//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `rolecrm_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use rolecrm_core::{Role, RouteTable, Session};

fn main() {
    println!("rolecrm_core ping={}", rolecrm_core::ping());
    println!("rolecrm_core version={}", rolecrm_core::core_version());

    let routes = RouteTable::portal();
    let signed_out = Session::default();
    for role in Role::ALL {
        println!(
            "portal role={role} login={} dashboard={} signed_out_dashboard={:?}",
            role.login_path(),
            role.dashboard_path(),
            routes.navigate(&signed_out, role.dashboard_path())
        );
    }
}
