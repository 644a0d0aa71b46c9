use rolecrm_core::{
    guard_route, CredentialFixtures, GuardDecision, MemorySessionStorage, Navigation, Role,
    RouteTable, Session, SessionStore,
};
use std::time::Duration;

fn signed_in_as(role: Role) -> Session {
    let fixtures = CredentialFixtures::builtin().unwrap();
    let record = fixtures.for_role(role).unwrap().clone();
    let mut store = SessionStore::open(MemorySessionStorage::shared(), fixtures, Duration::ZERO);
    assert!(store.login(&record.email, &record.password, role));
    store.session().clone()
}

#[test]
fn unauthenticated_access_redirects_to_role_login() {
    let table = RouteTable::portal();
    let cases = [
        ("/employee/dashboard", "/employee/login"),
        ("/manager/team", "/manager/login"),
        ("/admin/employees/", "/admin/login"),
        ("/superadmin/settings?tab=roles", "/superadmin/login"),
        ("/employee/tasks/123", "/employee/login"),
    ];
    for (path, login) in cases {
        assert_eq!(
            table.navigate(&Session::default(), path),
            Navigation::Redirect(login.to_string()),
            "path {path}"
        );
    }
}

#[test]
fn mismatched_role_redirects_to_own_dashboard() {
    let table = RouteTable::portal();
    for role in Role::ALL {
        let session = signed_in_as(role);
        for other in Role::ALL.into_iter().filter(|other| *other != role) {
            assert_eq!(
                table.navigate(&session, other.dashboard_path()),
                Navigation::Redirect(role.dashboard_path().to_string())
            );
            assert_eq!(
                guard_route(&session, other),
                GuardDecision::RedirectToDashboard(role.dashboard_path())
            );
        }
        assert_eq!(table.navigate(&session, role.dashboard_path()), Navigation::Render);
    }
}

#[test]
fn public_pages_render_for_everyone() {
    let table = RouteTable::portal();
    let manager = signed_in_as(Role::Manager);
    for role in Role::ALL {
        assert_eq!(
            table.navigate(&Session::default(), role.login_path()),
            Navigation::Render
        );
        assert_eq!(table.navigate(&manager, role.login_path()), Navigation::Render);
    }
}

#[test]
fn custom_tables_use_longest_match() {
    let table = RouteTable::new()
        .protected("/admin", Role::Admin)
        .public("/admin/help");
    let employee = signed_in_as(Role::Employee);
    assert_eq!(table.navigate(&employee, "/admin/help"), Navigation::Render);
    assert_eq!(
        table.navigate(&employee, "/admin/help/more"),
        Navigation::Redirect("/employee/dashboard".to_string())
    );
}

#[test]
fn logout_restores_login_redirects() {
    let fixtures = CredentialFixtures::builtin().unwrap();
    let mut store = SessionStore::open(MemorySessionStorage::shared(), fixtures, Duration::ZERO);
    let table = RouteTable::portal();
    assert!(store.login("admin@company.com", "admin123", Role::Admin));
    assert_eq!(table.navigate(store.session(), "/admin/reports"), Navigation::Render);
    store.logout();
    assert_eq!(
        table.navigate(store.session(), "/admin/reports"),
        Navigation::Redirect("/admin/login".to_string())
    );
}

#[test]
fn whole_role_subtree_is_guarded() {
    let table = RouteTable::portal();
    let cases = [
        ("/employee", Role::Employee),
        ("/employee/", Role::Employee),
        ("/admin/settings", Role::Admin),
        ("/manager/reports/q3", Role::Manager),
        ("/superadmin/tasks", Role::Superadmin),
    ];
    let employee = signed_in_as(Role::Employee);
    for (path, owner) in cases {
        assert_eq!(
            table.navigate(&Session::default(), path),
            Navigation::Redirect(owner.login_path().to_string()),
            "path {path}"
        );
        let expected = if owner == Role::Employee {
            Navigation::Render
        } else {
            Navigation::Redirect(Role::Employee.dashboard_path().to_string())
        };
        assert_eq!(table.navigate(&employee, path), expected, "path {path}");
    }
    assert_eq!(
        table.navigate(&Session::default(), "/admin/login"),
        Navigation::Render
    );
    assert_eq!(
        table.navigate(&Session::default(), "/administrator"),
        Navigation::NotFound
    );
}
