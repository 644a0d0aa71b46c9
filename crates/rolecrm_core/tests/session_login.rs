use rolecrm_core::{
    CredentialFixtures, MemorySessionStorage, Role, Session, SessionStore, SharedStorage,
};
use std::time::{Duration, Instant};

fn store(storage: SharedStorage, delay: Duration) -> SessionStore {
    SessionStore::open(storage, CredentialFixtures::builtin().unwrap(), delay)
}

#[test]
fn login_succeeds_only_on_exact_fixture_match() {
    let fixtures = CredentialFixtures::builtin().unwrap();
    for record in fixtures.records() {
        let mut session = store(MemorySessionStorage::shared(), Duration::ZERO);
        assert!(session.login(&record.email, &record.password, record.role));
        assert_eq!(session.role(), Some(record.role));
        assert_eq!(session.user(), Some(&record.user));
    }

    let mismatches = [
        ("employee@company.com", "employee124", Role::Employee),
        ("EMPLOYEE@company.com", "employee123", Role::Employee),
        (" employee@company.com", "employee123", Role::Employee),
        ("employee@company.com", "employee123", Role::Manager),
        ("", "", Role::Admin),
    ];
    for (email, password, role) in mismatches {
        let mut session = store(MemorySessionStorage::shared(), Duration::ZERO);
        assert!(!session.login(email, password, role));
        let state = session.session();
        assert!(!state.is_authenticated);
        assert!(state.role.is_none());
        assert!(state.user.is_none());
        assert!(!state.error.as_deref().unwrap().is_empty());
    }
}

#[test]
fn logout_resets_every_field() {
    let mut session = store(MemorySessionStorage::shared(), Duration::ZERO);
    assert!(session.login("superadmin@company.com", "superadmin123", Role::Superadmin));
    session.logout();
    assert_eq!(session.session(), &Session::default());

    // Also from an error state.
    assert!(!session.login("nobody@company.com", "x", Role::Admin));
    session.logout();
    assert_eq!(session.session(), &Session::default());
}

#[test]
fn successful_login_clears_previous_error() {
    let mut session = store(MemorySessionStorage::shared(), Duration::ZERO);
    assert!(!session.login("admin@company.com", "nope", Role::Admin));
    assert!(session.session().error.is_some());
    assert!(session.login("admin@company.com", "admin123", Role::Admin));
    assert!(session.session().error.is_none());
}

#[test]
fn login_waits_for_configured_delay() {
    let mut session = store(MemorySessionStorage::shared(), Duration::from_millis(30));
    let started = Instant::now();
    assert!(session.login("manager@company.com", "manager123", Role::Manager));
    assert!(started.elapsed() >= Duration::from_millis(30));
    assert!(!session.session().loading);
}
