//! Session integration tests: registration, login and the session copy.

use std::time::Duration;

use krishi_dashboard::{
    AuthError, AuthPage, DashboardConfig, InMemoryStore, JsonStore, ManualClock, NewUser, Page,
    Record, RecordsExt, SessionManager, User, UserType,
};
use serde_json::json;

fn clock() -> ManualClock {
    ManualClock::at("2024-06-01T10:00:00Z".parse().unwrap())
}

fn store() -> JsonStore<InMemoryStore> {
    JsonStore::new(InMemoryStore::new(), "krishi")
}

fn candidate(email: &str, password: &str) -> NewUser {
    NewUser {
        name: "Asha".into(),
        email: email.into(),
        password: password.into(),
        location: "Nashik".into(),
        user_type: UserType::Farmer,
    }
}

#[test]
fn duplicate_email_leaves_users_unchanged() {
    let store = store();
    let clock = clock();
    let sessions = SessionManager::new(&store, &clock);
    sessions.register(candidate("a@x.com", "one")).unwrap();
    sessions.register(candidate("b@x.com", "two")).unwrap();
    let before = store.get_raw_item(&store.key(User::COLLECTION));

    for attempt in ["a@x.com", "b@x.com"] {
        let result = sessions.register(candidate(attempt, "other"));
        assert_eq!(result, Err(AuthError::DuplicateEmail(attempt.into())));
    }
    assert_eq!(store.get_raw_item(&store.key(User::COLLECTION)), before);
}

#[test]
fn email_comparison_is_case_sensitive() {
    let store = store();
    let clock = clock();
    let sessions = SessionManager::new(&store, &clock);
    sessions.register(candidate("a@x.com", "one")).unwrap();
    assert!(sessions.register(candidate("A@x.com", "one")).is_ok());
    assert_eq!(store.records::<User>().count(), 2);
}

#[test]
fn session_is_an_exact_copy_of_the_user() {
    let store = store();
    let clock = clock();
    let sessions = SessionManager::new(&store, &clock);
    sessions.register(candidate("z@x.com", "pw")).unwrap();
    let registered = sessions.register(candidate("a@x.com", "secret")).unwrap();

    let session = sessions.authenticate("a@x.com", "secret").unwrap();
    assert_eq!(session, registered);
    assert_eq!(sessions.current_session().unwrap(), registered);
    assert_eq!(
        store.get::<serde_json::Value>("currentUser"),
        store
            .get::<Vec<serde_json::Value>>(User::COLLECTION)
            .map(|users| users[1].clone())
    );
}

#[test]
fn wrong_password_and_unknown_email_look_the_same() {
    let store = store();
    let clock = clock();
    let sessions = SessionManager::new(&store, &clock);
    sessions.register(candidate("a@x.com", "secret")).unwrap();

    let wrong = sessions.authenticate("a@x.com", "nope").unwrap_err();
    let unknown = sessions.authenticate("b@x.com", "secret").unwrap_err();
    assert_eq!(wrong, unknown);
    assert_eq!(wrong.to_string(), "Invalid email or password.");
    assert_eq!(sessions.current_session(), Err(AuthError::NotAuthenticated));
}

#[test]
fn destroyed_session_is_gone() {
    let store = store();
    let clock = clock();
    let sessions = SessionManager::new(&store, &clock);
    sessions.register(candidate("a@x.com", "secret")).unwrap();
    sessions.authenticate("a@x.com", "secret").unwrap();
    sessions.destroy_session();
    assert_eq!(sessions.current_session(), Err(AuthError::NotAuthenticated));
}

#[test]
fn legacy_user_records_still_load() {
    let store = store();
    store.set(
        User::COLLECTION,
        &json!([{
            "id": "1718000000000",
            "name": "Old Timer",
            "email": "old@x.com",
            "password": "pw",
            "location": "Indore",
            "userType": "trader",
            "joinedDate": "2024-06-10T06:13:20.000Z"
        }]),
    );
    let clock = clock();
    let user = SessionManager::new(&store, &clock)
        .authenticate("old@x.com", "pw")
        .unwrap();
    assert_eq!(user.user_type, UserType::Other("trader".into()));
}

#[test]
fn registration_page_flow() {
    let mut page = AuthPage::new(store(), clock(), DashboardConfig::default());
    page.submit_register(candidate("a@x.com", "secret")).unwrap();
    assert_eq!(page.tick(Duration::from_millis(1000)), Some(Page::Login));

    assert_eq!(page.submit_login("a@x.com", "wrong"), None);
    assert!(page.banner().is_some());
    assert_eq!(page.submit_login("a@x.com", "secret"), Some(Page::Dashboard));
}
