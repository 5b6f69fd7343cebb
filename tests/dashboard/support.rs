//! Shared fixtures: a store with a logged-in farmer and a dashboard on it.

use std::time::Duration;

use krishi_dashboard::{
    Dashboard, DashboardConfig, InMemoryStore, JsonStore, ManualClock, ModuleId, NewUser,
    SessionManager, UserType,
};

pub const START: &str = "2024-06-01T10:00:00Z";

pub fn clock() -> ManualClock {
    ManualClock::at(START.parse().unwrap())
}

pub fn store() -> JsonStore<InMemoryStore> {
    DashboardConfig::default().open_store(InMemoryStore::new())
}

pub fn register(store: &JsonStore<InMemoryStore>, name: &str, email: &str, user_type: UserType) {
    let clock = clock();
    SessionManager::new(store, &clock)
        .register(NewUser {
            name: name.into(),
            email: email.into(),
            password: "secret".into(),
            location: "Nashik".into(),
            user_type,
        })
        .unwrap();
}

pub fn login(store: &JsonStore<InMemoryStore>, email: &str) {
    let clock = clock();
    SessionManager::new(store, &clock)
        .authenticate(email, "secret")
        .unwrap();
}

/// A store with farmer "Asha" (a@x.com) logged in.
pub fn farmer_store() -> JsonStore<InMemoryStore> {
    let store = store();
    register(&store, "Asha", "a@x.com", UserType::Farmer);
    login(&store, "a@x.com");
    store
}

/// A dashboard over `store` that has finished loading the overview.
pub fn open(store: JsonStore<InMemoryStore>) -> Dashboard<InMemoryStore, ManualClock> {
    let mut dashboard = Dashboard::bootstrap(store, DashboardConfig::default(), clock()).unwrap();
    dashboard.run_until_idle();
    dashboard
}

/// Navigate to `module` and wait out the loading placeholder.
pub fn show(dashboard: &mut Dashboard<InMemoryStore, ManualClock>, module: ModuleId) {
    dashboard.activate(module);
    dashboard.tick(Duration::from_millis(300));
}
