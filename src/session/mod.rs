//! Session - registration, login and the current-user gate.
//!
//! There is no server. Users live in the `users` collection with clear-text
//! passwords; logging in copies the matching user record, as is, under the
//! `currentUser` key. That copy is the session: it has no token and no
//! expiry and lasts until `destroy_session`.

mod error;
mod page;

use tracing::{info, warn};
use uuid::Uuid;

use crate::clock::Clock;
use crate::model::{NewUser, User, UserType};
use crate::store::{JsonStore, KeyValueStore};
use crate::RecordsExt;

pub use error::AuthError;
pub use page::{AuthPage, AuthTask};

/// Store key (before namespacing) of the session copy.
pub const SESSION_KEY: &str = "currentUser";

/// Whether `user` gets the admin panel link.
pub fn is_admin(user: &User) -> bool {
    user.email.contains("admin") || user.user_type == UserType::Admin
}

pub struct SessionManager<'a, S> {
    store: &'a JsonStore<S>,
    clock: &'a dyn Clock,
}

impl<'a, S: KeyValueStore> SessionManager<'a, S> {
    pub fn new(store: &'a JsonStore<S>, clock: &'a dyn Clock) -> Self {
        Self { store, clock }
    }

    /// Store a new user. Does not log them in.
    ///
    /// Fails with `DuplicateEmail` if any stored user has exactly this email
    /// (case-sensitive), leaving the users collection untouched.
    pub fn register(&self, candidate: NewUser) -> Result<User, AuthError> {
        for (field, value) in [
            ("name", &candidate.name),
            ("email", &candidate.email),
            ("password", &candidate.password),
        ] {
            if value.trim().is_empty() {
                return Err(AuthError::MissingField(field));
            }
        }

        let users = self.store.records::<User>();
        if users.find(|u| u.email == candidate.email).is_some() {
            return Err(AuthError::DuplicateEmail(candidate.email));
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            name: candidate.name,
            email: candidate.email,
            password: candidate.password,
            location: candidate.location,
            user_type: candidate.user_type,
            joined_date: self.clock.now(),
        };
        if !users.append(user.clone()) {
            warn!(email = %user.email, "registered user could not be persisted");
            return Err(AuthError::StorageUnavailable);
        }
        info!(user_id = %user.id, email = %user.email, "user registered");
        Ok(user)
    }

    /// Log in with an exact email and password match.
    ///
    /// On success the matched record is copied into the session and
    /// returned. Fails with `StorageUnavailable` if that copy cannot be
    /// written, since the dashboard would then find no session.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let user = self
            .store
            .records::<User>()
            .find(|u| u.email == email && u.password == password)
            .ok_or(AuthError::InvalidCredentials)?;

        if !self.store.set(SESSION_KEY, &user) {
            warn!(user_id = %user.id, "session could not be persisted");
            return Err(AuthError::StorageUnavailable);
        }
        info!(user_id = %user.id, "session started");
        Ok(user)
    }

    /// The stored session, or `NotAuthenticated`.
    ///
    /// The copy is not checked against the users collection.
    pub fn current_session(&self) -> Result<User, AuthError> {
        self.store
            .get(SESSION_KEY)
            .ok_or(AuthError::NotAuthenticated)
    }

    pub fn destroy_session(&self) {
        self.store.remove(SESSION_KEY);
        info!("session destroyed");
    }
}
