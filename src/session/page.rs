//! AuthPage - the login and registration forms' behaviour.

use std::time::Duration;

use tracing::debug;

use super::{AuthError, SessionManager};
use crate::clock::Clock;
use crate::config::DashboardConfig;
use crate::feedback::{Feedback, Page};
use crate::model::{NewUser, User};
use crate::scheduler::{Scheduler, TimerToken};
use crate::store::{JsonStore, KeyValueStore};

/// Deferred work on the auth pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthTask {
    DismissBanner,
    Redirect(Page),
}

/// Drives the login/register forms: feedback banners that dismiss
/// themselves, and the delayed redirect after registering.
pub struct AuthPage<S, C> {
    store: JsonStore<S>,
    clock: C,
    config: DashboardConfig,
    scheduler: Scheduler<AuthTask>,
    banner: Option<(Feedback, TimerToken)>,
}

impl<S: KeyValueStore, C: Clock> AuthPage<S, C> {
    pub fn new(store: JsonStore<S>, clock: C, config: DashboardConfig) -> Self {
        Self {
            store,
            clock,
            config,
            scheduler: Scheduler::new(),
            banner: None,
        }
    }

    fn sessions(&self) -> SessionManager<'_, S> {
        SessionManager::new(&self.store, &self.clock)
    }

    /// Submit the login form. Returns the page to go to on success.
    pub fn submit_login(&mut self, email: &str, password: &str) -> Option<Page> {
        let outcome = self.sessions().authenticate(email, password);
        match outcome {
            Ok(_) => Some(Page::Dashboard),
            Err(e) => {
                self.show_banner(Feedback::error(e.to_string()));
                None
            }
        }
    }

    /// Submit the registration form. On success a banner confirms it and a
    /// redirect to the login page is queued.
    pub fn submit_register(&mut self, candidate: NewUser) -> Result<User, AuthError> {
        let outcome = self.sessions().register(candidate);
        match outcome {
            Ok(user) => {
                self.show_banner(Feedback::success(
                    "Registration successful! Redirecting to login...",
                ));
                self.scheduler
                    .schedule(self.config.redirect_delay(), AuthTask::Redirect(Page::Login));
                Ok(user)
            }
            Err(e) => {
                self.show_banner(Feedback::error(e.to_string()));
                Err(e)
            }
        }
    }

    /// Let `elapsed` pass. Returns a redirect if one fired.
    pub fn tick(&mut self, elapsed: Duration) -> Option<Page> {
        let mut redirect = None;
        for task in self.scheduler.advance(elapsed) {
            debug!(?task, "auth page task fired");
            match task {
                AuthTask::DismissBanner => self.banner = None,
                AuthTask::Redirect(page) => redirect = Some(page),
            }
        }
        redirect
    }

    pub fn banner(&self) -> Option<&Feedback> {
        self.banner.as_ref().map(|(feedback, _)| feedback)
    }

    fn show_banner(&mut self, feedback: Feedback) {
        if let Some((_, token)) = self.banner.take() {
            self.scheduler.cancel(token);
        }
        let token = self
            .scheduler
            .schedule(self.config.banner_timeout(), AuthTask::DismissBanner);
        self.banner = Some((feedback, token));
    }
}
