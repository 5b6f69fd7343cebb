//! Dashboard configuration.
//!
//! Resolution order:
//! 1. Built-in defaults
//! 2. Optional JSON document (`DashboardConfig::from_json`)
//! 3. `KRISHI_*` environment variables (`with_env_overrides`)

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::store::{JsonStore, KeyValueStore};

pub const DEFAULT_CANNED_RESPONSE: &str =
    "Thank you for your query. Our AI suggests using Neem Oil spray (5ml/liter).";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Namespace for every persisted key (`<prefix>_crops`, ...).
    pub key_prefix: String,
    /// Un-namespaced key holding the theme preference.
    pub theme_key: String,
    /// How long the loading placeholder shows before a module renders.
    pub render_delay_ms: u64,
    /// Delay before a new query receives the canned expert reply.
    pub auto_resolve_delay_ms: u64,
    /// How long a banner stays up.
    pub banner_timeout_ms: u64,
    /// Pause between a successful registration and the login redirect.
    pub redirect_delay_ms: u64,
    pub canned_response: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            key_prefix: "krishi".to_string(),
            theme_key: "theme".to_string(),
            render_delay_ms: 300,
            auto_resolve_delay_ms: 3000,
            banner_timeout_ms: 3000,
            redirect_delay_ms: 1000,
            canned_response: DEFAULT_CANNED_RESPONSE.to_string(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "invalid dashboard config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

impl DashboardConfig {
    /// Parse a JSON document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Apply `KRISHI_*` overrides from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary lookup. Unparseable numbers are
    /// logged and ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(prefix) = lookup("KRISHI_KEY_PREFIX") {
            if !prefix.trim().is_empty() {
                self.key_prefix = prefix;
            }
        }
        override_millis(&lookup, "KRISHI_RENDER_DELAY_MS", &mut self.render_delay_ms);
        override_millis(
            &lookup,
            "KRISHI_AUTO_RESOLVE_DELAY_MS",
            &mut self.auto_resolve_delay_ms,
        );
        override_millis(&lookup, "KRISHI_BANNER_TIMEOUT_MS", &mut self.banner_timeout_ms);
        self
    }

    /// Wrap `backend` in a typed store namespaced by `key_prefix`.
    pub fn open_store<S: KeyValueStore>(&self, backend: S) -> JsonStore<S> {
        JsonStore::new(backend, self.key_prefix.clone())
    }

    pub fn render_delay(&self) -> Duration {
        Duration::from_millis(self.render_delay_ms)
    }

    pub fn auto_resolve_delay(&self) -> Duration {
        Duration::from_millis(self.auto_resolve_delay_ms)
    }

    pub fn banner_timeout(&self) -> Duration {
        Duration::from_millis(self.banner_timeout_ms)
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }
}

fn override_millis(lookup: &impl Fn(&str) -> Option<String>, name: &str, target: &mut u64) {
    let Some(raw) = lookup(name) else {
        return;
    };
    match raw.trim().parse() {
        Ok(value) => *target = value,
        Err(_) => warn!(variable = name, value = %raw, "ignoring non-numeric override"),
    }
}
