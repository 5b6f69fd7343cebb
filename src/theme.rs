//! Light/dark theme preference, persisted under an un-namespaced key.

use std::fmt;

use crate::store::{JsonStore, KeyValueStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Label for the toggle button: the theme it switches to.
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Dark => "\u{2600}\u{fe0f}",
            Theme::Light => "\u{1f319}",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reads and flips the saved theme.
pub struct ThemePreference<'a, S> {
    store: &'a JsonStore<S>,
    key: &'a str,
}

impl<'a, S: KeyValueStore> ThemePreference<'a, S> {
    pub fn new(store: &'a JsonStore<S>, key: &'a str) -> Self {
        Self { store, key }
    }

    /// The explicitly saved theme, if any. Unknown values count as unset.
    pub fn saved(&self) -> Option<Theme> {
        self.store
            .get_raw_item(self.key)
            .and_then(|raw| Theme::parse(&raw))
    }

    /// Saved theme, else the system preference.
    pub fn current(&self, system_prefers_dark: bool) -> Theme {
        self.saved().unwrap_or(if system_prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        })
    }

    /// Switch to the other theme and persist the choice.
    pub fn toggle(&self, system_prefers_dark: bool) -> Theme {
        let next = self.current(system_prefers_dark).toggled();
        self.store.set_raw_item(self.key, next.as_str().to_string());
        next
    }
}
