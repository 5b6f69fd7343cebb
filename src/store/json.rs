//! JsonStore - typed, namespaced JSON access over a `KeyValueStore`.

use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;

use super::KeyValueStore;

/// Typed adapter over a raw key-value store.
///
/// Every key is namespaced as `<prefix>_<name>`. None of the operations
/// fail: backend errors and malformed JSON are logged and reported as
/// "absent" (reads) or `false` (writes), so a corrupt entry never takes the
/// caller down with it.
#[derive(Clone)]
pub struct JsonStore<S> {
    backend: S,
    prefix: String,
}

impl<S: KeyValueStore> JsonStore<S> {
    pub fn new(backend: S, prefix: impl Into<String>) -> Self {
        Self {
            backend,
            prefix: prefix.into(),
        }
    }

    /// The namespaced key for `name`.
    pub fn key(&self, name: &str) -> String {
        format!("{}_{}", self.prefix, name)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Read and decode the value under `name`.
    ///
    /// Returns `None` when the key is absent, the backend fails, or the
    /// stored text does not decode as `T`.
    pub fn get<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        let key = self.key(name);
        let raw = self.get_raw_item(&key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key = %key, error = %e, "discarding undecodable stored value");
                None
            }
        }
    }

    /// Whether anything at all is stored under `name`, decodable or not.
    pub fn contains(&self, name: &str) -> bool {
        self.get_raw_item(&self.key(name)).is_some()
    }

    /// Encode and store `value` under `name`. Returns false on failure.
    pub fn set<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> bool {
        let key = self.key(name);
        match serde_json::to_string(value) {
            Ok(raw) => self.set_raw_item(&key, raw),
            Err(e) => {
                warn!(key = %key, error = %e, "failed to encode value for store");
                false
            }
        }
    }

    /// Remove whatever is stored under `name`.
    pub fn remove(&self, name: &str) {
        let key = self.key(name);
        if let Err(e) = self.backend.remove_item(&key) {
            warn!(key = %key, error = %e, "failed to remove stored value");
        }
    }

    /// Read an un-namespaced key.
    pub fn get_raw_item(&self, key: &str) -> Option<String> {
        match self.backend.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                warn!(key = %key, error = %e, "store read failed");
                None
            }
        }
    }

    /// Write an un-namespaced key. Returns false on failure.
    pub fn set_raw_item(&self, key: &str, value: String) -> bool {
        match self.backend.set_item(key, value) {
            Ok(()) => true,
            Err(e) => {
                warn!(key = %key, error = %e, "store write failed");
                false
            }
        }
    }
}
