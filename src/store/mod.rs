//! Store - the string-keyed key-value persistence layer.
//!
//! Everything the dashboard persists goes through a `KeyValueStore`, the
//! same contract a browser's `localStorage` offers: synchronous get/set/remove
//! of string values under string keys, shared by every reader of the origin.
//!
//! `JsonStore` layers typed JSON access and key namespacing on top and is
//! what the rest of the crate talks to.
//!
//! ## Example
//!
//! ```ignore
//! use krishi_dashboard::{InMemoryStore, JsonStore};
//!
//! let store = JsonStore::new(InMemoryStore::new(), "krishi");
//! store.set("crops", &vec![crop]);
//! let crops: Option<Vec<Crop>> = store.get("crops");
//! ```

mod in_memory;
mod json;

use std::fmt;

/// Raw string-keyed storage.
///
/// Implementations use interior mutability: a store handle is shared, not
/// owned, by its users, and there are no transactions. Two interleaved
/// read-modify-write sequences on the same key race; the later write wins.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: String) -> Result<(), StoreError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove_item(&self, key: &str) -> Result<(), StoreError>;
}

/// Failure reported by a storage backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backend's lock was poisoned by a panicking writer.
    LockPoisoned(&'static str),
    /// The backend refused the operation (quota exceeded, storage disabled).
    Unavailable(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::LockPoisoned(operation) => {
                write!(f, "store lock poisoned during {}", operation)
            }
            StoreError::Unavailable(msg) => write!(f, "store unavailable: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

pub use in_memory::InMemoryStore;
pub use json::JsonStore;
