//! Record - entities persisted as one ordered collection per store key.

use std::fmt;

use serde::{de::DeserializeOwned, Serialize};

/// A type stored as an element of a persisted collection.
///
/// Usually implemented with `#[derive(Record)]`:
///
/// ```ignore
/// #[derive(Clone, Serialize, Deserialize, Record)]
/// #[record(collection = "crops")]
/// pub struct Crop {
///     #[record(id)]
///     pub id: u64,
/// }
/// ```
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// Store key name (before namespacing) holding the whole collection.
    const COLLECTION: &'static str;

    /// Identifier type. Unique within the collection, not globally.
    type Id: PartialEq + Clone + fmt::Debug;

    fn id(&self) -> &Self::Id;
}
