//! Repositories - whole-collection persistence for each record type.
//!
//! Each record type lives under a single store key as one JSON array in
//! insertion order. The array in the store is the only source of truth;
//! nothing is cached between calls.
//!
//! Every mutation is a full cycle: load the array, change it in memory,
//! write the whole array back. The cycle is not atomic. If two writers
//! interleave on the same key (two handles onto one store, say), the
//! second `replace_all` silently discards whatever the first one wrote.
//!
//! ## Example
//!
//! ```ignore
//! use krishi_dashboard::{Crop, RecordsExt};
//!
//! store.records::<Crop>().append(crop);
//! let crops = store.records::<Crop>().load_all();
//! store.records::<Crop>().remove_by_id(&1);
//! ```

mod seed;

use std::marker::PhantomData;

use tracing::debug;

use crate::store::{JsonStore, KeyValueStore};
use crate::Record;

pub use seed::{seed_all, seed_crops, seed_ideas, seed_products, seed_queries};

/// Typed accessor for one persisted collection.
pub struct Repository<'a, S, R> {
    store: &'a JsonStore<S>,
    _marker: PhantomData<R>,
}

impl<'a, S: KeyValueStore, R: Record> Repository<'a, S, R> {
    pub fn new(store: &'a JsonStore<S>) -> Self {
        Self {
            store,
            _marker: PhantomData,
        }
    }

    /// All records in stored order. Absent or undecodable data reads as empty.
    pub fn load_all(&self) -> Vec<R> {
        self.store.get(R::COLLECTION).unwrap_or_default()
    }

    /// Add a record at the end.
    pub fn append(&self, record: R) -> bool {
        let mut records = self.load_all();
        records.push(record);
        self.replace_all(&records)
    }

    /// Add a record at the front.
    pub fn prepend(&self, record: R) -> bool {
        let mut records = self.load_all();
        records.insert(0, record);
        self.replace_all(&records)
    }

    /// Remove every record with the given id, keeping the rest in order.
    ///
    /// Returns whether anything was removed. Nothing is written when no
    /// record matches.
    pub fn remove_by_id(&self, id: &R::Id) -> bool {
        let mut records = self.load_all();
        let before = records.len();
        records.retain(|record| record.id() != id);
        if records.len() == before {
            return false;
        }
        self.replace_all(&records)
    }

    /// Overwrite the whole collection.
    pub fn replace_all(&self, records: &[R]) -> bool {
        debug!(collection = R::COLLECTION, count = records.len(), "persisting collection");
        self.store.set(R::COLLECTION, records)
    }

    /// First record with the given id.
    pub fn get(&self, id: &R::Id) -> Option<R> {
        self.find(|record| record.id() == id)
    }

    /// First record matching a predicate.
    pub fn find(&self, predicate: impl Fn(&R) -> bool) -> Option<R> {
        self.load_all().into_iter().find(|record| predicate(record))
    }

    pub fn count(&self) -> usize {
        self.load_all().len()
    }

    /// Whether the collection key exists at all, even holding `[]`.
    pub fn is_seeded(&self) -> bool {
        self.store.contains(R::COLLECTION)
    }

    /// Write `seed` only if the collection key has never been written.
    ///
    /// An emptied collection stays empty. Returns whether the seed was
    /// written.
    pub fn seed_if_absent(&self, seed: &[R]) -> bool {
        if self.is_seeded() {
            return false;
        }
        debug!(collection = R::COLLECTION, count = seed.len(), "seeding collection");
        self.replace_all(seed)
    }
}

/// Extension trait for typed repository access on a `JsonStore`.
pub trait RecordsExt {
    type Backend;

    fn records<R: Record>(&self) -> Repository<'_, Self::Backend, R>;
}

impl<S: KeyValueStore> RecordsExt for JsonStore<S> {
    type Backend = S;

    fn records<R: Record>(&self) -> Repository<'_, S, R> {
        Repository::new(self)
    }
}
