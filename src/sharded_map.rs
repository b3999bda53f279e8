//! Sharded concurrent accumulator.
//!
//! A fixed number of shards partition the document-id space by
//! `id mod shards`; each shard guards its own map with a mutex held only for
//! the duration of a single lookup-or-insert-and-update. The parallel query
//! path uses this to accumulate per-document relevance without serialising
//! the whole fan-out behind one lock.

use crate::document::DocumentId;
use parking_lot::{MappedMutexGuard, Mutex, MutexGuard};
use std::collections::{BTreeMap, HashMap};

/// A concurrent map from document id to an accumulated value.
///
/// Per-key updates are linearisable; ordering across keys is unspecified
/// until [`merge`](Self::merge) produces a single ordered map.
#[derive(Debug)]
pub struct ShardedMap<V> {
    shards: Vec<Mutex<HashMap<DocumentId, V>>>,
}

impl<V: Default> ShardedMap<V> {
    /// Creates an accumulator with `shard_count` shards.
    ///
    /// # Panics
    ///
    /// Panics if `shard_count` is zero.
    pub fn new(shard_count: usize) -> Self {
        assert!(shard_count > 0, "shard count must be positive");
        Self {
            shards: (0..shard_count).map(|_| Mutex::new(HashMap::new())).collect(),
        }
    }

    /// Locks the shard owning `key` and returns a guard over its value slot,
    /// default-inserting the value if absent.
    ///
    /// The shard stays locked for the lifetime of the guard, so the caller's
    /// update is atomic with the lookup.
    pub fn entry(&self, key: DocumentId) -> MappedMutexGuard<'_, V> {
        let shard = &self.shards[key as usize % self.shards.len()];
        MutexGuard::map(shard.lock(), |values| values.entry(key).or_default())
    }

    /// Drains every shard into a single ordered map, moving the values out.
    ///
    /// Each shard's lock is held only for its own drain; the accumulator is
    /// empty afterwards.
    pub fn merge(&self) -> BTreeMap<DocumentId, V> {
        let mut merged = BTreeMap::new();
        for shard in &self.shards {
            merged.extend(shard.lock().drain());
        }
        merged
    }
}
