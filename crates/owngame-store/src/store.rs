//! The keyed store and its transition primitive.
//!
//! # Concurrency note
//!
//! Unlike a plain `HashMap` behind one big mutex, the store is backed by
//! a sharded [`DashMap`]. Every key hashes to one shard, and each shard
//! has its own `RwLock`:
//!
//! - `get` takes the shard's read lock just long enough to clone the value.
//! - `put` and `alter` take the shard's write lock for the whole
//!   check-then-write sequence.
//!
//! So two callers touching the same key are serialized (their effects
//! apply in a single total order), while callers on keys in different
//! shards run in parallel.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

/// A concurrency-safe map from string keys to values of type `V`.
///
/// All mutation goes through [`put`](Self::put) or [`alter`](Self::alter).
/// Readers only ever receive clones, so nobody can hold a value and
/// write it back later behind the store's back.
///
/// The store is `Send + Sync` whenever `V` is, and is meant to be shared
/// through an `Arc`.
#[derive(Debug)]
pub struct KeyedStore<V> {
    entries: DashMap<String, V>,
}

impl<V: Clone> KeyedStore<V> {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Inserts `value` under `key` only if the key is absent.
    ///
    /// Returns `false` (and leaves the existing value untouched) if the
    /// key is already present.
    pub fn put(&self, key: &str, value: V) -> bool {
        match self.entries.entry(key.to_owned()) {
            Entry::Occupied(_) => {
                tracing::trace!(key, "put rejected, key already present");
                false
            }
            Entry::Vacant(vacant) => {
                vacant.insert(value);
                tracing::trace!(key, "put accepted");
                true
            }
        }
    }

    /// Returns a snapshot of the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<V> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    /// Atomically applies `transition` to the value stored under `key`.
    ///
    /// The transition receives `Some(&current)` if the key exists and
    /// `None` if it doesn't. It returns:
    ///
    /// - `Some(new)`: the entry is replaced by `new` (or inserted, if the
    ///   key was absent) and `alter` returns `true`.
    /// - `None`: the transition refused; the store is left exactly as it
    ///   was and `alter` returns `false`.
    ///
    /// The transition runs while the write lock for `key`'s shard is held,
    /// so no other `put`/`alter` on the same key can interleave with it.
    /// It must not call back into this store.
    pub fn alter<F>(&self, key: &str, transition: F) -> bool
    where
        F: FnOnce(Option<&V>) -> Option<V>,
    {
        match self.entries.entry(key.to_owned()) {
            Entry::Occupied(mut occupied) => {
                let outcome = transition(Some(occupied.get()));
                match outcome {
                    Some(next) => {
                        occupied.insert(next);
                        tracing::trace!(key, "alter applied to existing entry");
                        true
                    }
                    None => {
                        tracing::trace!(key, "alter refused by transition");
                        false
                    }
                }
            }
            Entry::Vacant(vacant) => match transition(None) {
                Some(next) => {
                    vacant.insert(next);
                    tracing::trace!(key, "alter inserted new entry");
                    true
                }
                None => {
                    tracing::trace!(key, "alter refused by transition on missing key");
                    false
                }
            },
        }
    }

    /// Returns `true` if a value is stored under `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns a snapshot of all keys, in no particular order.
    pub fn keys(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Returns the number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Clone> Default for KeyedStore<V> {
    fn default() -> Self {
        Self::new()
    }
}
