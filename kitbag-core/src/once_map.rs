//! First-writer-wins guarded map for do-once business steps.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Mutex, PoisonError};

/// A mutex-guarded map where a key can be claimed exactly once.
///
/// [`put`](Self::put) returns `true` for the first writer of a key only, so
/// concurrent callers racing on the same key see exactly one winner. The
/// stored value is never overwritten; [`remove`](Self::remove) frees the key
/// for a new claim.
#[derive(Debug)]
pub struct OnceMap<K, V> {
    inner: Mutex<HashMap<K, V>>,
}

impl<K, V> Default for OnceMap<K, V> {
    fn default() -> Self {
        OnceMap {
            inner: Mutex::new(HashMap::new()),
        }
    }
}

impl<K: Eq + Hash, V: Clone> OnceMap<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `key` with `value`. Returns `false` when the key is already
    /// claimed.
    pub fn put(&self, key: K, value: V) -> bool {
        let mut map = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        if map.contains_key(&key) {
            return false;
        }
        map.insert(key, value);
        true
    }

    /// Release `key` so it can be claimed again.
    pub fn remove(&self, key: &K) {
        let mut map = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        map.remove(key);
    }

    /// Whether `key` is currently claimed.
    pub fn has(&self, key: &K) -> bool {
        let map = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        map.contains_key(key)
    }

    /// The value stored for `key`, if any.
    pub fn get(&self, key: &K) -> Option<V> {
        let map = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        map.get(key).cloned()
    }
}
