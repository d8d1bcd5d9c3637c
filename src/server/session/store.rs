use std::{collections::HashMap, hash::Hash, sync::Arc, time::Duration};

use tokio::{sync::RwLock, time::Instant};

/// A value with the instant it was stored and the instant it stops being valid.
#[derive(Debug, Clone)]
pub struct Expiring<V> {
    pub value: V,
    pub created_at: Instant,
    pub expires_at: Instant,
}

impl<V> Expiring<V> {
    /// Wraps `value` with an expiry of `now + ttl`.
    pub fn new(value: V, ttl: Duration) -> Self {
        let now = Instant::now();
        Self {
            value,
            created_at: now,
            expires_at: now + ttl,
        }
    }

    /// Checks whether the entry is past its deadline.
    ///
    /// # Returns
    /// - `true` - `now >= expires_at`
    /// - `false` - Entry is still live
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// In-memory key → record map with per-entry TTL.
///
/// Holds at most one record per key; lookups are by exact key equality. Cloning the store
/// clones the handle, not the map, so the bot handler and the sweep job share one set of
/// entries.
///
/// Expired entries are never returned. `get` and `take_if` delete an expired entry they
/// run into; `sweep` removes the rest and is the only compaction mechanism.
pub struct SessionStore<K, V> {
    entries: Arc<RwLock<HashMap<K, Expiring<V>>>>,
}

impl<K, V> Clone for SessionStore<K, V> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<K, V> Default for SessionStore<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> SessionStore<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Stores `value` under `key`, expiring after `ttl`.
    ///
    /// An existing record for the same key is replaced, so re-issuing a command starts
    /// a fresh session.
    pub async fn create(&self, key: K, value: V, ttl: Duration) {
        self.entries
            .write()
            .await
            .insert(key, Expiring::new(value, ttl));
    }

    /// Returns the record for `key` if present and not expired.
    ///
    /// An expired record is deleted on access and reported as absent.
    ///
    /// # Returns
    /// - `Some(V)` - Live record
    /// - `None` - No record, or the record has expired
    pub async fn get(&self, key: &K) -> Option<V> {
        let mut entries = self.entries.write().await;

        let expired = match entries.get(key) {
            Some(entry) => entry.is_expired(),
            None => return None,
        };

        if expired {
            entries.remove(key);
            return None;
        }

        entries.get(key).map(|entry| entry.value.clone())
    }

    /// Atomically removes and returns the record for `key` when `predicate` accepts it.
    ///
    /// Used to resolve a pending session exactly once: of several callers racing on the
    /// same key, only the first with a matching record gets `Some`. A record the predicate
    /// rejects stays in place.
    ///
    /// # Returns
    /// - `Some(V)` - Record was live, matched, and has been removed
    /// - `None` - No record, expired record (now deleted), or predicate rejected it
    pub async fn take_if<F>(&self, key: &K, predicate: F) -> Option<V>
    where
        F: FnOnce(&V) -> bool,
    {
        let mut entries = self.entries.write().await;

        let (expired, matches) = match entries.get(key) {
            Some(entry) => (entry.is_expired(), predicate(&entry.value)),
            None => return None,
        };

        if expired {
            entries.remove(key);
            return None;
        }

        if !matches {
            return None;
        }

        entries.remove(key).map(|entry| entry.value)
    }

    /// Deletes the record for `key`. Absent keys are ignored.
    pub async fn remove(&self, key: &K) {
        self.entries.write().await.remove(key);
    }

    /// Deletes every record whose deadline has passed.
    ///
    /// # Returns
    /// - `usize` - Number of records removed
    pub async fn sweep(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.write().await;

        let before = entries.len();
        entries.retain(|_, entry| entry.expires_at > now);

        before - entries.len()
    }

    /// Number of records that have not yet expired.
    pub async fn len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .read()
            .await
            .values()
            .filter(|entry| entry.expires_at > now)
            .count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
