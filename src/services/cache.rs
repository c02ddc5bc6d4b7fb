//! Expiring memoization
//!
//! Values are kept for a fixed time-to-live measured by a pluggable clock.
//! Expired entries are treated as absent and dropped on access.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use tracing::debug;

/// Source of the current instant
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock backed by `Instant::now`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Manually advanced clock, for tests and replay
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Arc::new(Mutex::new(Instant::now())),
        }
    }

    /// Move the clock forward; clones share the same time
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *now += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}

struct Entry<V> {
    stored_at: Instant,
    value: V,
}

/// Key-value cache whose entries expire after `ttl`
pub struct ExpiringCache<K, V, C = SystemClock> {
    ttl: Duration,
    clock: C,
    entries: Mutex<HashMap<K, Entry<V>>>,
}

impl<K, V, C> ExpiringCache<K, V, C>
where
    K: Eq + Hash,
    V: Clone,
    C: Clock,
{
    pub fn with_clock(ttl: Duration, clock: C) -> Self {
        Self {
            ttl,
            clock,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Fresh value for `key`, if any
    pub fn get(&self, key: &K) -> Option<V> {
        let now = self.clock.now();
        let mut entries = self.lock();

        let fresh = match entries.get(key) {
            Some(entry) => self.is_fresh(entry, now),
            None => {
                debug!("Cache MISS");
                return None;
            }
        };

        if fresh {
            debug!("Cache HIT");
            entries.get(key).map(|entry| entry.value.clone())
        } else {
            debug!("Cache EXPIRED");
            entries.remove(key);
            None
        }
    }

    /// Store a value, restarting its time-to-live
    ///
    /// Expired entries under other keys are dropped first, so keys that are
    /// never looked up again do not accumulate.
    pub fn put(&self, key: K, value: V) {
        let stored_at = self.clock.now();
        let ttl = self.ttl;
        let mut entries = self.lock();
        entries.retain(|_, entry| stored_at.saturating_duration_since(entry.stored_at) < ttl);
        entries.insert(key, Entry { stored_at, value });
        debug!("Cache PUT");
    }

    /// Return the fresh value for `key`, or compute and store it
    ///
    /// Errors from `compute` are returned as-is and nothing is cached.
    pub fn get_or_try_insert_with<E, F>(&self, key: K, compute: F) -> Result<V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        if let Some(value) = self.get(&key) {
            return Ok(value);
        }

        let value = compute()?;
        self.put(key, value.clone());
        Ok(value)
    }

    /// Number of stored entries, including expired ones not yet purged
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_fresh(&self, entry: &Entry<V>, now: Instant) -> bool {
        now.saturating_duration_since(entry.stored_at) < self.ttl
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<K, Entry<V>>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}
