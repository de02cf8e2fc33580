// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! TTL-bounded, read-mostly caches shared across requests.
//!
//! Concurrent misses on a cold key may each refetch; inserts are idempotent
//! so the last writer wins and the entries converge.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::clock::{ClockSource, SystemClock};
use crate::status::StatusTable;

/// Default lifetime of cached entries.
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

#[derive(Debug, Clone)]
struct Entry<V> {
    value: V,
    stored_ms: u64,
}

/// A string-keyed cache whose entries expire after a fixed TTL.
pub struct TtlCache<V> {
    entries: RwLock<HashMap<String, Entry<V>>>,
    clock: Arc<dyn ClockSource>,
    ttl_ms: u64,
}

impl<V: Clone> TtlCache<V> {
    pub fn new(clock: Arc<dyn ClockSource>, ttl: Duration) -> Self {
        TtlCache {
            entries: RwLock::new(HashMap::new()),
            clock,
            ttl_ms: u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX),
        }
    }

    /// Returns the cached value if present and not yet expired.
    pub fn get(&self, key: &str) -> Option<V> {
        let now = self.clock.now_ms();
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries
            .get(key)
            .filter(|entry| now.saturating_sub(entry.stored_ms) < self.ttl_ms)
            .map(|entry| entry.value.clone())
    }

    /// Stores `value`, replacing any previous entry and restarting its TTL.
    pub fn insert(&self, key: impl Into<String>, value: V) {
        let stored_ms = self.clock.now_ms();
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.into(), Entry { value, stored_ms });
    }

    pub fn invalidate(&self, key: &str) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.remove(key);
    }

    /// Drops every expired entry. Returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = self.clock.now_ms();
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        let before = entries.len();
        entries.retain(|_, entry| now.saturating_sub(entry.stored_ms) < self.ttl_ms);
        before - entries.len()
    }

    /// Number of stored entries, expired or not.
    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The per-project lookups the topology builder reuses between requests.
pub struct TopologyCache {
    /// Status tables keyed by project key.
    pub status_tables: TtlCache<StatusTable>,
    /// Discovered size field id keyed by project key. `None` records that
    /// discovery ran and found nothing.
    pub size_fields: TtlCache<Option<String>>,
}

impl TopologyCache {
    pub fn new(clock: Arc<dyn ClockSource>, ttl: Duration) -> Self {
        TopologyCache {
            status_tables: TtlCache::new(clock.clone(), ttl),
            size_fields: TtlCache::new(clock, ttl),
        }
    }
}

impl Default for TopologyCache {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock), DEFAULT_TTL)
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
