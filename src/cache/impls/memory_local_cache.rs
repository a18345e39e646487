use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};
use ahash::AHashMap;
use log::debug;
use parking_lot::RwLock;
use crate::cache::enums::cache_slot::CacheSlot;
use crate::cache::structs::memory_local_cache::{MemoryEntry, MemoryLocalCache, SWEEP_INTERVAL};
use crate::cache::traits::local_cache::LocalCache;

impl<V> MemoryLocalCache<V> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(AHashMap::new()),
            writes: AtomicUsize::new(0),
        }
    }

    /// Number of stored entries, expired ones included until they are read or swept.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Drops every expired entry and returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let removed = Self::sweep(&mut self.entries.write(), Instant::now());
        if removed > 0 {
            debug!("[CACHE] Swept {} expired local entries", removed);
        }
        removed
    }

    fn sweep(entries: &mut AHashMap<String, MemoryEntry<V>>, now: Instant) -> usize {
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now));
        before - entries.len()
    }
}

impl<V> Default for MemoryLocalCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> MemoryEntry<V> {
    pub fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|deadline| deadline <= now)
    }
}

impl<V: Clone + Send + Sync> LocalCache<V> for MemoryLocalCache<V> {
    fn get(&self, key: &str) -> Option<CacheSlot<V>> {
        let now = Instant::now();
        {
            let entries = self.entries.read();
            match entries.get(key) {
                None => return None,
                Some(entry) if !entry.is_expired(now) => return Some(entry.slot.clone()),
                Some(_) => {}
            }
        }
        let mut entries = self.entries.write();
        if entries.get(key).is_some_and(|entry| entry.is_expired(now)) {
            entries.remove(key);
        }
        None
    }

    fn set(&self, key: &str, slot: CacheSlot<V>, ttl: Option<Duration>) {
        let now = Instant::now();
        let expires_at = ttl.map(|ttl| now + ttl);
        let mut entries = self.entries.write();
        if (self.writes.fetch_add(1, Ordering::Relaxed) + 1) % SWEEP_INTERVAL == 0 {
            Self::sweep(&mut entries, now);
        }
        entries.insert(key.to_string(), MemoryEntry { slot, expires_at });
    }

    fn delete(&self, key: &str) {
        self.entries.write().remove(key);
    }

    fn clear(&self) {
        self.entries.write().clear();
    }
}
