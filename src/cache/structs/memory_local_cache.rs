use std::sync::atomic::AtomicUsize;
use std::time::Instant;
use ahash::AHashMap;
use parking_lot::RwLock;
use crate::cache::enums::cache_slot::CacheSlot;

/// Writes between two sweeps of expired entries.
pub const SWEEP_INTERVAL: usize = 1024;

/// Default [`LocalCache`](crate::cache::traits::local_cache::LocalCache): an
/// unbounded hash map with per-entry deadlines.
///
/// An expired entry is dropped when its key is next read. Entries that are never
/// read again are dropped by a sweep that runs every [`SWEEP_INTERVAL`] writes,
/// or on demand through `purge_expired`.
pub struct MemoryLocalCache<V> {
    pub(crate) entries: RwLock<AHashMap<String, MemoryEntry<V>>>,
    pub(crate) writes: AtomicUsize,
}

#[derive(Debug, Clone)]
pub struct MemoryEntry<V> {
    pub slot: CacheSlot<V>,
    pub expires_at: Option<Instant>,
}
