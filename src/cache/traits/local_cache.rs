use std::time::Duration;
use crate::cache::enums::cache_slot::CacheSlot;

/// Process-local key/value store the client mirrors entries into.
///
/// Eviction policy and capacity are entirely up to the implementation; the
/// client only relies on last-write-wins per key.
pub trait LocalCache<V>: Send + Sync {
    fn get(&self, key: &str) -> Option<CacheSlot<V>>;

    /// Stores `slot` under `key`. `ttl` of `None` keeps the entry until it is
    /// deleted or overwritten.
    fn set(&self, key: &str, slot: CacheSlot<V>, ttl: Option<Duration>);

    fn delete(&self, key: &str);

    fn clear(&self);
}
