/// What the local cache holds under a physical key.
///
/// A missing key is represented by `None` at the [`LocalCache`](crate::cache::traits::local_cache::LocalCache)
/// boundary, so together with `Option` this is the `Value | InFlight | Absent` triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheSlot<V> {
    /// A mirrored value, fresh until invalidated or expired.
    Value(V),
    /// A fetch for this key is outstanding. Carries the id of the `mget` call
    /// that placed it; only that call may resolve or remove it.
    InFlight(u64),
}
