use crate::cache::structs::cache_client::CacheClientInner;

/// Markers placed by one `mget` call. Dropping the guard removes those still
/// in place, including when the call's future is dropped mid-fetch.
pub struct InFlightGuard<'a, V> {
    pub(crate) client: &'a CacheClientInner<V>,
    pub(crate) owner: u64,
    pub(crate) keys: Vec<String>,
}
