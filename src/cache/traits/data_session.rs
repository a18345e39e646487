use async_trait::async_trait;
use crate::cache::errors::CacheError;

/// Session used for every read and write against the backing store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DataSession: Send + Sync {
    async fn set_many(&self, entries: &[(String, Vec<u8>)], ttl_secs: u64) -> Result<(), CacheError>;

    /// Refreshes the expiry of existing keys.
    async fn expire_many(&self, keys: &[String], ttl_secs: u64) -> Result<(), CacheError>;

    /// Batched read; the result is aligned with `keys`.
    async fn get_many(&self, keys: &[String], binary: bool) -> Result<Vec<Option<Vec<u8>>>, CacheError>;

    async fn delete_many(&self, keys: &[String]) -> Result<u64, CacheError>;

    /// One page of a cursor scan. A returned cursor of `0` ends the scan.
    async fn scan(&self, cursor: u64, pattern: &str, count: usize) -> Result<(u64, Vec<String>), CacheError>;

    /// Remaining TTL in seconds; `-1` for keys without expiry, `-2` for missing keys.
    async fn ttl(&self, key: &str) -> Result<i64, CacheError>;

    /// Enables key tracking with notifications redirected to `redirect_id`,
    /// suppressing notifications for this session's own writes.
    async fn enable_tracking(&self, redirect_id: i64) -> Result<(), CacheError>;

    async fn ping(&self) -> Result<(), CacheError>;

    async fn close(&self) -> Result<(), CacheError>;
}
