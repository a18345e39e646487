use std::time::Duration;

/// Remaining lifetime of a key as reported by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyTtl {
    /// The key does not exist at the store.
    Missing,
    /// The key exists without an expiry.
    Persistent,
    Expires(Duration),
}
