use serde::{
    Deserialize,
    Serialize
};
use crate::config::enums::value_encoding::ValueEncoding;

/// Client settings. Missing fields fall back to their defaults when
/// deserialized, so partial TOML tables merge over [`CacheConfig::default`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CacheConfig {
    pub store_uri: String,
    /// Default expiry in seconds for entries written without an explicit TTL.
    pub ttl_default: u64,
    pub key_prefix: String,
    pub scan_batch_size: usize,
    pub encoding: ValueEncoding,
}
