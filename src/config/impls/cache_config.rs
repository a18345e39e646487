use std::time::Duration;
use crate::config::enums::value_encoding::ValueEncoding;
use crate::config::structs::cache_config::CacheConfig;

/// Separator appended to a key prefix that does not already end with it.
pub const KEY_SEPARATOR: char = ':';

/// Smallest expiry ever sent to the store.
pub const MIN_TTL_SECS: u64 = 1;

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            store_uri: "redis://127.0.0.1:6379".to_string(),
            ttl_default: 3600,
            key_prefix: "cache:".to_string(),
            scan_batch_size: 100,
            encoding: ValueEncoding::json,
        }
    }
}

impl CacheConfig {
    /// Returns the config with the prefix terminated by [`KEY_SEPARATOR`] and
    /// numeric settings raised to their minimums. An empty prefix stays empty.
    pub fn normalized(mut self) -> Self {
        if !self.key_prefix.is_empty() && !self.key_prefix.ends_with(KEY_SEPARATOR) {
            self.key_prefix.push(KEY_SEPARATOR);
        }
        self.ttl_default = self.ttl_default.max(MIN_TTL_SECS);
        self.scan_batch_size = self.scan_batch_size.max(1);
        self
    }

    pub fn default_ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_default.max(MIN_TTL_SECS))
    }

    /// Whole seconds to send to the store; sub-second remainders are dropped and
    /// the result is never below [`MIN_TTL_SECS`].
    pub fn resolve_ttl(&self, ttl: Option<Duration>) -> u64 {
        ttl.unwrap_or_else(|| self.default_ttl())
            .as_secs()
            .max(MIN_TTL_SECS)
    }

    pub fn physical_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }

    pub fn logical_key<'a>(&self, physical: &'a str) -> Option<&'a str> {
        physical.strip_prefix(self.key_prefix.as_str())
    }

    /// SCAN pattern restricted to this namespace. The prefix is matched
    /// literally; `pattern` keeps its glob meaning.
    pub fn scan_pattern(&self, pattern: &str) -> String {
        let mut scan = Self::escape_glob(&self.key_prefix);
        scan.push_str(pattern);
        scan
    }

    pub fn escape_glob(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            if matches!(c, '*' | '?' | '[' | ']' | '\\') {
                escaped.push('\\');
            }
            escaped.push(c);
        }
        escaped
    }
}
