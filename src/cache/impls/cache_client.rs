use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;
use ahash::{AHashMap, AHashSet};
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::broadcast;
use crate::cache::enums::cache_event::CacheEvent;
use crate::cache::enums::cache_slot::CacheSlot;
use crate::cache::enums::client_state::ClientState;
use crate::cache::enums::key_ttl::KeyTtl;
use crate::cache::errors::CacheError;
use crate::cache::structs::cache_client::{CacheClient, CacheClientInner};
use crate::cache::structs::in_flight_guard::InFlightGuard;
use crate::cache::structs::json_serializer::JsonSerializer;
use crate::cache::structs::memory_local_cache::MemoryLocalCache;
use crate::cache::structs::message_pack_serializer::MessagePackSerializer;
use crate::cache::structs::redis_connector::RedisConnector;
use crate::cache::traits::local_cache::LocalCache;
use crate::cache::traits::serializer::Serializer;
use crate::cache::traits::store_connector::StoreConnector;
use crate::config::enums::value_encoding::ValueEncoding;
use crate::config::structs::cache_config::CacheConfig;

impl<V> Clone for CacheClient<V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<V: Serialize + DeserializeOwned + Clone + Send + Sync + 'static> CacheClient<V> {
    /// Client backed by Redis, an in-memory local cache and the serializer
    /// selected by `config.encoding`. Does not connect.
    pub fn redis(config: CacheConfig) -> Result<Self, CacheError> {
        let connector = Arc::new(RedisConnector::open(&config.store_uri)?);
        let serializer: Arc<dyn Serializer<V>> = match config.encoding {
            ValueEncoding::json => Arc::new(JsonSerializer::new()),
            ValueEncoding::msgpack => Arc::new(MessagePackSerializer::new()),
        };
        Ok(Self::new(config, connector, serializer, Arc::new(MemoryLocalCache::new())))
    }
}

impl<V: Clone + Send + Sync + 'static> CacheClient<V> {
    pub fn new(
        config: CacheConfig,
        connector: Arc<dyn StoreConnector>,
        serializer: Arc<dyn Serializer<V>>,
        local: Arc<dyn LocalCache<V>>,
    ) -> Self {
        Self {
            inner: Arc::new(CacheClientInner::new(config.normalized(), connector, serializer, local)),
        }
    }

    pub fn config(&self) -> &CacheConfig {
        &self.inner.config
    }

    pub fn state(&self) -> ClientState {
        self.inner.state()
    }

    /// Receiver for error, reconnect and state-change events. Events published
    /// before the call are not replayed.
    pub fn subscribe(&self) -> broadcast::Receiver<CacheEvent> {
        self.inner.events.subscribe()
    }

    pub async fn connect(&self) -> Result<(), CacheError> {
        self.inner.connect().await
    }

    pub async fn close(&self) -> Result<(), CacheError> {
        self.inner.close().await
    }

    pub async fn ping(&self) -> Result<(), CacheError> {
        self.inner.ensure_ready()?;
        let data = self.inner.connections.data_session()
            .map_err(|e| CacheError::PingError(e.to_string()))?;
        data.ping().await.map_err(|e| CacheError::PingError(e.to_string()))
    }

    pub async fn set(&self, key: &str, value: V, ttl: Option<Duration>) -> Result<(), CacheError> {
        self.mset(vec![(key.to_string(), value)], ttl).await
    }

    /// Writes every entry to the local cache first, then to the store with the
    /// resolved TTL followed by an expiry refresh.
    pub async fn mset<K: AsRef<str>>(&self, entries: Vec<(K, V)>, ttl: Option<Duration>) -> Result<(), CacheError> {
        let inner = &self.inner;
        inner.ensure_ready()?;
        if entries.is_empty() {
            return Ok(());
        }
        let ttl_secs = inner.config.resolve_ttl(ttl);
        let local_ttl = Duration::from_secs(ttl_secs);

        let mut encoded = Vec::with_capacity(entries.len());
        for (key, value) in &entries {
            encoded.push((inner.config.physical_key(key.as_ref()), inner.serializer.serialize(value)?));
        }
        {
            let _guard = inner.local_guard.lock();
            for ((physical, _), (_, value)) in encoded.iter().zip(entries) {
                inner.local.set(physical, CacheSlot::Value(value), Some(local_ttl));
            }
        }

        let data = inner.connections.data_session()?;
        data.set_many(&encoded, ttl_secs).await?;
        let keys: Vec<String> = encoded.into_iter().map(|(physical, _)| physical).collect();
        data.expire_many(&keys, ttl_secs).await?;
        debug!("[CACHE] Stored {} keys with ttl {}s", keys.len(), ttl_secs);
        Ok(())
    }

    pub async fn get(&self, key: &str) -> Result<Option<V>, CacheError> {
        Ok(self.mget(&[key]).await?.pop().flatten())
    }

    /// Results are aligned with `keys`. A key another call is already fetching
    /// resolves to `None` instead of waiting. Store failures degrade to `None`
    /// and are published as [`CacheEvent::Error`].
    pub async fn mget<K: AsRef<str>>(&self, keys: &[K]) -> Result<Vec<Option<V>>, CacheError> {
        let inner = &self.inner;
        inner.ensure_ready()?;

        let owner = inner.next_fetch.fetch_add(1, Ordering::Relaxed);
        let mut marked = InFlightGuard::new(inner, owner);
        let mut results: Vec<Option<V>> = Vec::with_capacity(keys.len());
        let mut waiting: Vec<(usize, usize)> = Vec::new();
        {
            let mut positions: AHashMap<String, usize> = AHashMap::new();
            let _guard = inner.local_guard.lock();
            for (index, key) in keys.iter().enumerate() {
                let physical = inner.config.physical_key(key.as_ref());
                if let Some(&slot) = positions.get(&physical) {
                    waiting.push((index, slot));
                    results.push(None);
                    continue;
                }
                match inner.local.get(&physical) {
                    Some(CacheSlot::Value(value)) => results.push(Some(value)),
                    Some(CacheSlot::InFlight(_)) => results.push(None),
                    None => {
                        inner.local.set(&physical, CacheSlot::InFlight(owner), None);
                        positions.insert(physical.clone(), marked.keys.len());
                        waiting.push((index, marked.keys.len()));
                        marked.keys.push(physical);
                        results.push(None);
                    }
                }
            }
        }
        if marked.keys.is_empty() {
            return Ok(results);
        }

        let fetched = self.fetch(&marked).await;
        for (index, slot) in waiting {
            results[index] = fetched[slot].clone();
        }
        Ok(results)
    }

    /// Reads the marked keys. Markers not replaced by a value here are removed
    /// when `marked` is dropped.
    async fn fetch(&self, marked: &InFlightGuard<'_, V>) -> Vec<Option<V>> {
        let inner = &self.inner;
        let response = match inner.connections.data_session() {
            Ok(data) => data.get_many(&marked.keys, inner.serializer.is_binary()).await,
            Err(e) => Err(e),
        };
        match response {
            Ok(encoded) => {
                let mut encoded = encoded.into_iter();
                marked.keys.iter()
                    .map(|physical| self.settle(marked, physical, encoded.next().flatten()))
                    .collect()
            }
            Err(e) => {
                warn!("[CACHE] Batched read of {} keys failed: {}", marked.keys.len(), e);
                inner.emit_error(e);
                vec![None; marked.keys.len()]
            }
        }
    }

    /// Resolves one marked key. The value is mirrored only while the marker
    /// this call placed is still in place.
    fn settle(&self, marked: &InFlightGuard<'_, V>, physical: &str, encoded: Option<Vec<u8>>) -> Option<V> {
        let inner = &self.inner;
        let bytes = encoded?;
        match inner.serializer.deserialize(&bytes) {
            Ok(value) => {
                let _guard = inner.local_guard.lock();
                if marked.owns(inner.local.get(physical).as_ref()) {
                    inner.local.set(physical, CacheSlot::Value(value.clone()), Some(inner.config.default_ttl()));
                }
                Some(value)
            }
            Err(e) => {
                warn!("[CACHE] Failed to decode {}: {}", physical, e);
                inner.emit_error(e);
                None
            }
        }
    }

    pub async fn delete(&self, key: &str) -> Result<u64, CacheError> {
        self.mdel(&[key]).await
    }

    /// Deletes at the store, then locally. The local entries are dropped even
    /// when the store call fails.
    pub async fn mdel<K: AsRef<str>>(&self, keys: &[K]) -> Result<u64, CacheError> {
        let inner = &self.inner;
        inner.ensure_ready()?;
        if keys.is_empty() {
            return Ok(0);
        }
        let physical: Vec<String> = keys.iter().map(|key| inner.config.physical_key(key.as_ref())).collect();
        let removed = match inner.connections.data_session() {
            Ok(data) => data.delete_many(&physical).await,
            Err(e) => Err(e),
        };
        {
            let _guard = inner.local_guard.lock();
            for key in &physical {
                inner.local.delete(key);
            }
        }
        removed
    }

    /// Removes every key under the prefix at the store and empties the whole
    /// local cache. Returns the number of store keys removed.
    pub async fn clear(&self) -> Result<u64, CacheError> {
        let inner = &self.inner;
        inner.ensure_ready()?;
        let purged = self.purge_namespace().await;
        {
            let _guard = inner.local_guard.lock();
            inner.local.clear();
        }
        let removed = purged?;
        info!("[CACHE] Cleared {} keys under '{}'", removed, inner.config.key_prefix);
        Ok(removed)
    }

    async fn purge_namespace(&self) -> Result<u64, CacheError> {
        let inner = &self.inner;
        let physical = self.scan_namespace("*").await?;
        let data = inner.connections.data_session()?;
        let mut removed = 0;
        for chunk in physical.chunks(inner.config.scan_batch_size) {
            removed += data.delete_many(chunk).await?;
        }
        Ok(removed)
    }

    /// Logical keys under the prefix matching `pattern` (default `*`), without duplicates.
    pub async fn keys(&self, pattern: Option<&str>) -> Result<Vec<String>, CacheError> {
        let inner = &self.inner;
        inner.ensure_ready()?;
        let physical = self.scan_namespace(pattern.unwrap_or("*")).await?;
        Ok(physical.iter()
            .filter_map(|key| inner.config.logical_key(key))
            .map(str::to_string)
            .collect())
    }

    /// Physical keys matching `pattern` inside the namespace, deduplicated in scan order.
    async fn scan_namespace(&self, pattern: &str) -> Result<Vec<String>, CacheError> {
        let inner = &self.inner;
        let data = inner.connections.data_session()?;
        let scan_pattern = inner.config.scan_pattern(pattern);
        let mut seen = AHashSet::new();
        let mut found = Vec::new();
        let mut cursor = 0;
        loop {
            let (next, page) = data.scan(cursor, &scan_pattern, inner.config.scan_batch_size).await?;
            for key in page {
                if seen.insert(key.clone()) {
                    found.push(key);
                }
            }
            if next == 0 {
                break;
            }
            cursor = next;
        }
        debug!("[CACHE] Scan of '{}' found {} keys", scan_pattern, found.len());
        Ok(found)
    }

    /// Remaining lifetime at the store. A key the store no longer holds is
    /// evicted from the local cache as well.
    pub async fn ttl(&self, key: &str) -> Result<KeyTtl, CacheError> {
        let inner = &self.inner;
        inner.ensure_ready()?;
        let physical = inner.config.physical_key(key);
        let data = inner.connections.data_session()?;
        match data.ttl(&physical).await? {
            -1 => Ok(KeyTtl::Persistent),
            remaining if remaining < 0 => {
                let _guard = inner.local_guard.lock();
                inner.local.delete(&physical);
                Ok(KeyTtl::Missing)
            }
            remaining => Ok(KeyTtl::Expires(Duration::from_secs(remaining as u64))),
        }
    }

    /// Writes to the local cache only; the store is not touched.
    pub fn set_local(&self, key: &str, value: V, ttl: Option<Duration>) -> Result<(), CacheError> {
        let inner = &self.inner;
        inner.ensure_ready()?;
        let local_ttl = Duration::from_secs(inner.config.resolve_ttl(ttl));
        let _guard = inner.local_guard.lock();
        inner.local.set(&inner.config.physical_key(key), CacheSlot::Value(value), Some(local_ttl));
        Ok(())
    }
}
