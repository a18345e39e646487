#![allow(dead_code)]
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::Notify;
use coherent_cache::cache::enums::client_state::ClientState;
use coherent_cache::cache::errors::CacheError;
use coherent_cache::cache::structs::cache_client::CacheClient;
use coherent_cache::cache::structs::invalidation_event::InvalidationEvent;
use coherent_cache::cache::structs::json_serializer::JsonSerializer;
use coherent_cache::cache::structs::memory_local_cache::MemoryLocalCache;
use coherent_cache::cache::structs::session_hooks::SessionHooks;
use coherent_cache::cache::traits::data_session::DataSession;
use coherent_cache::cache::traits::invalidation_session::InvalidationSession;
use coherent_cache::cache::traits::store_connector::StoreConnector;
use coherent_cache::config::structs::cache_config::CacheConfig;

pub type TestClient = CacheClient<Value>;

/// Observable state of the in-memory store.
#[derive(Default)]
pub struct FakeState {
    pub values: BTreeMap<String, (Vec<u8>, Option<u64>)>,
    pub get_requests: Vec<Vec<String>>,
    pub fail_get: bool,
    pub fail_connects: usize,
    pub missing_client_id: bool,
    pub next_client_id: i64,
    pub client_id_requests: usize,
    pub tracking_redirects: Vec<i64>,
    pub subscriptions: Vec<String>,
    pub set_ttls: Vec<u64>,
    pub expire_calls: Vec<(Vec<String>, u64)>,
    pub scan_patterns: Vec<String>,
    pub overlap_scan_pages: bool,
    pub data_hooks: Option<SessionHooks>,
    pub sink: Option<UnboundedSender<InvalidationEvent>>,
    pub closed_sessions: usize,
}

/// Store shared by every session the fake connector opens.
#[derive(Default)]
pub struct FakeStore {
    pub state: Mutex<FakeState>,
    /// Notified each time a batched read reaches the store.
    pub read_started: Notify,
    /// When set, batched reads wait for a notification on it.
    pub read_gate: Mutex<Option<Arc<Notify>>>,
}

impl FakeStore {
    pub fn new() -> Arc<Self> {
        let store = Self::default();
        store.state.lock().next_client_id = 1;
        Arc::new(store)
    }

    /// Writes a value the way another client would, without notifying anyone.
    pub fn put_remote(&self, key: &str, value: &Value) {
        let encoded = serde_json::to_vec(value).unwrap();
        self.state.lock().values.insert(key.to_string(), (encoded, None));
    }

    pub fn remote_value(&self, key: &str) -> Option<Value> {
        self.state.lock()
            .values
            .get(key)
            .map(|(bytes, _)| serde_json::from_slice(bytes).unwrap())
    }

    pub fn remote_keys(&self) -> Vec<String> {
        self.state.lock().values.keys().cloned().collect()
    }

    pub fn get_calls(&self) -> usize {
        self.state.lock().get_requests.len()
    }

    pub fn push_invalidation(&self, keys: &[&str]) {
        let sink = self.state.lock().sink.clone().expect("no invalidation subscription");
        sink.send(InvalidationEvent::keys(keys.iter().map(|key| key.to_string()).collect())).unwrap();
    }

    pub fn push_flush(&self) {
        let sink = self.state.lock().sink.clone().expect("no invalidation subscription");
        sink.send(InvalidationEvent::flush()).unwrap();
    }

    pub fn data_hooks(&self) -> SessionHooks {
        self.state.lock().data_hooks.clone().expect("data session never opened")
    }

    /// Reports the current data session as closed by the transport.
    pub fn drop_data_session(&self) {
        self.data_hooks().on_close();
    }

    pub fn hold_reads(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.read_gate.lock() = Some(gate.clone());
        gate
    }
}

pub struct FakeConnector {
    pub store: Arc<FakeStore>,
}

struct FakeDataSession {
    store: Arc<FakeStore>,
}

struct FakeInvalidationSession {
    store: Arc<FakeStore>,
}

#[async_trait]
impl StoreConnector for FakeConnector {
    async fn open_data(&self, hooks: SessionHooks) -> Result<Arc<dyn DataSession>, CacheError> {
        let mut state = self.store.state.lock();
        if state.fail_connects > 0 {
            state.fail_connects -= 1;
            return Err(CacheError::ConnectionError("connection refused".to_string()));
        }
        state.data_hooks = Some(hooks);
        Ok(Arc::new(FakeDataSession { store: self.store.clone() }))
    }

    async fn open_invalidation(&self, _hooks: SessionHooks) -> Result<Arc<dyn InvalidationSession>, CacheError> {
        Ok(Arc::new(FakeInvalidationSession { store: self.store.clone() }))
    }
}

#[async_trait]
impl DataSession for FakeDataSession {
    async fn set_many(&self, entries: &[(String, Vec<u8>)], ttl_secs: u64) -> Result<(), CacheError> {
        let mut state = self.store.state.lock();
        for (key, value) in entries {
            state.values.insert(key.clone(), (value.clone(), Some(ttl_secs)));
            state.set_ttls.push(ttl_secs);
        }
        Ok(())
    }

    async fn expire_many(&self, keys: &[String], ttl_secs: u64) -> Result<(), CacheError> {
        let mut state = self.store.state.lock();
        for key in keys {
            if let Some(entry) = state.values.get_mut(key) {
                entry.1 = Some(ttl_secs);
            }
        }
        state.expire_calls.push((keys.to_vec(), ttl_secs));
        Ok(())
    }

    async fn get_many(&self, keys: &[String], _binary: bool) -> Result<Vec<Option<Vec<u8>>>, CacheError> {
        self.store.state.lock().get_requests.push(keys.to_vec());
        self.store.read_started.notify_one();
        let gate = self.store.read_gate.lock().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        let state = self.store.state.lock();
        if state.fail_get {
            return Err(CacheError::StoreError("read failed".to_string()));
        }
        Ok(keys.iter().map(|key| state.values.get(key).map(|(bytes, _)| bytes.clone())).collect())
    }

    async fn delete_many(&self, keys: &[String]) -> Result<u64, CacheError> {
        let mut state = self.store.state.lock();
        Ok(keys.iter().filter(|key| state.values.remove(*key).is_some()).count() as u64)
    }

    async fn scan(&self, cursor: u64, pattern: &str, count: usize) -> Result<(u64, Vec<String>), CacheError> {
        let mut state = self.store.state.lock();
        state.scan_patterns.push(pattern.to_string());
        let matching: Vec<String> = state.values.keys().filter(|key| glob_match(pattern, key)).cloned().collect();
        let start = cursor as usize;
        let end = (start + count).min(matching.len());
        let mut page = matching[start..end].to_vec();
        if state.overlap_scan_pages && start > 0 {
            page.push(matching[start - 1].clone());
        }
        let next = if end >= matching.len() { 0 } else { end as u64 };
        Ok((next, page))
    }

    async fn ttl(&self, key: &str) -> Result<i64, CacheError> {
        Ok(match self.store.state.lock().values.get(key) {
            None => -2,
            Some((_, None)) => -1,
            Some((_, Some(ttl))) => *ttl as i64,
        })
    }

    async fn enable_tracking(&self, redirect_id: i64) -> Result<(), CacheError> {
        self.store.state.lock().tracking_redirects.push(redirect_id);
        Ok(())
    }

    async fn ping(&self) -> Result<(), CacheError> {
        Ok(())
    }

    async fn close(&self) -> Result<(), CacheError> {
        self.store.state.lock().closed_sessions += 1;
        Ok(())
    }
}

#[async_trait]
impl InvalidationSession for FakeInvalidationSession {
    async fn client_id(&self) -> Result<Option<i64>, CacheError> {
        let mut state = self.store.state.lock();
        state.client_id_requests += 1;
        if state.missing_client_id {
            return Ok(None);
        }
        let id = state.next_client_id;
        state.next_client_id += 1;
        Ok(Some(id))
    }

    async fn subscribe(&self, channel: &str, sink: UnboundedSender<InvalidationEvent>) -> Result<(), CacheError> {
        let mut state = self.store.state.lock();
        state.subscriptions.push(channel.to_string());
        state.sink = Some(sink);
        Ok(())
    }

    async fn close(&self) -> Result<(), CacheError> {
        self.store.state.lock().closed_sessions += 1;
        Ok(())
    }
}

/// Redis-style glob supporting `*`, `?` and backslash escapes.
pub fn glob_match(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();
    glob_match_from(&pattern, &text)
}

fn glob_match_from(pattern: &[char], text: &[char]) -> bool {
    match pattern.first() {
        None => text.is_empty(),
        Some('*') => (0..=text.len()).any(|skip| glob_match_from(&pattern[1..], &text[skip..])),
        Some('?') => !text.is_empty() && glob_match_from(&pattern[1..], &text[1..]),
        Some('\\') if pattern.len() > 1 => {
            text.first() == Some(&pattern[1]) && glob_match_from(&pattern[2..], &text[1..])
        }
        Some(c) => text.first() == Some(c) && glob_match_from(&pattern[1..], &text[1..]),
    }
}

pub fn create_test_config() -> CacheConfig {
    CacheConfig {
        key_prefix: "cache:".to_string(),
        ttl_default: 60,
        scan_batch_size: 2,
        ..CacheConfig::default()
    }
}

pub fn create_test_client(store: &Arc<FakeStore>, config: CacheConfig) -> TestClient {
    CacheClient::new(
        config,
        Arc::new(FakeConnector { store: store.clone() }),
        Arc::new(JsonSerializer::new()),
        Arc::new(MemoryLocalCache::new()),
    )
}

pub async fn create_connected_client(store: &Arc<FakeStore>) -> TestClient {
    let client = create_test_client(store, create_test_config());
    client.connect().await.unwrap();
    client
}

/// Polls until `predicate` holds for the client state, failing after `limit`.
pub async fn wait_for_state<F>(client: &TestClient, limit: Duration, predicate: F) -> ClientState
where
    F: Fn(ClientState) -> bool,
{
    tokio::time::timeout(limit, async {
        loop {
            let state = client.state();
            if predicate(state) {
                return state;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("client did not reach the expected state in time")
}

/// Yields until the event pump has applied queued invalidations.
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(20)).await;
}
