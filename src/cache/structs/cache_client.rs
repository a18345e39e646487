use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::time::Duration;
use parking_lot::Mutex;
use tokio::sync::{broadcast, mpsc, Notify};
use crate::cache::enums::cache_event::CacheEvent;
use crate::cache::structs::connection_manager::ConnectionManager;
use crate::cache::structs::connection_status::ConnectionStatus;
use crate::cache::structs::invalidation_event::InvalidationEvent;
use crate::cache::structs::session_signal::SessionSignal;
use crate::cache::traits::local_cache::LocalCache;
use crate::cache::traits::serializer::Serializer;
use crate::config::structs::cache_config::CacheConfig;

/// Pause between two reconnect attempts.
pub const RECONNECT_INTERVAL: Duration = Duration::from_secs(1);

/// Capacity of the event broadcast channel; slow subscribers observe `Lagged`.
pub const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Two-tier cache handle. Cloning is cheap and every clone drives the same client.
pub struct CacheClient<V> {
    pub(crate) inner: Arc<CacheClientInner<V>>,
}

pub(crate) type PumpReceivers = (
    mpsc::UnboundedReceiver<SessionSignal>,
    mpsc::UnboundedReceiver<InvalidationEvent>,
);

pub struct CacheClientInner<V> {
    pub(crate) config: CacheConfig,
    pub(crate) serializer: Arc<dyn Serializer<V>>,
    pub(crate) local: Arc<dyn LocalCache<V>>,
    pub(crate) connections: ConnectionManager,
    pub(crate) status: Mutex<ConnectionStatus>,
    pub(crate) generation: AtomicU64,
    /// Id source for in-flight markers, one per `mget` call.
    pub(crate) next_fetch: AtomicU64,
    /// Serializes connect, close and reconnect attempts.
    pub(crate) transition: tokio::sync::Mutex<()>,
    /// Serializes in-flight marking against local writes.
    pub(crate) local_guard: Mutex<()>,
    pub(crate) shutdown: Notify,
    pub(crate) events: broadcast::Sender<CacheEvent>,
    pub(crate) invalidations: mpsc::UnboundedSender<InvalidationEvent>,
    pub(crate) pump: Mutex<Option<PumpReceivers>>,
}
