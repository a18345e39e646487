use std::sync::Arc;
use parking_lot::Mutex;
use redis::aio::MultiplexedConnection;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use crate::cache::structs::invalidation_event::InvalidationEvent;
use crate::cache::structs::session_hooks::SessionHooks;

pub type InvalidationSink = Arc<Mutex<Option<UnboundedSender<InvalidationEvent>>>>;

pub struct RedisInvalidationSession {
    pub(crate) connection: Mutex<Option<MultiplexedConnection>>,
    pub(crate) hooks: SessionHooks,
    pub(crate) sink: InvalidationSink,
    pub(crate) push_listener: Mutex<Option<JoinHandle<()>>>,
}
