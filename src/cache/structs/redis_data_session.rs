use parking_lot::Mutex;
use redis::aio::MultiplexedConnection;
use tokio::task::JoinHandle;
use crate::cache::structs::session_hooks::SessionHooks;

pub struct RedisDataSession {
    pub(crate) connection: Mutex<Option<MultiplexedConnection>>,
    pub(crate) hooks: SessionHooks,
    pub(crate) push_listener: Mutex<Option<JoinHandle<()>>>,
}
