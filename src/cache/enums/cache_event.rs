use std::sync::Arc;
use crate::cache::enums::client_state::ClientState;
use crate::cache::errors::CacheError;

/// Notifications published on the client's broadcast channel.
#[derive(Debug, Clone)]
pub enum CacheEvent {
    /// Non-fatal failure: absorbed fetch errors, failed (re)connect attempts, session errors.
    Error(Arc<CacheError>),
    /// The client lost a session and entered the reconnect loop.
    Reconnecting,
    StateChanged(ClientState),
}
