use serde::{Deserialize, Serialize};

/// Connectivity state of a [`CacheClient`](crate::cache::structs::cache_client::CacheClient).
///
/// Transitions are owned by `connect`, `close` and the reconnect loop:
///
/// ```text
/// Disconnected -> Connecting -> Ready -> Reconnecting -> Connecting -> Ready
/// ```
///
/// Every data operation requires `Ready`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClientState {
    #[default]
    Disconnected,
    Connecting,
    Ready,
    Reconnecting,
}
