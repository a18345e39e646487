use crate::cache::enums::client_state::ClientState;

/// State machine cell guarded by a single lock.
///
/// `epoch` identifies the reconnect loop allowed to drive transitions; bumping it
/// retires any loop started earlier.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConnectionStatus {
    pub state: ClientState,
    pub reconnecting: bool,
    pub epoch: u64,
}
