use std::fmt;
use crate::cache::enums::client_state::ClientState;

impl fmt::Display for ClientState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientState::Disconnected => write!(f, "disconnected"),
            ClientState::Connecting => write!(f, "connecting"),
            ClientState::Ready => write!(f, "ready"),
            ClientState::Reconnecting => write!(f, "reconnecting"),
        }
    }
}
