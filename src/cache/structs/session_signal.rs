use crate::cache::enums::session_kind::SessionKind;
use crate::cache::enums::session_signal_kind::SessionSignalKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSignal {
    pub session: SessionKind,
    pub generation: u64,
    pub kind: SessionSignalKind,
}
