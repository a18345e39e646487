use tokio::sync::mpsc::UnboundedSender;
use crate::cache::enums::session_kind::SessionKind;
use crate::cache::structs::session_signal::SessionSignal;

/// Error/close handlers wired into a session when it is opened.
///
/// Signals carry the connection generation they belong to so that late
/// notifications from replaced sessions can be told apart.
#[derive(Debug, Clone)]
pub struct SessionHooks {
    pub(crate) kind: SessionKind,
    pub(crate) generation: u64,
    pub(crate) sender: UnboundedSender<SessionSignal>,
}
