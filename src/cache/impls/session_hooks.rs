use log::debug;
use tokio::sync::mpsc::UnboundedSender;
use crate::cache::enums::session_kind::SessionKind;
use crate::cache::enums::session_signal_kind::SessionSignalKind;
use crate::cache::structs::session_hooks::SessionHooks;
use crate::cache::structs::session_signal::SessionSignal;

impl SessionHooks {
    pub fn new(kind: SessionKind, generation: u64, sender: UnboundedSender<SessionSignal>) -> Self {
        Self { kind, generation, sender }
    }

    pub fn kind(&self) -> SessionKind {
        self.kind
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn on_error(&self, message: impl Into<String>) {
        self.raise(SessionSignalKind::Error(message.into()));
    }

    pub fn on_close(&self) {
        self.raise(SessionSignalKind::Closed);
    }

    fn raise(&self, kind: SessionSignalKind) {
        let signal = SessionSignal {
            session: self.kind,
            generation: self.generation,
            kind,
        };
        // The receiver only goes away together with the client.
        if self.sender.send(signal).is_err() {
            debug!("[CONNECTION] {} session signal dropped, client is gone", self.kind);
        }
    }
}
