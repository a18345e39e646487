use std::fmt;
use std::sync::Arc;
use log::{debug, info, warn};
use parking_lot::RwLock;
use tokio::sync::mpsc::UnboundedSender;
use crate::cache::enums::session_kind::SessionKind;
use crate::cache::errors::CacheError;
use crate::cache::structs::connection_manager::ConnectionManager;
use crate::cache::structs::session_hooks::SessionHooks;
use crate::cache::structs::session_signal::SessionSignal;
use crate::cache::traits::data_session::DataSession;
use crate::cache::traits::invalidation_session::InvalidationSession;
use crate::cache::traits::store_connector::StoreConnector;

impl fmt::Debug for ConnectionManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionManager")
            .field("connector", &"<dyn StoreConnector>")
            .field("data", &self.data.read().is_some())
            .field("invalidation", &self.invalidation.read().is_some())
            .finish()
    }
}

impl ConnectionManager {
    pub fn new(connector: Arc<dyn StoreConnector>, signals: UnboundedSender<SessionSignal>) -> Self {
        Self {
            connector,
            signals,
            data: RwLock::new(None),
            invalidation: RwLock::new(None),
        }
    }

    /// Opens both sessions concurrently and returns the invalidation session.
    ///
    /// Sessions replaced by this call are dropped without being closed; callers
    /// run [`close_clients`](Self::close_clients) first.
    pub async fn connect_clients(&self, generation: u64) -> Result<Arc<dyn InvalidationSession>, CacheError> {
        let data_hooks = SessionHooks::new(SessionKind::Data, generation, self.signals.clone());
        let invalidation_hooks = SessionHooks::new(SessionKind::Invalidation, generation, self.signals.clone());
        let (data, invalidation) = tokio::try_join!(
            self.connector.open_data(data_hooks),
            self.connector.open_invalidation(invalidation_hooks)
        )?;
        *self.data.write() = Some(data);
        *self.invalidation.write() = Some(invalidation.clone());
        info!("[CONNECTION] Sessions established (generation {})", generation);
        Ok(invalidation)
    }

    /// Closes both sessions. Each one is closed even if the other is missing or
    /// fails; the first failure is returned.
    pub async fn close_clients(&self) -> Result<(), CacheError> {
        let data = self.data.write().take();
        let invalidation = self.invalidation.write().take();
        let mut result = Ok(());
        match data {
            Some(session) => {
                if let Err(e) = session.close().await {
                    warn!("[CONNECTION] Failed to close data session: {}", e);
                    result = Err(e);
                }
            }
            None => debug!("[CONNECTION] No data session to close"),
        }
        match invalidation {
            Some(session) => {
                if let Err(e) = session.close().await {
                    warn!("[CONNECTION] Failed to close invalidation session: {}", e);
                    if result.is_ok() {
                        result = Err(e);
                    }
                }
            }
            None => debug!("[CONNECTION] No invalidation session to close"),
        }
        result
    }

    pub fn data_session(&self) -> Result<Arc<dyn DataSession>, CacheError> {
        self.data
            .read()
            .clone()
            .ok_or_else(|| CacheError::ConnectionError("Data session not connected".to_string()))
    }

    pub fn is_connected(&self) -> bool {
        self.data.read().is_some() && self.invalidation.read().is_some()
    }
}
