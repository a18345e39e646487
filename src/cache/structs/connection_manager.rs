use std::sync::Arc;
use parking_lot::RwLock;
use tokio::sync::mpsc::UnboundedSender;
use crate::cache::structs::session_signal::SessionSignal;
use crate::cache::traits::data_session::DataSession;
use crate::cache::traits::invalidation_session::InvalidationSession;
use crate::cache::traits::store_connector::StoreConnector;

/// Owns the data and invalidation sessions to the backing store.
pub struct ConnectionManager {
    pub(crate) connector: Arc<dyn StoreConnector>,
    pub(crate) signals: UnboundedSender<SessionSignal>,
    pub(crate) data: RwLock<Option<Arc<dyn DataSession>>>,
    pub(crate) invalidation: RwLock<Option<Arc<dyn InvalidationSession>>>,
}
