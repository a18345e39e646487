use std::sync::Arc;
use async_trait::async_trait;
use crate::cache::errors::CacheError;
use crate::cache::structs::session_hooks::SessionHooks;
use crate::cache::traits::data_session::DataSession;
use crate::cache::traits::invalidation_session::InvalidationSession;

/// Opens sessions to the backing store.
///
/// Implementations must report session failures and closes through the
/// supplied [`SessionHooks`]; it is the only way the client learns a session died.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StoreConnector: Send + Sync {
    async fn open_data(&self, hooks: SessionHooks) -> Result<Arc<dyn DataSession>, CacheError>;

    async fn open_invalidation(&self, hooks: SessionHooks) -> Result<Arc<dyn InvalidationSession>, CacheError>;
}
