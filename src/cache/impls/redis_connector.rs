use std::sync::Arc;
use async_trait::async_trait;
use log::debug;
use redis::aio::MultiplexedConnection;
use redis::{AsyncConnectionConfig, PushInfo};
use tokio::sync::mpsc;
use crate::cache::errors::CacheError;
use crate::cache::structs::redis_connector::RedisConnector;
use crate::cache::structs::redis_data_session::RedisDataSession;
use crate::cache::structs::redis_invalidation_session::RedisInvalidationSession;
use crate::cache::structs::session_hooks::SessionHooks;
use crate::cache::traits::data_session::DataSession;
use crate::cache::traits::invalidation_session::InvalidationSession;
use crate::cache::traits::store_connector::StoreConnector;

impl RedisConnector {
    pub fn open(uri: &str) -> Result<Self, CacheError> {
        let client = redis::Client::open(Self::with_resp3(uri).as_str())
            .map_err(|e| CacheError::ConnectionError(format!("Failed to create Redis client: {}", e)))?;
        Ok(Self { client })
    }

    /// Forces RESP3 unless the URI already selects a protocol. Subscribing on a
    /// multiplexed connection and receiving push messages both require it.
    pub fn with_resp3(uri: &str) -> String {
        if uri.contains("protocol=") {
            return uri.to_string();
        }
        let separator = if uri.contains('?') { '&' } else { '?' };
        format!("{}{}protocol=resp3", uri, separator)
    }

    async fn open_connection(
        &self,
        hooks: &SessionHooks,
    ) -> Result<(MultiplexedConnection, mpsc::UnboundedReceiver<PushInfo>), CacheError> {
        let (push_sender, push_receiver) = mpsc::unbounded_channel();
        let config = AsyncConnectionConfig::new().set_push_sender(push_sender);
        let connection = self.client
            .get_multiplexed_async_connection_with_config(&config)
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Failed to open {} session: {}", hooks.kind(), e)))?;
        debug!("[Redis] Opened {} session (generation {})", hooks.kind(), hooks.generation());
        Ok((connection, push_receiver))
    }
}

#[async_trait]
impl StoreConnector for RedisConnector {
    async fn open_data(&self, hooks: SessionHooks) -> Result<Arc<dyn DataSession>, CacheError> {
        let (connection, pushes) = self.open_connection(&hooks).await?;
        Ok(Arc::new(RedisDataSession::new(connection, pushes, hooks)))
    }

    async fn open_invalidation(&self, hooks: SessionHooks) -> Result<Arc<dyn InvalidationSession>, CacheError> {
        let (connection, pushes) = self.open_connection(&hooks).await?;
        Ok(Arc::new(RedisInvalidationSession::new(connection, pushes, hooks)))
    }
}
