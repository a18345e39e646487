use async_trait::async_trait;
use tokio::sync::mpsc::UnboundedSender;
use crate::cache::errors::CacheError;
use crate::cache::structs::invalidation_event::InvalidationEvent;

/// Session dedicated to receiving invalidation notifications.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InvalidationSession: Send + Sync {
    /// Connection identifier other sessions redirect tracking notifications to.
    async fn client_id(&self) -> Result<Option<i64>, CacheError>;

    /// Subscribes to `channel`; every decoded notification is sent into `sink`.
    async fn subscribe(&self, channel: &str, sink: UnboundedSender<InvalidationEvent>) -> Result<(), CacheError>;

    async fn close(&self) -> Result<(), CacheError>;
}
