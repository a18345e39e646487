use thiserror::Error;
use crate::cache::enums::client_state::ClientState;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Client not ready (state: {0})")]
    NotReady(ClientState),

    #[error("Store did not return a client id for the invalidation session")]
    MissingClientId,

    #[error("Ping error: {0}")]
    PingError(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Store error: {0}")]
    StoreError(String),

    #[error("Redis error: {0}")]
    RedisError(#[from] redis::RedisError),
}
