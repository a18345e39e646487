use std::sync::Arc;
use async_trait::async_trait;
use log::{debug, info, warn};
use parking_lot::Mutex;
use redis::aio::MultiplexedConnection;
use redis::{PushInfo, PushKind, Value};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use crate::cache::errors::CacheError;
use crate::cache::structs::invalidation_event::{InvalidationEvent, INVALIDATION_CHANNEL};
use crate::cache::structs::redis_invalidation_session::{InvalidationSink, RedisInvalidationSession};
use crate::cache::structs::session_hooks::SessionHooks;
use crate::cache::traits::invalidation_session::InvalidationSession;

impl RedisInvalidationSession {
    pub fn new(connection: MultiplexedConnection, pushes: UnboundedReceiver<PushInfo>, hooks: SessionHooks) -> Self {
        let sink: InvalidationSink = Arc::new(Mutex::new(None));
        let push_listener = tokio::spawn(Self::listen(pushes, sink.clone(), hooks.clone()));
        Self {
            connection: Mutex::new(Some(connection)),
            hooks,
            sink,
            push_listener: Mutex::new(Some(push_listener)),
        }
    }

    async fn listen(mut pushes: UnboundedReceiver<PushInfo>, sink: InvalidationSink, hooks: SessionHooks) {
        while let Some(push) = pushes.recv().await {
            match push.kind {
                PushKind::Disconnection => {
                    info!("[Redis] Invalidation session disconnected");
                    hooks.on_close();
                    break;
                }
                PushKind::Message => {
                    let Some(event) = Self::decode(push.data) else {
                        continue;
                    };
                    if let Some(sender) = sink.lock().as_ref() {
                        let _ = sender.send(event);
                    }
                }
                _ => {}
            }
        }
    }

    /// Decodes the `[channel, payload]` body of a pub/sub message. Messages on
    /// other channels and malformed payloads yield `None`.
    pub fn decode(data: Vec<Value>) -> Option<InvalidationEvent> {
        let mut parts = data.into_iter();
        let channel = parts.next().and_then(Self::text)?;
        if channel != INVALIDATION_CHANNEL {
            return None;
        }
        match parts.next()? {
            Value::Nil => Some(InvalidationEvent::flush()),
            Value::Array(items) | Value::Set(items) => {
                Some(InvalidationEvent::keys(items.into_iter().filter_map(Self::text).collect()))
            }
            other => {
                warn!("[Redis] Unexpected invalidation payload: {:?}", other);
                None
            }
        }
    }

    fn text(value: Value) -> Option<String> {
        match value {
            Value::BulkString(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
            Value::SimpleString(text) => Some(text),
            _ => None,
        }
    }

    fn connection(&self) -> Result<MultiplexedConnection, CacheError> {
        self.connection
            .lock()
            .clone()
            .ok_or_else(|| CacheError::ConnectionError("Invalidation session closed".to_string()))
    }
}

#[async_trait]
impl InvalidationSession for RedisInvalidationSession {
    async fn client_id(&self) -> Result<Option<i64>, CacheError> {
        let mut conn = self.connection()?;
        let id = redis::cmd("CLIENT")
            .arg("ID")
            .query_async::<Option<i64>>(&mut conn)
            .await
            .inspect_err(|e| self.hooks.on_error(e.to_string()))?;
        Ok(id)
    }

    async fn subscribe(&self, channel: &str, sink: UnboundedSender<InvalidationEvent>) -> Result<(), CacheError> {
        *self.sink.lock() = Some(sink);
        let mut conn = self.connection()?;
        conn.subscribe(channel)
            .await
            .inspect_err(|e| self.hooks.on_error(e.to_string()))?;
        info!("[Redis] Subscribed to {}", channel);
        Ok(())
    }

    async fn close(&self) -> Result<(), CacheError> {
        if let Some(listener) = self.push_listener.lock().take() {
            listener.abort();
        }
        self.sink.lock().take();
        if self.connection.lock().take().is_some() {
            debug!("[Redis] Invalidation session closed (generation {})", self.hooks.generation());
        }
        Ok(())
    }
}
