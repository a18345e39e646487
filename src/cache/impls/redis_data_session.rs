use async_trait::async_trait;
use log::{debug, info};
use parking_lot::Mutex;
use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, PushInfo, PushKind, RedisResult};
use tokio::sync::mpsc::UnboundedReceiver;
use crate::cache::errors::CacheError;
use crate::cache::structs::redis_data_session::RedisDataSession;
use crate::cache::structs::session_hooks::SessionHooks;
use crate::cache::traits::data_session::DataSession;

impl RedisDataSession {
    pub fn new(connection: MultiplexedConnection, mut pushes: UnboundedReceiver<PushInfo>, hooks: SessionHooks) -> Self {
        let listener_hooks = hooks.clone();
        let push_listener = tokio::spawn(async move {
            while let Some(push) = pushes.recv().await {
                if matches!(push.kind, PushKind::Disconnection) {
                    info!("[Redis] Data session disconnected");
                    listener_hooks.on_close();
                    break;
                }
            }
        });
        Self {
            connection: Mutex::new(Some(connection)),
            hooks,
            push_listener: Mutex::new(Some(push_listener)),
        }
    }

    fn connection(&self) -> Result<MultiplexedConnection, CacheError> {
        self.connection
            .lock()
            .clone()
            .ok_or_else(|| CacheError::ConnectionError("Data session closed".to_string()))
    }

    /// Reports transport failures through the session hooks before handing the error back.
    fn observe<T>(&self, result: RedisResult<T>) -> Result<T, CacheError> {
        result.map_err(|e| {
            if e.is_io_error() || e.is_connection_dropped() || e.is_connection_refusal() {
                self.hooks.on_error(e.to_string());
            }
            CacheError::RedisError(e)
        })
    }
}

#[async_trait]
impl DataSession for RedisDataSession {
    async fn set_many(&self, entries: &[(String, Vec<u8>)], ttl_secs: u64) -> Result<(), CacheError> {
        if entries.is_empty() {
            return Ok(());
        }
        let mut conn = self.connection()?;
        let mut pipe = redis::pipe();
        for (key, value) in entries {
            pipe.set_ex(key, value.as_slice(), ttl_secs).ignore();
        }
        self.observe(pipe.query_async::<()>(&mut conn).await)?;
        debug!("[Redis] Set {} keys (ttl {}s)", entries.len(), ttl_secs);
        Ok(())
    }

    async fn expire_many(&self, keys: &[String], ttl_secs: u64) -> Result<(), CacheError> {
        if keys.is_empty() {
            return Ok(());
        }
        let mut conn = self.connection()?;
        let mut pipe = redis::pipe();
        for key in keys {
            pipe.expire(key, ttl_secs as i64).ignore();
        }
        self.observe(pipe.query_async::<()>(&mut conn).await)
    }

    async fn get_many(&self, keys: &[String], binary: bool) -> Result<Vec<Option<Vec<u8>>>, CacheError> {
        if keys.is_empty() {
            return Ok(Vec::new());
        }
        let mut conn = self.connection()?;
        let mut cmd = redis::cmd("MGET");
        cmd.arg(keys);
        if binary {
            self.observe(cmd.query_async::<Vec<Option<Vec<u8>>>>(&mut conn).await)
        } else {
            let values = self.observe(cmd.query_async::<Vec<Option<String>>>(&mut conn).await)?;
            Ok(values.into_iter().map(|value| value.map(String::into_bytes)).collect())
        }
    }

    async fn delete_many(&self, keys: &[String]) -> Result<u64, CacheError> {
        if keys.is_empty() {
            return Ok(0);
        }
        let mut conn = self.connection()?;
        let removed = self.observe(conn.del::<_, u64>(keys).await)?;
        debug!("[Redis] Deleted {}/{} keys", removed, keys.len());
        Ok(removed)
    }

    async fn scan(&self, cursor: u64, pattern: &str, count: usize) -> Result<(u64, Vec<String>), CacheError> {
        let mut conn = self.connection()?;
        self.observe(
            redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(pattern)
                .arg("COUNT")
                .arg(count)
                .query_async::<(u64, Vec<String>)>(&mut conn)
                .await,
        )
    }

    async fn ttl(&self, key: &str) -> Result<i64, CacheError> {
        let mut conn = self.connection()?;
        self.observe(conn.ttl::<_, i64>(key).await)
    }

    async fn enable_tracking(&self, redirect_id: i64) -> Result<(), CacheError> {
        let mut conn = self.connection()?;
        self.observe(
            redis::cmd("CLIENT")
                .arg("TRACKING")
                .arg("ON")
                .arg("REDIRECT")
                .arg(redirect_id)
                .arg("NOLOOP")
                .query_async::<()>(&mut conn)
                .await,
        )?;
        info!("[Redis] Tracking enabled, redirected to client {}", redirect_id);
        Ok(())
    }

    async fn ping(&self) -> Result<(), CacheError> {
        let mut conn = self.connection()?;
        self.observe(redis::cmd("PING").query_async::<String>(&mut conn).await)?;
        Ok(())
    }

    async fn close(&self) -> Result<(), CacheError> {
        if let Some(listener) = self.push_listener.lock().take() {
            listener.abort();
        }
        if self.connection.lock().take().is_some() {
            debug!("[Redis] Data session closed (generation {})", self.hooks.generation());
        }
        Ok(())
    }
}
