use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use log::{debug, error, info, warn};
use parking_lot::Mutex;
use tokio::sync::{broadcast, mpsc, Notify};
use crate::cache::enums::cache_event::CacheEvent;
use crate::cache::enums::client_state::ClientState;
use crate::cache::enums::session_signal_kind::SessionSignalKind;
use crate::cache::errors::CacheError;
use crate::cache::structs::cache_client::{CacheClientInner, EVENT_CHANNEL_CAPACITY, RECONNECT_INTERVAL};
use crate::cache::structs::connection_manager::ConnectionManager;
use crate::cache::structs::connection_status::ConnectionStatus;
use crate::cache::structs::invalidation_event::{InvalidationEvent, INVALIDATION_CHANNEL};
use crate::cache::structs::session_signal::SessionSignal;
use crate::cache::traits::data_session::DataSession;
use crate::cache::traits::invalidation_session::InvalidationSession;
use crate::cache::traits::local_cache::LocalCache;
use crate::cache::traits::serializer::Serializer;
use crate::cache::traits::store_connector::StoreConnector;
use crate::config::structs::cache_config::CacheConfig;

impl<V: Clone + Send + Sync + 'static> CacheClientInner<V> {
    pub(crate) fn new(
        config: CacheConfig,
        connector: Arc<dyn StoreConnector>,
        serializer: Arc<dyn Serializer<V>>,
        local: Arc<dyn LocalCache<V>>,
    ) -> Self {
        let (signal_sender, signal_receiver) = mpsc::unbounded_channel();
        let (invalidation_sender, invalidation_receiver) = mpsc::unbounded_channel();
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            config,
            serializer,
            local,
            connections: ConnectionManager::new(connector, signal_sender),
            status: Mutex::new(ConnectionStatus::default()),
            generation: AtomicU64::new(0),
            next_fetch: AtomicU64::new(1),
            transition: tokio::sync::Mutex::new(()),
            local_guard: Mutex::new(()),
            shutdown: Notify::new(),
            events,
            invalidations: invalidation_sender,
            pump: Mutex::new(Some((signal_receiver, invalidation_receiver))),
        }
    }

    pub(crate) fn state(&self) -> ClientState {
        self.status.lock().state
    }

    pub(crate) fn ensure_ready(&self) -> Result<(), CacheError> {
        match self.state() {
            ClientState::Ready => Ok(()),
            state => Err(CacheError::NotReady(state)),
        }
    }

    pub(crate) fn emit(&self, event: CacheEvent) {
        // No subscribers is not an error.
        let _ = self.events.send(event);
    }

    pub(crate) fn emit_error(&self, error: CacheError) {
        self.emit(CacheEvent::Error(Arc::new(error)));
    }

    fn set_state(&self, state: ClientState) {
        let previous = std::mem::replace(&mut self.status.lock().state, state);
        if previous != state {
            debug!("[CACHE] State {} -> {}", previous, state);
            self.emit(CacheEvent::StateChanged(state));
        }
    }

    /// Connects both sessions and runs the tracking registration.
    ///
    /// On failure an error event is published and the reconnect loop takes over.
    /// While a reconnect loop is running it owns the transition to `Ready`.
    pub(crate) async fn connect(self: &Arc<Self>) -> Result<(), CacheError> {
        self.start_event_pump();
        let _transition = self.transition.lock().await;
        {
            let status = self.status.lock();
            if status.state == ClientState::Ready {
                return Ok(());
            }
            if status.reconnecting {
                debug!("[CACHE] Reconnect in progress, connect deferred to it");
                return Ok(());
            }
        }
        match self.establish().await {
            Ok(()) => {
                let promoted = {
                    let mut status = self.status.lock();
                    if status.reconnecting {
                        false
                    } else {
                        status.state = ClientState::Ready;
                        true
                    }
                };
                if promoted {
                    info!("[CACHE] Client ready");
                    self.emit(CacheEvent::StateChanged(ClientState::Ready));
                }
                Ok(())
            }
            Err(e) => {
                error!("[CACHE] Connect failed: {}", e);
                self.emit_error(CacheError::ConnectionError(e.to_string()));
                self.begin_reconnect(false);
                Err(e)
            }
        }
    }

    /// Closes both sessions and retires any running reconnect loop. Safe to call
    /// repeatedly.
    pub(crate) async fn close(&self) -> Result<(), CacheError> {
        {
            let mut status = self.status.lock();
            status.reconnecting = false;
            status.epoch += 1;
        }
        self.shutdown.notify_waiters();
        let _transition = self.transition.lock().await;
        let result = self.connections.close_clients().await;
        self.set_state(ClientState::Disconnected);
        info!("[CACHE] Client closed");
        result
    }

    async fn establish(&self) -> Result<(), CacheError> {
        self.set_state(ClientState::Connecting);
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        let invalidation = self.connections.connect_clients(generation).await?;
        let data = self.connections.data_session()?;
        self.register_tracking(data.as_ref(), invalidation.as_ref()).await
    }

    async fn register_tracking(
        &self,
        data: &dyn DataSession,
        invalidation: &dyn InvalidationSession,
    ) -> Result<(), CacheError> {
        let client_id = invalidation.client_id().await?.ok_or(CacheError::MissingClientId)?;
        data.enable_tracking(client_id).await?;
        invalidation.subscribe(INVALIDATION_CHANNEL, self.invalidations.clone()).await?;
        info!("[INVALIDATION] Tracking redirected to client {}", client_id);
        Ok(())
    }

    /// Enters `Reconnecting` and spawns the loop unless one is already running.
    /// Signals raised after a deliberate close are ignored.
    fn begin_reconnect(self: &Arc<Self>, from_signal: bool) {
        let epoch = {
            let mut status = self.status.lock();
            if status.reconnecting || (from_signal && status.state == ClientState::Disconnected) {
                return;
            }
            status.reconnecting = true;
            status.epoch += 1;
            status.state = ClientState::Reconnecting;
            status.epoch
        };
        warn!("[RECONNECT] Connection lost, reconnecting");
        self.emit(CacheEvent::StateChanged(ClientState::Reconnecting));
        self.emit(CacheEvent::Reconnecting);
        let client = self.clone();
        tokio::spawn(async move {
            client.reconnect_loop(epoch).await;
        });
    }

    async fn reconnect_loop(self: Arc<Self>, epoch: u64) {
        let mut attempt: u64 = 0;
        loop {
            attempt += 1;
            {
                let _transition = self.transition.lock().await;
                if !self.is_current_epoch(epoch) {
                    debug!("[RECONNECT] Loop {} retired", epoch);
                    return;
                }
                if let Err(e) = self.connections.close_clients().await {
                    warn!("[RECONNECT] Cleanup before attempt {} failed: {}", attempt, e);
                    self.emit_error(e);
                }
                match self.establish().await {
                    Ok(()) => {
                        if self.finish_reconnect(epoch) {
                            info!("[RECONNECT] Reconnected after {} attempt(s)", attempt);
                        }
                        return;
                    }
                    Err(e) => {
                        error!("[RECONNECT] Attempt {} failed: {}", attempt, e);
                        self.resume_reconnecting(epoch);
                        self.emit_error(e);
                    }
                }
            }
            info!("[RECONNECT] Retrying in {} seconds...", RECONNECT_INTERVAL.as_secs());
            tokio::select! {
                _ = tokio::time::sleep(RECONNECT_INTERVAL) => {}
                _ = self.shutdown.notified() => {}
            }
        }
    }

    fn is_current_epoch(&self, epoch: u64) -> bool {
        let status = self.status.lock();
        status.reconnecting && status.epoch == epoch
    }

    fn finish_reconnect(&self, epoch: u64) -> bool {
        {
            let mut status = self.status.lock();
            if !status.reconnecting || status.epoch != epoch {
                return false;
            }
            status.reconnecting = false;
            status.state = ClientState::Ready;
        }
        self.emit(CacheEvent::StateChanged(ClientState::Ready));
        true
    }

    fn resume_reconnecting(&self, epoch: u64) {
        if self.is_current_epoch(epoch) {
            self.set_state(ClientState::Reconnecting);
        }
    }

    fn start_event_pump(self: &Arc<Self>) {
        let Some((signals, invalidations)) = self.pump.lock().take() else {
            return;
        };
        tokio::spawn(Self::run_event_pump(Arc::downgrade(self), signals, invalidations));
    }

    async fn run_event_pump(
        client: Weak<Self>,
        mut signals: mpsc::UnboundedReceiver<SessionSignal>,
        mut invalidations: mpsc::UnboundedReceiver<InvalidationEvent>,
    ) {
        loop {
            tokio::select! {
                Some(signal) = signals.recv() => {
                    let Some(client) = client.upgrade() else { break };
                    client.handle_session_signal(signal);
                }
                Some(event) = invalidations.recv() => {
                    let Some(client) = client.upgrade() else { break };
                    client.apply_invalidation(event);
                }
                else => break,
            }
        }
        debug!("[CACHE] Event pump stopped");
    }

    fn handle_session_signal(self: &Arc<Self>, signal: SessionSignal) {
        match &signal.kind {
            SessionSignalKind::Error(message) => {
                warn!("[CONNECTION] {} session error: {}", signal.session, message);
                self.emit_error(CacheError::ConnectionError(format!("{} session: {}", signal.session, message)));
            }
            SessionSignalKind::Closed => warn!("[CONNECTION] {} session closed", signal.session),
        }
        if signal.generation != self.generation.load(Ordering::Acquire) {
            debug!("[CONNECTION] Ignoring signal from replaced generation {}", signal.generation);
            return;
        }
        self.begin_reconnect(true);
    }

    pub(crate) fn apply_invalidation(&self, event: InvalidationEvent) {
        match event.keys {
            None => debug!("[INVALIDATION] Flush notification ignored"),
            Some(keys) => {
                let _guard = self.local_guard.lock();
                for key in &keys {
                    self.local.delete(key);
                }
                debug!("[INVALIDATION] Evicted {} keys", keys.len());
            }
        }
    }
}
