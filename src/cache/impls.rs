//! Implementation blocks for the cache client and its collaborators.

/// Public operations, fetch deduplication and constructors.
pub mod cache_client;

/// Connect/close lifecycle, reconnect loop and event pump.
pub mod cache_client_inner;

/// Display for client states.
pub mod client_state;

/// Session pair lifecycle.
pub mod connection_manager;

/// Invalidation event constructors.
pub mod invalidation_event;

/// JSON serializer.
pub mod json_serializer;

pub mod in_flight_guard;

/// In-memory local cache.
pub mod memory_local_cache;

/// MessagePack serializer.
pub mod message_pack_serializer;

/// Redis session factory.
pub mod redis_connector;

/// Redis data session commands.
pub mod redis_data_session;

/// Redis invalidation session and push decoding.
pub mod redis_invalidation_session;

/// Session error/close reporting.
pub mod session_hooks;

pub mod session_kind;
