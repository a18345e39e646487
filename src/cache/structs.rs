//! Cache data structures.

/// Public client handle and its shared state.
pub mod cache_client;

/// Owner of the two store sessions.
pub mod connection_manager;

/// Guarded state machine cell.
pub mod connection_status;

/// Invalidation notification and channel name.
pub mod invalidation_event;

/// JSON value serializer.
pub mod json_serializer;

/// Release of a fetch's in-flight markers.
pub mod in_flight_guard;

/// In-memory local cache.
pub mod memory_local_cache;

/// MessagePack value serializer.
pub mod message_pack_serializer;

/// Redis session factory.
pub mod redis_connector;

/// Redis data session.
pub mod redis_data_session;

/// Redis invalidation session.
pub mod redis_invalidation_session;

/// Error/close handlers handed to sessions.
pub mod session_hooks;

/// Session lifecycle notification.
pub mod session_signal;
