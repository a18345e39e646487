//! Cache enumerations.

/// Local cache slot (value or in-flight marker).
pub mod cache_slot;

/// Events published to subscribers.
pub mod cache_event;

/// Client connectivity state machine states.
pub mod client_state;

/// Result of a TTL query.
pub mod key_ttl;

/// Data / invalidation session discriminator.
pub mod session_kind;

/// Error / close notifications from sessions.
pub mod session_signal_kind;
