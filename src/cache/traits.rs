//! Capability contracts for the client's collaborators.

/// Batched reads/writes against the backing store.
pub mod data_session;

/// Invalidation notification session.
pub mod invalidation_session;

/// Process-local mirror.
pub mod local_cache;

/// Value encoding.
pub mod serializer;

/// Session factory.
pub mod store_connector;
