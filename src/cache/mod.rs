//! Two-tier cache client.
//!
//! A process-local mirror sits in front of a shared Redis store. Reads are
//! served from the mirror when possible; misses are fetched in one batched
//! round-trip and mirrored. Redis client-side tracking keeps the mirror
//! coherent: the data session registers tracking redirected to a second,
//! dedicated invalidation session, and every key named on the
//! `__redis__:invalidate` channel is evicted locally.
//!
//! # Architecture
//!
//! - `CacheClient` is the public handle. It owns the state machine
//!   (`Disconnected`, `Connecting`, `Ready`, `Reconnecting`) and rejects data
//!   operations unless it is `Ready`.
//! - `ConnectionManager` owns the data and invalidation sessions and hands
//!   each of them `SessionHooks` used to report errors and closes.
//! - `StoreConnector`, `DataSession` and `InvalidationSession` are the store
//!   contract; `RedisConnector` implements it on multiplexed RESP3 connections.
//! - `LocalCache` and `Serializer` are the remaining collaborators, with
//!   `MemoryLocalCache`, `JsonSerializer` and `MessagePackSerializer` shipped.
//!
//! # Fetch deduplication
//!
//! A miss places `CacheSlot::InFlight(id)` in the local cache before the store
//! read, where `id` is unique to the `mget` call. Concurrent readers of the
//! same key see the marker and return `None` without a second read. The owning
//! call replaces its marker with the fetched value; an `InFlightGuard` removes
//! whatever markers of that call remain when it returns or is dropped. A marker
//! deleted by an invalidation and re-placed by another call belongs to the new
//! call, so the first call neither overwrites nor removes it.
//!
//! # Reconnection
//!
//! A close or error reported by a session of the current generation moves
//! the client to `Reconnecting` and starts a background loop that closes what
//! is left, reconnects, and re-runs the tracking registration, retrying every
//! second until it succeeds or `close()` is called. Progress is published on
//! the `CacheEvent` broadcast channel.
//!
//! # Example
//!
//! ```rust,ignore
//! use coherent_cache::cache::structs::cache_client::CacheClient;
//! use coherent_cache::config::structs::cache_config::CacheConfig;
//!
//! let client = CacheClient::<serde_json::Value>::redis(CacheConfig::default())?;
//! client.connect().await?;
//! client.set("greeting", serde_json::json!("hello"), None).await?;
//! let value = client.get("greeting").await?;
//! client.close().await?;
//! ```

/// Client states, cache slots, events and session kinds.
pub mod enums;

/// Error types for cache operations.
pub mod errors;

/// Implementation blocks for the client and collaborators.
pub mod impls;

/// Client, connection manager and collaborator structures.
pub mod structs;

/// Collaborator contracts.
pub mod traits;
