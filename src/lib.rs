//! # Coherent Cache
//!
//! A two-tier caching client: a process-local mirror in front of a shared Redis
//! store, kept coherent through Redis client-side tracking.
//!
//! ## Overview
//!
//! Reads are served from the local mirror when it holds a value and fetched
//! from the store in one batched round-trip otherwise. Concurrent fetches of
//! the same key are deduplicated. Writes land in the mirror first and in the
//! store right after. When another client changes a key, the store pushes an
//! invalidation on a dedicated session and the mirror drops its copy.
//!
//! Connection loss is handled by a background loop that reconnects every
//! second and re-registers tracking until it succeeds or the client is closed.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coherent_cache::cache::structs::cache_client::CacheClient;
//! use coherent_cache::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! let client = CacheClient::<serde_json::Value>::redis(config.cache)?;
//! client.connect().await?;
//! ```
//!
//! ## Modules
//!
//! - [`cache`] - Client, connection manager, collaborator contracts and implementations
//! - [`config`] - Settings and TOML loading
//! - [`logging`] - Console logger setup for the binary
//! - [`structs`] - CLI arguments

/// Two-tier cache client.
///
/// Contains the client state machine, the connection manager owning the data
/// and invalidation sessions, the Redis store implementation, the in-memory
/// local cache and the value serializers.
pub mod cache;

/// Configuration management module.
///
/// Handles loading and saving the TOML configuration file and normalizing
/// the cache settings.
pub mod config;

/// Console logging setup.
pub mod logging;

/// CLI argument parsing for the `coherent-cache` binary.
pub mod structs;
