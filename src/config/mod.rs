//! Configuration management module.
//!
//! Handles the client settings and loading them from TOML files. The
//! `[cache]` table maps onto [`CacheConfig`](structs::cache_config::CacheConfig);
//! missing keys keep their defaults.
//!
//! # Example
//!
//! ```rust,ignore
//! use coherent_cache::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", true)?;
//! println!("prefix: {}", config.cache.key_prefix);
//! ```

/// Configuration enumerations (value encoding, errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
