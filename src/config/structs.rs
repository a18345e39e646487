//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Cache client settings (store address, TTL, key prefix, scan batch size).
pub mod cache_config;

/// Root configuration structure containing all settings.
pub mod configuration;
