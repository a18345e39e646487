//! Implementation blocks for configuration types.

pub mod cache_config;

pub mod configuration;

pub mod configuration_error;

pub mod value_encoding;
