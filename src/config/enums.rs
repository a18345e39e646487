//! Configuration enumerations.

/// Error raised while loading or saving the configuration file.
pub mod configuration_error;

/// Cached value encoding.
pub mod value_encoding;
