//! Domain layer for the configuration loader
//!
//! This module contains the configuration snapshot, the value-with-provenance
//! type every lookup returns, and the environment port the loader reads from.

pub mod errors;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use errors::{ConfigError, ConfigResult};
