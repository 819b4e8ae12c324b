//! Domain errors for the configuration loader.
//!
//! Loading itself never fails. These errors only surface at the edges that are
//! allowed to: reading an env file explicitly, and CLI lookups.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the explicitly fallible configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read env file {}: {source}", .path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    #[error("Unknown configuration variable: {0}")]
    UnknownVariable(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
