//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - Pretty or JSON console output on stderr
//! - Optional JSON log files with rotation
//! - Settings read from `LOG_*` variables through figment

pub mod config;
pub mod logger;

pub use config::{LogConfig, LogFormat, RotationPolicy};
pub use logger::LoggerImpl;

// Re-export tracing macros for convenience
pub use tracing::{debug, error, info, trace, warn};
