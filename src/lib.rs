//! Service Config - environment-driven configuration loader
//!
//! Resolves an application's settings (Neo4j credentials, listen port, Redis,
//! Kafka, RED rate limiting thresholds, AES key) from environment variables,
//! optionally merged from a `.env` file, with a compiled-in default for every
//! variable. Loading never fails: missing or malformed values fall back to
//! their defaults, and every resolved value records where it came from.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): the `Config` snapshot, provenance, and the
//!   `EnvSource` port
//! - **Infrastructure Layer** (`infrastructure`): the loader, environment
//!   sources, and logging
//! - **CLI Layer** (`cli`): inspection commands
//!
//! # Example
//!
//! ```
//! use service_config::{ConfigLoader, MapEnv, Provenance};
//!
//! let env = MapEnv::new().with("PORT", "8080");
//! let resolution = ConfigLoader::resolve(&env);
//!
//! assert_eq!(resolution.config.server_port, ":8080");
//! assert_eq!(resolution.provenance_of("DB_ENV"), Some(Provenance::Default));
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::models::{
    Config, DbEnvironment, Neo4jConfig, Provenance, RedConfig, RedisConfig, Resolved,
};
pub use domain::ports::EnvSource;
pub use domain::{ConfigError, ConfigResult};
pub use infrastructure::config::{
    vars, ConfigLoader, EnvFile, Layered, MapEnv, ProcessEnv, Resolution,
};
pub use infrastructure::logging::{LogConfig, LogFormat, LoggerImpl, RotationPolicy};
