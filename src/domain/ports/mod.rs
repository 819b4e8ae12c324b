//! Port trait definitions (Hexagonal Architecture)
//!
//! - EnvSource: name → value lookups the loader resolves against
//!
//! The loader only ever sees this trait, so it can run against the real process
//! environment, a parsed env file, or a plain map in tests.

pub mod environment;

pub use environment::EnvSource;
