//! Configuration management infrastructure
//!
//! Environment-driven configuration:
//! - Optional `.env` merge via dotenvy
//! - Per-variable defaults and type coercion
//! - Provenance for every resolved value
//! - Process, in-memory and layered environment sources

pub mod env;
pub mod loader;

pub use env::{EnvFile, Layered, MapEnv, ProcessEnv};
pub use loader::{vars, ConfigLoader, Resolution};
