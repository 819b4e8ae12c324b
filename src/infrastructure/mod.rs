//! Infrastructure layer module
//!
//! This module contains the adapters that touch the outside world:
//! - Configuration loading (process environment, dotenv files)
//! - Logging infrastructure
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod logging;
