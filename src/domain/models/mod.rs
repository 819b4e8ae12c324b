pub mod config;
pub mod resolved;

pub use config::{
    defaults, Config, DbEnvironment, Neo4jConfig, RedConfig, ConfigView, RedisConfig, MASK,
};
pub use resolved::{Provenance, Resolved};
