//! Rendering of resolved values by variable name.

use crate::domain::models::config::mask;
use crate::domain::models::{Config, DbEnvironment};
use crate::infrastructure::config::vars;

/// Render the value a variable resolved to.
///
/// Returns `None` for the Neo4j group that `DB_ENV` did not select. Secrets are
/// masked unless `reveal` is set.
pub fn render(config: &Config, name: &str, reveal: bool) -> Option<String> {
    let aura = config.db_env.is_aura();
    let value = match name {
        vars::DB_ENV => config.db_env.as_str().to_string(),
        vars::PORT => config.server_port.clone(),
        vars::AES_ENCRYPTION_KEY => {
            String::from_utf8_lossy(&config.aes_encryption_key).into_owned()
        }
        vars::NEO4J_AURA_URI | vars::NEO4J_LOCAL_URI if selects(name, aura) => {
            config.neo4j.uri.clone()
        }
        vars::NEO4J_AURA_USERNAME | vars::NEO4J_LOCAL_USERNAME if selects(name, aura) => {
            config.neo4j.username.clone()
        }
        vars::NEO4J_AURA_PASSWORD | vars::NEO4J_LOCAL_PASSWORD if selects(name, aura) => {
            config.neo4j.password.clone()
        }
        vars::REDIS_ADDRESS => config.redis.address.clone(),
        vars::REDIS_PASSWORD => config.redis.password.clone(),
        vars::KAFKA_BROKERS => config.kafka_brokers.join(","),
        vars::MIN_RED_THRESHOLD => config.red.min_threshold.to_string(),
        vars::MAX_RED_THRESHOLD => config.red.max_threshold.to_string(),
        vars::MAX_RED_PROBABILITY => config.red.max_probability.to_string(),
        _ => return None,
    };

    if vars::is_secret(name) && !reveal {
        Some(mask(&value).to_string())
    } else {
        Some(value)
    }
}

fn selects(name: &str, aura: bool) -> bool {
    name.starts_with("NEO4J_AURA_") == aura
}

/// Human-readable reason a known variable has no value
pub fn inactive_reason(db_env: &DbEnvironment) -> String {
    format!("not used (DB_ENV={db_env})")
}
