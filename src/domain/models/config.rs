use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// Placeholder printed in place of secrets
pub const MASK: &str = "********";

/// Compiled-in fallbacks for every recognised variable
pub mod defaults {
    /// `DB_ENV`
    pub const DB_ENV: &str = "local";
    /// `PORT`
    pub const PORT: &str = "3000";
    /// `AES_ENCRYPTION_KEY`
    pub const AES_ENCRYPTION_KEY: &str = "thisis32byteslongkeyforaes256!";

    /// `NEO4J_AURA_URI`
    pub const NEO4J_AURA_URI: &str = "neo4j+ssc://your_aura_uri:7687";
    /// `NEO4J_AURA_USERNAME`
    pub const NEO4J_AURA_USERNAME: &str = "aura_user";
    /// `NEO4J_AURA_PASSWORD`
    pub const NEO4J_AURA_PASSWORD: &str = "aura_password";

    /// `NEO4J_LOCAL_URI`
    pub const NEO4J_LOCAL_URI: &str = "neo4j://localhost:7687";
    /// `NEO4J_LOCAL_USERNAME`
    pub const NEO4J_LOCAL_USERNAME: &str = "local_user";
    /// `NEO4J_LOCAL_PASSWORD`
    pub const NEO4J_LOCAL_PASSWORD: &str = "local_password";

    /// `REDIS_ADDRESS`
    pub const REDIS_ADDRESS: &str = "localhost:6379";
    /// `REDIS_PASSWORD`
    pub const REDIS_PASSWORD: &str = "";
    /// `KAFKA_BROKERS`
    pub const KAFKA_BROKERS: &str = "localhost:9092";

    /// `MIN_RED_THRESHOLD`
    pub const MIN_RED_THRESHOLD: i64 = 5;
    /// `MAX_RED_THRESHOLD`
    pub const MAX_RED_THRESHOLD: i64 = 15;
    /// `MAX_RED_PROBABILITY`
    pub const MAX_RED_PROBABILITY: f64 = 0.1;
}

/// Which Neo4j deployment the credentials point at.
///
/// Only the exact string `aura` selects [`DbEnvironment::Aura`]. Every other
/// value, including `local`, an empty string or a typo, falls back to
/// [`DbEnvironment::Local`] and keeps the raw value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DbEnvironment {
    /// Hosted Neo4j Aura instance (`NEO4J_AURA_*`)
    Aura,
    /// Anything else, resolved against `NEO4J_LOCAL_*`
    Local(String),
}

impl DbEnvironment {
    /// Discriminant value selecting the Aura credential group
    pub const AURA: &'static str = "aura";

    /// Classify a raw `DB_ENV` value
    pub fn parse(raw: &str) -> Self {
        if raw == Self::AURA {
            Self::Aura
        } else {
            Self::Local(raw.to_string())
        }
    }

    /// The raw value this discriminant was parsed from
    pub fn as_str(&self) -> &str {
        match self {
            Self::Aura => Self::AURA,
            Self::Local(raw) => raw,
        }
    }

    pub const fn is_aura(&self) -> bool {
        matches!(self, Self::Aura)
    }
}

impl Default for DbEnvironment {
    fn default() -> Self {
        Self::Local(defaults::DB_ENV.to_string())
    }
}

impl fmt::Display for DbEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved application configuration.
///
/// Built once at startup by the loader and read-only afterwards. Every field is
/// populated, either from the environment or from [`defaults`].
///
/// Deliberately not `Serialize`: go through [`Config::redacted`] or
/// [`Config::view`] so secrets are masked by default.
#[derive(Clone, PartialEq)]
pub struct Config {
    /// `DB_ENV` discriminant
    pub db_env: DbEnvironment,

    /// Listen address suffix, always `:<PORT>`
    pub server_port: String,

    /// Neo4j credentials from the group selected by `db_env`
    pub neo4j: Neo4jConfig,

    /// Redis cache connection
    pub redis: RedisConfig,

    /// Kafka bootstrap servers, in order
    pub kafka_brokers: Vec<String>,

    /// RED rate limiting thresholds
    pub red: RedConfig,

    /// Raw bytes of `AES_ENCRYPTION_KEY`; length is not checked here
    pub aes_encryption_key: Vec<u8>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_env: DbEnvironment::default(),
            server_port: format!(":{}", defaults::PORT),
            neo4j: Neo4jConfig::default(),
            redis: RedisConfig::default(),
            kafka_brokers: vec![defaults::KAFKA_BROKERS.to_string()],
            red: RedConfig::default(),
            aes_encryption_key: defaults::AES_ENCRYPTION_KEY.as_bytes().to_vec(),
        }
    }
}

impl Config {
    /// Serialisable view with passwords and the encryption key masked
    pub fn redacted(&self) -> ConfigView<'_> {
        self.view(false)
    }

    /// Serialisable view; secrets are masked unless `reveal` is set
    pub fn view(&self, reveal: bool) -> ConfigView<'_> {
        ConfigView {
            db_env: self.db_env.as_str(),
            server_port: &self.server_port,
            neo4j_uri: &self.neo4j.uri,
            neo4j_username: &self.neo4j.username,
            neo4j_password: secret(&self.neo4j.password, reveal),
            redis_address: &self.redis.address,
            redis_password: secret(&self.redis.password, reveal),
            kafka_brokers: &self.kafka_brokers,
            min_red_threshold: self.red.min_threshold,
            max_red_threshold: self.red.max_threshold,
            max_red_probability: self.red.max_probability,
            aes_encryption_key: secret(&String::from_utf8_lossy(&self.aes_encryption_key), reveal),
            aes_encryption_key_len: self.aes_encryption_key.len(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("db_env", &self.db_env)
            .field("server_port", &self.server_port)
            .field("neo4j", &self.neo4j)
            .field("redis", &self.redis)
            .field("kafka_brokers", &self.kafka_brokers)
            .field("red", &self.red)
            .field("aes_encryption_key", &MASK)
            .finish()
    }
}

/// Neo4j connection credentials
#[derive(Clone, PartialEq, Eq)]
pub struct Neo4jConfig {
    /// Bolt URI, e.g. `neo4j://localhost:7687`
    pub uri: String,
    /// Login user
    pub username: String,
    /// Login password; masked in `Debug`
    pub password: String,
}

impl Default for Neo4jConfig {
    fn default() -> Self {
        Self {
            uri: defaults::NEO4J_LOCAL_URI.to_string(),
            username: defaults::NEO4J_LOCAL_USERNAME.to_string(),
            password: defaults::NEO4J_LOCAL_PASSWORD.to_string(),
        }
    }
}

impl fmt::Debug for Neo4jConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Neo4jConfig")
            .field("uri", &self.uri)
            .field("username", &self.username)
            .field("password", &mask(&self.password))
            .finish()
    }
}

/// Redis cache connection
#[derive(Clone, PartialEq, Eq)]
pub struct RedisConfig {
    /// `host:port`
    pub address: String,
    /// Empty when the server has no auth
    pub password: String,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            address: defaults::REDIS_ADDRESS.to_string(),
            password: defaults::REDIS_PASSWORD.to_string(),
        }
    }
}

impl fmt::Debug for RedisConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisConfig")
            .field("address", &self.address)
            .field("password", &mask(&self.password))
            .finish()
    }
}

/// Random Early Detection thresholds for the rate limiter
#[derive(Debug, Clone, PartialEq)]
pub struct RedConfig {
    /// Queue length below which nothing is dropped
    pub min_threshold: i64,
    /// Queue length above which everything is dropped
    pub max_threshold: i64,
    /// Drop probability reached at `max_threshold`
    pub max_probability: f64,
}

impl Default for RedConfig {
    fn default() -> Self {
        Self {
            min_threshold: defaults::MIN_RED_THRESHOLD,
            max_threshold: defaults::MAX_RED_THRESHOLD,
            max_probability: defaults::MAX_RED_PROBABILITY,
        }
    }
}

/// Borrowed, flattened view of [`Config`] for printing.
///
/// Field names follow the variable names in lower case. Secrets hold
/// [`MASK`] unless the view was built with `reveal`.
#[derive(Debug, Serialize)]
#[allow(missing_docs)]
pub struct ConfigView<'a> {
    pub db_env: &'a str,
    pub server_port: &'a str,
    pub neo4j_uri: &'a str,
    pub neo4j_username: &'a str,
    pub neo4j_password: Cow<'a, str>,
    pub redis_address: &'a str,
    pub redis_password: Cow<'a, str>,
    pub kafka_brokers: &'a [String],
    pub min_red_threshold: i64,
    pub max_red_threshold: i64,
    pub max_red_probability: f64,
    pub aes_encryption_key: Cow<'a, str>,
    pub aes_encryption_key_len: usize,
}

fn secret<'a>(value: &str, reveal: bool) -> Cow<'a, str> {
    if reveal {
        Cow::Owned(value.to_string())
    } else {
        Cow::Borrowed(mask(value))
    }
}

/// Mask a secret, leaving an empty one visibly empty
pub fn mask(secret: &str) -> &'static str {
    if secret.is_empty() {
        ""
    } else {
        MASK
    }
}
