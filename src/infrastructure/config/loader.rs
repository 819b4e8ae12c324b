use std::collections::BTreeMap;
use std::path::Path;

use crate::domain::errors::ConfigError;
use crate::domain::models::config::defaults;
use crate::domain::models::{
    Config, DbEnvironment, Neo4jConfig, Provenance, RedConfig, RedisConfig, Resolved,
};
use crate::domain::ports::EnvSource;

use super::env::{EnvFile, ProcessEnv};

/// Names of every variable the loader understands
pub mod vars {
    /// Selects the Neo4j group: `aura`, anything else is local
    pub const DB_ENV: &str = "DB_ENV";
    /// Listening port, stored with a leading colon
    pub const PORT: &str = "PORT";
    /// Symmetric key, kept as raw bytes
    pub const AES_ENCRYPTION_KEY: &str = "AES_ENCRYPTION_KEY";

    /// Managed Neo4j connection URI
    pub const NEO4J_AURA_URI: &str = "NEO4J_AURA_URI";
    /// Managed Neo4j user
    pub const NEO4J_AURA_USERNAME: &str = "NEO4J_AURA_USERNAME";
    /// Managed Neo4j password
    pub const NEO4J_AURA_PASSWORD: &str = "NEO4J_AURA_PASSWORD";

    /// Self-hosted Neo4j connection URI
    pub const NEO4J_LOCAL_URI: &str = "NEO4J_LOCAL_URI";
    /// Self-hosted Neo4j user
    pub const NEO4J_LOCAL_USERNAME: &str = "NEO4J_LOCAL_USERNAME";
    /// Self-hosted Neo4j password
    pub const NEO4J_LOCAL_PASSWORD: &str = "NEO4J_LOCAL_PASSWORD";

    /// Redis `host:port`
    pub const REDIS_ADDRESS: &str = "REDIS_ADDRESS";
    /// Redis password, empty for none
    pub const REDIS_PASSWORD: &str = "REDIS_PASSWORD";
    /// Comma separated broker addresses
    pub const KAFKA_BROKERS: &str = "KAFKA_BROKERS";

    /// Queue depth where random early drop starts
    pub const MIN_RED_THRESHOLD: &str = "MIN_RED_THRESHOLD";
    /// Queue depth where every request is dropped
    pub const MAX_RED_THRESHOLD: &str = "MAX_RED_THRESHOLD";
    /// Drop probability reached at the upper threshold
    pub const MAX_RED_PROBABILITY: &str = "MAX_RED_PROBABILITY";

    /// All recognised names, in resolution order
    pub const ALL: [&str; 15] = [
        DB_ENV,
        PORT,
        AES_ENCRYPTION_KEY,
        NEO4J_AURA_URI,
        NEO4J_AURA_USERNAME,
        NEO4J_AURA_PASSWORD,
        NEO4J_LOCAL_URI,
        NEO4J_LOCAL_USERNAME,
        NEO4J_LOCAL_PASSWORD,
        REDIS_ADDRESS,
        REDIS_PASSWORD,
        KAFKA_BROKERS,
        MIN_RED_THRESHOLD,
        MAX_RED_THRESHOLD,
        MAX_RED_PROBABILITY,
    ];

    /// Variables whose values must not be printed or logged
    pub const SECRETS: [&str; 4] = [
        AES_ENCRYPTION_KEY,
        NEO4J_AURA_PASSWORD,
        NEO4J_LOCAL_PASSWORD,
        REDIS_PASSWORD,
    ];

    /// Whether `name` is one of [`ALL`]
    pub fn is_known(name: &str) -> bool {
        ALL.contains(&name)
    }

    /// Whether `name` is one of [`SECRETS`]
    pub fn is_secret(name: &str) -> bool {
        SECRETS.contains(&name)
    }
}

/// A resolved [`Config`] plus where each consulted variable came from
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub config: Config,
    /// Keyed by variable name. The inactive Neo4j group is never consulted and
    /// does not appear.
    pub provenance: BTreeMap<&'static str, Provenance>,
}

impl Resolution {
    /// Provenance of one variable, if the loader consulted it
    pub fn provenance_of(&self, name: &str) -> Option<Provenance> {
        self.provenance.get(name).copied()
    }

    /// Variables that fell back to their defaults
    pub fn defaulted(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.provenance
            .iter()
            .filter(|(_, p)| p.is_default())
            .map(|(name, _)| *name)
    }
}

/// Builds [`Config`] from environment variables with per-variable defaults.
///
/// Nothing here fails. A missing env file is logged and skipped, a missing
/// variable takes its default, and an unparseable number takes its default
/// silently.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for this process.
    ///
    /// Merges `./.env` into the process environment first (variables that are
    /// already set keep their value), then resolves against the process
    /// environment.
    pub fn load() -> Config {
        Self::merge_env_file(None);
        Self::from_source(&ProcessEnv)
    }

    /// Same as [`ConfigLoader::load`], merging the given file instead of `./.env`
    pub fn load_from_path(path: impl AsRef<Path>) -> Config {
        Self::merge_env_file(Some(path.as_ref()));
        Self::from_source(&ProcessEnv)
    }

    /// Best-effort merge of a dotenv file into the process environment.
    ///
    /// `None` means `.env` in the working directory; parent directories are
    /// not searched. The whole file is parsed before anything is set, so a
    /// file with a bad line is skipped entirely. Variables that are already
    /// set are not overridden. Returns whether a file was merged; failure is
    /// only logged.
    pub fn merge_env_file(path: Option<&Path>) -> bool {
        let path = path.unwrap_or_else(|| Path::new(EnvFile::DEFAULT_NAME));

        match EnvFile::read(path) {
            Ok(file) => {
                for (name, value) in file.vars() {
                    if std::env::var_os(name).is_none() {
                        std::env::set_var(name, value);
                    }
                }
                true
            }
            Err(ConfigError::EnvFile { source, .. }) if source.not_found() => {
                tracing::info!("No .env file found, using environment variables or defaults");
                false
            }
            Err(err) => {
                tracing::info!(
                    error = %err,
                    "Could not load .env file, using environment variables or defaults"
                );
                false
            }
        }
    }

    /// Resolve configuration against an injected environment
    pub fn from_source(env: &impl EnvSource) -> Config {
        Self::resolve(env).config
    }

    /// Resolve configuration and record the provenance of every lookup
    pub fn resolve(env: &impl EnvSource) -> Resolution {
        let mut provenance = BTreeMap::new();
        let mut track = |name: &'static str, provenance_of: Provenance| {
            provenance.insert(name, provenance_of);
        };

        let db_env = Self::tracked_string(env, vars::DB_ENV, defaults::DB_ENV, &mut track);
        let db_env = DbEnvironment::parse(&db_env);

        let port = Self::tracked_string(env, vars::PORT, defaults::PORT, &mut track);
        let server_port = format!(":{port}");

        let aes_encryption_key = Self::tracked_string(
            env,
            vars::AES_ENCRYPTION_KEY,
            defaults::AES_ENCRYPTION_KEY,
            &mut track,
        )
        .into_bytes();

        let neo4j = match db_env {
            DbEnvironment::Aura => Neo4jConfig {
                uri: Self::tracked_string(
                    env,
                    vars::NEO4J_AURA_URI,
                    defaults::NEO4J_AURA_URI,
                    &mut track,
                ),
                username: Self::tracked_string(
                    env,
                    vars::NEO4J_AURA_USERNAME,
                    defaults::NEO4J_AURA_USERNAME,
                    &mut track,
                ),
                password: Self::tracked_string(
                    env,
                    vars::NEO4J_AURA_PASSWORD,
                    defaults::NEO4J_AURA_PASSWORD,
                    &mut track,
                ),
            },
            DbEnvironment::Local(_) => Neo4jConfig {
                uri: Self::tracked_string(
                    env,
                    vars::NEO4J_LOCAL_URI,
                    defaults::NEO4J_LOCAL_URI,
                    &mut track,
                ),
                username: Self::tracked_string(
                    env,
                    vars::NEO4J_LOCAL_USERNAME,
                    defaults::NEO4J_LOCAL_USERNAME,
                    &mut track,
                ),
                password: Self::tracked_string(
                    env,
                    vars::NEO4J_LOCAL_PASSWORD,
                    defaults::NEO4J_LOCAL_PASSWORD,
                    &mut track,
                ),
            },
        };

        let redis = RedisConfig {
            address: Self::tracked_string(
                env,
                vars::REDIS_ADDRESS,
                defaults::REDIS_ADDRESS,
                &mut track,
            ),
            password: Self::tracked_string(
                env,
                vars::REDIS_PASSWORD,
                defaults::REDIS_PASSWORD,
                &mut track,
            ),
        };

        let kafka_brokers = Self::get_list(env, vars::KAFKA_BROKERS, defaults::KAFKA_BROKERS);
        track(vars::KAFKA_BROKERS, kafka_brokers.provenance);

        let min_threshold =
            Self::get_int(env, vars::MIN_RED_THRESHOLD, defaults::MIN_RED_THRESHOLD);
        track(vars::MIN_RED_THRESHOLD, min_threshold.provenance);
        let max_threshold =
            Self::get_int(env, vars::MAX_RED_THRESHOLD, defaults::MAX_RED_THRESHOLD);
        track(vars::MAX_RED_THRESHOLD, max_threshold.provenance);
        let max_probability = Self::get_float(
            env,
            vars::MAX_RED_PROBABILITY,
            defaults::MAX_RED_PROBABILITY,
        );
        track(vars::MAX_RED_PROBABILITY, max_probability.provenance);

        let config = Config {
            db_env,
            server_port,
            neo4j,
            redis,
            kafka_brokers: kafka_brokers.into_value(),
            red: RedConfig {
                min_threshold: min_threshold.into_value(),
                max_threshold: max_threshold.into_value(),
                max_probability: max_probability.into_value(),
            },
            aes_encryption_key,
        };

        let resolution = Resolution { config, provenance };
        tracing::debug!(
            db_env = %resolution.config.db_env,
            server_port = %resolution.config.server_port,
            defaulted = ?resolution.defaulted().collect::<Vec<_>>(),
            "configuration resolved"
        );
        resolution
    }

    /// Look up `name`, falling back to `default` only when it is not set.
    ///
    /// A variable set to the empty string is returned as-is.
    pub fn get_string(env: &impl EnvSource, name: &str, default: &str) -> Resolved<String> {
        env.get(name).map_or_else(
            || Resolved::defaulted(default.to_string()),
            Resolved::from_env,
        )
    }

    /// Look up `name` as a base-10 integer, falling back to `default` when it
    /// is unset, empty or not a number.
    pub fn get_int(env: &impl EnvSource, name: &str, default: i64) -> Resolved<i64> {
        Self::get_parsed(env, name, default)
    }

    /// Look up `name` as a floating point number (decimal or exponent form),
    /// falling back to `default` when it is unset, empty or not a number.
    ///
    /// Infinity and NaN are only accepted when spelled out (`inf`,
    /// `infinity`, `nan`, any case, optional sign). A literal that overflows,
    /// such as `1e400`, is malformed.
    pub fn get_float(env: &impl EnvSource, name: &str, default: f64) -> Resolved<f64> {
        let resolved = Self::get_parsed(env, name, default);
        if resolved.value.is_finite() || resolved.provenance != Provenance::Environment {
            return resolved;
        }
        match env.get(name) {
            Some(raw) if is_non_finite_literal(&raw) => resolved,
            _ => Resolved::malformed(default),
        }
    }

    /// Look up `name` as a comma separated list. Items are trimmed and empty
    /// items dropped. A set variable wins even if it yields an empty list.
    pub fn get_list(env: &impl EnvSource, name: &str, default: &str) -> Resolved<Vec<String>> {
        Self::get_string(env, name, default).map(|raw| split_list(&raw))
    }

    fn get_parsed<T: std::str::FromStr>(
        env: &impl EnvSource,
        name: &str,
        default: T,
    ) -> Resolved<T> {
        let raw = Self::get_string(env, name, "");
        match raw.value.parse() {
            Ok(value) => Resolved::from_env(value),
            Err(_) if raw.provenance == Provenance::Default => Resolved::defaulted(default),
            Err(_) => Resolved::malformed(default),
        }
    }

    fn tracked_string(
        env: &impl EnvSource,
        name: &'static str,
        default: &str,
        track: &mut impl FnMut(&'static str, Provenance),
    ) -> String {
        let resolved = Self::get_string(env, name, default);
        track(name, resolved.provenance);
        resolved.into_value()
    }
}

fn is_non_finite_literal(raw: &str) -> bool {
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    ["inf", "infinity", "nan"]
        .iter()
        .any(|literal| unsigned.eq_ignore_ascii_case(literal))
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToString::to_string)
        .collect()
}
