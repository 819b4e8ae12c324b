//! Concrete [`EnvSource`] implementations.

use std::collections::HashMap;
use std::path::Path;

use crate::domain::errors::{ConfigError, ConfigResult};
use crate::domain::ports::EnvSource;

/// The real process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        // Non-UTF-8 values are still "set"; convert lossily rather than dropping them
        std::env::var_os(name).map(|value| value.to_string_lossy().into_owned())
    }
}

/// In-memory environment, used for env files and tests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// An environment with nothing set
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Set `name`, replacing any earlier value
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    /// Number of variables set
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether no variable is set
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Every variable as a `(name, value)` pair, in no particular order
    pub fn vars(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl EnvSource for MapEnv {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Two sources stacked: `primary` wins, `fallback` fills the gaps.
///
/// `Layered::new(ProcessEnv, env_file)` answers lookups exactly as the process
/// environment would after a non-overriding dotenv merge, without mutating it.
#[derive(Debug, Clone, Default)]
pub struct Layered<A, B> {
    primary: A,
    fallback: B,
}

impl<A: EnvSource, B: EnvSource> Layered<A, B> {
    pub const fn new(primary: A, fallback: B) -> Self {
        Self { primary, fallback }
    }
}

impl<A: EnvSource, B: EnvSource> EnvSource for Layered<A, B> {
    fn get(&self, name: &str) -> Option<String> {
        self.primary.get(name).or_else(|| self.fallback.get(name))
    }
}

/// Reader for dotenv-format files
pub struct EnvFile;

impl EnvFile {
    /// Default file name looked up in the working directory
    pub const DEFAULT_NAME: &'static str = ".env";

    /// Parse a dotenv file into a [`MapEnv`] without touching the process
    /// environment. Later duplicates override earlier ones, as in a merge.
    pub fn read(path: impl AsRef<Path>) -> ConfigResult<MapEnv> {
        let path = path.as_ref();
        let to_error = |source: dotenvy::Error| ConfigError::EnvFile {
            path: path.to_path_buf(),
            source,
        };

        let mut env = MapEnv::new();
        for item in dotenvy::from_path_iter(path).map_err(to_error)? {
            let (name, value) = item.map_err(to_error)?;
            env.insert(name, value);
        }

        tracing::debug!(path = %path.display(), variables = env.len(), "read env file");
        Ok(env)
    }
}
