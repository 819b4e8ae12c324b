use serde::Serialize;
use std::fmt;

/// Where a resolved configuration value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// The variable was set and its value was used
    Environment,
    /// The variable was not set; the compiled-in default was used
    Default,
    /// The variable was set but could not be coerced; the default was used
    Malformed,
}

impl Provenance {
    /// True when the value is the compiled-in default, for whatever reason
    pub const fn is_default(self) -> bool {
        matches!(self, Self::Default | Self::Malformed)
    }

    /// Short lowercase label used in CLI output
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Environment => "environment",
            Self::Default => "default",
            Self::Malformed => "malformed",
        }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A configuration value together with its provenance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolved<T> {
    /// The resolved value
    pub value: T,
    /// Where `value` came from
    pub provenance: Provenance,
}

impl<T> Resolved<T> {
    /// Value read from the environment
    pub const fn from_env(value: T) -> Self {
        Self {
            value,
            provenance: Provenance::Environment,
        }
    }

    /// Compiled-in default, variable absent
    pub const fn defaulted(value: T) -> Self {
        Self {
            value,
            provenance: Provenance::Default,
        }
    }

    /// Compiled-in default, variable present but unusable
    pub const fn malformed(value: T) -> Self {
        Self {
            value,
            provenance: Provenance::Malformed,
        }
    }

    /// See [`Provenance::is_default`]
    pub const fn is_default(&self) -> bool {
        self.provenance.is_default()
    }

    /// Discard the provenance
    pub fn into_value(self) -> T {
        self.value
    }

    /// Transform the value, keeping the provenance
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolved<U> {
        Resolved {
            value: f(self.value),
            provenance: self.provenance,
        }
    }
}
