//! Implementation of the `service-config get` command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::fields;
use crate::cli::output::{output, CommandOutput};
use crate::domain::errors::ConfigError;
use crate::domain::models::Provenance;
use crate::infrastructure::config::{vars, Resolution};

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Variable name, e.g. PORT or NEO4J_LOCAL_URI
    pub variable: String,

    /// Print the value even if it is a secret
    #[arg(long)]
    pub reveal: bool,
}

#[derive(Debug, Serialize)]
pub struct GetOutput {
    pub variable: String,
    pub value: Option<String>,
    pub source: Option<Provenance>,
    #[serde(skip)]
    inactive_reason: String,
}

impl CommandOutput for GetOutput {
    fn to_human(&self) -> String {
        match (&self.value, self.source) {
            (Some(value), Some(source)) => format!("{value} ({source})"),
            _ => self.inactive_reason.clone(),
        }
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Look up one variable in a resolution
pub fn lookup(
    resolution: &Resolution,
    variable: &str,
    reveal: bool,
) -> Result<GetOutput, ConfigError> {
    let name = variable.trim().to_uppercase();
    if !vars::is_known(&name) {
        return Err(ConfigError::UnknownVariable(variable.to_string()));
    }

    Ok(GetOutput {
        value: fields::render(&resolution.config, &name, reveal),
        source: resolution.provenance_of(&name),
        inactive_reason: fields::inactive_reason(&resolution.config.db_env),
        variable: name,
    })
}

pub fn execute(args: &GetArgs, resolution: &Resolution, json_mode: bool) -> Result<()> {
    let result = lookup(resolution, &args.variable, args.reveal)?;
    output(&result, json_mode);
    Ok(())
}
