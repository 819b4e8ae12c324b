//! Command-line interface for inspecting the resolved configuration.

pub mod commands;
pub mod display;
pub mod fields;
pub mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::infrastructure::config::{ConfigLoader, EnvFile, Layered, ProcessEnv, Resolution};

const LOGGING_HELP: &str = "Logging is configured from LOG_LEVEL, LOG_FORMAT, LOG_DIR, LOG_ROTATION \
and RUST_LOG as found in the process environment at startup, before any env file is merged. \
Setting them in .env has no effect on logging.";

/// Resolve and inspect service configuration from the environment
#[derive(Parser, Debug)]
#[command(name = "service-config", version, about, after_help = LOGGING_HELP)]
pub struct Cli {
    /// Emit JSON instead of human-readable output
    #[arg(long, global = true)]
    pub json: bool,

    /// Env file to merge before resolving (defaults to ./.env)
    #[arg(long, global = true, env = "SERVICE_CONFIG_ENV_FILE", conflicts_with = "no_env_file")]
    pub env_file: Option<PathBuf>,

    /// Skip env files entirely and use only the process environment
    #[arg(long, global = true)]
    pub no_env_file: bool,

    /// Read the env file without merging it into the process environment
    #[arg(long, global = true)]
    pub no_merge: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show every resolved value and where it came from
    Show(commands::show::ShowArgs),
    /// Show the resolved value of a single variable
    Get(commands::get::GetArgs),
}

impl Cli {
    /// Resolve configuration according to the env file flags
    pub fn resolve(&self) -> Result<Resolution> {
        if self.no_env_file {
            return Ok(ConfigLoader::resolve(&ProcessEnv));
        }

        if self.no_merge {
            let path = self
                .env_file
                .as_deref()
                .unwrap_or_else(|| Path::new(EnvFile::DEFAULT_NAME));
            return match EnvFile::read(path) {
                Ok(file) => Ok(ConfigLoader::resolve(&Layered::new(ProcessEnv, file))),
                // An explicitly named file must exist; the implicit one is optional
                Err(err) if self.env_file.is_some() => Err(err.into()),
                Err(err) => {
                    tracing::info!(error = %err, "No .env file found, using environment variables or defaults");
                    Ok(ConfigLoader::resolve(&ProcessEnv))
                }
            };
        }

        ConfigLoader::merge_env_file(self.env_file.as_deref());
        Ok(ConfigLoader::resolve(&ProcessEnv))
    }

    pub fn execute(&self) -> Result<()> {
        let resolution = self.resolve()?;
        match &self.command {
            Commands::Show(args) => commands::show::execute(args, &resolution, self.json),
            Commands::Get(args) => commands::get::execute(args, &resolution, self.json),
        }
    }
}

/// Print `err` in the requested format and exit with status 1
pub fn handle_error(err: &anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let body = serde_json::json!({ "error": format!("{err:#}") });
        eprintln!("{body}");
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1)
}
