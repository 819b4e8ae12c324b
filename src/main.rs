//! Service Config CLI entry point.

use clap::Parser;

use service_config::cli::{handle_error, Cli};
use service_config::{LogConfig, LoggerImpl};

fn main() {
    let cli = Cli::parse();

    // Reads LOG_* and RUST_LOG before any env file is merged
    let _logger = match LogConfig::from_env().and_then(|config| LoggerImpl::init(&config)) {
        Ok(logger) => logger,
        Err(err) => handle_error(&err, cli.json),
    };

    if let Err(err) = cli.execute() {
        handle_error(&err, cli.json);
    }
}
