pub mod types;
pub mod commands;
pub mod logging;

use clap::Parser;
use std::path::PathBuf;

use crate::config::{self, BuildConfig};
use crate::utils::error::BoxResult;

/// Run the command-line interface, returning the process exit code
pub fn run() -> i32 {
    let cli = types::Cli::parse();
    let command = cli.command.clone().unwrap_or_else(types::Commands::default_build);

    // Initialize logging system
    let (verbose, quiet) = match &command {
        types::Commands::Build { verbose, quiet, .. } => (*verbose, *quiet),
        types::Commands::Clean { .. } => (false, false),
    };
    logging::init_logging(logging::log_level(cli.debug, verbose, quiet));

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    let result = match &command {
        types::Commands::Build { .. } => {
            commands::handle_build_command(&command, cli.source.as_ref(), cli.destination.as_ref())
        },
        types::Commands::Clean { config } => {
            commands::handle_clean_command(config.clone(), cli.source.as_ref(), cli.destination.as_ref())
        },
    };

    match result {
        Ok(()) => 0,
        Err(e) => {
            log::error!("{}", e);
            1
        }
    }
}

/// Load the build configuration and apply command line overrides
pub fn resolve_config(
    config_files: Option<Vec<PathBuf>>,
    source: Option<&PathBuf>,
    destination: Option<&PathBuf>,
) -> BoxResult<BuildConfig> {
    let source_dir = source.cloned().unwrap_or_else(|| PathBuf::from("."));
    let mut config = config::load_config(&source_dir, config_files)?;

    if source.is_none() && destination.is_none() {
        return Ok(config);
    }

    if let Some(source) = source {
        config.source = source.clone();
    }

    if let Some(destination) = destination {
        config.destination = destination.clone();
    }

    // Overrides change what the build would delete, so check again
    config::validate_config(&mut config)?;
    Ok(config)
}
