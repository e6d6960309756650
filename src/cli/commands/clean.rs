use log::info;
use std::path::PathBuf;

use crate::cli::resolve_config;
use crate::utils::error::BoxResult;
use crate::utils::fs;

/// Handle the clean command
pub fn handle_clean_command(
    config_files: Option<Vec<PathBuf>>,
    source: Option<&PathBuf>,
    destination: Option<&PathBuf>,
) -> BoxResult<()> {
    let config = resolve_config(config_files, source, destination)?;
    let destination = config.source_path(&config.destination);

    info!("Cleaning site at {}", destination.display());
    fs::remove_directory(&destination)?;
    info!("Site cleaned successfully");

    Ok(())
}
