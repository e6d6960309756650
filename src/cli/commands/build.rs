use log::info;
use std::path::PathBuf;

use crate::builder;
use crate::cli::resolve_config;
use crate::cli::types::Commands;
use crate::utils::error::BoxResult;

/// Handle the build command
pub fn handle_build_command(
    command: &Commands,
    source: Option<&PathBuf>,
    destination: Option<&PathBuf>,
) -> BoxResult<()> {
    let Commands::Build { config: cfg_files, watch, .. } = command else {
        return Ok(());
    };

    let config = resolve_config(cfg_files.clone(), source, destination)?;

    if *watch {
        info!("Watching for changes...");
        return builder::watch_site(&config);
    }

    info!("Building site...");
    let stats = builder::build_site(&config)?;
    info!(
        "Site built successfully at {} ({} pages)",
        config.source_path(&config.destination).display(),
        stats.sitemap_entries
    );

    Ok(())
}
