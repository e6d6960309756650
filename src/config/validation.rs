use log::{info, warn};

use crate::config::defaults;
use crate::config::BuildConfig;
use crate::utils::error::{BoxResult, SiteError};
use crate::utils::fs;

/// Validate the configuration, repairing values that have a safe default
pub fn validate_config(config: &mut BuildConfig) -> BoxResult<()> {
    validate_source_directory(config)?;

    validate_destination_directory(config)?;

    validate_home_limits(config);

    Ok(())
}

/// Validate the source directory
fn validate_source_directory(config: &BuildConfig) -> BoxResult<()> {
    let source = &config.source;

    if !source.exists() {
        return Err(SiteError::Config(format!(
            "Source directory does not exist: {}", source.display()
        )).into());
    }

    if !fs::is_directory(source) {
        return Err(SiteError::Config(format!(
            "Source path is not a directory: {}", source.display()
        )).into());
    }

    info!("Source directory: {}", source.display());
    Ok(())
}

/// The destination is wiped on every build, so it must not contain the source
fn validate_destination_directory(config: &BuildConfig) -> BoxResult<()> {
    let destination = config.source_path(&config.destination);

    if destination.exists() && !fs::is_directory(&destination) {
        return Err(SiteError::Config(format!(
            "Destination path exists but is not a directory: {}", destination.display()
        )).into());
    }

    if let (Ok(source), Ok(dest)) = (config.source.canonicalize(), destination.canonicalize()) {
        if source.starts_with(&dest) {
            return Err(SiteError::Config(format!(
                "Destination {} would delete the source directory", destination.display()
            )).into());
        }
    }

    info!("Destination directory: {}", destination.display());
    Ok(())
}

/// Zero limits would produce an empty home page; fall back to defaults
fn validate_home_limits(config: &mut BuildConfig) {
    if config.home_disruption_limit == 0 {
        warn!(
            "home_disruption_limit must be positive, using {}",
            defaults::default_home_disruption_limit()
        );
        config.home_disruption_limit = defaults::default_home_disruption_limit();
    }

    if config.home_preview_logs == 0 {
        warn!(
            "home_preview_logs must be positive, using {}",
            defaults::default_home_preview_logs()
        );
        config.home_preview_logs = defaults::default_home_preview_logs();
    }
}
