use std::path::{Path, PathBuf};
use std::fs;
use log::debug;

use crate::config::defaults;
use crate::config::types::BuildConfig;
use crate::config::validation;
use crate::utils::error::{BoxResult, SiteError};

/// Load build configuration from config files
pub fn load_config<P: AsRef<Path>>(
    source_dir: P,
    config_files: Option<Vec<PathBuf>>
) -> BoxResult<BuildConfig> {
    // Start with default configuration
    let mut config = BuildConfig::default();

    // Load configuration from specified files or defaults
    let config_paths = match config_files {
        Some(paths) if !paths.is_empty() => paths,
        _ => find_default_config_files(&source_dir),
    };

    if config_paths.is_empty() {
        debug!("No configuration files found, using defaults");
    } else {
        for path in config_paths {
            debug!("Loading configuration from {}", path.display());
            merge_config_file(&mut config, &path)?;
        }
    }

    // Set source directory if not already set
    if config.source == defaults::default_source() {
        config.source = source_dir.as_ref().to_path_buf();
    }

    validation::validate_config(&mut config)?;

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Find the first default configuration file in the source directory
fn find_default_config_files<P: AsRef<Path>>(source_dir: P) -> Vec<PathBuf> {
    defaults::CONFIG_FILES
        .iter()
        .map(|name| source_dir.as_ref().join(name))
        .find(|path| path.exists())
        .into_iter()
        .collect()
}

/// Merge a configuration file into the current configuration
fn merge_config_file(config: &mut BuildConfig, config_path: &Path) -> BoxResult<()> {
    if !config_path.exists() {
        return Err(SiteError::Config(format!(
            "Configuration file not found: {}", config_path.display()
        )).into());
    }

    let content = fs::read_to_string(config_path)
        .map_err(|e| SiteError::Config(format!(
            "Failed to read configuration file {}: {}", config_path.display(), e
        )))?;

    let file_config = parse_config(&content, config_path)?;
    merge_configs(config, &file_config);

    Ok(())
}

/// Parse a configuration file based on its extension, assuming YAML when there is none
fn parse_config(content: &str, path: &Path) -> BoxResult<BuildConfig> {
    let ext = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_else(|| "yml".to_string());

    let parsed: Result<BuildConfig, String> = match ext.as_str() {
        "yml" | "yaml" => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        "toml" => toml::from_str(content).map_err(|e| e.to_string()),
        "json" => serde_json::from_str(content).map_err(|e| e.to_string()),
        other => {
            return Err(SiteError::Config(format!(
                "Unsupported configuration file format: {}", other
            )).into());
        }
    };

    parsed.map_err(|e| SiteError::Config(format!(
        "Failed to parse configuration ({}): {}", path.display(), e
    )).into())
}

/// Merge two configurations; only non-default values of `source` win
fn merge_configs(target: &mut BuildConfig, source: &BuildConfig) {
    if source.source != defaults::default_source() {
        target.source = source.source.clone();
    }

    if source.destination != defaults::default_destination() {
        target.destination = source.destination.clone();
    }

    if source.data_file != defaults::default_data_file() {
        target.data_file = source.data_file.clone();
    }

    if source.log_template != defaults::default_log_template() {
        target.log_template = source.log_template.clone();
    }

    if source.index_template != defaults::default_index_template() {
        target.index_template = source.index_template.clone();
    }

    if source.disruption_template != defaults::default_disruption_template() {
        target.disruption_template = source.disruption_template.clone();
    }

    if source.stylesheet != defaults::default_stylesheet() {
        target.stylesheet = source.stylesheet.clone();
    }

    if source.home_disruption_limit != defaults::default_home_disruption_limit() {
        target.home_disruption_limit = source.home_disruption_limit;
    }

    if source.home_preview_logs != defaults::default_home_preview_logs() {
        target.home_preview_logs = source.home_preview_logs;
    }

    // Boolean flags are simply set if they're true in the source
    if source.nav_titles {
        target.nav_titles = true;
    }

    if source.default_tag != defaults::default_tag() {
        target.default_tag = source.default_tag.clone();
    }
}
