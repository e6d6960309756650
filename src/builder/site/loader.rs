use log::{debug, warn};

use crate::config::BuildConfig;
use crate::render::{Templates, BUILTIN_DISRUPTION_TEMPLATE};
use crate::utils::error::{BoxResult, SiteError};
use crate::utils::fs;

/// Load the page templates. The log and index templates are required;
/// a missing disruption template falls back to the built-in one.
pub fn load_templates(config: &BuildConfig) -> BoxResult<Templates> {
    let log = read_required(config, &config.log_template)?;
    let index = read_required(config, &config.index_template)?;

    let disruption_path = config.source_path(&config.disruption_template);
    let disruption = if fs::is_file(&disruption_path) {
        debug!("Loading disruption template from {}", disruption_path.display());
        fs::read_file(&disruption_path)?
    } else {
        warn!(
            "No disruption template at {}, using the built-in one",
            disruption_path.display()
        );
        BUILTIN_DISRUPTION_TEMPLATE.to_string()
    };

    Ok(Templates { log, index, disruption })
}

fn read_required(config: &BuildConfig, relative: &std::path::Path) -> BoxResult<String> {
    let path = config.source_path(relative);
    debug!("Loading template from {}", path.display());

    fs::read_file(&path).map_err(|e| {
        SiteError::Template(format!("Cannot load template {}: {}", path.display(), e)).into()
    })
}
