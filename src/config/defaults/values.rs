use std::path::PathBuf;

/// Build configuration file names to look for in the source directory
pub const CONFIG_FILES: [&str; 4] = [
    "_logsite.toml",
    "_logsite.yml",
    "_logsite.yaml",
    "_logsite.json",
];

/// Default source directory
pub fn default_source() -> PathBuf {
    PathBuf::from(".")
}

/// Default destination directory
pub fn default_destination() -> PathBuf {
    PathBuf::from("dist")
}

/// Default data file, relative to the source directory
pub fn default_data_file() -> PathBuf {
    PathBuf::from("logs.json")
}

/// Default log page template
pub fn default_log_template() -> PathBuf {
    PathBuf::from("template-log.html")
}

/// Default home page template
pub fn default_index_template() -> PathBuf {
    PathBuf::from("template-index.html")
}

/// Default disruption node template (optional on disk)
pub fn default_disruption_template() -> PathBuf {
    PathBuf::from("template-disruption.html")
}

/// Default stylesheet (copied when present)
pub fn default_stylesheet() -> PathBuf {
    PathBuf::from("style.css")
}

/// Disruptions listed on the home page
pub fn default_home_disruption_limit() -> usize {
    3
}

/// Logs previewed per home page disruption
pub fn default_home_preview_logs() -> usize {
    6
}

/// Display tag for logs without one
pub fn default_tag() -> String {
    "LOG".to_string()
}
