use std::path::{Path, PathBuf};
use serde::{Serialize, Deserialize};

use crate::config::defaults;
use crate::render::RenderOptions;

/// Build configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Directory holding the data file, templates and stylesheet
    #[serde(default = "defaults::default_source")]
    pub source: PathBuf,

    /// Output directory, wiped at the start of every build
    #[serde(default = "defaults::default_destination")]
    pub destination: PathBuf,

    /// JSON data file with `site` and `logs`
    #[serde(default = "defaults::default_data_file")]
    pub data_file: PathBuf,

    /// Log page template
    #[serde(default = "defaults::default_log_template")]
    pub log_template: PathBuf,

    /// Home page template
    #[serde(default = "defaults::default_index_template")]
    pub index_template: PathBuf,

    /// Disruption node template; the built-in one is used when missing
    #[serde(default = "defaults::default_disruption_template")]
    pub disruption_template: PathBuf,

    /// Stylesheet copied verbatim when present
    #[serde(default = "defaults::default_stylesheet")]
    pub stylesheet: PathBuf,

    /// Number of disruptions shown on the home page
    #[serde(default = "defaults::default_home_disruption_limit")]
    pub home_disruption_limit: usize,

    /// Number of logs previewed under each home page disruption
    #[serde(default = "defaults::default_home_preview_logs")]
    pub home_preview_logs: usize,

    /// Show target titles in PREV/NEXT links
    #[serde(default)]
    pub nav_titles: bool,

    /// Display tag for logs without one
    #[serde(default = "defaults::default_tag")]
    pub default_tag: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            source: defaults::default_source(),
            destination: defaults::default_destination(),
            data_file: defaults::default_data_file(),
            log_template: defaults::default_log_template(),
            index_template: defaults::default_index_template(),
            disruption_template: defaults::default_disruption_template(),
            stylesheet: defaults::default_stylesheet(),
            home_disruption_limit: defaults::default_home_disruption_limit(),
            home_preview_logs: defaults::default_home_preview_logs(),
            nav_titles: false,
            default_tag: defaults::default_tag(),
        }
    }
}

impl BuildConfig {
    /// Resolve a source-relative input path
    pub fn source_path(&self, relative: &Path) -> PathBuf {
        if relative.is_absolute() {
            relative.to_path_buf()
        } else {
            self.source.join(relative)
        }
    }

    /// Presentation options handed to the page renderer
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            home_disruption_limit: self.home_disruption_limit,
            home_preview_logs: self.home_preview_logs,
            nav_titles: self.nav_titles,
        }
    }
}
