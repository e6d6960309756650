use std::time::Duration;

/// Build statistics
#[derive(Debug, Default, Clone)]
pub struct BuildStats {
    /// Number of log pages written
    pub logs_count: usize,
    /// Number of disruption node pages written
    pub disruptions_count: usize,
    /// Number of sitemap entries, home page included
    pub sitemap_entries: usize,
    /// Whether the stylesheet was copied
    pub stylesheet_copied: bool,
    /// Build duration
    pub duration: Duration,
}
