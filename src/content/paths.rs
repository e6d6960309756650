use crate::content::date::year_month;
use crate::content::model::Log;

/// Extension of every generated page
pub const PAGE_EXT: &str = "html";

/// Directory holding the log pages
pub const LOGS_DIR: &str = "logs";

/// Directory holding the disruption node pages
pub const DISRUPTION_DIR: &str = "disruption";

/// Output path of a log page relative to the destination:
/// `logs/<YYYY>/<MM>/log-<id>-<slug>.html`
pub fn log_rel_path(log: &Log) -> String {
    let (year, month) = year_month(log.date);
    format!(
        "{}/{}/{}/log-{}-{}.{}",
        LOGS_DIR, year, month, log.id, log.slug, PAGE_EXT
    )
}

/// Output path of a disruption node page: `disruption/<slug>.html`
pub fn disruption_rel_path(slug: &str) -> String {
    format!("{}/{}.{}", DISRUPTION_DIR, slug, PAGE_EXT)
}

/// Site-root-relative URL path of an output path
pub fn url_path(rel_path: &str) -> String {
    format!("/{}", rel_path.trim_start_matches('/'))
}

/// Fully-qualified URL of an output path.
/// `base_url` is expected without a trailing slash.
pub fn canonical_url(base_url: &str, rel_path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), url_path(rel_path))
}
