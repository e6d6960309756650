use std::time::Instant;
use log::{info, debug};

use crate::builder::site::load_templates;
use crate::builder::types::BuildStats;
use crate::config::BuildConfig;
use crate::content::date::today_utc;
use crate::content::paths::canonical_url;
use crate::content::{group_logs, load_data_file, normalize_logs};
use crate::directory::{clean_destination, copy_stylesheet};
use crate::render::{PageRenderer, RenderedPage};
use crate::seo::{robots_txt, Sitemap, ROBOTS_FILE, SITEMAP_FILE};
use crate::utils::error::BoxResult;
use crate::utils::fs;

/// Build the whole site in one pass.
///
/// Inputs are read and validated before the destination is wiped, so a
/// malformed data file or a missing template leaves the previous output
/// in place. Failures after that point can leave a partial tree.
pub fn build_site(config: &BuildConfig) -> BoxResult<BuildStats> {
    let start_time = Instant::now();
    let mut stats = BuildStats::default();

    // One fallback date for the whole run
    let today = today_utc();

    let data_path = config.source_path(&config.data_file);
    info!("Loading data from {}", data_path.display());
    let data = load_data_file(&data_path)?;
    let site = data.site;

    let templates = load_templates(config)?;

    let logs = normalize_logs(&data.logs, today, &config.default_tag)?;
    let disruptions = group_logs(&logs);
    info!("Loaded {} logs in {} disruptions", logs.len(), disruptions.len());

    let destination = config.source_path(&config.destination);
    clean_destination(&destination)?;
    info!("Output will be generated in: {}", destination.display());

    stats.stylesheet_copied = copy_stylesheet(
        &config.source_path(&config.stylesheet),
        &destination.join("style.css"),
    )?;

    let options = config.render_options();
    let renderer = PageRenderer::new(&site, &templates, &options);
    let mut sitemap = Sitemap::new(&site.base_url, today);

    let mut write_page = |page: RenderedPage| -> BoxResult<()> {
        debug!("Writing {}", page.rel_path);
        fs::write_file(destination.join(&page.rel_path), &page.content)?;
        sitemap.push(canonical_url(&site.base_url, &page.rel_path), page.lastmod);
        Ok(())
    };

    for index in 0..logs.len() {
        write_page(renderer.render_log(&logs, index)?)?;
        stats.logs_count += 1;
    }

    for disruption in &disruptions {
        write_page(renderer.render_disruption(disruption)?)?;
        stats.disruptions_count += 1;
    }

    fs::write_file(destination.join("index.html"), &renderer.render_home(&disruptions))?;

    fs::write_file(destination.join(ROBOTS_FILE), &robots_txt(&site.base_url))?;
    fs::write_file(destination.join(SITEMAP_FILE), &sitemap.to_xml())?;
    stats.sitemap_entries = sitemap.entries().len();

    stats.duration = start_time.elapsed();
    info!("Site built in {:.2?}", stats.duration);
    info!(
        "Logs: {}, Disruptions: {}, Sitemap entries: {}",
        stats.logs_count, stats.disruptions_count, stats.sitemap_entries
    );
    info!("BUILD OK — index, logs, disruption nodes, sitemap, robots generated");

    Ok(stats)
}
