use chrono::NaiveDate;

use crate::content::paths::{canonical_url, disruption_rel_path, log_rel_path, url_path};
use crate::content::{Disruption, Log, Site};
use crate::render::jsonld::{self, SeriesRef};
use crate::render::template::{escape, render, TemplateVars};
use crate::render::Templates;
use crate::utils::error::BoxResult;

/// Presentation knobs for page rendering
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// How many disruptions the home page lists
    pub home_disruption_limit: usize,
    /// How many logs each home page disruption previews
    pub home_preview_logs: usize,
    /// Put the target title in PREV/NEXT link text
    pub nav_titles: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            home_disruption_limit: 3,
            home_preview_logs: 6,
            nav_titles: false,
        }
    }
}

/// One generated page
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// Output path relative to the destination directory
    pub rel_path: String,
    pub content: String,
    /// Date reported to the sitemap
    pub lastmod: NaiveDate,
}

/// Renders pages for one build run
pub struct PageRenderer<'a> {
    site: &'a Site,
    templates: &'a Templates,
    options: &'a RenderOptions,
}

impl<'a> PageRenderer<'a> {
    pub fn new(site: &'a Site, templates: &'a Templates, options: &'a RenderOptions) -> Self {
        PageRenderer { site, templates, options }
    }

    /// Placeholders shared by the log and disruption templates, appended
    /// after the page specific ones
    fn site_vars(&self, vars: &mut TemplateVars) {
        vars.set("YOUTUBE", self.site.youtube.as_str())
            .set("BANDCAMP", self.site.bandcamp.as_str())
            .set("GITHUB", self.site.github.as_str())
            .set("SITE_NAME", escape(&self.site.name));
    }

    /// Render the page of `logs[index]`. `logs` is the full newest-first list;
    /// the previous link points at the next older log, the next link at the
    /// next newer one.
    pub fn render_log(&self, logs: &[Log], index: usize) -> BoxResult<RenderedPage> {
        let log = &logs[index];
        let site = self.site;
        let rel_path = log_rel_path(log);
        let page_url = url_path(&rel_path);
        let canonical = canonical_url(&site.base_url, &rel_path);
        let headline = format!("LOG {} // {}", log.id, log.title);
        let page_title = format!("{} — {}", headline, site.name);

        let prev_link = logs
            .get(index + 1)
            .map(|older| self.nav_link("nav-prev", "prev", "PREV", older))
            .unwrap_or_default();
        let next_link = index
            .checked_sub(1)
            .map(|newer| self.nav_link("nav-next", "next", "NEXT", &logs[newer]))
            .unwrap_or_default();

        let group_path = log.group.as_ref().map(|g| url_path(&disruption_rel_path(&g.slug)));
        let node_meta = match (&log.group, &group_path) {
            (Some(group), Some(path)) => format!(
                "NODE: <a href=\"{}\" rel=\"up\">{}</a> · ",
                path,
                escape(&group.name)
            ),
            _ => String::new(),
        };
        let series = match (&log.group, group_path) {
            (Some(group), Some(path)) => Some(SeriesRef {
                name: &group.name,
                url: format!("{}{}", site.base_url, path),
            }),
            _ => None,
        };

        let mut vars = TemplateVars::new();
        vars.set("LANG", site.default_lang.as_str())
            .set_escaped("PAGE_TITLE", &page_title)
            .set_escaped(
                "DESCRIPTION",
                &format!("{} — {} disruption lyrics log.", headline, site.name),
            )
            .set("CANONICAL", canonical)
            .set_escaped("OG_TITLE", &page_title)
            .set_escaped("OG_DESC", &log.excerpt)
            .set("OG_IMAGE", site.og_image.as_str())
            .set("JSONLD", jsonld::article(site, &page_url, &headline, log.date, series)?)
            .set_escaped("LOG_ID", &log.id)
            .set_escaped("LOG_TITLE", &log.title)
            .set_escaped("LOG_DATE", &log.raw_date)
            .set_escaped("LOG_TAG", &log.tag)
            .set("LOG_TEXT", format!("{}\n", escape(log.text.trim_end())))
            .set("NODE_META", node_meta)
            .set("PREV_LINK", prev_link)
            .set("NEXT_LINK", next_link);
        self.site_vars(&mut vars);

        Ok(RenderedPage {
            rel_path,
            content: render(&self.templates.log, &vars),
            lastmod: log.date,
        })
    }

    fn nav_link(&self, class: &str, rel: &str, label: &str, target: &Log) -> String {
        let text = if self.options.nav_titles {
            format!("{}: {}", label, target.title.trim())
        } else {
            label.to_string()
        };

        format!(
            "<a class=\"{}\" href=\"{}\" rel=\"{}\" title=\"{}\">{}</a>",
            class,
            url_path(&log_rel_path(target)),
            rel,
            escape(&format!("LOG {} // {}", target.id, target.title)),
            escape(&text)
        )
    }

    /// Render a disruption node page listing every member, newest first
    pub fn render_disruption(&self, disruption: &Disruption<'_>) -> BoxResult<RenderedPage> {
        let site = self.site;
        let name = &disruption.name;
        let count = disruption.logs.len();
        let newest_date = disruption.newest().date;

        let rel_path = disruption_rel_path(&disruption.slug);
        let page_url = url_path(&rel_path);
        let canonical = canonical_url(&site.base_url, &rel_path);
        let page_title = format!("DISRUPTION // {} — {}", name, site.name);

        let node_list = disruption
            .logs
            .iter()
            .map(|log| log_line(log))
            .collect::<Vec<_>>()
            .join("\n");

        let mut vars = TemplateVars::new();
        vars.set("LANG", site.default_lang.as_str())
            .set_escaped("PAGE_TITLE", &page_title)
            .set_escaped(
                "DESCRIPTION",
                &format!(
                    "{} disruption node: {}. Contains {} log pages.",
                    site.name, name, count
                ),
            )
            .set("CANONICAL", canonical)
            .set_escaped("OG_TITLE", &page_title)
            .set_escaped("OG_DESC", &format!("DISRUPTION // {} [{}]", name, count))
            .set("OG_IMAGE", site.og_image.as_str())
            .set("JSONLD", jsonld::disruption_node(site, &page_url, name, newest_date)?)
            .set_escaped("H1", &format!("DISRUPTION // {}", name))
            .set_escaped(
                "META",
                &format!("{} // DISRUPTION_FEED · node · logs: {}", site.name, count),
            )
            .set("NODE_LOG_LIST", node_list);
        self.site_vars(&mut vars);

        Ok(RenderedPage {
            rel_path,
            content: render(&self.templates.disruption, &vars),
            lastmod: newest_date,
        })
    }

    /// Render the home page: the newest disruptions, first one expanded
    pub fn render_home(&self, disruptions: &[Disruption<'_>]) -> String {
        let blocks = disruptions
            .iter()
            .take(self.options.home_disruption_limit)
            .enumerate()
            .map(|(position, disruption)| self.home_block(disruption, position == 0))
            .collect::<Vec<_>>()
            .join("\n\n");

        let mut vars = TemplateVars::new();
        vars.set("DISRUPTION_BLOCKS", blocks)
            .set("LANG", self.site.default_lang.as_str())
            .set("CANONICAL", format!("{}/", self.site.base_url))
            .set("OG_IMAGE", self.site.og_image.as_str());
        self.site_vars(&mut vars);

        render(&self.templates.index, &vars)
    }

    fn home_block(&self, disruption: &Disruption<'_>, open: bool) -> String {
        let preview: String = disruption
            .logs
            .iter()
            .take(self.options.home_preview_logs)
            .map(|log| log_line(log))
            .collect();

        format!(
            r#"<details class="log-entry"{open}>
  <summary>
    <div class="log-entry-header">
      <span>{header}</span>
      <span>NODE</span>
    </div>
  </summary>
  <div class="log-entry-body">
    <p><a href="{node_url}">OPEN NODE →</a></p>
    <div class="logs">
      {preview}
    </div>
  </div>
</details>"#,
            open = if open { " open" } else { "" },
            header = escape(&format!(
                "DISRUPTION // {} [{}]",
                disruption.name,
                disruption.logs.len()
            )),
            node_url = url_path(&disruption_rel_path(&disruption.slug)),
            preview = preview,
        )
    }
}

/// Clickable one-line summary of a log
fn log_line(log: &Log) -> String {
    format!(
        "<a class=\"log-line\" href=\"{}\"><span class=\"log-id\">LOG: {}</span><span class=\"log-tag\">{}</span></a>",
        url_path(&log_rel_path(log)),
        escape(&log.id),
        escape(&log.title)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{group_logs, normalize_logs, LogEntry};

    fn site() -> Site {
        serde_json::from_str(
            r#"{"base_url": "https://ox.test", "og_image": "https://ox.test/og.png",
                "youtube": "https://yt.test", "bandcamp": "https://bc.test"}"#,
        )
        .unwrap()
    }

    fn templates() -> Templates {
        Templates {
            log: "{{PAGE_TITLE}}|{{PREV_LINK}}|{{NEXT_LINK}}|{{NODE_META}}|{{LOG_TEXT}}|{{MISSING}}".to_string(),
            index: "<main>{{DISRUPTION_BLOCKS}}</main><a href=\"{{YOUTUBE}}\"></a>".to_string(),
            disruption: "{{H1}}|{{META}}|{{NODE_LOG_LIST}}".to_string(),
        }
    }

    fn logs(json: &str) -> Vec<Log> {
        let entries: Vec<LogEntry> = serde_json::from_str(json).unwrap();
        normalize_logs(&entries, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(), "LOG").unwrap()
    }

    fn sample() -> Vec<Log> {
        logs(
            r#"[
                {"id": "1", "title": "First", "date": "2024-12-01", "series": "DISRUPTION // Alpha"},
                {"id": "2", "title": "Second <b>", "date": "2025-01-05", "text": "line & more\n\n  "},
                {"id": "3", "title": "Third", "date": "2025-02-10", "series": "DISRUPTION // Alpha"}
            ]"#,
        )
    }

    #[test]
    fn test_navigation_links() {
        let logs = sample();
        let site = site();
        let templates = templates();
        let options = RenderOptions::default();
        let renderer = PageRenderer::new(&site, &templates, &options);

        let newest = renderer.render_log(&logs, 0).unwrap();
        assert!(newest.content.contains("rel=\"prev\""));
        assert!(!newest.content.contains("rel=\"next\""));

        let middle = renderer.render_log(&logs, 1).unwrap();
        assert!(middle.content.contains("rel=\"prev\""));
        assert!(middle.content.contains("rel=\"next\""));
        assert!(middle.content.contains("href=\"/logs/2024/12/log-1-first.html\" rel=\"prev\""));
        assert!(middle.content.contains("href=\"/logs/2025/02/log-3-third.html\" rel=\"next\""));

        let oldest = renderer.render_log(&logs, 2).unwrap();
        assert!(!oldest.content.contains("rel=\"prev\""));
        assert!(oldest.content.contains("rel=\"next\""));
    }

    #[test]
    fn test_nav_titles_option() {
        let logs = sample();
        let site = site();
        let templates = templates();
        let options = RenderOptions {
            nav_titles: true,
            ..RenderOptions::default()
        };
        let renderer = PageRenderer::new(&site, &templates, &options);

        let page = renderer.render_log(&logs, 1).unwrap();
        assert!(page.content.contains(">PREV: First</a>"));
        assert!(page.content.contains(">NEXT: Third</a>"));
    }

    #[test]
    fn test_log_page_escaping_and_passthrough() {
        let logs = sample();
        let site = site();
        let templates = templates();
        let options = RenderOptions::default();
        let renderer = PageRenderer::new(&site, &templates, &options);

        let page = renderer.render_log(&logs, 1).unwrap();
        assert_eq!(page.rel_path, "logs/2025/01/log-2-second-b.html");
        assert!(page.content.starts_with("LOG 2 // Second &lt;b&gt; — OX500|"));
        assert!(page.content.contains("|line &amp; more\n|"));
        assert!(page.content.ends_with("{{MISSING}}"));
        assert!(page.content.contains("||line"), "ungrouped log has empty node meta");
    }

    #[test]
    fn test_node_meta_for_grouped_log() {
        let logs = sample();
        let site = site();
        let templates = templates();
        let options = RenderOptions::default();
        let renderer = PageRenderer::new(&site, &templates, &options);

        let page = renderer.render_log(&logs, 0).unwrap();
        assert!(page
            .content
            .contains("NODE: <a href=\"/disruption/alpha.html\" rel=\"up\">Alpha</a> · "));
    }

    #[test]
    fn test_disruption_page() {
        let logs = sample();
        let groups = group_logs(&logs);
        let site = site();
        let templates = templates();
        let options = RenderOptions::default();
        let renderer = PageRenderer::new(&site, &templates, &options);

        let page = renderer.render_disruption(&groups[0]).unwrap();
        assert_eq!(page.rel_path, "disruption/alpha.html");
        assert_eq!(page.lastmod, NaiveDate::from_ymd_opt(2025, 2, 10).unwrap());
        assert!(page.content.starts_with("DISRUPTION // Alpha|OX500 // DISRUPTION_FEED · node · logs: 2|"));

        let third = page.content.find("log-3-third").unwrap();
        let first = page.content.find("log-1-first").unwrap();
        assert!(third < first);
    }

    #[test]
    fn test_home_limits_and_open_state() {
        let logs = logs(
            r#"[
                {"id": "1", "title": "a", "date": "2025-01-01", "series": "One"},
                {"id": "2", "title": "b", "date": "2025-01-02", "series": "Two"},
                {"id": "3", "title": "c", "date": "2025-01-03", "series": "Three"},
                {"id": "4", "title": "d", "date": "2025-01-04", "series": "Three"},
                {"id": "5", "title": "e", "date": "2025-01-05", "series": "Three"}
            ]"#,
        );
        let groups = group_logs(&logs);
        let site = site();
        let templates = templates();
        let options = RenderOptions {
            home_disruption_limit: 2,
            home_preview_logs: 2,
            nav_titles: false,
        };
        let renderer = PageRenderer::new(&site, &templates, &options);

        let home = renderer.render_home(&groups);
        assert_eq!(home.matches("<details").count(), 2);
        assert_eq!(home.matches("<details class=\"log-entry\" open>").count(), 1);
        assert!(home.contains("DISRUPTION // Three [3]"));
        assert!(home.contains("DISRUPTION // Two [1]"));
        assert!(!home.contains("DISRUPTION // One"));
        assert!(home.contains("log-5-e.html"));
        assert!(home.contains("log-4-d.html"));
        assert!(!home.contains("log-3-c.html"));
        assert!(home.contains("href=\"https://yt.test\""));

        let open = home.find(" open>").unwrap();
        let three = home.find("Three").unwrap();
        assert!(open < three);
    }
}
