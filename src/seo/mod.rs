//! Search engine discovery files: `sitemap.xml` and `robots.txt`.

use chrono::NaiveDate;

use crate::content::date::iso;

/// File name of the sitemap in the destination root
pub const SITEMAP_FILE: &str = "sitemap.xml";

/// File name of the robots file in the destination root
pub const ROBOTS_FILE: &str = "robots.txt";

/// One `<url>` of the sitemap
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: NaiveDate,
    pub priority: &'static str,
}

/// Collects entries in generation order. The home page always comes first.
#[derive(Debug, Clone)]
pub struct Sitemap {
    entries: Vec<SitemapEntry>,
}

impl Sitemap {
    /// Start a sitemap with the home page entry
    pub fn new(base_url: &str, build_date: NaiveDate) -> Self {
        Sitemap {
            entries: vec![SitemapEntry {
                loc: format!("{}/", base_url.trim_end_matches('/')),
                lastmod: build_date,
                priority: "1.0",
            }],
        }
    }

    /// Add a generated page
    pub fn push(&mut self, loc: String, lastmod: NaiveDate) {
        self.entries.push(SitemapEntry {
            loc,
            lastmod,
            priority: "0.8",
        });
    }

    pub fn entries(&self) -> &[SitemapEntry] {
        &self.entries
    }

    /// Render the `urlset` document
    pub fn to_xml(&self) -> String {
        let mut parts = vec![
            r#"<?xml version="1.0" encoding="UTF-8"?>"#.to_string(),
            r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#.to_string(),
        ];

        for entry in &self.entries {
            parts.push("  <url>".to_string());
            parts.push(format!("    <loc>{}</loc>", entry.loc));
            parts.push(format!("    <lastmod>{}</lastmod>", iso(entry.lastmod)));
            parts.push(format!("    <priority>{}</priority>", entry.priority));
            parts.push("  </url>".to_string());
        }

        parts.push("</urlset>".to_string());
        parts.join("\n")
    }
}

/// robots.txt allowing everything and pointing at the sitemap
pub fn robots_txt(base_url: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}/{}\n",
        base_url.trim_end_matches('/'),
        SITEMAP_FILE
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_home_entry_first() {
        let mut sitemap = Sitemap::new("https://ox.test", ymd(2026, 1, 2));
        sitemap.push("https://ox.test/logs/2025/01/log-2-a.html".to_string(), ymd(2025, 1, 5));

        let entries = sitemap.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].loc, "https://ox.test/");
        assert_eq!(entries[0].priority, "1.0");
        assert_eq!(entries[1].priority, "0.8");
    }

    #[test]
    fn test_xml_document() {
        let mut sitemap = Sitemap::new("https://ox.test/", ymd(2026, 1, 2));
        sitemap.push("https://ox.test/disruption/alpha.html".to_string(), ymd(2025, 2, 10));

        let xml = sitemap.to_xml();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset"));
        assert!(xml.contains("    <loc>https://ox.test/</loc>\n    <lastmod>2026-01-02</lastmod>\n    <priority>1.0</priority>"));
        assert!(xml.contains("    <loc>https://ox.test/disruption/alpha.html</loc>\n    <lastmod>2025-02-10</lastmod>\n    <priority>0.8</priority>"));
        assert!(xml.ends_with("</urlset>"));
        assert_eq!(xml.matches("<url>").count(), 2);
    }

    #[test]
    fn test_robots() {
        assert_eq!(
            robots_txt("https://ox.test/"),
            "User-agent: *\nAllow: /\n\nSitemap: https://ox.test/sitemap.xml\n"
        );
    }
}
