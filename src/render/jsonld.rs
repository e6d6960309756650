//! schema.org structured metadata embedded in `<script type="application/ld+json">`.
//!
//! Field order follows declaration order, so the emitted JSON is stable.

use chrono::NaiveDate;
use serde::Serialize;

use crate::content::date::iso;
use crate::content::Site;
use crate::utils::error::BoxResult;

const SCHEMA_CONTEXT: &str = "https://schema.org";

#[derive(Debug, Serialize)]
struct Organization<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
    #[serde(rename = "sameAs", skip_serializing_if = "Option::is_none")]
    same_as: Option<Vec<&'a str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    logo: Option<ImageObject<'a>>,
}

#[derive(Debug, Serialize)]
struct ImageObject<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    url: &'a str,
}

#[derive(Debug, Serialize)]
struct WebPageRef {
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(rename = "@id")]
    id: String,
}

/// A work this page belongs to (the archive, a series, the website)
#[derive(Debug, Serialize)]
struct PartOf<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: String,
    url: String,
    #[serde(rename = "codeRepository", skip_serializing_if = "Option::is_none")]
    code_repository: Option<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum IsPartOf<'a> {
    Single(PartOf<'a>),
    Many(Vec<PartOf<'a>>),
}

#[derive(Debug, Serialize)]
struct Article<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    headline: &'a str,
    author: Organization<'a>,
    publisher: Organization<'a>,
    #[serde(rename = "datePublished")]
    date_published: String,
    #[serde(rename = "dateModified")]
    date_modified: String,
    #[serde(rename = "mainEntityOfPage")]
    main_entity_of_page: WebPageRef,
    #[serde(rename = "inLanguage")]
    in_language: &'a str,
    #[serde(rename = "isPartOf")]
    is_part_of: IsPartOf<'a>,
}

#[derive(Debug, Serialize)]
struct CollectionPage<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: String,
    description: String,
    url: String,
    #[serde(rename = "dateModified")]
    date_modified: String,
    #[serde(rename = "isPartOf")]
    is_part_of: PartOf<'a>,
    publisher: Organization<'a>,
}

/// Group a log belongs to, as referenced from its metadata
pub struct SeriesRef<'a> {
    pub name: &'a str,
    pub url: String,
}

fn publisher(site: &Site) -> Organization<'_> {
    Organization {
        kind: "Organization",
        name: &site.name,
        url: None,
        same_as: None,
        logo: Some(ImageObject {
            kind: "ImageObject",
            url: &site.og_image,
        }),
    }
}

fn home_url(site: &Site) -> String {
    format!("{}/", site.base_url)
}

/// `Article` metadata for a single log page
pub fn article(
    site: &Site,
    url_path: &str,
    headline: &str,
    date: NaiveDate,
    series: Option<SeriesRef<'_>>,
) -> BoxResult<String> {
    let archive = PartOf {
        kind: "CreativeWork",
        name: format!("{} // system archive", site.name),
        url: home_url(site),
        code_repository: Some(site.github.as_str()),
    };

    let is_part_of = match series {
        Some(series) => IsPartOf::Many(vec![
            PartOf {
                kind: "CreativeWorkSeries",
                name: format!("DISRUPTION // {}", series.name),
                url: series.url,
                code_repository: None,
            },
            archive,
        ]),
        None => IsPartOf::Single(archive),
    };

    let same_as = if site.github.is_empty() {
        Vec::new()
    } else {
        vec![site.github.as_str()]
    };

    let data = Article {
        context: SCHEMA_CONTEXT,
        kind: "Article",
        headline,
        author: Organization {
            kind: "Organization",
            name: &site.name,
            url: Some(site.base_url.as_str()),
            same_as: Some(same_as),
            logo: None,
        },
        publisher: publisher(site),
        date_published: iso(date),
        date_modified: iso(date),
        main_entity_of_page: WebPageRef {
            kind: "WebPage",
            id: format!("{}{}", site.base_url, url_path),
        },
        in_language: &site.default_lang,
        is_part_of,
    };

    Ok(serde_json::to_string_pretty(&data)?)
}

/// `CollectionPage` metadata for a disruption node page
pub fn disruption_node(
    site: &Site,
    url_path: &str,
    name: &str,
    date: NaiveDate,
) -> BoxResult<String> {
    let data = CollectionPage {
        context: SCHEMA_CONTEXT,
        kind: "CollectionPage",
        name: format!("DISRUPTION // {}", name),
        description: format!("{} disruption node: {}", site.name, name),
        url: format!("{}{}", site.base_url, url_path),
        date_modified: iso(date),
        is_part_of: PartOf {
            kind: "WebSite",
            name: site.name.clone(),
            url: home_url(site),
            code_repository: Some(site.github.as_str()),
        },
        publisher: publisher(site),
    };

    Ok(serde_json::to_string_pretty(&data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn site() -> Site {
        serde_json::from_str(
            r#"{"base_url": "https://ox.test", "og_image": "https://ox.test/og.png",
                "youtube": "yt", "github": "https://github.com/ox/ox"}"#,
        )
        .unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 5).unwrap()
    }

    #[test]
    fn test_article_without_series() {
        let json = article(&site(), "/logs/2025/01/log-2-a.html", "LOG 2 // A", date(), None).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["@type"], "Article");
        assert_eq!(value["headline"], "LOG 2 // A");
        assert_eq!(value["datePublished"], "2025-01-05");
        assert_eq!(value["mainEntityOfPage"]["@id"], "https://ox.test/logs/2025/01/log-2-a.html");
        assert_eq!(value["author"]["sameAs"][0], "https://github.com/ox/ox");
        assert_eq!(value["isPartOf"]["@type"], "CreativeWork");
        assert_eq!(value["isPartOf"]["url"], "https://ox.test/");
    }

    #[test]
    fn test_article_with_series_is_array() {
        let series = SeriesRef {
            name: "I'M NOT DONE",
            url: "https://ox.test/disruption/im-not-done.html".to_string(),
        };
        let json = article(&site(), "/x.html", "LOG 1 // B", date(), Some(series)).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        let parts = value["isPartOf"].as_array().unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0]["@type"], "CreativeWorkSeries");
        assert_eq!(parts[0]["name"], "DISRUPTION // I'M NOT DONE");
        assert!(parts[0].get("codeRepository").is_none());
        assert_eq!(parts[1]["@type"], "CreativeWork");
    }

    #[test]
    fn test_article_key_order_is_stable() {
        let json = article(&site(), "/x.html", "h", date(), None).unwrap();
        let context = json.find("@context").unwrap();
        let headline = json.find("headline").unwrap();
        let part_of = json.find("isPartOf").unwrap();
        assert!(context < headline && headline < part_of);
    }

    #[test]
    fn test_disruption_node() {
        let json = disruption_node(&site(), "/disruption/beta.html", "Beta", date()).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["@type"], "CollectionPage");
        assert_eq!(value["name"], "DISRUPTION // Beta");
        assert_eq!(value["description"], "OX500 disruption node: Beta");
        assert_eq!(value["dateModified"], "2025-01-05");
        assert_eq!(value["isPartOf"]["@type"], "WebSite");
    }
}
