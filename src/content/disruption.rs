use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::content::model::Log;
use crate::content::slug::slugify;

/// Boilerplate prefixes stripped from labels written without a `//` separator.
/// Applied in order, so `disruption series foo` loses both words.
static LABEL_PREFIXES: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        Regex::new(r"(?i)^disruption_series[\s:_-]*").unwrap(),
        Regex::new(r"(?i)^disruption[\s:_-]*").unwrap(),
        Regex::new(r"(?i)^series[\s:_-]*").unwrap(),
    ]
});

/// Parsed grouping label of a log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisruptionLabel {
    /// Human readable name, e.g. `I'M NOT DONE`
    pub name: String,
    /// Slug of `name`, never of the raw label
    pub slug: String,
}

/// Extract the display name from a raw label.
///
/// `DISRUPTION_SERIES // I'M NOT DONE` gives `I'M NOT DONE`. Without a
/// separator, leading `disruption_series`, `disruption` and `series`
/// tokens are removed. An empty result falls back to the trimmed label.
pub fn display_name(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let name = match trimmed.split_once("//") {
        Some((_, rest)) => rest.trim().to_string(),
        None => {
            let mut rest = trimmed.to_string();
            for prefix in LABEL_PREFIXES.iter() {
                rest = prefix.replace(&rest, "").trim().to_string();
            }
            rest
        }
    };

    if name.is_empty() {
        trimmed.to_string()
    } else {
        name
    }
}

/// Parse a raw label into name and slug, `None` for blank labels
pub fn parse_label(raw: &str) -> Option<DisruptionLabel> {
    let name = display_name(raw);
    if name.is_empty() {
        return None;
    }

    let slug = slugify(&name);
    Some(DisruptionLabel { name, slug })
}

/// A group of logs sharing one disruption slug
#[derive(Debug, Clone)]
pub struct Disruption<'a> {
    pub name: String,
    pub slug: String,
    /// Members, newest first
    pub logs: Vec<&'a Log>,
}

impl<'a> Disruption<'a> {
    /// Most recent member. Groups are never empty.
    pub fn newest(&self) -> &'a Log {
        self.logs[0]
    }
}

/// Group logs by disruption slug.
///
/// `logs` must already be sorted newest first; member lists inherit that
/// order. Groups are returned ordered by their newest member's id,
/// descending. The display name comes from the newest member's label.
pub fn group_logs(logs: &[Log]) -> Vec<Disruption<'_>> {
    let mut groups: Vec<Disruption<'_>> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for log in logs {
        let Some(label) = &log.group else {
            continue;
        };

        let position = *index.entry(label.slug.clone()).or_insert_with(|| {
            groups.push(Disruption {
                name: label.name.clone(),
                slug: label.slug.clone(),
                logs: Vec::new(),
            });
            groups.len() - 1
        });
        groups[position].logs.push(log);
    }

    groups.sort_by(|a, b| b.newest().number.cmp(&a.newest().number));
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::model::LogNumber;
    use chrono::NaiveDate;

    fn log(id: i64, label: Option<&str>) -> Log {
        Log {
            id: id.to_string(),
            number: LogNumber::from(id),
            title: format!("Log {}", id),
            raw_date: String::new(),
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            text: String::new(),
            slug: format!("log-{}", id),
            excerpt: String::new(),
            tag: "LOG".to_string(),
            group: label.and_then(parse_label),
        }
    }

    #[test]
    fn test_display_name_with_separator() {
        assert_eq!(display_name("DISRUPTION_SERIES // I'M NOT DONE"), "I'M NOT DONE");
        assert_eq!(display_name("DISRUPTION // WRITE AI TO CONTINUE"), "WRITE AI TO CONTINUE");
        assert_eq!(display_name("A // B // C"), "B // C");
    }

    #[test]
    fn test_display_name_without_separator() {
        assert_eq!(display_name("I'M NOT DONE"), "I'M NOT DONE");
        assert_eq!(display_name("disruption_series: Static"), "Static");
        assert_eq!(display_name("Disruption - Static"), "Static");
        assert_eq!(display_name("SERIES_Static"), "Static");
        assert_eq!(display_name("disruption series Static"), "Static");
    }

    #[test]
    fn test_display_name_falls_back_to_raw() {
        assert_eq!(display_name("  DISRUPTION  "), "DISRUPTION");
        assert_eq!(display_name("DISRUPTION //"), "DISRUPTION //");
        assert_eq!(display_name("   "), "");
    }

    #[test]
    fn test_slug_uses_display_name() {
        let label = parse_label("DISRUPTION_SERIES // I’M NOT DONE").unwrap();
        assert_eq!(label.slug, "im-not-done");
        assert!(parse_label("").is_none());
    }

    #[test]
    fn test_grouping_members_and_order() {
        let logs = vec![
            log(9, Some("DISRUPTION // Beta")),
            log(8, Some("Alpha")),
            log(7, None),
            log(6, Some("DISRUPTION_SERIES // beta")),
            log(5, Some("DISRUPTION // Alpha")),
            log(4, Some("Beta")),
        ];

        let groups = group_logs(&logs);
        assert_eq!(groups.len(), 2);

        assert_eq!(groups[0].slug, "beta");
        assert_eq!(groups[0].name, "Beta");
        let ids: Vec<&str> = groups[0].logs.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["9", "6", "4"]);

        assert_eq!(groups[1].slug, "alpha");
        let ids: Vec<&str> = groups[1].logs.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["8", "5"]);
    }

    #[test]
    fn test_ungrouped_logs_produce_no_groups() {
        let logs = vec![log(2, None), log(1, None)];
        assert!(group_logs(&logs).is_empty());
    }
}
