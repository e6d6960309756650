use std::cmp::Ordering;
use std::str::FromStr;

use chrono::NaiveDate;
use log::{debug, warn};
use serde::{Deserialize, Deserializer};

use crate::content::date::{normalize_date, parse_iso_date};
use crate::content::disruption::{parse_label, DisruptionLabel};
use crate::content::slug::{slugify_or, LOG_FALLBACK};
use crate::utils::error::{BoxResult, SiteError};

/// Top-level shape of the data file
#[derive(Debug, Clone, Deserialize)]
pub struct DataFile {
    pub site: Site,
    pub logs: Vec<LogEntry>,
}

/// Site-wide metadata, read once and shared read-only by every renderer
#[derive(Debug, Clone, Deserialize)]
pub struct Site {
    /// Base URL without a trailing slash
    #[serde(deserialize_with = "deserialize_base_url")]
    pub base_url: String,

    pub og_image: String,

    pub youtube: String,

    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub bandcamp: String,

    /// Source repository link
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub github: String,

    #[serde(default = "default_lang")]
    pub default_lang: String,

    /// Brand name used in page titles and structured metadata
    #[serde(default = "default_site_name")]
    pub name: String,
}

fn default_lang() -> String {
    "en".to_string()
}

fn default_site_name() -> String {
    "OX500".to_string()
}

/// A log entry exactly as it appears in the data file
#[derive(Debug, Clone, Deserialize)]
pub struct LogEntry {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub series: Option<String>,
    #[serde(default)]
    pub disruption: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
}

impl LogEntry {
    /// Raw grouping label; `series` wins over `disruption` when both are set
    pub fn group_label(&self) -> Option<&str> {
        [self.series.as_deref(), self.disruption.as_deref()]
            .into_iter()
            .flatten()
            .find(|label| !label.is_empty())
            .map(str::trim)
            .filter(|label| !label.is_empty())
    }
}

/// Integer value of a log id, of any magnitude. Ordered numerically, so
/// `"007"` equals `"7"` and `"10"` sorts after `"9"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogNumber {
    negative: bool,
    /// Decimal digits without leading zeros, `"0"` for zero
    digits: String,
}

impl FromStr for LogNumber {
    type Err = String;

    /// Accepts surrounding whitespace, a sign and single underscores
    /// between digits (`1_000`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (negative, body) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let valid = !body.is_empty()
            && body
                .split('_')
                .all(|group| !group.is_empty() && group.bytes().all(|b| b.is_ascii_digit()));
        if !valid {
            return Err(format!("invalid digit in '{}'", s));
        }

        let digits: String = body.chars().filter(|c| *c != '_').collect();
        let digits = match digits.trim_start_matches('0') {
            "" => "0".to_string(),
            trimmed => trimmed.to_string(),
        };

        Ok(LogNumber {
            negative: negative && digits != "0",
            digits,
        })
    }
}

impl From<i64> for LogNumber {
    fn from(value: i64) -> Self {
        LogNumber {
            negative: value < 0,
            digits: value.unsigned_abs().to_string(),
        }
    }
}

impl Ord for LogNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        let magnitude = self
            .digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.cmp(&other.digits));

        match (self.negative, other.negative) {
            (false, false) => magnitude,
            (true, true) => magnitude.reverse(),
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
        }
    }
}

impl PartialOrd for LogNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A normalized log record ready for grouping and rendering
#[derive(Debug, Clone)]
pub struct Log {
    /// Identifier as written in the data file
    pub id: String,
    /// Integer value of `id`, the sort key
    pub number: LogNumber,
    pub title: String,
    /// Date as written in the data file (empty when absent)
    pub raw_date: String,
    /// Normalized date, today when `raw_date` is missing or malformed
    pub date: NaiveDate,
    pub text: String,
    pub slug: String,
    pub excerpt: String,
    pub tag: String,
    pub group: Option<DisruptionLabel>,
}

impl Log {
    /// Normalize a raw entry. Fails only when the identifier is not an integer.
    pub fn from_entry(entry: &LogEntry, today: NaiveDate, default_tag: &str) -> BoxResult<Log> {
        let number = entry.id.parse::<LogNumber>().map_err(|e| {
            SiteError::Data(format!("Log id '{}' is not an integer: {}", entry.id, e))
        })?;

        let raw_date = entry.date.clone().unwrap_or_default();
        if raw_date.trim().is_empty() {
            debug!("Log {} has no date, using {}", entry.id, today);
        } else if parse_iso_date(&raw_date).is_none() {
            warn!("Log {} has malformed date '{}', using {}", entry.id, raw_date, today);
        }
        let date = normalize_date(&raw_date, today);

        let slug_source = entry
            .slug
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(&entry.title);

        Ok(Log {
            id: entry.id.clone(),
            number,
            title: entry.title.clone(),
            raw_date,
            date,
            text: entry.text.clone().unwrap_or_default(),
            slug: slugify_or(slug_source, LOG_FALLBACK),
            excerpt: entry.excerpt.clone().unwrap_or_default(),
            tag: entry
                .tag
                .clone()
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| default_tag.to_string()),
            group: entry.group_label().and_then(parse_label),
        })
    }
}

/// Accepts the identifier as either a JSON string or a JSON integer
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct IdVisitor;

    impl<'de> serde::de::Visitor<'de> for IdVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a numeric string or an integer")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_base_url<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let url = String::deserialize(deserializer)?;
    Ok(url.trim_end_matches('/').to_string())
}
