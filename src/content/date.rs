use chrono::{Datelike, NaiveDate, Utc, Weekday};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Calendar, basic and week dates at the start of the input
static DATE_PART: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:(?P<y>\d{4})-(?P<m>\d{2})-(?P<d>\d{2})|(?P<by>\d{4})(?P<bm>\d{2})(?P<bd>\d{2})|(?P<wy>\d{4})-?W(?P<w>\d{2})(?:-?(?P<wd>\d))?)",
    )
    .unwrap()
});

/// Time of day with optional fraction and UTC offset, colons optional
static TIME_PART: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<h>\d{2})(?::?(?P<mi>\d{2})(?::?(?P<s>\d{2})(?:[.,]\d+)?)?)?(?:[Zz]|[+-](?P<oh>\d{2})(?::?(?P<om>\d{2})(?::?(?P<os>\d{2})(?:[.,]\d+)?)?)?)?$",
    )
    .unwrap()
});

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Current UTC calendar date
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Parse an ISO-8601 date or datetime and return its calendar date.
///
/// Accepts `2025-01-05`, `20250105` and week dates like `2025-W01-7`,
/// optionally followed by a one character separator and a time
/// (`22`, `22:10`, `221000.5`) with an offset (`Z`, `+02`, `+02:00`).
/// Offset-qualified datetimes keep their local date; no UTC conversion
/// happens, so `2025-01-01T00:30:00+02:00` is still January 1st.
pub fn parse_iso_date(input: &str) -> Option<NaiveDate> {
    let s = input.trim();
    let caps = DATE_PART.captures(s)?;
    let date = date_from_captures(&caps)?;

    let rest = &s[caps.get(0)?.end()..];
    let mut chars = rest.chars();
    if chars.next().is_none() {
        return Some(date);
    }

    valid_time(chars.as_str()).then_some(date)
}

fn date_from_captures(caps: &Captures) -> Option<NaiveDate> {
    let number = |name: &str| caps.name(name).and_then(|m| m.as_str().parse::<u32>().ok());

    if let Some(week) = number("w") {
        let year = number("wy")? as i32;
        let day = number("wd").unwrap_or(1) as usize;
        let weekday = *WEEKDAYS.get(day.checked_sub(1)?)?;
        return NaiveDate::from_isoywd_opt(year, week, weekday);
    }

    let year = number("y").or_else(|| number("by"))? as i32;
    let month = number("m").or_else(|| number("bm"))?;
    let day = number("d").or_else(|| number("bd"))?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn valid_time(input: &str) -> bool {
    let Some(caps) = TIME_PART.captures(input) else {
        return false;
    };
    let within = |name: &str, limit: u32| {
        caps.name(name)
            .map_or(true, |m| m.as_str().parse::<u32>().map_or(false, |v| v < limit))
    };

    within("h", 24)
        && within("mi", 60)
        && within("s", 60)
        && within("oh", 24)
        && within("om", 60)
        && within("os", 60)
}

/// Date portion of `input`, or `fallback` when it cannot be parsed
pub fn normalize_date(input: &str, fallback: NaiveDate) -> NaiveDate {
    parse_iso_date(input).unwrap_or(fallback)
}

/// Zero-padded `(YYYY, MM)` path fragments for a date
pub fn year_month(date: NaiveDate) -> (String, String) {
    (format!("{:04}", date.year()), format!("{:02}", date.month()))
}

/// ISO `YYYY-MM-DD` representation
pub fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
