use once_cell::sync::Lazy;
use regex::Regex;

/// Fallback for generic slugs (disruption nodes)
pub const NODE_FALLBACK: &str = "node";

/// Fallback for log slugs
pub const LOG_FALLBACK: &str = "log";

static APOSTROPHES: Lazy<Regex> = Lazy::new(|| Regex::new(r"[’']").unwrap());
static NON_ALNUM: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Convert text to a lowercase, hyphen-separated URL token.
///
/// Apostrophes are dropped so contractions stay in one word
/// (`I'm` becomes `im`), every other run of characters outside
/// `[a-z0-9]` becomes a single hyphen, and edge hyphens are trimmed.
pub fn slugify_or(input: &str, fallback: &str) -> String {
    let lowered = input.trim().to_lowercase();
    let without_apostrophes = APOSTROPHES.replace_all(&lowered, "");
    let hyphenated = NON_ALNUM.replace_all(&without_apostrophes, "-");
    let slug = hyphenated.trim_matches('-');

    if slug.is_empty() {
        fallback.to_string()
    } else {
        slug.to_string()
    }
}

/// Slugify with the generic `node` fallback
pub fn slugify(input: &str) -> String {
    slugify_or(input, NODE_FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contraction_and_punctuation() {
        assert_eq!(slugify("I'm NOT done!!"), "im-not-done");
        assert_eq!(slugify("I’M NOT DONE"), "im-not-done");
    }

    #[test]
    fn test_collapses_separators() {
        assert_eq!(slugify("  write -- AI   to // continue  "), "write-ai-to-continue");
        assert_eq!(slugify("---edge---"), "edge");
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(slugify(""), NODE_FALLBACK);
        assert_eq!(slugify("?!..."), NODE_FALLBACK);
        assert_eq!(slugify_or("", LOG_FALLBACK), LOG_FALLBACK);
    }

    #[test]
    fn test_non_ascii_becomes_separator() {
        assert_eq!(slugify("zażółć gęślą"), "za-g-l");
    }

    #[test]
    fn test_idempotent() {
        for input in ["I'm NOT done!!", "Signal 404: lost", "", "a--b", "ÜBER alles"] {
            let once = slugify(input);
            assert_eq!(slugify(&once), once, "input: {:?}", input);
        }
    }

    #[test]
    fn test_output_shape() {
        for input in ["Hello World", "  MIXED case\tTabs\nNewlines ", "x -- y", "__init__"] {
            let slug = slugify(input);
            assert!(!slug.chars().any(|c| c.is_uppercase() || c.is_whitespace()));
            assert!(!slug.contains("--"));
            assert!(!slug.starts_with('-') && !slug.ends_with('-'));
        }
    }
}
