//! Canonical competitor identity from raw scrape filenames.
//!
//! Scraped files arrive as `"<brand> <listing title>_옵션가격_<timestamp>"`;
//! only the brand token identifies the competitor.

use std::sync::LazyLock;

use regex::Regex;

/// Trailing scrape-timestamp suffix, e.g. `_2025-07-10-05-52`.
static TIMESTAMP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_\d{4}-\d{2}-\d{2}-\d{2}-\d{2}").expect("valid regex"));

/// Marker separating the listing title from the price-option suffix.
const PRICE_OPTION_MARKER: &str = "_옵션가격";

/// Leading brand token followed by the floor-noise keyword common to roll-mat
/// listing titles.
static BRAND_BEFORE_KEYWORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([가-힣a-zA-Z0-9]+)\s+층간소음").expect("valid regex"));

/// Leading brand token followed by whitespace.
static BRAND_BEFORE_SPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([가-힣a-zA-Z0-9]+)\s+").expect("valid regex"));

/// Everything up to the first whitespace or underscore.
static LEADING_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^_\s]+)").expect("valid regex"));

/// Known brand-name variants collapsed to one canonical spelling. Checked as
/// substrings against both the resolved name and the raw stem.
const ALIASES: &[(&str, &str)] = &[("티지오", "티지오매트")];

/// Derives the canonical competitor name from a raw filename stem.
///
/// Always returns a non-empty string for non-empty input: pattern misses
/// fall back to the first 20 characters of the cleaned stem.
#[must_use]
pub fn resolve_competitor(file_stem: &str) -> String {
    let without_timestamp = TIMESTAMP_RE.replace_all(file_stem, "");
    let cleaned = match without_timestamp.find(PRICE_OPTION_MARKER) {
        Some(pos) => &without_timestamp[..pos],
        None => &without_timestamp,
    };

    let name = [
        &*BRAND_BEFORE_KEYWORD_RE,
        &*BRAND_BEFORE_SPACE_RE,
        &*LEADING_TOKEN_RE,
    ]
    .iter()
    .find_map(|re| re.captures(cleaned))
    .and_then(|caps| caps.get(1))
    .map_or_else(
        || cleaned.chars().take(20).collect::<String>(),
        |m| m.as_str().to_string(),
    );

    let name = name.trim().to_string();
    for (variant, canonical) in ALIASES {
        if name.contains(variant) || file_stem.contains(variant) {
            return (*canonical).to_string();
        }
    }
    name
}
