//! Labeled free-text fallback for files without option columns.
//!
//! Some exports arrive as flat text rather than option cells. Attributes are
//! then recovered from explicit labels (`Thickness`/`두께`, `Width`/`폭`, …)
//! anywhere in the joined row text. Units are converted at capture time.

use std::sync::LazyLock;

use regex::Regex;

use crate::attributes::ExtractedAttributes;
use crate::units::{to_cm, LengthUnit};

static DESIGN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)design[\s:]*([\w\s-]+?)(?:\s*(?:thickness|width|length|price)|$)")
        .expect("valid regex")
});

static THICKNESS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:thickness|두께)[\s:]*(\d+(?:\.\d+)?)\s*(mm|cm)").expect("valid regex")
});

static WIDTH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:width|너비|폭)[\s:]*(\d+(?:\.\d+)?)\s*(mm|cm|m)").expect("valid regex")
});

static LENGTH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:length|길이)[\s:]*(\d+(?:\.\d+)?)\s*(mm|cm|m)").expect("valid regex")
});

static UNIT_COUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*(?:units?|개|매|장)").expect("valid regex"));

static PRICE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:price|가격|₩|\$)[\s:]*(\d+(?:,\d{3})*(?:\.\d+)?)").expect("valid regex")
});

/// Extracts attributes from labeled free text. Best-effort: unmatched labels
/// leave the corresponding attribute unset.
pub(crate) fn parse_labeled_text(text: &str) -> ExtractedAttributes {
    let mut attrs = ExtractedAttributes::default();

    if let Some(caps) = DESIGN_RE.captures(text) {
        let design = caps[1].trim();
        if !design.is_empty() {
            attrs.design = Some(design.to_string());
        }
    }
    attrs.thickness_cm = captured_cm(&THICKNESS_RE, text);
    attrs.width_cm = captured_cm(&WIDTH_RE, text);
    attrs.length_cm = captured_cm(&LENGTH_RE, text);
    attrs.piece_unit_count = UNIT_COUNT_RE
        .captures(text)
        .and_then(|caps| caps[1].parse().ok());
    attrs.raw_price = PRICE_RE
        .captures(text)
        .and_then(|caps| caps[1].replace(',', "").parse::<f64>().ok())
        .filter(|price| *price > 0.0);

    attrs
}

/// Captures a `(value, unit)` pair and converts it to centimeters.
fn captured_cm(re: &Regex, text: &str) -> Option<f64> {
    let caps = re.captures(text)?;
    let value: f64 = caps[1].parse().ok()?;
    let unit = LengthUnit::parse(&caps[2])?;
    Some(to_cm(value, unit))
}
