//! Option2 rules for 3-stage rows (thickness/width field).
//!
//! In the 3-stage family option2 carries the gauge: thickness, width, or
//! both. Each vendor owns a disjoint textual cue (mm-parenthetical, slash,
//! T-suffix, Korean labels), but the cascade still tries the most specific
//! patterns first so the generic width-only fallback cannot shadow them.

use std::sync::LazyLock;

use regex::Regex;

use crate::units::{to_cm, LengthUnit};

/// Gauge facts recovered from option2 in the 3-stage family.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct GaugeFacts {
    pub thickness_cm: Option<f64>,
    pub width_cm: Option<f64>,
}

/// One ordered recognizer; the first rule that returns `Some` wins.
type GaugeRule = fn(&str) -> Option<GaugeFacts>;

const RULES: &[GaugeRule] = &[
    pet_paren_millimeters,
    pet_slash_millimeters,
    t_suffixed_centimeters,
    reverse_t_notation,
    plain_pair,
    labeled_pair,
    width_only,
];

/// Applies the 3-stage option2 cascade.
pub(crate) fn parse_gauge_field(text: &str) -> Option<GaugeFacts> {
    RULES.iter().find_map(|rule| rule(text))
}

/// Pet-mat form `6mm(폭110cm)`: mm thickness with parenthesized width.
fn pet_paren_millimeters(text: &str) -> Option<GaugeFacts> {
    static RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"(\d+(?:\.\d+)?)\s*mm\s*\(폭\s*(\d+)\s*cm\)").expect("valid regex")
    });
    let caps = RE.captures(text)?;
    Some(GaugeFacts {
        thickness_cm: Some(to_cm(caps[1].parse().ok()?, LengthUnit::Millimeters)),
        width_cm: caps[2].parse().ok(),
    })
}

/// Pet-mat form `6mm / 110cm`: slash-separated mm thickness and width.
fn pet_slash_millimeters(text: &str) -> Option<GaugeFacts> {
    static RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"(\d+(?:\.\d+)?)\s*mm\s*/\s*(\d+)\s*cm").expect("valid regex")
    });
    let caps = RE.captures(text)?;
    Some(GaugeFacts {
        thickness_cm: Some(to_cm(caps[1].parse().ok()?, LengthUnit::Millimeters)),
        width_cm: caps[2].parse().ok(),
    })
}

/// T-notation `0.6cm(6T)`: thickness in cm, width elsewhere (option3).
fn t_suffixed_centimeters(text: &str) -> Option<GaugeFacts> {
    static RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*cm\s*\(\d+T\)").expect("valid regex"));
    let caps = RE.captures(text)?;
    Some(GaugeFacts {
        thickness_cm: caps[1].parse().ok(),
        width_cm: None,
    })
}

/// Reverse T-notation `9T(9mm)` or `15T(1.5cm)`: payload unit decides the
/// conversion.
fn reverse_t_notation(text: &str) -> Option<GaugeFacts> {
    static RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\d+T\s*\((\d+(?:\.\d+)?)\s*(mm|cm)\)").expect("valid regex"));
    let caps = RE.captures(text)?;
    let value: f64 = caps[1].parse().ok()?;
    let unit = LengthUnit::parse(&caps[2])?;
    Some(GaugeFacts {
        thickness_cm: Some(to_cm(value, unit)),
        width_cm: None,
    })
}

/// Plain pair `1.7cm / 80cm`: thickness then width.
fn plain_pair(text: &str) -> Option<GaugeFacts> {
    static RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"(\d+(?:\.\d+)?)\s*cm\s*/\s*(\d+)\s*cm").expect("valid regex")
    });
    let caps = RE.captures(text)?;
    Some(GaugeFacts {
        thickness_cm: caps[1].parse().ok(),
        width_cm: caps[2].parse().ok(),
    })
}

/// Korean-labeled pair `두께1.7cm / 폭80cm`.
fn labeled_pair(text: &str) -> Option<GaugeFacts> {
    static RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"두께\s*(\d+(?:\.\d+)?)\s*cm\s*/\s*폭\s*(\d+)\s*cm").expect("valid regex")
    });
    let caps = RE.captures(text)?;
    Some(GaugeFacts {
        thickness_cm: caps[1].parse().ok(),
        width_cm: caps[2].parse().ok(),
    })
}

/// Generic fallback `50cm`: width only.
fn width_only(text: &str) -> Option<GaugeFacts> {
    static RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)\s*cm").expect("valid regex"));
    let caps = RE.captures(text)?;
    Some(GaugeFacts {
        thickness_cm: None,
        width_cm: caps[1].parse().ok(),
    })
}
