//! Option3 rules (3-stage rows only): the length field.
//!
//! Option3 usually holds a length in meters, centimeters, or a combined
//! `XmYcm` form, but two vendors reuse it for a full dual-dimension entry or
//! a puzzle form with piece count.

use std::sync::LazyLock;

use regex::Regex;

use crate::pieces::fold_duplicate_pieces;
use crate::units::{to_cm, LengthUnit};

/// Facts recovered from option3.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum LengthFacts {
    /// Puzzle form `(25mm) 100x100 1장`; pieces already folded.
    Puzzle {
        thickness_cm: f64,
        width_cm: f64,
        length_cm: f64,
    },
    /// Dual-dimension form `폭 110cm x 50cm` / `110cm x 50cm`.
    WidthLength { width_cm: f64, length_cm: f64 },
    /// Plain length: meters, `XmYcm`, or centimeters with optional label.
    Length { length_cm: f64 },
}

/// Puzzle form with leading mm thickness and piece count.
static PUZZLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((\d+)mm\)\s*(\d+)x(\d+)\s*(\d+)장").expect("valid regex"));

/// Dual-dimension form, width label optional.
static DUAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:폭\s*)?(\d+)\s*cm\s*x\s*(\d+)\s*cm").expect("valid regex"));

/// Combined meters-plus-centimeters form `1m50cm`.
static COMBINED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*m\s*(\d+)\s*cm").expect("valid regex"));

/// Meters-only form `1.5m`.
static METERS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*m").expect("valid regex"));

/// Centimeters with optional length label, `길이140cm` or `140cm`.
static LABELED_CM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:길이\s*)?(\d+)\s*cm").expect("valid regex"));

/// Applies the option3 cascade.
pub(crate) fn parse_length_field(text: &str) -> Option<LengthFacts> {
    if let Some(caps) = PUZZLE_RE.captures(text) {
        let thickness_mm: f64 = caps[1].parse().unwrap_or_default();
        let width: f64 = caps[2].parse().unwrap_or_default();
        let length: f64 = caps[3].parse().unwrap_or_default();
        let pieces: u32 = caps[4].parse().unwrap_or_default();
        let (width_cm, length_cm) = fold_duplicate_pieces(width, length, pieces);
        return Some(LengthFacts::Puzzle {
            thickness_cm: to_cm(thickness_mm, LengthUnit::Millimeters),
            width_cm,
            length_cm,
        });
    }

    if let Some(caps) = DUAL_RE.captures(text) {
        return Some(LengthFacts::WidthLength {
            width_cm: caps[1].parse().unwrap_or_default(),
            length_cm: caps[2].parse().unwrap_or_default(),
        });
    }

    let mut length_cm = 0.0;
    if let Some(caps) = COMBINED_RE.captures(text) {
        let meters: f64 = caps[1].parse().unwrap_or_default();
        let centimeters: f64 = caps[2].parse().unwrap_or_default();
        length_cm = to_cm(meters, LengthUnit::Meters) + centimeters;
    } else {
        if let Some(caps) = METERS_RE.captures(text) {
            if let Ok(meters) = caps[1].parse::<f64>() {
                length_cm += to_cm(meters, LengthUnit::Meters);
            }
        }
        if length_cm == 0.0 {
            if let Some(caps) = LABELED_CM_RE.captures(text) {
                if let Ok(centimeters) = caps[1].parse::<f64>() {
                    length_cm = centimeters;
                }
            }
        }
    }

    (length_cm > 0.0).then_some(LengthFacts::Length { length_cm })
}
