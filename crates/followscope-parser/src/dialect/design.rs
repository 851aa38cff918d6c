//! Option1 (design/meta) field rules.
//!
//! Option1 usually carries branding, but several vendors smuggle geometry
//! into it: an embedded width/meter-length pair, a puzzle-mat full form, a
//! thickness-only PU form, or a bare thickness token next to the design
//! name.

use std::sync::LazyLock;

use followscope_core::Category;
use regex::Regex;

use crate::pieces::fold_duplicate_pieces;

/// Default thickness (cm) for PU puzzle-mat listings that omit it.
const PUZZLE_DEFAULT_THICKNESS_CM: f64 = 2.5;

/// Promotional glyphs stripped before the remainder becomes the design.
static PROMO_GLYPHS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[🏅👑]").expect("valid regex"));

/// Embedded width token, e.g. `110cm폭`.
static WIDTH_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*cm폭").expect("valid regex"));

/// Meter-length token after a slash, e.g. `/1M` in `110cm폭/1M`.
static METER_LENGTH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/(\d+(?:\.\d+)?)\s*M").expect("valid regex"));

/// Puzzle-mat full form, e.g. `A타입(100x100x2.5cmx1장)`.
static PUZZLE_FULL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[AB]타입\((\d+)x(\d+)x(\d+(?:\.\d+)?)cmx(\d+)장\)").expect("valid regex")
});

/// PU puzzle form without thickness, e.g. `PU_B타입(50x50x4장)`.
static PU_FORM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"PU_[AB]타입\((\d+)x(\d+)x(\d+)장\)").expect("valid regex"));

/// Parenthesized thickness, e.g. `베이직(1.7cm) / 러그아이보리`.
static PAREN_THICKNESS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((\d+(?:\.\d+)?)\s*cm\)").expect("valid regex"));

/// Bare thickness token anywhere, e.g. `러그아이보리 2.2cm`.
static BARE_THICKNESS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*cm").expect("valid regex"));

/// Facts recovered from the option1 field.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct DesignFacts {
    pub design: Option<String>,
    pub thickness_cm: Option<f64>,
    pub width_cm: Option<f64>,
    pub length_cm: Option<f64>,
}

/// Parses the option1 field.
///
/// `category` selects the default thickness for PU puzzle listings; other
/// categories leave thickness unset for that form.
pub(crate) fn parse_design_field(text: &str, category: Category) -> DesignFacts {
    let mut facts = DesignFacts::default();

    let design = PROMO_GLYPHS_RE.replace_all(text, "");
    let design = design.replace("BEST", "");
    let design = design.trim();
    if !design.is_empty() {
        facts.design = Some(design.to_string());
    }

    // Geometry embedded in the design field, e.g. "110cm폭/1M": width in cm,
    // length in meters. When both are present the field encoded geometry,
    // not branding, so the design text is discarded.
    let width_token = WIDTH_TOKEN_RE.captures(text);
    if let Some(caps) = &width_token {
        facts.width_cm = caps[1].parse().ok();
    }
    if let Some(caps) = METER_LENGTH_RE.captures(text) {
        if let Ok(meters) = caps[1].parse::<f64>() {
            facts.length_cm = Some(meters * 100.0);
            if width_token.is_some() {
                facts.design = None;
            }
        }
    }

    if let Some(caps) = PUZZLE_FULL_RE.captures(text) {
        let width: f64 = caps[1].parse().unwrap_or_default();
        let length: f64 = caps[2].parse().unwrap_or_default();
        let pieces: u32 = caps[4].parse().unwrap_or_default();
        let (width, length) = fold_duplicate_pieces(width, length, pieces);
        facts.width_cm = Some(width);
        facts.length_cm = Some(length);
        facts.thickness_cm = caps[3].parse().ok();
    } else if let Some(caps) = PU_FORM_RE.captures(text) {
        let width: f64 = caps[1].parse().unwrap_or_default();
        let length: f64 = caps[2].parse().unwrap_or_default();
        let pieces: u32 = caps[3].parse().unwrap_or_default();
        let (width, length) = fold_duplicate_pieces(width, length, pieces);
        facts.width_cm = Some(width);
        facts.length_cm = Some(length);
        facts.thickness_cm = if category == Category::Puzzle {
            Some(PUZZLE_DEFAULT_THICKNESS_CM)
        } else {
            None
        };
    } else if let Some(caps) = PAREN_THICKNESS_RE.captures(text) {
        facts.thickness_cm = caps[1].parse().ok();
    } else if let Some(caps) = BARE_THICKNESS_RE.captures(text) {
        facts.thickness_cm = caps[1].parse().ok();
    }

    facts
}
