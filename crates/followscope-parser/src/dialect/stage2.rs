//! Option2 rules for 2-stage rows (size field).
//!
//! In the 2-stage family option2 carries the whole size story: puzzle-mat
//! forms with piece counts, 3D `LxWxT` dimensions, plain 2D `WxL`, or a
//! loose color/thickness combo. The matched form decides how the extractor
//! merges the facts into fields option1 may already have populated.

use std::sync::LazyLock;

use regex::Regex;

use crate::pieces::fold_duplicate_pieces;
use crate::units::{to_cm, LengthUnit};

/// Facts recovered from option2 in the 2-stage family.
///
/// The variant records which dialect form matched, because the forms carry
/// different overwrite/fill-if-unset semantics downstream.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SizeFacts {
    /// Puzzle forms `(25mm) 50x50 4장` / `100x100x3cm (1장)`; piece counts
    /// already folded into single-unit dimensions.
    Puzzle {
        thickness_cm: f64,
        width_cm: f64,
        length_cm: f64,
    },
    /// 3D form `200 x 110 x 4cm` — note the leading value is the length.
    ThreeDimensional {
        length_cm: f64,
        width_cm: f64,
        thickness_cm: f64,
    },
    /// 2D form `110x50` with no trailing unit: width then length.
    TwoDimensional { width_cm: f64, length_cm: f64 },
    /// Loose color/thickness combo, e.g. `베이지스캐터/15mm(리뉴얼)` or a
    /// bare width like `100cm`. Any of the parts may be absent.
    Loose {
        thickness_cm: Option<f64>,
        width_cm: Option<f64>,
        design_qualifier: Option<String>,
    },
}

/// Puzzle form with leading mm thickness: `(25mm) 100x100 1장`.
static PUZZLE_MM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((\d+)mm\)\s*(\d+)x(\d+)\s*(\d+)장").expect("valid regex"));

/// Puzzle form with trailing piece count: `50x50x3cm (4장)`.
static PUZZLE_TRAILING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)x(\d+)x(\d+(?:\.\d+)?)cm\s*\((\d+)장\)").expect("valid regex")
});

/// 3D dimensions `L x W x T cm`.
static THREE_D_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s*x\s*(\d+)\s*x\s*(\d+(?:\.\d+)?)\s*cm").expect("valid regex")
});

/// 2D dimensions `W x L` anchored at the end so unit-suffixed 3D forms do
/// not alias into it.
static TWO_D_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*x\s*(\d+)$").expect("valid regex"));

/// Bare mm thickness inside a color/pattern description.
static LOOSE_MM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*mm").expect("valid regex"));

/// The whole field is a width, e.g. `100cm`.
static WIDTH_ONLY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\s*cm$").expect("valid regex"));

/// Leading text before a slash, kept as a design/color qualifier.
static LEADING_SEGMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^/]+)").expect("valid regex"));

/// Applies the 2-stage option2 cascade. Always yields a variant: texts that
/// match no dimension pattern degrade to [`SizeFacts::Loose`], possibly with
/// every part absent.
pub(crate) fn parse_size_field(text: &str) -> SizeFacts {
    if let Some(caps) = PUZZLE_MM_RE.captures(text) {
        let thickness_mm: f64 = caps[1].parse().unwrap_or_default();
        let width: f64 = caps[2].parse().unwrap_or_default();
        let length: f64 = caps[3].parse().unwrap_or_default();
        let pieces: u32 = caps[4].parse().unwrap_or_default();
        let (width_cm, length_cm) = fold_duplicate_pieces(width, length, pieces);
        return SizeFacts::Puzzle {
            thickness_cm: to_cm(thickness_mm, LengthUnit::Millimeters),
            width_cm,
            length_cm,
        };
    }

    if let Some(caps) = PUZZLE_TRAILING_RE.captures(text) {
        let width: f64 = caps[1].parse().unwrap_or_default();
        let length: f64 = caps[2].parse().unwrap_or_default();
        let thickness_cm: f64 = caps[3].parse().unwrap_or_default();
        let pieces: u32 = caps[4].parse().unwrap_or_default();
        let (width_cm, length_cm) = fold_duplicate_pieces(width, length, pieces);
        return SizeFacts::Puzzle {
            thickness_cm,
            width_cm,
            length_cm,
        };
    }

    if let Some(caps) = THREE_D_RE.captures(text) {
        return SizeFacts::ThreeDimensional {
            length_cm: caps[1].parse().unwrap_or_default(),
            width_cm: caps[2].parse().unwrap_or_default(),
            thickness_cm: caps[3].parse().unwrap_or_default(),
        };
    }

    if let Some(caps) = TWO_D_RE.captures(text) {
        return SizeFacts::TwoDimensional {
            width_cm: caps[1].parse().unwrap_or_default(),
            length_cm: caps[2].parse().unwrap_or_default(),
        };
    }

    let thickness_cm = LOOSE_MM_RE
        .captures(text)
        .and_then(|caps| caps[1].parse::<f64>().ok())
        .map(|mm| to_cm(mm, LengthUnit::Millimeters));

    let width_cm = WIDTH_ONLY_RE
        .captures(text)
        .and_then(|caps| caps[1].parse().ok());

    // A bare width is not a color; anything else keeps its leading segment
    // as a design qualifier.
    let design_qualifier = if width_cm.is_none() {
        LEADING_SEGMENT_RE
            .captures(text)
            .map(|caps| caps[1].trim().to_string())
            .filter(|s| !s.is_empty())
    } else {
        None
    };

    SizeFacts::Loose {
        thickness_cm,
        width_cm,
        design_qualifier,
    }
}
