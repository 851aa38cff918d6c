//! Row attribute extraction: composes the dialect cascades over one row.

use followscope_core::{Category, RawRow};

use crate::attributes::ExtractedAttributes;
use crate::dialect::{
    parse_design_field, parse_gauge_field, parse_labeled_text, parse_length_field,
    parse_size_field, LengthFacts, SizeFacts,
};

/// Long rolls are decomposed into comparison units of this length.
const COMPARISON_UNIT_CM: f64 = 50.0;

/// Extracts a best-effort attribute set from one raw row.
///
/// Never fails: a field that matches no pattern simply leaves the
/// corresponding attributes unset, and the caller decides completeness via
/// [`ExtractedAttributes::has_essentials`].
#[must_use]
pub fn extract_row(row: &RawRow, category: Category) -> ExtractedAttributes {
    let mut attrs = ExtractedAttributes::default();
    let three_stage = row.is_three_stage();

    if let Some(text) = row.opt1_text() {
        let facts = parse_design_field(text, category);
        attrs.design = facts.design;
        attrs.thickness_cm = facts.thickness_cm;
        attrs.width_cm = facts.width_cm;
        attrs.length_cm = facts.length_cm;
    }

    if let Some(text) = row.opt2_text() {
        if three_stage {
            apply_gauge(&mut attrs, text);
        } else {
            apply_size(&mut attrs, text);
        }
    }

    if three_stage {
        if let Some(text) = row.opt3_text() {
            apply_length(&mut attrs, text);
        }
    }

    if let Some(cell) = row.raw_price.as_deref() {
        attrs.raw_price = parse_price(cell);
    }

    attrs
}

/// Extracts attributes from unstructured labeled text (fallback for files
/// without option columns).
#[must_use]
pub fn extract_from_text(text: &str) -> ExtractedAttributes {
    parse_labeled_text(text)
}

/// 3-stage option2: the matched gauge pattern owns thickness/width outright.
fn apply_gauge(attrs: &mut ExtractedAttributes, text: &str) {
    if let Some(facts) = parse_gauge_field(text) {
        if facts.thickness_cm.is_some() {
            attrs.thickness_cm = facts.thickness_cm;
        }
        if facts.width_cm.is_some() {
            attrs.width_cm = facts.width_cm;
        }
    }
}

/// 2-stage option2: merge semantics depend on the matched form.
fn apply_size(attrs: &mut ExtractedAttributes, text: &str) {
    match parse_size_field(text) {
        SizeFacts::Puzzle {
            thickness_cm,
            width_cm,
            length_cm,
        } => {
            attrs.thickness_cm = Some(thickness_cm);
            attrs.width_cm = Some(width_cm);
            attrs.length_cm = Some(length_cm);
        }
        SizeFacts::ThreeDimensional {
            length_cm,
            width_cm,
            thickness_cm,
        } => {
            // Long rolls are broken into 50 cm comparison units so a 400 cm
            // roll and a 50 cm unit listing price-compare directly.
            if length_cm >= 100.0 {
                attrs.length_cm = Some(COMPARISON_UNIT_CM);
                attrs.piece_unit_count = Some((length_cm / COMPARISON_UNIT_CM).floor());
            } else {
                attrs.length_cm = Some(length_cm);
            }
            if attrs.width_cm.is_none() {
                attrs.width_cm = Some(width_cm);
            }
            if attrs.thickness_cm.is_none() {
                attrs.thickness_cm = Some(thickness_cm);
            }
        }
        SizeFacts::TwoDimensional {
            width_cm,
            length_cm,
        } => {
            if attrs.width_cm.is_none() {
                attrs.width_cm = Some(width_cm);
            }
            attrs.length_cm = Some(length_cm);
        }
        SizeFacts::Loose {
            thickness_cm,
            width_cm,
            design_qualifier,
        } => {
            if thickness_cm.is_some() {
                attrs.thickness_cm = thickness_cm;
            }
            if attrs.width_cm.is_none() && width_cm.is_some() {
                attrs.width_cm = width_cm;
            }
            if let Some(qualifier) = design_qualifier {
                attrs.push_design_qualifier(&qualifier);
            }
        }
    }
}

/// Option3: length (or the fuller dimension entry some vendors put there).
fn apply_length(attrs: &mut ExtractedAttributes, text: &str) {
    match parse_length_field(text) {
        Some(LengthFacts::Puzzle {
            thickness_cm,
            width_cm,
            length_cm,
        }) => {
            attrs.thickness_cm = Some(thickness_cm);
            attrs.width_cm = Some(width_cm);
            attrs.length_cm = Some(length_cm);
        }
        Some(LengthFacts::WidthLength {
            width_cm,
            length_cm,
        }) => {
            if attrs.width_cm.is_none() {
                attrs.width_cm = Some(width_cm);
            }
            attrs.length_cm = Some(length_cm);
        }
        Some(LengthFacts::Length { length_cm }) => {
            attrs.length_cm = Some(length_cm);
        }
        None => {}
    }
}

/// Parses the raw price cell: thousands separators stripped, strictly
/// positive values only.
fn parse_price(cell: &str) -> Option<f64> {
    cell.replace(',', "")
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|price| *price > 0.0)
}
