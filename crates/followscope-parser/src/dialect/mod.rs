//! Ordered text-recognition rules for each option-field family.
//!
//! One module per field family, mirroring how the raw rows are shaped:
//! [`design`] for option1, [`stage3`]/[`stage2`] for option2 under the
//! 3-stage/2-stage classification, [`length`] for option3, and [`labeled`]
//! as the free-text fallback for files without option columns.
//!
//! Rules inside a module are tried in priority order and the first match
//! wins; the most specific (labeled/parenthesized) patterns come before the
//! generic fallbacks so that stray matches cannot shadow a vendor's actual
//! dialect.

pub(crate) mod design;
pub(crate) mod labeled;
pub(crate) mod length;
pub(crate) mod stage2;
pub(crate) mod stage3;

pub(crate) use design::parse_design_field;
pub(crate) use labeled::parse_labeled_text;
pub(crate) use length::{parse_length_field, LengthFacts};
pub(crate) use stage2::{parse_size_field, SizeFacts};
pub(crate) use stage3::parse_gauge_field;
