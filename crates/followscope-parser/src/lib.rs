//! Attribute extraction from semi-structured vendor listing text.
//!
//! Each vendor encodes the same physical facts (thickness, width, length,
//! piece count) in its own textual dialect. The [`dialect`] module holds the
//! ordered pattern catalogue per option field; [`extract`] composes the
//! cascade into a best-effort [`ExtractedAttributes`] per row.

pub mod attributes;
pub mod competitor;
pub mod dialect;
pub mod extract;
pub mod pieces;
pub mod units;

pub use attributes::ExtractedAttributes;
pub use competitor::resolve_competitor;
pub use extract::{extract_from_text, extract_row};
pub use units::{to_cm, LengthUnit};
