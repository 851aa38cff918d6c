//! Normalized output records and derived price metrics.

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Design label used when a row yields no design text.
pub const UNKNOWN_DESIGN: &str = "Unknown";

/// Metrics derived from validated dimensions and price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedMetrics {
    /// `width_cm * length_cm`.
    pub area_cm2: f64,
    /// `thickness_cm * width_cm * length_cm`.
    pub volume_cm3: f64,
    /// `price / volume_cm3`; unset when the volume is not positive.
    pub price_per_volume: Option<f64>,
}

impl DerivedMetrics {
    /// Computes area, volume and price-per-volume from validated inputs.
    #[must_use]
    pub fn compute(thickness_cm: f64, width_cm: f64, length_cm: f64, price: f64) -> Self {
        let area_cm2 = width_cm * length_cm;
        let volume_cm3 = thickness_cm * width_cm * length_cm;
        let price_per_volume = if volume_cm3 > 0.0 {
            Some(price / volume_cm3)
        } else {
            None
        };
        Self {
            area_cm2,
            volume_cm3,
            price_per_volume,
        }
    }
}

/// One fully normalized, cross-vendor-comparable listing.
///
/// Field order matches the exported CSV header: competitor, design,
/// thickness_cm, width_cm, length_cm, area_cm2, volume_cm3, price,
/// price_per_volume, category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub competitor: String,
    pub design: String,
    pub thickness_cm: f64,
    pub width_cm: f64,
    pub length_cm: f64,
    pub area_cm2: f64,
    pub volume_cm3: f64,
    pub price: f64,
    /// Empty in exports when the volume is not positive.
    pub price_per_volume: Option<f64>,
    /// Korean category label, see [`Category::label`].
    pub category: String,
}

impl NormalizedRecord {
    /// Builds a record from validated attributes, computing derived metrics.
    ///
    /// The competitor name is trimmed and a missing design becomes
    /// [`UNKNOWN_DESIGN`].
    #[must_use]
    pub fn new(
        competitor: &str,
        design: Option<String>,
        thickness_cm: f64,
        width_cm: f64,
        length_cm: f64,
        price: f64,
        category: Category,
    ) -> Self {
        let metrics = DerivedMetrics::compute(thickness_cm, width_cm, length_cm, price);
        Self {
            competitor: competitor.trim().to_string(),
            design: design.unwrap_or_else(|| UNKNOWN_DESIGN.to_string()),
            thickness_cm,
            width_cm,
            length_cm,
            area_cm2: metrics.area_cm2,
            volume_cm3: metrics.volume_cm3,
            price,
            price_per_volume: metrics.price_per_volume,
            category: category.label().to_string(),
        }
    }
}
