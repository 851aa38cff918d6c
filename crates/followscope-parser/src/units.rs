//! Pure length-unit conversion to centimeters.

/// A recognized length unit token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    Millimeters,
    Centimeters,
    Meters,
}

impl LengthUnit {
    /// Parses a unit token. `mm` and `cm` are recognized as substrings;
    /// bare `m` counts as meters only when it is not part of `mm`/`cm`.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        let lowered = token.trim().to_lowercase();
        if lowered.contains("mm") {
            Some(LengthUnit::Millimeters)
        } else if lowered.contains("cm") {
            Some(LengthUnit::Centimeters)
        } else if lowered.contains('m') {
            Some(LengthUnit::Meters)
        } else {
            None
        }
    }
}

/// Converts `value` in `unit` to centimeters.
#[must_use]
pub fn to_cm(value: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Millimeters => value / 10.0,
        LengthUnit::Centimeters => value,
        LengthUnit::Meters => value * 100.0,
    }
}
