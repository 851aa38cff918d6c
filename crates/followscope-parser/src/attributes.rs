//! Best-effort attribute set recovered from one raw row.

/// Attributes extracted from a [`followscope_core::RawRow`].
///
/// Every field is optional: `None` means "not found in any pattern," never
/// zero. All lengths are centimeters; the price is a plain decimal with
/// thousands separators already stripped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedAttributes {
    pub design: Option<String>,
    pub thickness_cm: Option<f64>,
    pub width_cm: Option<f64>,
    pub length_cm: Option<f64>,
    /// Number of base units in a multi-unit SKU (e.g. a 200 cm roll sold as
    /// four 50 cm comparison units).
    pub piece_unit_count: Option<f64>,
    /// Strictly positive when set; non-positive prices are never stored.
    pub raw_price: Option<f64>,
}

impl ExtractedAttributes {
    /// Whether the row is promotable to a normalized record: a positive
    /// price, a width, and at least one of thickness or length.
    #[must_use]
    pub fn has_essentials(&self) -> bool {
        self.raw_price.is_some()
            && self.width_cm.is_some()
            && (self.thickness_cm.is_some() || self.length_cm.is_some())
    }

    /// Appends a design qualifier (e.g. a color name parsed out of a
    /// size/color combo field) to any design text already captured.
    pub fn push_design_qualifier(&mut self, qualifier: &str) {
        self.design = Some(match self.design.take() {
            Some(existing) => format!("{existing} - {qualifier}"),
            None => qualifier.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn essentials_need_price_width_and_one_dimension() {
        let mut attrs = ExtractedAttributes {
            raw_price: Some(15000.0),
            width_cm: Some(100.0),
            ..ExtractedAttributes::default()
        };
        assert!(!attrs.has_essentials());

        attrs.thickness_cm = Some(2.5);
        assert!(attrs.has_essentials());

        attrs.thickness_cm = None;
        attrs.length_cm = Some(100.0);
        assert!(attrs.has_essentials());
    }

    #[test]
    fn missing_width_is_never_essential() {
        let attrs = ExtractedAttributes {
            raw_price: Some(15000.0),
            thickness_cm: Some(2.5),
            length_cm: Some(100.0),
            ..ExtractedAttributes::default()
        };
        assert!(!attrs.has_essentials());
    }

    #[test]
    fn design_qualifier_appends_with_separator() {
        let mut attrs = ExtractedAttributes {
            design: Some("베이직".into()),
            ..ExtractedAttributes::default()
        };
        attrs.push_design_qualifier("베이지스캐터");
        assert_eq!(attrs.design.as_deref(), Some("베이직 - 베이지스캐터"));
    }

    #[test]
    fn design_qualifier_stands_alone_when_no_design() {
        let mut attrs = ExtractedAttributes::default();
        attrs.push_design_qualifier("포쉐린");
        assert_eq!(attrs.design.as_deref(), Some("포쉐린"));
    }
}
