//! Raw input rows as read from a vendor's scraped spreadsheet.

/// One raw listing row: up to three free-text option cells and a price cell.
///
/// Only the *roles* of the cells are assumed (option1/option2/option3/final
/// price); their textual content follows whatever dialect the vendor uses.
/// A row is never mutated after reading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    pub opt1: Option<String>,
    pub opt2: Option<String>,
    pub opt3: Option<String>,
    pub raw_price: Option<String>,
}

impl RawRow {
    /// Returns `opt1` trimmed, or `None` when absent or blank.
    #[must_use]
    pub fn opt1_text(&self) -> Option<&str> {
        non_blank(self.opt1.as_deref())
    }

    /// Returns `opt2` trimmed, or `None` when absent or blank.
    #[must_use]
    pub fn opt2_text(&self) -> Option<&str> {
        non_blank(self.opt2.as_deref())
    }

    /// Returns `opt3` trimmed, or `None` when absent or blank.
    #[must_use]
    pub fn opt3_text(&self) -> Option<&str> {
        non_blank(self.opt3.as_deref())
    }

    /// A row with a non-blank `opt3` follows the 3-stage dialect family;
    /// otherwise the 2-stage family. The classification is per-row and
    /// decides which pattern subset the extractor tries on `opt2`.
    #[must_use]
    pub fn is_three_stage(&self) -> bool {
        self.opt3_text().is_some()
    }

    /// `true` when every option cell is absent or blank. Such rows carry no
    /// extractable attributes and are skipped before extraction.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.opt1_text().is_none() && self.opt2_text().is_none() && self.opt3_text().is_none()
    }
}

fn non_blank(cell: Option<&str>) -> Option<&str> {
    cell.map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_option3_means_two_stage() {
        let row = RawRow {
            opt1: Some("베이직(1.7cm)".into()),
            opt2: Some("100cm".into()),
            opt3: Some("   ".into()),
            raw_price: Some("20000".into()),
        };
        assert!(!row.is_three_stage());
    }

    #[test]
    fn non_blank_option3_means_three_stage() {
        let row = RawRow {
            opt3: Some("1m50cm".into()),
            ..RawRow::default()
        };
        assert!(row.is_three_stage());
    }

    #[test]
    fn all_blank_options_is_blank_row() {
        let row = RawRow {
            opt1: Some(String::new()),
            opt2: None,
            opt3: Some(" ".into()),
            raw_price: Some("9000".into()),
        };
        assert!(row.is_blank());
    }

    #[test]
    fn option_text_is_trimmed() {
        let row = RawRow {
            opt2: Some("  110x50  ".into()),
            ..RawRow::default()
        };
        assert_eq!(row.opt2_text(), Some("110x50"));
    }
}
