//! Per-competitor length-resolution rules.
//!
//! Most vendors state a usable length directly in the option text. A few
//! need help: unit-count vendors list how many base units a SKU contains,
//! and one vendor's sub-listings omit length entirely but are known to ship
//! as 1 m rolls. Rules are keyed by substring match on the competitor name
//! so that scrape-filename variations still hit the right entry.

/// How a competitor's listing length is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthMethod {
    /// Use the length extracted from the option text as-is.
    Direct,
    /// Multiply the extracted piece/unit count by `base_unit_cm`.
    UnitCount,
}

/// Length-resolution rule set for one competitor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompetitorRules {
    pub method: LengthMethod,
    /// Base unit length in cm, used by [`LengthMethod::UnitCount`].
    pub base_unit_cm: Option<f64>,
    /// Assumed length when extraction found none (vendor convention).
    pub fallback_length_cm: Option<f64>,
}

/// Applied when no pattern entry matches the competitor name.
pub const DEFAULT_RULES: CompetitorRules = CompetitorRules {
    method: LengthMethod::Direct,
    base_unit_cm: None,
    fallback_length_cm: None,
};

/// Substring-keyed rule table, checked in order.
const PATTERN_RULES: &[(&str, CompetitorRules)] = &[
    (
        "롤매트",
        CompetitorRules {
            method: LengthMethod::Direct,
            base_unit_cm: None,
            fallback_length_cm: None,
        },
    ),
    // 파크론 sub-listings carry width and thickness only; the vendor sells
    // those lines as 1 m unit rolls.
    (
        "파크론",
        CompetitorRules {
            method: LengthMethod::Direct,
            base_unit_cm: None,
            fallback_length_cm: Some(100.0),
        },
    ),
];

/// Returns the rule set for a competitor name, falling back to
/// [`DEFAULT_RULES`] when no pattern matches.
#[must_use]
pub fn rules_for_competitor(competitor: &str) -> CompetitorRules {
    PATTERN_RULES
        .iter()
        .find(|(pattern, _)| competitor.contains(pattern))
        .map_or(DEFAULT_RULES, |(_, rules)| *rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_competitor_gets_default_rules() {
        let rules = rules_for_competitor("따사룸");
        assert_eq!(rules, DEFAULT_RULES);
    }

    #[test]
    fn pattern_match_is_substring_based() {
        let rules = rules_for_competitor("파크론 퓨어 사운드");
        assert_eq!(rules.fallback_length_cm, Some(100.0));
        assert_eq!(rules.method, LengthMethod::Direct);
    }

    #[test]
    fn roll_mat_vendors_use_direct_length() {
        let rules = rules_for_competitor("어쩌구 롤매트");
        assert_eq!(rules.method, LengthMethod::Direct);
        assert!(rules.fallback_length_cm.is_none());
    }
}
