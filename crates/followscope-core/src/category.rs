//! Product category resolution from raw-file storage paths.
//!
//! Raw files are organized into per-category directories (e.g.
//! `data/raw/puzzle/따사룸_....csv`); the directory segment decides which
//! category-specific extraction defaults and price adjustments apply.

use std::path::Path;

/// Product category of a raw listing file.
///
/// The variant set mirrors the six raw-data directories. Display labels are
/// the Korean category names used across the exported data set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// 롤매트 — roll mats, the baseline category.
    Roll,
    /// 퍼즐매트 — interlocking puzzle mats, sold in multi-piece SKUs.
    Puzzle,
    /// TPU매트 — thermoplastic polyurethane mats.
    Tpu,
    /// 양면매트 — double-sided mats.
    DoubleSide,
    /// 폴더매트 — folding mats.
    Folder,
    /// 강아지매트 — pet mats, priced against a 50 cm length standard.
    Pet,
}

/// Directory-segment-to-category table. Matched case-insensitively against
/// each path segment, first hit wins.
const SEGMENT_TABLE: &[(&str, Category)] = &[
    ("roll", Category::Roll),
    ("puzzle", Category::Puzzle),
    ("tpu", Category::Tpu),
    ("double_side", Category::DoubleSide),
    ("folder", Category::Folder),
    ("pet", Category::Pet),
];

impl Category {
    /// Korean display label, used as the `category` column in exports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Roll => "롤매트",
            Category::Puzzle => "퍼즐매트",
            Category::Tpu => "TPU매트",
            Category::DoubleSide => "양면매트",
            Category::Folder => "폴더매트",
            Category::Pet => "강아지매트",
        }
    }

    /// Looks up a single directory segment (case-insensitive).
    #[must_use]
    pub fn from_segment(segment: &str) -> Option<Self> {
        let lowered = segment.to_lowercase();
        SEGMENT_TABLE
            .iter()
            .find(|(name, _)| *name == lowered)
            .map(|(_, category)| *category)
    }

    /// Resolves the category for a raw file by scanning its path segments.
    ///
    /// The first segment that matches the directory table wins. Paths with
    /// no category segment fall back to [`Category::Roll`], which keeps
    /// files dropped directly into the raw-data root processable.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        path.components()
            .filter_map(|c| c.as_os_str().to_str())
            .find_map(Self::from_segment)
            .unwrap_or(Category::Roll)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_segment_matches_known_directories() {
        assert_eq!(Category::from_segment("puzzle"), Some(Category::Puzzle));
        assert_eq!(Category::from_segment("pet"), Some(Category::Pet));
        assert_eq!(
            Category::from_segment("double_side"),
            Some(Category::DoubleSide)
        );
    }

    #[test]
    fn from_segment_is_case_insensitive() {
        assert_eq!(Category::from_segment("TPU"), Some(Category::Tpu));
        assert_eq!(Category::from_segment("Folder"), Some(Category::Folder));
    }

    #[test]
    fn from_segment_rejects_unknown_directory() {
        assert_eq!(Category::from_segment("reviews"), None);
    }

    #[test]
    fn from_path_finds_category_segment() {
        let path = Path::new("data/raw/puzzle/따사룸_옵션가격_2025-07-10.csv");
        assert_eq!(Category::from_path(path), Category::Puzzle);
    }

    #[test]
    fn from_path_defaults_to_roll() {
        let path = Path::new("data/raw/경쟁사_옵션가격.csv");
        assert_eq!(Category::from_path(path), Category::Roll);
    }

    #[test]
    fn from_path_first_matching_segment_wins() {
        let path = Path::new("data/raw/pet/puzzle_copy.csv");
        assert_eq!(Category::from_path(path), Category::Pet);
    }

    #[test]
    fn labels_are_korean_category_names() {
        assert_eq!(Category::Roll.label(), "롤매트");
        assert_eq!(Category::Pet.label(), "강아지매트");
    }
}
