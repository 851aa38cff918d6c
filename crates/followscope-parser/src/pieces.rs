//! Multi-piece SKU normalization.
//!
//! Several vendors sell four 50×50 cm tiles where others sell one
//! 100×100 cm mat. Folding the four-piece SKU into its single-unit
//! equivalent makes the two directly price-comparable.

/// Side length (cm) of the small tile that folds into a larger unit.
const FOLDABLE_SIDE_CM: f64 = 50.0;
/// Piece count that folds; four 50×50 tiles tile one 100×100 unit.
const FOLDABLE_PIECES: u32 = 4;

/// Folds a duplicated-small-unit SKU into its single-unit equivalent.
///
/// `(width=50, length=50, pieces=4)` becomes `(100, 100)`; every other
/// combination is returned unchanged.
#[must_use]
pub fn fold_duplicate_pieces(width_cm: f64, length_cm: f64, pieces: u32) -> (f64, f64) {
    if width_cm == FOLDABLE_SIDE_CM && length_cm == FOLDABLE_SIDE_CM && pieces == FOLDABLE_PIECES {
        (FOLDABLE_SIDE_CM * 2.0, FOLDABLE_SIDE_CM * 2.0)
    } else {
        (width_cm, length_cm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_small_tiles_fold_to_one_large_unit() {
        assert_eq!(fold_duplicate_pieces(50.0, 50.0, 4), (100.0, 100.0));
    }

    #[test]
    fn single_large_unit_is_unchanged() {
        assert_eq!(fold_duplicate_pieces(100.0, 100.0, 1), (100.0, 100.0));
    }

    #[test]
    fn other_piece_counts_are_unchanged() {
        assert_eq!(fold_duplicate_pieces(50.0, 50.0, 2), (50.0, 50.0));
        assert_eq!(fold_duplicate_pieces(50.0, 50.0, 8), (50.0, 50.0));
    }

    #[test]
    fn non_square_fifty_is_unchanged() {
        assert_eq!(fold_duplicate_pieces(50.0, 100.0, 4), (50.0, 100.0));
    }
}
