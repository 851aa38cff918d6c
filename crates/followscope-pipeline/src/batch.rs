//! Batch orchestration: Open → ReadRows → (Classify → Extract → Validate →
//! Normalize → Accumulate) per row → Close, file by file.

use std::path::{Path, PathBuf};

use followscope_core::{rules_for_competitor, Category, LengthMethod, NormalizedRecord};
use followscope_parser::{extract_from_text, extract_row, resolve_competitor, ExtractedAttributes};

use crate::error::PipelineError;
use crate::reader::{read_rows, FileRows};

/// Thickness (cm) assumed for 2-stage listings that state none.
const DEFAULT_THICKNESS_CM: f64 = 1.5;

/// Pet-mat listings priced per 100 cm are renormalized to this length.
const PET_PRICING_LENGTH_CM: f64 = 50.0;

/// Aggregate counts for one pipeline run — the batch's externally visible
/// health signal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files_discovered: usize,
    pub files_processed: usize,
    pub files_failed: usize,
    pub rows_read: usize,
    pub rows_skipped: usize,
    pub records_produced: usize,
}

/// The complete result of one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    /// Normalized records, sorted by competitor then thickness ascending.
    pub records: Vec<NormalizedRecord>,
    pub summary: RunSummary,
}

/// Processes every raw file under `raw_dir` into a normalized record set.
///
/// A malformed file never aborts the batch: file-level failures are logged,
/// counted, and processing continues with the next file. The record set is
/// built in a local buffer and returned complete.
///
/// # Errors
///
/// Returns [`PipelineError::WalkDir`] only when the raw-data tree itself
/// cannot be enumerated.
pub fn process_raw_data(raw_dir: &Path) -> Result<PipelineOutput, PipelineError> {
    let mut files = Vec::new();
    collect_data_files(raw_dir, &mut files)?;
    // Deterministic file order keeps re-runs byte-identical.
    files.sort();

    let mut records = Vec::new();
    let mut summary = RunSummary {
        files_discovered: files.len(),
        ..RunSummary::default()
    };

    for path in &files {
        match process_file(path, &mut records, &mut summary) {
            Ok(()) => summary.files_processed += 1,
            Err(error) => {
                summary.files_failed += 1;
                tracing::warn!(file = %path.display(), error = %error, "skipping file");
            }
        }
    }

    records.sort_by(|a, b| {
        a.competitor
            .cmp(&b.competitor)
            .then(a.thickness_cm.total_cmp(&b.thickness_cm))
    });
    summary.records_produced = records.len();

    tracing::info!(
        files_processed = summary.files_processed,
        files_failed = summary.files_failed,
        rows_read = summary.rows_read,
        rows_skipped = summary.rows_skipped,
        records = summary.records_produced,
        "pipeline run complete"
    );

    Ok(PipelineOutput { records, summary })
}

/// Recursively collects processable data files under `dir`.
fn collect_data_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), PipelineError> {
    let entries = std::fs::read_dir(dir).map_err(|source| PipelineError::WalkDir {
        path: dir.to_path_buf(),
        source,
    })?;
    for entry in entries {
        let entry = entry.map_err(|source| PipelineError::WalkDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_dir() {
            collect_data_files(&path, files)?;
        } else if path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
        {
            files.push(path);
        }
    }
    Ok(())
}

/// Processes one raw file, appending its valid rows to `records`.
fn process_file(
    path: &Path,
    records: &mut Vec<NormalizedRecord>,
    summary: &mut RunSummary,
) -> Result<(), PipelineError> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    let competitor = resolve_competitor(stem);
    let category = Category::from_path(path);

    tracing::info!(
        file = %path.display(),
        competitor = %competitor,
        category = %category,
        "processing file"
    );

    let before = records.len();
    let mut rows_read = 0usize;

    match read_rows(path)? {
        FileRows::Structured(rows) => {
            for row in &rows {
                rows_read += 1;
                if row.is_blank() {
                    summary.rows_skipped += 1;
                    continue;
                }
                let attrs = extract_row(row, category);
                accumulate(attrs, &competitor, category, records, summary);
            }
        }
        FileRows::Unstructured(rows) => {
            for text in &rows {
                rows_read += 1;
                if text.is_empty() {
                    summary.rows_skipped += 1;
                    continue;
                }
                let attrs = extract_from_text(text);
                accumulate(attrs, &competitor, category, records, summary);
            }
        }
    }

    summary.rows_read += rows_read;
    tracing::info!(
        file = %path.display(),
        rows = rows_read,
        records = records.len() - before,
        "file processed"
    );
    Ok(())
}

/// Validates and normalizes one extracted attribute set; pushes a record or
/// bumps the skip counter.
fn accumulate(
    attrs: ExtractedAttributes,
    competitor: &str,
    category: Category,
    records: &mut Vec<NormalizedRecord>,
    summary: &mut RunSummary,
) {
    if !attrs.has_essentials() {
        summary.rows_skipped += 1;
        return;
    }

    // has_essentials guarantees price and width.
    let Some(price) = attrs.raw_price else { return };
    let Some(width_cm) = attrs.width_cm else {
        return;
    };

    let Some(length_cm) = resolve_length(&attrs, competitor) else {
        summary.rows_skipped += 1;
        tracing::debug!(competitor, "dropping row — length could not be resolved");
        return;
    };

    let thickness_cm = attrs.thickness_cm.unwrap_or(DEFAULT_THICKNESS_CM);

    // Pet mats priced per 100 cm are renormalized against the 50 cm pricing
    // standard the category compares at.
    let (length_cm, price) = if category == Category::Pet && length_cm == 100.0 {
        tracing::debug!(competitor, "halving pet-mat length and price to 50 cm standard");
        (PET_PRICING_LENGTH_CM, price / 2.0)
    } else {
        (length_cm, price)
    };

    records.push(NormalizedRecord::new(
        competitor,
        attrs.design,
        thickness_cm,
        width_cm,
        length_cm,
        price,
        category,
    ));
}

/// Resolves the usable listing length from extracted attributes and the
/// competitor's length rules.
///
/// Order: unit-count rule → decomposed unit count × unit length → direct
/// length → vendor fallback (requires extracted width and thickness).
fn resolve_length(attrs: &ExtractedAttributes, competitor: &str) -> Option<f64> {
    let rules = rules_for_competitor(competitor);

    if rules.method == LengthMethod::UnitCount {
        if let (Some(count), Some(base)) = (attrs.piece_unit_count, rules.base_unit_cm) {
            return Some(count * base);
        }
    }
    if let (Some(count), Some(length)) = (attrs.piece_unit_count, attrs.length_cm) {
        return Some(count * length);
    }
    if let Some(length) = attrs.length_cm {
        return Some(length);
    }
    if attrs.width_cm.is_some() && attrs.thickness_cm.is_some() {
        if let Some(fallback) = rules.fallback_length_cm {
            return Some(fallback);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(
        thickness: Option<f64>,
        width: Option<f64>,
        length: Option<f64>,
        count: Option<f64>,
        price: Option<f64>,
    ) -> ExtractedAttributes {
        ExtractedAttributes {
            design: None,
            thickness_cm: thickness,
            width_cm: width,
            length_cm: length,
            piece_unit_count: count,
            raw_price: price,
        }
    }

    #[test]
    fn direct_length_is_used_as_is() {
        let a = attrs(Some(1.7), Some(80.0), Some(150.0), None, Some(32000.0));
        assert_eq!(resolve_length(&a, "브랜드"), Some(150.0));
    }

    #[test]
    fn unit_count_multiplies_decomposed_length() {
        let a = attrs(Some(4.0), Some(110.0), Some(50.0), Some(8.0), Some(99000.0));
        assert_eq!(resolve_length(&a, "리코코"), Some(400.0));
    }

    #[test]
    fn vendor_fallback_needs_width_and_thickness() {
        let with_thickness = attrs(Some(1.7), Some(100.0), None, None, Some(20000.0));
        assert_eq!(resolve_length(&with_thickness, "파크론"), Some(100.0));

        let without_thickness = attrs(None, Some(100.0), None, None, Some(20000.0));
        assert_eq!(resolve_length(&without_thickness, "파크론"), None);
    }

    #[test]
    fn unknown_vendor_without_length_is_dropped() {
        let a = attrs(Some(1.7), Some(100.0), None, None, Some(20000.0));
        assert_eq!(resolve_length(&a, "브랜드"), None);
    }

    #[test]
    fn pet_mats_at_100cm_are_renormalized() {
        let mut records = Vec::new();
        let mut summary = RunSummary::default();
        let a = attrs(Some(0.6), Some(110.0), Some(100.0), None, Some(39000.0));
        accumulate(a, "딩굴", Category::Pet, &mut records, &mut summary);
        assert_eq!(records.len(), 1);
        assert!((records[0].length_cm - 50.0).abs() < f64::EPSILON);
        assert!((records[0].price - 19500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn pet_mats_at_other_lengths_are_untouched() {
        let mut records = Vec::new();
        let mut summary = RunSummary::default();
        let a = attrs(Some(0.6), Some(110.0), Some(50.0), None, Some(39000.0));
        accumulate(a, "딩굴", Category::Pet, &mut records, &mut summary);
        assert!((records[0].length_cm - 50.0).abs() < f64::EPSILON);
        assert!((records[0].price - 39000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_thickness_defaults_for_two_stage_rows() {
        let mut records = Vec::new();
        let mut summary = RunSummary::default();
        let a = attrs(None, Some(110.0), Some(50.0), None, Some(9900.0));
        accumulate(a, "브랜드", Category::Roll, &mut records, &mut summary);
        assert!((records[0].thickness_cm - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn incomplete_rows_are_counted_not_pushed() {
        let mut records = Vec::new();
        let mut summary = RunSummary::default();
        let a = attrs(Some(1.7), None, Some(50.0), None, Some(9900.0));
        accumulate(a, "브랜드", Category::Roll, &mut records, &mut summary);
        assert!(records.is_empty());
        assert_eq!(summary.rows_skipped, 1);
    }
}
