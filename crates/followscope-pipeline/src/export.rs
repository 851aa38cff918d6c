//! CSV export of the normalized record set.

use std::path::Path;

use followscope_core::NormalizedRecord;

use crate::error::PipelineError;

/// Writes the record set to `path` as CSV, creating parent directories as
/// needed. The header row comes from [`NormalizedRecord`]'s field order.
///
/// # Errors
///
/// Returns [`PipelineError::CreateOutputDir`] when the parent directory
/// cannot be created and [`PipelineError::Export`] on any write failure.
pub fn export_records(records: &[NormalizedRecord], path: &Path) -> Result<(), PipelineError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| PipelineError::CreateOutputDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    let wrap = |source: csv::Error| PipelineError::Export {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(wrap)?;
    for record in records {
        writer.serialize(record).map_err(wrap)?;
    }
    writer.flush().map_err(|io| {
        wrap(csv::Error::from(io))
    })?;

    tracing::info!(file = %path.display(), records = records.len(), "exported record set");
    Ok(())
}
