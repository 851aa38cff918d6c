use std::path::PathBuf;

use thiserror::Error;

/// Errors raised at the file and export boundaries of a pipeline run.
///
/// Per-file errors are caught by the orchestrator, logged and counted; only
/// walk/export failures abort a run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to walk raw data directory {path}: {source}")]
    WalkDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to create output directory {path}: {source}")]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to export records to {path}: {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
