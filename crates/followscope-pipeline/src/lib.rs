//! Batch pipeline: raw vendor files in, normalized record set out.
//!
//! A run walks the raw-data tree, processes each file row-by-row through the
//! extraction cascade, and accumulates normalized records in an isolated
//! buffer that is only handed to the caller once complete — a consumer
//! observes either the previous full record set or the new one, never a
//! partial one.

pub mod batch;
pub mod error;
pub mod export;
mod reader;

pub use batch::{process_raw_data, PipelineOutput, RunSummary};
pub use error::PipelineError;
pub use export::export_records;
