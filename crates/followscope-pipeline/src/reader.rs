//! Raw-file row reading with column-role resolution.
//!
//! Vendors name their columns consistently within a file but not across
//! vendors; only the *roles* option1/option2/option3/final-price are
//! assumed. Headers are matched against per-role alias lists. Files without
//! option columns fall back to unstructured row text for the labeled
//! extractor.

use std::io::Read;
use std::path::Path;

use followscope_core::RawRow;

use crate::error::PipelineError;

const OPTION1_ALIASES: &[&str] = &["옵션1", "option1", "opt1"];
const OPTION2_ALIASES: &[&str] = &["옵션2", "option2", "opt2"];
const OPTION3_ALIASES: &[&str] = &["옵션3", "option3", "opt3"];
const PRICE_ALIASES: &[&str] = &["최종가격", "final_price", "price"];

/// Column indices resolved from a file's header row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ColumnRoles {
    pub opt1: Option<usize>,
    pub opt2: Option<usize>,
    pub opt3: Option<usize>,
    pub price: Option<usize>,
}

impl ColumnRoles {
    pub(crate) fn resolve(headers: &csv::StringRecord) -> Self {
        let find = |aliases: &[&str]| {
            headers.iter().position(|header| {
                let header = header.trim().to_lowercase();
                aliases.iter().any(|alias| header == *alias)
            })
        };
        Self {
            opt1: find(OPTION1_ALIASES),
            opt2: find(OPTION2_ALIASES),
            opt3: find(OPTION3_ALIASES),
            price: find(PRICE_ALIASES),
        }
    }

    /// Structured extraction needs at least the first two option roles.
    pub(crate) fn is_structured(self) -> bool {
        self.opt1.is_some() && self.opt2.is_some()
    }
}

/// Rows read from one raw file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FileRows {
    /// Option columns present: rows mapped by role.
    Structured(Vec<RawRow>),
    /// No option columns: each row's cells joined into one text blob for the
    /// labeled fallback extractor.
    Unstructured(Vec<String>),
}

/// Reads all rows from a raw CSV file.
///
/// # Errors
///
/// Returns [`PipelineError::FileRead`] when the file cannot be opened or a
/// record cannot be parsed; the caller treats this as a file-level failure.
pub(crate) fn read_rows(path: &Path) -> Result<FileRows, PipelineError> {
    let reader = csv::Reader::from_path(path).map_err(|source| PipelineError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    read_rows_from(reader).map_err(|source| PipelineError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

fn read_rows_from<R: Read>(mut reader: csv::Reader<R>) -> Result<FileRows, csv::Error> {
    let roles = ColumnRoles::resolve(reader.headers()?);

    if roles.is_structured() {
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let cell = |idx: Option<usize>| -> Option<String> {
                idx.and_then(|i| record.get(i)).map(str::to_string)
            };
            rows.push(RawRow {
                opt1: cell(roles.opt1),
                opt2: cell(roles.opt2),
                opt3: cell(roles.opt3),
                raw_price: cell(roles.price),
            });
        }
        return Ok(FileRows::Structured(rows));
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let text = record
            .iter()
            .map(str::trim)
            .filter(|cell| !cell.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        rows.push(text);
    }
    Ok(FileRows::Unstructured(rows))
}
