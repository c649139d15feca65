use std::path::PathBuf;

use lightning_core::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Spreadsheet not found: {}", .0.display())]
    SpreadsheetNotFound(PathBuf),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("Workbook has no worksheets")]
    NoWorksheet,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Coercion failure for a single row; the row is skipped and counted
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RowError {
    #[error("Error on row {row}: {column} {value:?} is not a whole number")]
    NotANumber {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("Error on row {row}: {column} {value} is out of range")]
    OutOfRange {
        row: usize,
        column: &'static str,
        value: i64,
    },
}
