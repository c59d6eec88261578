//! Log Error Types

use thiserror::Error;

/// Errors while loading or accessing a sample table
#[derive(Debug, Error)]
pub enum LogError {
    /// File could not be opened or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed delimited text
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Header row has no columns at all
    #[error("Log has no time column")]
    MissingTimeColumn,

    /// Requested field is not in the table
    #[error("Column not found: {0}")]
    MissingColumn(String),

    /// A field could not be parsed as a number
    #[error("Invalid number {value:?} in column {column} at line {line}")]
    InvalidNumber {
        line: u64,
        column: String,
        value: String,
    },

    /// Time index went backwards
    #[error("Time index decreases at row {row}: {previous} -> {current}")]
    NonMonotonicTime {
        row: usize,
        previous: f64,
        current: f64,
    },

    /// Column length differs from the time index
    #[error("Column {column} has {actual} values, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },
}
