//! Analysis Error Types

use ride_log::LogError;
use thiserror::Error;

/// Errors that abort an analysis run
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// No sample rises above the threshold
    #[error("No active region: {column} never rises above {threshold}")]
    NoActiveRegion { column: String, threshold: f64 },

    /// The first active run never drops back to the threshold
    #[error("Active region starting at {start} never ends: {column} stays above {threshold}")]
    UnterminatedActiveRegion {
        column: String,
        threshold: f64,
        start: f64,
    },

    /// Requested field is not in the table
    #[error("Column not found: {0}")]
    MissingColumn(String),

    /// Table has no rows to work on
    #[error("Sample table is empty")]
    EmptyTable,

    /// Rolling window cannot produce a slope
    #[error("Invalid window length {0}: must be at least 2")]
    InvalidWindow(usize),

    /// Paired series differ in length
    #[error("Series lengths differ: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// Configuration value out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Underlying table error
    #[error("Sample table error: {0}")]
    Log(LogError),
}

impl From<LogError> for AnalysisError {
    fn from(err: LogError) -> Self {
        match err {
            LogError::MissingColumn(name) => AnalysisError::MissingColumn(name),
            other => AnalysisError::Log(other),
        }
    }
}
