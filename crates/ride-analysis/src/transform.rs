//! Time index transforms

use crate::error::AnalysisError;
use ride_log::{SampleTable, TIME_SEC};
use tracing::debug;

/// Shift the time index so the first sample is at zero
pub fn reset_time_index(samples: &SampleTable) -> Result<SampleTable, AnalysisError> {
    let origin = match samples.time().first() {
        Some(&t) => t,
        None => return Ok(samples.clone()),
    };
    shift_time(samples, origin)
}

/// Divide the time index by `divisor` (1000 for millisecond logs) and rename
/// it to `time_sec`
pub fn convert_to_seconds(
    samples: &SampleTable,
    divisor: f64,
) -> Result<SampleTable, AnalysisError> {
    if !(divisor > 0.0) {
        return Err(AnalysisError::InvalidConfig(format!(
            "time divisor must be positive, got {}",
            divisor
        )));
    }
    let time = samples.time().iter().map(|t| t / divisor).collect();
    Ok(samples.with_time(TIME_SEC, time)?)
}

/// Shift the time index so the first sample where `column > value` is at
/// zero. Rows are kept; earlier samples get negative times.
pub fn trim_to_threshold(
    samples: &SampleTable,
    column: &str,
    value: f64,
) -> Result<SampleTable, AnalysisError> {
    let values = samples.column(column)?;
    let row = values
        .iter()
        .position(|v| *v > value)
        .ok_or_else(|| AnalysisError::NoActiveRegion {
            column: column.to_string(),
            threshold: value,
        })?;
    debug!("{} first exceeds {} at row {}", column, value, row);
    shift_time(samples, samples.time()[row])
}

fn shift_time(samples: &SampleTable, origin: f64) -> Result<SampleTable, AnalysisError> {
    let time = samples.time().iter().map(|t| t - origin).collect();
    Ok(samples.with_time(samples.index_name(), time)?)
}
