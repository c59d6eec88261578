//! Throttle Region Extraction
//!
//! Finds the first contiguous run of samples where a signal (normally motor
//! current) is above a threshold. The signal is reduced to a 0/1 indicator
//! whose first difference marks rising (+1) and falling (-1) edges; the run
//! is bounded by the first rising edge and the first falling edge after it.
//! Later on/off cycles in the same log are ignored.

use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use ride_log::SampleTable;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Inclusive bounds of the active region
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActiveRegion {
    /// Time key of the rising edge sample
    pub start: f64,
    /// Time key of the falling edge sample
    pub end: f64,
    /// Row of the rising edge sample
    pub start_row: usize,
    /// Row of the falling edge sample
    pub end_row: usize,
}

impl ActiveRegion {
    /// Number of rows inside the bounds, edges included
    pub fn rows(&self) -> usize {
        self.end_row - self.start_row + 1
    }

}

/// Edge direction in the indicator's first difference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Rising,
    Falling,
}

/// Yield `(row, edge)` for every transition of `value > threshold`.
///
/// Row 0 has no predecessor and is never an edge, so a log that starts
/// with the throttle already active skips that first run.
fn edges(values: &[f64], threshold: f64) -> impl Iterator<Item = (usize, Edge)> + '_ {
    values.windows(2).enumerate().filter_map(move |(i, pair)| {
        // NaN compares false and counts as inactive
        match (pair[0] > threshold, pair[1] > threshold) {
            (false, true) => Some((i + 1, Edge::Rising)),
            (true, false) => Some((i + 1, Edge::Falling)),
            _ => None,
        }
    })
}

/// Locate the first active run in `column`.
///
/// Returns the time keys of the first rising edge and of the first falling
/// edge after it. Slicing the table inclusively by these rows yields a table
/// whose first sample is the first instant `column` exceeds `threshold` and
/// whose last sample is the first instant afterwards it is back at or below.
pub fn extract_active_region(
    samples: &SampleTable,
    column: &str,
    threshold: f64,
) -> Result<ActiveRegion, AnalysisError> {
    let values = samples.column(column)?;
    let mut transitions = edges(values, threshold);

    let start_row = transitions
        .by_ref()
        .find(|(_, edge)| *edge == Edge::Rising)
        .map(|(row, _)| row)
        .ok_or_else(|| AnalysisError::NoActiveRegion {
            column: column.to_string(),
            threshold,
        })?;

    let time = samples.time();
    let end_row = transitions
        .find(|(_, edge)| *edge == Edge::Falling)
        .map(|(row, _)| row)
        .ok_or_else(|| AnalysisError::UnterminatedActiveRegion {
            column: column.to_string(),
            threshold,
            start: time[start_row],
        })?;

    let region = ActiveRegion {
        start: time[start_row],
        end: time[end_row],
        start_row,
        end_row,
    };
    debug!(
        "Active region on {}: rows {}..={} ({} rows)",
        column,
        start_row,
        end_row,
        region.rows()
    );
    Ok(region)
}

/// Slice `samples` down to the throttle-active window
pub fn pull_throttle_region(
    samples: &SampleTable,
    config: &AnalysisConfig,
) -> Result<SampleTable, AnalysisError> {
    let region = extract_active_region(samples, &config.current_column, config.threshold)?;
    info!(
        "Throttle region {} -> {} ({} of {} samples)",
        region.start,
        region.end,
        region.rows(),
        samples.len()
    );
    Ok(samples.slice_rows(region.start_row..region.end_row + 1))
}
