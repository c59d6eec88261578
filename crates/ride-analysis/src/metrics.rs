//! Derived ride metrics

use crate::error::AnalysisError;
use crate::fit::{rolling_slope, LinearFit};
use ride_log::{SampleTable, CURRENT_IN, INPUT_VOLTAGE, SPEED, TEMP_CONTROLLER, TEMP_MOTOR};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default number of samples per acceleration window
pub const DEFAULT_ACCELERATION_WINDOW: usize = 35;

/// Maximum ignoring NaN; NaN if there are no finite values
pub fn nan_max(values: &[f64]) -> f64 {
    values
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(f64::NAN, f64::max)
}

/// Acceleration (speed units per time unit) as the rolling slope of the
/// `speed` column against time
pub fn calculate_acceleration(
    samples: &SampleTable,
    window: usize,
) -> Result<Vec<f64>, AnalysisError> {
    let speed = samples.column(SPEED)?;
    rolling_slope(samples.time(), speed, window)
}

/// Battery internal resistance estimated from voltage sag
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResistanceEstimate {
    /// Voltage (V) against battery current (A)
    pub fit: LinearFit,
    /// Negated fit slope in milliohms
    pub milliohms: f64,
}

/// Fit input voltage against battery current over the whole table
pub fn internal_resistance(samples: &SampleTable) -> Result<ResistanceEstimate, AnalysisError> {
    let current = samples.column(CURRENT_IN)?;
    let voltage = samples.column(INPUT_VOLTAGE)?;

    let fit = LinearFit::least_squares(current, voltage);
    let milliohms = -fit.slope * 1000.0;
    debug!("Voltage sag fit {:?} -> {:.1} mOhm", fit, milliohms);

    Ok(ResistanceEstimate { fit, milliohms })
}

/// Last value minus first value of `column`; NaN for an empty table
pub fn temperature_delta(samples: &SampleTable, column: &str) -> Result<f64, AnalysisError> {
    let values = samples.column(column)?;
    Ok(match (values.first(), values.last()) {
        (Some(first), Some(last)) => last - first,
        _ => f64::NAN,
    })
}

/// Motor temperature rise over the table
pub fn motor_temp_delta(samples: &SampleTable) -> Result<f64, AnalysisError> {
    temperature_delta(samples, TEMP_MOTOR)
}

/// Controller (hottest MOSFET) temperature rise over the table
pub fn controller_temp_delta(samples: &SampleTable) -> Result<f64, AnalysisError> {
    temperature_delta(samples, TEMP_CONTROLLER)
}
