//! Ride maxima report

use crate::error::AnalysisError;
use crate::metrics::nan_max;
use ride_log::{SampleTable, ACCELERATION, CURRENT_IN, CURRENT_MOTOR, SPEED};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Peak values over an analysed ride
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaximaReport {
    /// Peak motor (phase) current, A
    pub max_phase_current: f64,
    /// Peak battery current, A
    pub max_battery_current: f64,
    /// Peak acceleration, m/s^2
    pub max_acceleration: f64,
    /// Peak speed, m/s
    pub max_speed: f64,
}

impl MaximaReport {
    /// Collect maxima from a table carrying the derived `speed` and
    /// `acceleration` columns. NaN samples are skipped.
    pub fn from_table(samples: &SampleTable) -> Result<Self, AnalysisError> {
        Ok(Self {
            max_phase_current: nan_max(samples.column(CURRENT_MOTOR)?),
            max_battery_current: nan_max(samples.column(CURRENT_IN)?),
            max_acceleration: nan_max(samples.column(ACCELERATION)?),
            max_speed: nan_max(samples.column(SPEED)?),
        })
    }
}

impl fmt::Display for MaximaReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "max phase current {:.1} A", self.max_phase_current)?;
        writeln!(f, "max battery current {:.1} A", self.max_battery_current)?;
        writeln!(f, "max acceleration {:.2} m/sec^2", self.max_acceleration)?;
        write!(f, "max speed {:.2} m/sec", self.max_speed)
    }
}
