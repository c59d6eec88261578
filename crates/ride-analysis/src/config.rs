//! Vehicle and analysis configuration

use crate::error::AnalysisError;
use crate::metrics::DEFAULT_ACCELERATION_WINDOW;
use ride_log::CURRENT_MOTOR;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Meters per statute mile
const METERS_PER_MILE: f64 = 1609.0;

/// Physical constants of one vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleConfig {
    /// Driven wheel diameter (meters)
    pub wheel_diameter_m: f64,
    /// Motor magnetic pole pairs
    pub pole_pairs: u32,
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self {
            wheel_diameter_m: 0.567,
            pole_pairs: 23,
        }
    }
}

impl VehicleConfig {
    /// Check that the constants describe a physical vehicle
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.pole_pairs == 0 {
            return Err(AnalysisError::InvalidConfig(
                "pole_pairs must be greater than 0".to_string(),
            ));
        }
        if !(self.wheel_diameter_m > 0.0) || !self.wheel_diameter_m.is_finite() {
            return Err(AnalysisError::InvalidConfig(format!(
                "wheel_diameter_m must be positive, got {}",
                self.wheel_diameter_m
            )));
        }
        Ok(())
    }

    /// Wheel circumference (meters per revolution)
    pub fn wheel_circumference_m(&self) -> f64 {
        self.wheel_diameter_m * PI
    }

    /// ERPM to miles per hour: rev/min * min/hour * meter/rev * mile/meter
    pub fn rpm_to_mph(&self) -> f64 {
        60.0 * self.wheel_circumference_m() / METERS_PER_MILE / self.pole_pairs as f64
    }

    /// ERPM to meters per second: rev/min * min/sec * meter/rev
    pub fn rpm_to_mps(&self) -> f64 {
        self.wheel_circumference_m() / 60.0 / self.pole_pairs as f64
    }
}

/// Settings for one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Current above this value counts as throttle-active (A)
    pub threshold: f64,
    /// Column the active region is detected on
    pub current_column: String,
    /// Samples per acceleration slope window
    pub acceleration_window: usize,
    /// Raw time units per second (1000 for millisecond logs)
    pub time_unit_divisor: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            current_column: CURRENT_MOTOR.to_string(),
            acceleration_window: DEFAULT_ACCELERATION_WINDOW,
            time_unit_divisor: 1000.0,
        }
    }
}

impl AnalysisConfig {
    /// Check the settings before running a pipeline
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.acceleration_window < 2 {
            return Err(AnalysisError::InvalidWindow(self.acceleration_window));
        }
        if !(self.time_unit_divisor > 0.0) || !self.time_unit_divisor.is_finite() {
            return Err(AnalysisError::InvalidConfig(format!(
                "time_unit_divisor must be positive, got {}",
                self.time_unit_divisor
            )));
        }
        if !self.threshold.is_finite() {
            return Err(AnalysisError::InvalidConfig(
                "threshold must be finite".to_string(),
            ));
        }
        if self.current_column.is_empty() {
            return Err(AnalysisError::InvalidConfig(
                "current_column must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
