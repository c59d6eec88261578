//! Ride Performance Analysis
//!
//! Locates the throttle-active window of a logged ride and derives
//! acceleration, torque-speed and battery internal resistance metrics from it.

mod config;
mod conversion;
mod error;
mod fit;
mod metrics;
mod pipeline;
mod region;
mod report;
mod transform;

pub use config::{AnalysisConfig, VehicleConfig};
pub use conversion::{rpm_to_rad_per_sec, speed_from_erpm, vesc_speed};
pub use error::AnalysisError;
pub use fit::{rolling_slope, LinearFit};
pub use metrics::{
    calculate_acceleration, controller_temp_delta, internal_resistance, motor_temp_delta,
    nan_max, temperature_delta, ResistanceEstimate, DEFAULT_ACCELERATION_WINDOW,
};
pub use pipeline::{RideAnalysis, RideAnalyzer, TemperatureDeltas};
pub use region::{extract_active_region, pull_throttle_region, ActiveRegion};
pub use report::MaximaReport;
pub use transform::{convert_to_seconds, reset_time_index, trim_to_threshold};
