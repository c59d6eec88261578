//! Ride analysis pipeline
//!
//! raw log -> throttle region -> time reset -> seconds -> speed ->
//! acceleration -> angular velocity -> resistance, temperatures, maxima.

use crate::config::{AnalysisConfig, VehicleConfig};
use crate::conversion::{rpm_to_rad_per_sec, speed_from_erpm, vesc_speed};
use crate::error::AnalysisError;
use crate::metrics::{
    calculate_acceleration, controller_temp_delta, internal_resistance, motor_temp_delta,
    ResistanceEstimate,
};
use crate::region::{extract_active_region, ActiveRegion};
use crate::report::MaximaReport;
use crate::transform::{convert_to_seconds, reset_time_index};
use ride_log::{
    SampleTable, ACCELERATION, RAD_PER_SEC, SPEED, SPEED_MPS, TEMP_CONTROLLER, TEMP_MOTOR,
};
use serde::Serialize;
use tracing::{debug, info};

/// Temperature rise over the active region, when the log records it
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TemperatureDeltas {
    pub motor: Option<f64>,
    pub controller: Option<f64>,
}

/// Everything derived from one ride
#[derive(Debug, Clone, Serialize)]
pub struct RideAnalysis {
    /// Bounds of the throttle region in the raw log's time units
    pub region: ActiveRegion,
    /// Active region with time in seconds from the rising edge and the
    /// derived columns appended
    #[serde(skip)]
    pub table: SampleTable,
    /// Battery internal resistance over the region
    pub resistance: ResistanceEstimate,
    /// Temperature rise over the region
    pub temperatures: TemperatureDeltas,
    /// Peak values
    pub report: MaximaReport,
}

/// Runs the full analysis on a raw log
#[derive(Debug, Clone)]
pub struct RideAnalyzer {
    config: AnalysisConfig,
    vehicle: VehicleConfig,
}

impl RideAnalyzer {
    /// Create an analyzer, rejecting invalid settings up front
    pub fn new(config: AnalysisConfig, vehicle: VehicleConfig) -> Result<Self, AnalysisError> {
        config.validate()?;
        vehicle.validate()?;
        info!(
            "Creating ride analyzer: threshold {} A on {}, window {}, {} pole pairs, {} m wheel",
            config.threshold,
            config.current_column,
            config.acceleration_window,
            vehicle.pole_pairs,
            vehicle.wheel_diameter_m
        );
        Ok(Self { config, vehicle })
    }

    /// Analyse one raw log. The input table is not modified.
    pub fn analyze(&self, raw: &SampleTable) -> Result<RideAnalysis, AnalysisError> {
        if raw.is_empty() {
            return Err(AnalysisError::EmptyTable);
        }

        let region =
            extract_active_region(raw, &self.config.current_column, self.config.threshold)?;
        let active = raw.slice_rows(region.start_row..region.end_row + 1);
        debug!("Sliced {} of {} samples", active.len(), raw.len());

        let active = reset_time_index(&active)?;
        let active = convert_to_seconds(&active, self.config.time_unit_divisor)?;

        let speed = speed_from_erpm(&active)?;
        let active = active.with_column(SPEED, speed)?;

        let acceleration = calculate_acceleration(&active, self.config.acceleration_window)?;
        let rad_per_sec = rpm_to_rad_per_sec(&active, &self.vehicle)?;
        let speed_mps = vesc_speed(&active, &self.vehicle)?;
        let table = active
            .with_column(ACCELERATION, acceleration)?
            .with_column(RAD_PER_SEC, rad_per_sec)?
            .with_column(SPEED_MPS, speed_mps)?;
        debug!("Derived columns: {:?}", table.column_names());

        let resistance = internal_resistance(&table)?;
        let temperatures = TemperatureDeltas {
            motor: optional(&table, TEMP_MOTOR, motor_temp_delta)?,
            controller: optional(&table, TEMP_CONTROLLER, controller_temp_delta)?,
        };
        let report = MaximaReport::from_table(&table)?;

        info!(
            "Analysed {} samples over {:.2} s: {:.1} mOhm",
            table.len(),
            table.time().last().copied().unwrap_or(0.0),
            resistance.milliohms
        );

        Ok(RideAnalysis {
            region,
            table,
            resistance,
            temperatures,
            report,
        })
    }
}

fn optional(
    table: &SampleTable,
    column: &str,
    delta: fn(&SampleTable) -> Result<f64, AnalysisError>,
) -> Result<Option<f64>, AnalysisError> {
    if table.has_column(column) {
        delta(table).map(Some)
    } else {
        debug!("No {} column, skipping temperature delta", column);
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ride_log::{CURRENT_IN, CURRENT_MOTOR, ERPM, GNSS_VELOCITY, INPUT_VOLTAGE};

    fn raw_log() -> SampleTable {
        // idle, 6 samples of throttle, release, idle
        let current = vec![0.0, 0.0, 20.0, 40.0, 40.0, 35.0, 30.0, 20.0, 0.0, 0.0];
        let time = (0..current.len()).map(|i| 1000.0 + i as f64 * 100.0).collect();
        let battery: Vec<f64> = current.iter().map(|c| c / 2.0).collect();
        let voltage: Vec<f64> = battery.iter().map(|b| 50.0 - 0.05 * b).collect();
        SampleTable::new("ms_today", time)
            .unwrap()
            .with_column(CURRENT_MOTOR, current)
            .unwrap()
            .with_column(CURRENT_IN, battery)
            .unwrap()
            .with_column(INPUT_VOLTAGE, voltage)
            .unwrap()
            .with_column(
                ERPM,
                vec![0.0, 0.0, 100.0, 400.0, 900.0, 1400.0, 1800.0, 2000.0, 2000.0, 1900.0],
            )
            .unwrap()
            .with_column(
                GNSS_VELOCITY,
                vec![0.0, 0.0, 0.2, 0.9, 2.0, 3.1, 3.9, 4.4, 4.5, 4.2],
            )
            .unwrap()
    }

    fn analyzer(window: usize) -> RideAnalyzer {
        let config = AnalysisConfig {
            acceleration_window: window,
            ..Default::default()
        };
        RideAnalyzer::new(config, VehicleConfig::default()).unwrap()
    }

    #[test]
    fn test_analyze_region_and_time() {
        let analysis = analyzer(3).analyze(&raw_log()).unwrap();
        assert_eq!(analysis.region.start, 1200.0);
        assert_eq!(analysis.region.end, 1800.0);
        assert_eq!(analysis.table.len(), 7);
        assert_eq!(analysis.table.index_name(), "time_sec");
        assert_eq!(analysis.table.time()[0], 0.0);
        assert!((analysis.table.time()[6] - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_analyze_derived_columns() {
        let analysis = analyzer(3).analyze(&raw_log()).unwrap();
        for name in [SPEED, ACCELERATION, RAD_PER_SEC, SPEED_MPS] {
            assert!(analysis.table.has_column(name), "missing {}", name);
        }
        let accel = analysis.table.column(ACCELERATION).unwrap();
        assert!(accel[0].is_nan() && accel[6].is_nan());
        assert!(accel[1..6].iter().all(|a| a.is_finite()));
        // erpm peak 2000 inside region, gnss peak 4.5 inside region
        assert_eq!(analysis.report.max_speed, 4.5);
    }

    #[test]
    fn test_analyze_resistance_and_report() {
        let analysis = analyzer(3).analyze(&raw_log()).unwrap();
        assert!((analysis.resistance.milliohms - 50.0).abs() < 1e-6);
        assert_eq!(analysis.report.max_phase_current, 40.0);
        assert_eq!(analysis.report.max_battery_current, 20.0);
        assert_eq!(analysis.temperatures, TemperatureDeltas::default());
    }

    #[test]
    fn test_analyze_leaves_input_untouched() {
        let raw = raw_log();
        let before = raw.clone();
        analyzer(3).analyze(&raw).unwrap();
        assert_eq!(raw, before);
    }

    #[test]
    fn test_analyze_repeated_edge_timestamp() {
        // row 1 and row 2 share a timestamp; only row 2 is active
        let raw = raw_log();
        let mut time = raw.time().to_vec();
        time[1] = time[2];
        let raw = raw.with_time("ms_today", time).unwrap();

        let analysis = analyzer(3).analyze(&raw).unwrap();
        assert_eq!(analysis.table.len(), 7);
        assert_eq!(analysis.table.column(CURRENT_MOTOR).unwrap()[0], 20.0);
        assert_eq!(analysis.table.time()[0], 0.0);
    }

    #[test]
    fn test_analyze_empty() {
        let empty = SampleTable::new("t", vec![]).unwrap();
        assert!(matches!(analyzer(3).analyze(&empty), Err(AnalysisError::EmptyTable)));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = AnalysisConfig {
            time_unit_divisor: 0.0,
            ..Default::default()
        };
        assert!(RideAnalyzer::new(config, VehicleConfig::default()).is_err());
    }
}
