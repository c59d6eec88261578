//! Unit conversions from controller rotational rate

use crate::config::VehicleConfig;
use crate::error::AnalysisError;
use crate::metrics::nan_max;
use ride_log::{SampleTable, ERPM, GNSS_VELOCITY};
use std::f64::consts::TAU;
use tracing::warn;

/// Speed estimated from ERPM, scaled so its peak matches the GNSS peak.
///
/// Assumes the ERPM and GNSS velocity maxima happen at about the same time;
/// this is not checked.
pub fn speed_from_erpm(samples: &SampleTable) -> Result<Vec<f64>, AnalysisError> {
    let erpm = samples.column(ERPM)?;
    let gnss = samples.column(GNSS_VELOCITY)?;

    let erpm_max = nan_max(erpm);
    let gnss_max = nan_max(gnss);
    if !(erpm_max.is_finite() && erpm_max != 0.0) {
        warn!("Cannot normalize {}: peak is {}", ERPM, erpm_max);
        return Ok(vec![f64::NAN; erpm.len()]);
    }

    Ok(erpm.iter().map(|r| r / erpm_max * gnss_max).collect())
}

/// Mechanical angular velocity (rad/s) from electrical RPM
pub fn rpm_to_rad_per_sec(
    samples: &SampleTable,
    vehicle: &VehicleConfig,
) -> Result<Vec<f64>, AnalysisError> {
    vehicle.validate()?;
    let pole_pairs = vehicle.pole_pairs as f64;
    Ok(samples
        .column(ERPM)?
        .iter()
        .map(|r| r / pole_pairs / 60.0 * TAU)
        .collect())
}

/// Ground speed (m/s) from ERPM using the wheel and motor constants
pub fn vesc_speed(
    samples: &SampleTable,
    vehicle: &VehicleConfig,
) -> Result<Vec<f64>, AnalysisError> {
    vehicle.validate()?;
    let factor = vehicle.rpm_to_mps();
    Ok(samples.column(ERPM)?.iter().map(|r| r * factor).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ride() -> SampleTable {
        SampleTable::new("time_sec", vec![0.0, 0.1, 0.2, 0.3])
            .unwrap()
            .with_column(ERPM, vec![0.0, 1500.0, 3000.0, 2000.0])
            .unwrap()
            .with_column(GNSS_VELOCITY, vec![0.0, 3.9, 7.3, 8.1])
            .unwrap()
    }

    #[test]
    fn test_speed_peak_matches_gnss() {
        let speed = speed_from_erpm(&ride()).unwrap();
        assert_eq!(nan_max(&speed), 8.1);
        assert_eq!(speed[1], 1500.0 / 3000.0 * 8.1);
    }

    #[test]
    fn test_speed_with_zero_erpm_is_undefined() {
        let table = ride().with_column(ERPM, vec![0.0; 4]).unwrap();
        let speed = speed_from_erpm(&table).unwrap();
        assert!(speed.iter().all(|s| s.is_nan()));
    }

    #[test]
    fn test_speed_requires_gnss() {
        let table = SampleTable::new("t", vec![0.0])
            .unwrap()
            .with_column(ERPM, vec![1.0])
            .unwrap();
        assert!(matches!(
            speed_from_erpm(&table),
            Err(AnalysisError::MissingColumn(name)) if name == GNSS_VELOCITY
        ));
    }

    #[test]
    fn test_rad_per_sec() {
        let vehicle = VehicleConfig {
            wheel_diameter_m: 0.5,
            pole_pairs: 2,
        };
        let rad = rpm_to_rad_per_sec(&ride(), &vehicle).unwrap();
        // 3000 ERPM / 2 pole pairs = 1500 RPM = 25 rev/s
        assert!((rad[2] - 25.0 * TAU).abs() < 1e-9);
    }

    #[test]
    fn test_vesc_speed() {
        let vehicle = VehicleConfig::default();
        let speed = vesc_speed(&ride(), &vehicle).unwrap();
        assert!((speed[2] - 3000.0 * vehicle.rpm_to_mps()).abs() < 1e-12);
        assert_eq!(speed[0], 0.0);
    }

    #[test]
    fn test_invalid_vehicle_rejected() {
        let vehicle = VehicleConfig {
            pole_pairs: 0,
            ..Default::default()
        };
        assert!(rpm_to_rad_per_sec(&ride(), &vehicle).is_err());
    }
}
