//! End-to-end report on an in-memory log

use approx::assert_relative_eq;
use ride_analysis::{AnalysisConfig, AnalysisError, RideAnalyzer, VehicleConfig};
use ride_log::read_csv;
use ride_report::format_summary;

/// Ten samples at 50 ms: idle, one throttle pull, release, then a second pull
/// that must be ignored.
const LOG: &str = "\
ms_today;current_motor;current_in;input_voltage;erpm;gnss_gVel;temp_motor;temp_mos_max
20000;0.0;0.0;50.0;0;0.0;30.0;28.0
20050;10.0;5.0;49.95;200;0.5;30.0;28.0
20100;30.0;15.0;49.85;600;1.4;30.5;28.5
20150;60.0;30.0;49.70;1200;2.6;31.0;29.0
20200;60.0;30.0;49.70;1800;3.7;31.5;29.0
20250;40.0;20.0;49.80;2200;4.6;32.0;29.5
20300;0.0;0.0;50.0;2300;4.8;32.5;29.5
20350;0.0;0.0;50.0;2250;4.7;32.5;29.5
20400;15.0;8.0;49.92;2300;4.8;32.5;29.5
20450;0.0;0.0;50.0;2280;4.7;32.5;29.5
";

fn analyzer() -> RideAnalyzer {
    let config = AnalysisConfig {
        acceleration_window: 3,
        ..Default::default()
    };
    RideAnalyzer::new(config, VehicleConfig::default()).unwrap()
}

#[test]
fn report_covers_first_pull_only() {
    let raw = read_csv(LOG.as_bytes()).unwrap();
    let analysis = analyzer().analyze(&raw).unwrap();

    assert_eq!(analysis.region.start, 20050.0);
    assert_eq!(analysis.region.end, 20300.0);
    assert_eq!(analysis.table.len(), 6);
    assert_relative_eq!(analysis.table.time()[5], 0.25, epsilon = 1e-12);

    // peak speed is the GNSS peak inside the region
    assert_eq!(analysis.report.max_speed, 4.8);
    assert_eq!(analysis.report.max_phase_current, 60.0);
    assert_relative_eq!(analysis.resistance.milliohms, 10.0, epsilon = 1e-6);
    assert_eq!(analysis.temperatures.motor, Some(2.5));
    assert_eq!(analysis.temperatures.controller, Some(1.5));
}

#[test]
fn summary_text() {
    let raw = read_csv(LOG.as_bytes()).unwrap();
    let analysis = analyzer().analyze(&raw).unwrap();
    let summary = format_summary(&analysis);

    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(lines[0], "max phase current 60.0 A");
    assert_eq!(lines[1], "max battery current 30.0 A");
    assert!(lines[2].starts_with("max acceleration "));
    assert_eq!(lines[3], "max speed 4.80 m/sec");
    assert_eq!(lines[4], "internal resistance 10.0 mOhm");
    assert_eq!(lines[5], "motor temperature rise 2.5 C");
    assert_eq!(lines[6], "controller temperature rise 1.5 C");
}

#[test]
fn log_without_throttle_fails() {
    let idle = "ms_today;current_motor;current_in;input_voltage;erpm;gnss_gVel\n\
                0;0;0;50;0;0\n\
                50;0;0;50;0;0\n";
    let raw = read_csv(idle.as_bytes()).unwrap();
    let err = analyzer().analyze(&raw).unwrap_err();
    assert!(matches!(err, AnalysisError::NoActiveRegion { .. }));
}

#[test]
fn log_without_voltage_names_column() {
    let partial = "ms_today;current_motor;current_in;erpm;gnss_gVel\n\
                   0;0;0;0;0\n\
                   50;20;10;300;1\n\
                   100;0;0;400;1.2\n";
    let raw = read_csv(partial.as_bytes()).unwrap();
    let err = analyzer().analyze(&raw).unwrap_err();
    assert!(matches!(err, AnalysisError::MissingColumn(ref name) if name == "input_voltage"));
}
