//! EV Ride Report
//!
//! Command-line front end: loads one controller log, runs the ride analysis
//! and prints the maxima report. Derived columns can be exported for
//! external plotting.

use anyhow::Context;
use clap::Parser;
use ride_analysis::{RideAnalysis, RideAnalyzer};
use ride_log::{load_csv, save_csv};
use std::fmt;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod settings;

pub use settings::{defaults, load_settings, ReportSettings, ENV_PREFIX};

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(
    name = "ev-ride-report",
    version,
    about = "Acceleration, torque-speed and internal resistance from a controller log"
)]
pub struct Cli {
    /// `;`-separated controller log
    pub input: PathBuf,

    /// Settings file (TOML, JSON or YAML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Motor current threshold for the throttle region (A)
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Samples per acceleration window
    #[arg(short, long)]
    pub window: Option<usize>,

    /// Motor pole pairs
    #[arg(long)]
    pub pole_pairs: Option<u32>,

    /// Wheel diameter (m)
    #[arg(long)]
    pub wheel_diameter: Option<f64>,

    /// Write the derived throttle-region table here
    #[arg(long)]
    pub export_csv: Option<PathBuf>,

    /// Write the analysis summary as JSON here
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Apply command-line overrides on top of loaded settings
    pub fn apply(&self, settings: &mut ReportSettings) {
        if let Some(threshold) = self.threshold {
            settings.analysis.threshold = threshold;
        }
        if let Some(window) = self.window {
            settings.analysis.acceleration_window = window;
        }
        if let Some(pole_pairs) = self.pole_pairs {
            settings.vehicle.pole_pairs = pole_pairs;
        }
        if let Some(diameter) = self.wheel_diameter {
            settings.vehicle.wheel_diameter_m = diameter;
        }
        if self.verbose {
            settings.log_level = "debug".to_string();
        }
    }
}

/// Initialize logging
pub fn init_logging(level: Level, json: bool) -> anyhow::Result<()> {
    let result = if json {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_target(true)
            .json()
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    } else {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    };
    result.context("Failed to set tracing subscriber")
}

/// Human-readable summary: maxima report, resistance and temperature rise
pub struct Summary<'a>(pub &'a RideAnalysis);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let analysis = self.0;
        writeln!(f, "{}", analysis.report)?;
        write!(f, "internal resistance {:.1} mOhm", analysis.resistance.milliohms)?;
        if let Some(delta) = analysis.temperatures.motor {
            write!(f, "\nmotor temperature rise {:.1} C", delta)?;
        }
        if let Some(delta) = analysis.temperatures.controller {
            write!(f, "\ncontroller temperature rise {:.1} C", delta)?;
        }
        Ok(())
    }
}

/// Render the summary as a string
pub fn format_summary(analysis: &RideAnalysis) -> String {
    Summary(analysis).to_string()
}

/// Run one report
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut settings = load_settings(cli.config.as_deref()).context("Failed to load settings")?;
    cli.apply(&mut settings);

    let level = Level::from_str(&settings.log_level)
        .with_context(|| format!("Invalid log level {:?}", settings.log_level))?;
    init_logging(level, settings.log_json)?;

    info!("=== EV Ride Report v{} ===", env!("CARGO_PKG_VERSION"));

    let analyzer = RideAnalyzer::new(settings.analysis, settings.vehicle)?;
    let raw = load_csv(&cli.input)
        .with_context(|| format!("Failed to load {}", cli.input.display()))?;
    let analysis = analyzer
        .analyze(&raw)
        .with_context(|| format!("Failed to analyse {}", cli.input.display()))?;

    println!("{}", format_summary(&analysis));

    if let Some(path) = &cli.export_csv {
        save_csv(&analysis.table, path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    if let Some(path) = &cli.json {
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &analysis)?;
        info!("Wrote summary to {}", path.display());
    }

    Ok(())
}
