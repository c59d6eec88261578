//! Layered report settings
//!
//! defaults -> optional TOML/JSON file -> `EV_RIDE_*` environment -> CLI flags

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use ride_analysis::{AnalysisConfig, VehicleConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix, e.g. `EV_RIDE_VEHICLE__POLE_PAIRS=14`
pub const ENV_PREFIX: &str = "EV_RIDE";

/// All settings for one report run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Region detection and windowing
    pub analysis: AnalysisConfig,
    /// Wheel and motor constants
    pub vehicle: VehicleConfig,
    /// Maximum log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Emit logs as JSON lines
    pub log_json: bool,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            analysis: AnalysisConfig::default(),
            vehicle: VehicleConfig::default(),
            log_level: "info".to_string(),
            log_json: false,
        }
    }
}

/// Builder seeded with the built-in defaults
pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(Config::builder().add_source(Config::try_from(&ReportSettings::default())?))
}

/// Load settings from defaults, an optional file and the environment
pub fn load_settings(path: Option<&Path>) -> Result<ReportSettings, ConfigError> {
    let mut builder = defaults()?;
    if let Some(path) = path {
        builder = builder.add_source(File::from(path).required(true));
    }
    builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()
}
