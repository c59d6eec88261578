//! Well-known column names in VESC-style controller logs

/// Index name assigned by the loader when the header leaves it blank
pub const TIME_MS: &str = "time_ms";
/// Index name after conversion to seconds
pub const TIME_SEC: &str = "time_sec";

/// Motor (phase) current, A
pub const CURRENT_MOTOR: &str = "current_motor";
/// Battery (input) current, A
pub const CURRENT_IN: &str = "current_in";
/// Battery (input) voltage, V
pub const INPUT_VOLTAGE: &str = "input_voltage";
/// Electrical RPM
pub const ERPM: &str = "erpm";
/// GNSS ground velocity, m/s
pub const GNSS_VELOCITY: &str = "gnss_gVel";
/// Motor temperature, °C
pub const TEMP_MOTOR: &str = "temp_motor";
/// Hottest MOSFET temperature, °C
pub const TEMP_CONTROLLER: &str = "temp_mos_max";

// Derived columns
pub const SPEED: &str = "speed";
pub const SPEED_MPS: &str = "speed_mps";
pub const ACCELERATION: &str = "acceleration";
pub const RAD_PER_SEC: &str = "rad_per_sec";
