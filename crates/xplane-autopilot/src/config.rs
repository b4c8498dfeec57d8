//! Tuning for the takeoff sequence.
//!
//! Historical tunings disagree on the rudder gain and the rotation elevator,
//! so both live here as named values instead of literals. The defaults are
//! the heading-hold variant with lift-triggered rotation and an
//! altitude-triggered finish; [`TakeoffConfig::gentle`] is the softer one.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Command that toggles the regular wheel brakes.
pub const BRAKES_TOGGLE_COMMAND: &str = "sim/flight_controls/brakes_toggle_regular";

pub const DEFAULT_RUDDER_GAIN: f32 = 5.0;
pub const GENTLE_RUDDER_GAIN: f32 = 3.0;
pub const DEFAULT_AILERON_ROLL_GAIN: f32 = 1.0;
/// Lift at which the aircraft is rotated (N).
pub const DEFAULT_TAKEOFF_LIFT_N: f32 = 5000.0;
pub const DEFAULT_ROTATE_ELEVATOR: f32 = 0.25;
pub const GENTLE_ROTATE_ELEVATOR: f32 = 0.3;
/// Mean-sea-level altitude at which the climb is complete (m).
pub const DEFAULT_CLIMB_COMPLETE_MSL_M: f32 = 300.0;
pub const DEFAULT_LEVEL_OFF_ELEVATOR: f32 = -0.1;
pub const DEFAULT_FULL_THROTTLE: f32 = 1.0;

/// Errors raised while loading or validating a tuning.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("Failed to parse tuning: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Failed to read tuning file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Gains, thresholds and command values for one takeoff attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TakeoffConfig {
    /// Rudder deflection per radian of heading error.
    pub rudder_gain: f32,
    /// Aileron deflection per radian of roll, applied against the roll.
    pub aileron_roll_gain: f32,
    /// Lift (N) at or above which the aircraft rotates.
    pub takeoff_lift_n: f32,
    /// Elevator command while rotating and climbing.
    pub rotate_elevator: f32,
    /// Mean-sea-level altitude (m) at or above which the sequence finishes.
    pub climb_complete_msl_m: f32,
    /// Elevator command sent on the finishing tick.
    pub level_off_elevator: f32,
    /// Throttle command sent when the roll starts.
    pub full_throttle: f32,
    /// Command sent to release the parking brake.
    pub brake_command: String,
}

impl Default for TakeoffConfig {
    fn default() -> Self {
        Self {
            rudder_gain: DEFAULT_RUDDER_GAIN,
            aileron_roll_gain: DEFAULT_AILERON_ROLL_GAIN,
            takeoff_lift_n: DEFAULT_TAKEOFF_LIFT_N,
            rotate_elevator: DEFAULT_ROTATE_ELEVATOR,
            climb_complete_msl_m: DEFAULT_CLIMB_COMPLETE_MSL_M,
            level_off_elevator: DEFAULT_LEVEL_OFF_ELEVATOR,
            full_throttle: DEFAULT_FULL_THROTTLE,
            brake_command: BRAKES_TOGGLE_COMMAND.to_string(),
        }
    }
}

impl TakeoffConfig {
    /// Softer tuning: lower rudder gain, steeper rotation.
    pub fn gentle() -> Self {
        Self {
            rudder_gain: GENTLE_RUDDER_GAIN,
            rotate_elevator: GENTLE_ROTATE_ELEVATOR,
            ..Self::default()
        }
    }

    /// Parse and validate a YAML tuning. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] for malformed YAML or unknown keys,
    /// [`ConfigError::Invalid`] for out-of-range values.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML tuning file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] when the file cannot be read, otherwise as
    /// [`TakeoffConfig::from_yaml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// Check every value is finite and in range.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("rudder_gain", self.rudder_gain)?;
        non_negative("aileron_roll_gain", self.aileron_roll_gain)?;
        positive("takeoff_lift_n", self.takeoff_lift_n)?;
        positive("climb_complete_msl_m", self.climb_complete_msl_m)?;
        within("rotate_elevator", self.rotate_elevator, -1.0, 1.0)?;
        within("level_off_elevator", self.level_off_elevator, -1.0, 1.0)?;
        within("full_throttle", self.full_throttle, 0.0, 1.0)?;

        if self.brake_command.is_empty() || self.brake_command.contains(char::is_whitespace) {
            return Err(ConfigError::Invalid {
                field: "brake_command",
                reason: format!("'{}' is not a command path", self.brake_command),
            });
        }
        Ok(())
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("{value} is not finite"),
        })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(ConfigError::Invalid {
            field,
            reason: format!("{value} is negative"),
        });
    }
    Ok(())
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value <= 0.0 {
        return Err(ConfigError::Invalid {
            field,
            reason: format!("{value} must be greater than zero"),
        });
    }
    Ok(())
}

fn within(field: &'static str, value: f32, min: f32, max: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if !(min..=max).contains(&value) {
        return Err(ConfigError::Invalid {
            field,
            reason: format!("{value} is out of range [{min}, {max}]"),
        });
    }
    Ok(())
}
