//! Phase machine for one takeoff attempt.

use std::f32::consts::{PI, TAU};

use tracing::{debug, info, warn};
use xplane_fields::{read_aero_forces, read_lat_lon_altitude, read_pitch_roll_headings};
use xplane_fields::{write_joystick_elevator_aileron_rudder, write_throttle_command};
use xplane_protocol::{CommandPacket, DataPacket, Packet};

use crate::config::{ConfigError, TakeoffConfig};

/// Joystick axes accept commands in this range.
const AXIS_MIN: f32 = -1.0;
const AXIS_MAX: f32 = 1.0;

/// Where the controller is in the takeoff sequence.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Phase {
    /// Not flying a takeoff. Telemetry is ignored.
    #[default]
    Idle,
    /// Waiting for the first attitude report to capture the runway heading.
    Started,
    /// Rolling and climbing, holding `target_heading` (radians).
    Throttle { target_heading: f32 },
    /// Climb complete. Telemetry is ignored until the next [`TakeoffController::begin`].
    Finished,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Started => "started",
            Phase::Throttle { .. } => "throttle",
            Phase::Finished => "finished",
        }
    }
}

/// Signed heading error `target - current` in radians, wrapped into (-π, π].
///
/// ```
/// use xplane_autopilot::heading_error;
///
/// // 350° to 010° is a 20° turn to the right, not 340° to the left.
/// let error = heading_error(10f32.to_radians(), 350f32.to_radians());
/// assert!((error - 20f32.to_radians()).abs() < 1e-5);
/// ```
pub fn heading_error(target: f32, current: f32) -> f32 {
    let error = (target - current).rem_euclid(TAU);
    if error > PI { error - TAU } else { error }
}

/// Takeoff sequencer.
///
/// Owns its phase and captured heading. Every call to [`on_tick`] completes
/// before the next may start; the controller never blocks.
///
/// [`on_tick`]: TakeoffController::on_tick
#[derive(Debug, Clone)]
pub struct TakeoffController {
    config: TakeoffConfig,
    brake_release: CommandPacket,
    phase: Phase,
}

impl TakeoffController {
    /// Build an idle controller.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] when the tuning fails validation.
    pub fn new(config: TakeoffConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let brake_release =
            CommandPacket::new(config.brake_command.as_str()).map_err(|e| ConfigError::Invalid {
                field: "brake_command",
                reason: e.to_string(),
            })?;
        Ok(Self {
            config,
            brake_release,
            phase: Phase::Idle,
        })
    }

    pub fn config(&self) -> &TakeoffConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Heading captured on the first tick of the attempt, in radians.
    pub fn target_heading(&self) -> Option<f32> {
        match self.phase {
            Phase::Throttle { target_heading } => Some(target_heading),
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::Started | Phase::Throttle { .. })
    }

    /// Start an attempt. Returns `false` without changing anything when an
    /// attempt is already in progress.
    pub fn begin(&mut self) -> bool {
        if self.is_active() {
            warn!(phase = self.phase.name(), "Takeoff already in progress, ignoring begin");
            return false;
        }
        info!("Takeoff armed, waiting for attitude");
        self.phase = Phase::Started;
        true
    }

    /// Abandon the current attempt, if any. Safe to call in any phase.
    pub fn reset(&mut self) {
        if self.phase != Phase::Idle {
            info!(phase = self.phase.name(), "Takeoff reset");
        }
        self.phase = Phase::Idle;
    }

    /// Evaluate one telemetry tick and return the packets to send, in order.
    pub fn on_tick(&mut self, telemetry: &DataPacket) -> Vec<Packet> {
        match self.phase {
            Phase::Idle | Phase::Finished => Vec::new(),
            Phase::Started => self.start_roll(telemetry),
            Phase::Throttle { target_heading } => self.hold(telemetry, target_heading),
        }
    }

    fn start_roll(&mut self, telemetry: &DataPacket) -> Vec<Packet> {
        let attitude = match read_pitch_roll_headings(telemetry) {
            Ok(attitude) => attitude,
            Err(e) => {
                debug!(error = %e, "No attitude yet, staying armed");
                return Vec::new();
            }
        };
        let target_heading = attitude.true_heading.value;
        if !target_heading.is_finite() {
            warn!(heading = target_heading, "Ignoring non-finite heading");
            return Vec::new();
        }

        let mut throttle = DataPacket::with_capacity(1);
        write_throttle_command(&mut throttle, self.config.full_throttle);

        info!(
            heading_deg = target_heading.to_degrees(),
            throttle = self.config.full_throttle,
            "Brakes released, rolling"
        );
        self.phase = Phase::Throttle { target_heading };
        vec![
            Packet::Command(self.brake_release.clone()),
            Packet::Data(throttle),
        ]
    }

    fn hold(&mut self, telemetry: &DataPacket, target_heading: f32) -> Vec<Packet> {
        let attitude = match read_pitch_roll_headings(telemetry) {
            Ok(attitude) => Some(attitude),
            Err(e) => {
                debug!(error = %e, "No attitude this tick, holding rudder and aileron");
                None
            }
        };

        let rudder = attitude
            .map(|a| heading_error(target_heading, a.true_heading.value))
            .filter(|error| error.is_finite())
            .map(|error| (self.config.rudder_gain * error).clamp(AXIS_MIN, AXIS_MAX));

        let lift = match read_aero_forces(telemetry) {
            Ok(forces) => forces.lift.value,
            Err(e) => {
                debug!(error = %e, "No aero forces this tick, assuming no lift");
                0.0
            }
        };

        let (mut elevator, aileron) = if lift >= self.config.takeoff_lift_n {
            let aileron = attitude
                .map(|a| a.roll.value)
                .filter(|roll| roll.is_finite())
                .map(|roll| (-roll * self.config.aileron_roll_gain).clamp(AXIS_MIN, AXIS_MAX));
            (self.config.rotate_elevator, aileron)
        } else {
            (0.0, Some(0.0))
        };

        match read_lat_lon_altitude(telemetry) {
            Ok(position) if position.altitude_msl.value >= self.config.climb_complete_msl_m => {
                elevator = self.config.level_off_elevator;
                info!(
                    altitude_m = position.altitude_msl.value,
                    "Climb complete, leveling off"
                );
                self.phase = Phase::Finished;
            }
            Ok(_) => {}
            Err(e) => debug!(error = %e, "No position this tick, skipping climb check"),
        }

        debug!(lift_n = lift, elevator, ?aileron, ?rudder, "Joystick command");

        let mut joystick = DataPacket::with_capacity(1);
        write_joystick_elevator_aileron_rudder(&mut joystick, Some(elevator), aileron, rudder);
        vec![Packet::Data(joystick)]
    }
}
