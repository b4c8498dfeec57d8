//! Writers for the groups the host accepts as commands.

use xplane_protocol::{DataPacket, Record};

use crate::catalogue::index;

/// Sentinel telling the host to leave a slot at its current value.
pub const LEAVE_ALONE: f32 = -999.0;

fn slots<const N: usize>(values: [Option<f32>; N]) -> Record {
    let mut record = [LEAVE_ALONE; 8];
    for (slot, value) in record.iter_mut().zip(values) {
        *slot = value.unwrap_or(LEAVE_ALONE);
    }
    record
}

/// Command the throttle of engine 1. Other engines are left alone.
pub fn write_throttle_command(packet: &mut DataPacket, value: f32) {
    write_throttle_commands(packet, [Some(value), None, None, None, None, None, None, None]);
}

/// Command the throttle of each of the 8 engines; `None` leaves an engine
/// alone.
pub fn write_throttle_commands(packet: &mut DataPacket, values: [Option<f32>; 8]) {
    packet.insert(index::THROTTLE_COMMAND, slots(values));
}

/// Command the joystick elevator, aileron and rudder axes, each in -1..=1.
/// `None` leaves an axis alone.
pub fn write_joystick_elevator_aileron_rudder(
    packet: &mut DataPacket,
    elevator: Option<f32>,
    aileron: Option<f32>,
    rudder: Option<f32>,
) {
    packet.insert(index::JOYSTICK, slots([elevator, aileron, rudder]));
}

/// Command gear deployment and brakes, each in 0..=1. `None` leaves a
/// setting alone.
pub fn write_gear_brakes(
    packet: &mut DataPacket,
    gear: Option<f32>,
    wheel_brake: Option<f32>,
    left_brake: Option<f32>,
    right_brake: Option<f32>,
) {
    packet.insert(
        index::GEAR_BRAKES,
        slots([gear, wheel_brake, left_brake, right_brake]),
    );
}
