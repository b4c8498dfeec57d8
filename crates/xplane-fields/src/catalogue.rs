//! Static table of named quantity groups.
//!
//! One entry per group: record index, direction, and the slots that carry
//! meaning together with their raw unit. Slots not listed are unused by the
//! group. The indices must match the host's data-output table exactly.

use serde::Serialize;
use xplane_protocol::{DataPacket, PacketResult, RecordIndex};

use crate::units::{Quantity, RawUnit};

/// Record indices used by the host.
pub mod index {
    use xplane_protocol::RecordIndex;

    pub const SPEEDS: RecordIndex = 3;
    pub const JOYSTICK: RecordIndex = 8;
    pub const ANGULAR_MOMENTS: RecordIndex = 15;
    pub const ANGULAR_VELOCITIES: RecordIndex = 16;
    /// Alternate use of the angular-velocity index for gear and brake state.
    /// Which meaning applies depends on the host's data-output selection.
    pub const GEAR_BRAKES: RecordIndex = 16;
    pub const PITCH_ROLL_HEADINGS: RecordIndex = 17;
    pub const ANGLE_OF_ATTACK: RecordIndex = 18;
    pub const LAT_LON_ALTITUDE: RecordIndex = 20;
    pub const THROTTLE_COMMAND: RecordIndex = 25;
    pub const ENGINE_THRUST: RecordIndex = 35;
    pub const AERO_FORCES: RecordIndex = 64;
    pub const AILERON_ANGLE: RecordIndex = 70;
    pub const ELEVATOR_ANGLE: RecordIndex = 74;
    pub const RUDDER_ANGLE: RecordIndex = 75;
}

/// Direction a group travels in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Access {
    /// Reported by the host.
    Read,
    /// Only meaningful when sent to the host.
    Write,
    /// Reported by the host and accepted back as a command.
    ReadWrite,
}

impl Access {
    pub const fn readable(self) -> bool {
        matches!(self, Access::Read | Access::ReadWrite)
    }
}

/// One meaningful slot of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotSpec {
    pub slot: usize,
    pub name: &'static str,
    pub raw: RawUnit,
}

/// A named group of quantities sharing one record index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldGroup {
    pub name: &'static str,
    pub index: RecordIndex,
    pub access: Access,
    pub slots: &'static [SlotSpec],
}

/// A converted slot value paired with its name.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NamedQuantity {
    pub name: &'static str,
    #[serde(flatten)]
    pub quantity: Quantity,
}

const fn slot(slot: usize, name: &'static str, raw: RawUnit) -> SlotSpec {
    SlotSpec { slot, name, raw }
}

/// Every group the catalogue knows, in dashboard order.
pub static CATALOGUE: &[FieldGroup] = &[
    FieldGroup {
        name: "speeds",
        index: index::SPEEDS,
        access: Access::Read,
        slots: &[
            slot(0, "indicated_airspeed", RawUnit::Knots),
            slot(1, "equivalent_airspeed", RawUnit::Knots),
            slot(2, "true_airspeed", RawUnit::Knots),
            slot(3, "groundspeed", RawUnit::Knots),
        ],
    },
    FieldGroup {
        name: "angular_moments",
        index: index::ANGULAR_MOMENTS,
        access: Access::Read,
        slots: &[
            slot(0, "m", RawUnit::FootPoundsForce),
            slot(1, "l", RawUnit::FootPoundsForce),
            slot(2, "n", RawUnit::FootPoundsForce),
        ],
    },
    FieldGroup {
        name: "angular_velocities",
        index: index::ANGULAR_VELOCITIES,
        access: Access::Read,
        slots: &[
            slot(0, "p", RawUnit::DegreesPerSecond),
            slot(1, "q", RawUnit::DegreesPerSecond),
            slot(2, "r", RawUnit::DegreesPerSecond),
        ],
    },
    FieldGroup {
        name: "pitch_roll_headings",
        index: index::PITCH_ROLL_HEADINGS,
        access: Access::Read,
        slots: &[
            slot(0, "pitch", RawUnit::Degrees),
            slot(1, "roll", RawUnit::Degrees),
            slot(2, "true_heading", RawUnit::Degrees),
            slot(3, "magnetic_heading", RawUnit::Degrees),
        ],
    },
    FieldGroup {
        name: "angle_of_attack",
        index: index::ANGLE_OF_ATTACK,
        access: Access::Read,
        slots: &[
            slot(0, "alpha", RawUnit::Degrees),
            slot(1, "beta", RawUnit::Degrees),
            slot(2, "hpath", RawUnit::Degrees),
            slot(3, "vpath", RawUnit::Degrees),
            slot(4, "slip", RawUnit::Degrees),
        ],
    },
    FieldGroup {
        name: "lat_lon_altitude",
        index: index::LAT_LON_ALTITUDE,
        access: Access::Read,
        slots: &[
            slot(0, "latitude", RawUnit::Degrees),
            slot(1, "longitude", RawUnit::Degrees),
            slot(2, "altitude_msl", RawUnit::Feet),
            slot(3, "altitude_agl", RawUnit::Feet),
        ],
    },
    FieldGroup {
        name: "engine_thrust",
        index: index::ENGINE_THRUST,
        access: Access::Read,
        slots: &[slot(0, "thrust", RawUnit::PoundsForce)],
    },
    FieldGroup {
        name: "aero_forces",
        index: index::AERO_FORCES,
        access: Access::Read,
        slots: &[
            slot(0, "lift", RawUnit::PoundsForce),
            slot(1, "drag", RawUnit::PoundsForce),
            slot(2, "side", RawUnit::PoundsForce),
        ],
    },
    FieldGroup {
        name: "aileron_angle",
        index: index::AILERON_ANGLE,
        access: Access::Read,
        slots: &[
            slot(0, "aileron_1_left", RawUnit::Degrees),
            slot(1, "aileron_1_right", RawUnit::Degrees),
            slot(2, "aileron_2_left", RawUnit::Degrees),
            slot(3, "aileron_2_right", RawUnit::Degrees),
            slot(4, "aileron_3_left", RawUnit::Degrees),
            slot(5, "aileron_3_right", RawUnit::Degrees),
            slot(6, "aileron_4_left", RawUnit::Degrees),
            slot(7, "aileron_4_right", RawUnit::Degrees),
        ],
    },
    FieldGroup {
        name: "elevator_angle",
        index: index::ELEVATOR_ANGLE,
        access: Access::Read,
        slots: &[
            slot(0, "elevator_1_left", RawUnit::Degrees),
            slot(1, "elevator_1_right", RawUnit::Degrees),
            slot(2, "elevator_2_left", RawUnit::Degrees),
            slot(3, "elevator_2_right", RawUnit::Degrees),
        ],
    },
    FieldGroup {
        name: "rudder_angle",
        index: index::RUDDER_ANGLE,
        access: Access::Read,
        slots: &[
            slot(0, "rudder_1_left", RawUnit::Degrees),
            slot(1, "rudder_1_right", RawUnit::Degrees),
            slot(2, "rudder_2_left", RawUnit::Degrees),
            slot(3, "rudder_2_right", RawUnit::Degrees),
        ],
    },
    FieldGroup {
        name: "gear_brakes",
        index: index::GEAR_BRAKES,
        access: Access::ReadWrite,
        slots: &[
            slot(0, "gear", RawUnit::Ratio),
            slot(1, "wheel_brake", RawUnit::Ratio),
            slot(2, "left_brake", RawUnit::Ratio),
            slot(3, "right_brake", RawUnit::Ratio),
        ],
    },
    FieldGroup {
        name: "joystick",
        index: index::JOYSTICK,
        access: Access::Write,
        slots: &[
            slot(0, "elevator", RawUnit::Ratio),
            slot(1, "aileron", RawUnit::Ratio),
            slot(2, "rudder", RawUnit::Ratio),
        ],
    },
    FieldGroup {
        name: "throttle_command",
        index: index::THROTTLE_COMMAND,
        access: Access::Write,
        slots: &[
            slot(0, "throttle_1", RawUnit::Ratio),
            slot(1, "throttle_2", RawUnit::Ratio),
            slot(2, "throttle_3", RawUnit::Ratio),
            slot(3, "throttle_4", RawUnit::Ratio),
            slot(4, "throttle_5", RawUnit::Ratio),
            slot(5, "throttle_6", RawUnit::Ratio),
            slot(6, "throttle_7", RawUnit::Ratio),
            slot(7, "throttle_8", RawUnit::Ratio),
        ],
    },
];

/// Find a group by name.
pub fn group(name: &str) -> Option<&'static FieldGroup> {
    CATALOGUE.iter().find(|g| g.name == name)
}

/// Read every meaningful slot of `group` from `packet`, converted to SI.
///
/// # Errors
///
/// [`xplane_protocol::PacketError::UnknownIndex`] when the packet does not
/// carry the group's index.
pub fn read_group(packet: &DataPacket, group: &FieldGroup) -> PacketResult<Vec<NamedQuantity>> {
    let record = packet.get(group.index)?;
    Ok(group
        .slots
        .iter()
        .filter_map(|spec| {
            record.get(spec.slot).map(|raw| NamedQuantity {
                name: spec.name,
                quantity: spec.raw.to_si(*raw),
            })
        })
        .collect())
}
