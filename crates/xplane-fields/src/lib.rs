//! Semantic field catalogue for X-Plane `DATA` telemetry.
//!
//! The host reports physical quantities as raw floats in its own units
//! (knots, degrees, feet, pounds-force). This crate owns the table that maps
//! each named quantity group to its record index and slot layout, plus the
//! pure conversions from those raw units to SI.
//!
//! - [`units`]: [`Unit`], [`Quantity`], [`RawUnit`] and conversion constants.
//! - [`catalogue`]: the static [`CATALOGUE`] table and [`read_group`].
//! - [`read`]: typed accessors (`read_speeds`, `read_aero_forces`, ...).
//! - [`write`]: command writers (`write_throttle_command`, ...).
//!
//! Every reader fails with [`PacketError::UnknownIndex`] when the packet does
//! not carry its group. That means "not reported this tick", not a protocol
//! violation.

#![deny(static_mut_refs)]

pub mod catalogue;
pub mod read;
pub mod units;
pub mod write;

pub use catalogue::{Access, CATALOGUE, FieldGroup, NamedQuantity, SlotSpec, group, index, read_group};
pub use read::{
    AeroForces, AngleOfAttack, AngularMoments, AngularVelocities, GearBrakes, PitchRollHeadings,
    PitchRollYaw, Position, SlotLayout, Speeds, SurfacePair, read_aero_forces,
    read_aileron_angle, read_angle_of_attack_side_slip_paths, read_angular_moments,
    read_angular_velocities, read_angular_velocities_with, read_elevator_angle,
    read_engine_thrust, read_gear_brakes, read_lat_lon_altitude, read_pitch_roll_headings,
    read_pitch_roll_headings_with, read_pitch_roll_yaw, read_rudder_angle, read_speeds,
};
pub use units::{Quantity, RawUnit, Unit};
pub use write::{
    LEAVE_ALONE, write_gear_brakes, write_joystick_elevator_aileron_rudder,
    write_throttle_command, write_throttle_commands,
};

pub use xplane_protocol::{DataPacket, PacketError, PacketResult, Record, RecordIndex};
