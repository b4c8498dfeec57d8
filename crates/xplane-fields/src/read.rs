//! Typed readers for the catalogue groups.

use serde::Serialize;
use xplane_protocol::{DataPacket, PacketResult};

use crate::catalogue::index;
use crate::units::{Quantity, RawUnit};

/// Slot interpretation for groups where host builds disagree.
///
/// `Documented` reads rates as P, Q, R from slots 0, 1, 2 and the two
/// headings from distinct slots. `Legacy` reproduces a host build that
/// reports Q before P and repeats the true heading in place of the magnetic
/// one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotLayout {
    #[default]
    Documented,
    Legacy,
}

/// Index 3.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Speeds {
    pub indicated_airspeed: Quantity,
    pub equivalent_airspeed: Quantity,
    pub true_airspeed: Quantity,
    pub groundspeed: Quantity,
}

/// Index 15, returned in L, M, N order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AngularMoments {
    pub l: Quantity,
    pub m: Quantity,
    pub n: Quantity,
}

/// Index 16: roll, pitch and yaw rates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AngularVelocities {
    pub p: Quantity,
    pub q: Quantity,
    pub r: Quantity,
}

/// Index 17 with slot 2 read as yaw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PitchRollYaw {
    pub pitch: Quantity,
    pub roll: Quantity,
    pub yaw: Quantity,
}

/// Index 17 with both headings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PitchRollHeadings {
    pub pitch: Quantity,
    pub roll: Quantity,
    pub true_heading: Quantity,
    pub magnetic_heading: Quantity,
}

/// Index 18.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AngleOfAttack {
    pub alpha: Quantity,
    pub beta: Quantity,
    pub hpath: Quantity,
    pub vpath: Quantity,
    pub slip: Quantity,
}

/// Index 20.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub latitude: Quantity,
    pub longitude: Quantity,
    pub altitude_msl: Quantity,
    pub altitude_agl: Quantity,
}

/// Index 64.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AeroForces {
    pub lift: Quantity,
    pub drag: Quantity,
    pub side: Quantity,
}

/// Left and right deflection of one physical control surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SurfacePair {
    pub left: Quantity,
    pub right: Quantity,
}

/// Index 16, alternate use: gear deployment and brake settings, 0..=1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GearBrakes {
    pub gear: Quantity,
    pub wheel_brake: Quantity,
    pub left_brake: Quantity,
    pub right_brake: Quantity,
}

fn degrees(raw: f32) -> Quantity {
    RawUnit::Degrees.to_si(raw)
}

fn pair(left: f32, right: f32) -> SurfacePair {
    SurfacePair {
        left: degrees(left),
        right: degrees(right),
    }
}

/// Read indicated, equivalent and true airspeed plus groundspeed.
///
/// # Errors
///
/// `UnknownIndex` when index 3 is absent.
pub fn read_speeds(packet: &DataPacket) -> PacketResult<Speeds> {
    let [ias, eas, tas, gs, ..] = *packet.get(index::SPEEDS)?;
    Ok(Speeds {
        indicated_airspeed: RawUnit::Knots.to_si(ias),
        equivalent_airspeed: RawUnit::Knots.to_si(eas),
        true_airspeed: RawUnit::Knots.to_si(tas),
        groundspeed: RawUnit::Knots.to_si(gs),
    })
}

/// Read the angular moments. The host reports M before L.
///
/// # Errors
///
/// `UnknownIndex` when index 15 is absent.
pub fn read_angular_moments(packet: &DataPacket) -> PacketResult<AngularMoments> {
    let [m, l, n, ..] = *packet.get(index::ANGULAR_MOMENTS)?;
    Ok(AngularMoments {
        l: RawUnit::FootPoundsForce.to_si(l),
        m: RawUnit::FootPoundsForce.to_si(m),
        n: RawUnit::FootPoundsForce.to_si(n),
    })
}

/// Read P, Q, R using the documented slot order.
///
/// # Errors
///
/// `UnknownIndex` when index 16 is absent.
pub fn read_angular_velocities(packet: &DataPacket) -> PacketResult<AngularVelocities> {
    read_angular_velocities_with(packet, SlotLayout::Documented)
}

/// Read P, Q, R using the given slot layout.
///
/// # Errors
///
/// `UnknownIndex` when index 16 is absent.
pub fn read_angular_velocities_with(
    packet: &DataPacket,
    layout: SlotLayout,
) -> PacketResult<AngularVelocities> {
    let [first, second, r, ..] = *packet.get(index::ANGULAR_VELOCITIES)?;
    let (p, q) = match layout {
        SlotLayout::Documented => (first, second),
        SlotLayout::Legacy => (second, first),
    };
    Ok(AngularVelocities {
        p: RawUnit::DegreesPerSecond.to_si(p),
        q: RawUnit::DegreesPerSecond.to_si(q),
        r: RawUnit::DegreesPerSecond.to_si(r),
    })
}

/// Read pitch, roll and yaw.
///
/// # Errors
///
/// `UnknownIndex` when index 17 is absent.
pub fn read_pitch_roll_yaw(packet: &DataPacket) -> PacketResult<PitchRollYaw> {
    let [pitch, roll, yaw, ..] = *packet.get(index::PITCH_ROLL_HEADINGS)?;
    Ok(PitchRollYaw {
        pitch: degrees(pitch),
        roll: degrees(roll),
        yaw: degrees(yaw),
    })
}

/// Read pitch, roll, true heading and magnetic heading.
///
/// # Errors
///
/// `UnknownIndex` when index 17 is absent.
pub fn read_pitch_roll_headings(packet: &DataPacket) -> PacketResult<PitchRollHeadings> {
    read_pitch_roll_headings_with(packet, SlotLayout::Documented)
}

/// Read pitch, roll and headings using the given slot layout.
///
/// # Errors
///
/// `UnknownIndex` when index 17 is absent.
pub fn read_pitch_roll_headings_with(
    packet: &DataPacket,
    layout: SlotLayout,
) -> PacketResult<PitchRollHeadings> {
    let [pitch, roll, true_heading, magnetic, ..] = *packet.get(index::PITCH_ROLL_HEADINGS)?;
    let magnetic_heading = match layout {
        SlotLayout::Documented => magnetic,
        SlotLayout::Legacy => true_heading,
    };
    Ok(PitchRollHeadings {
        pitch: degrees(pitch),
        roll: degrees(roll),
        true_heading: degrees(true_heading),
        magnetic_heading: degrees(magnetic_heading),
    })
}

/// Read angle of attack, side slip and flight-path angles.
///
/// # Errors
///
/// `UnknownIndex` when index 18 is absent.
pub fn read_angle_of_attack_side_slip_paths(packet: &DataPacket) -> PacketResult<AngleOfAttack> {
    let [alpha, beta, hpath, vpath, slip, ..] = *packet.get(index::ANGLE_OF_ATTACK)?;
    Ok(AngleOfAttack {
        alpha: degrees(alpha),
        beta: degrees(beta),
        hpath: degrees(hpath),
        vpath: degrees(vpath),
        slip: degrees(slip),
    })
}

/// Read latitude, longitude and the two altitudes.
///
/// # Errors
///
/// `UnknownIndex` when index 20 is absent.
pub fn read_lat_lon_altitude(packet: &DataPacket) -> PacketResult<Position> {
    let [lat, lon, msl, agl, ..] = *packet.get(index::LAT_LON_ALTITUDE)?;
    Ok(Position {
        latitude: degrees(lat),
        longitude: degrees(lon),
        altitude_msl: RawUnit::Feet.to_si(msl),
        altitude_agl: RawUnit::Feet.to_si(agl),
    })
}

/// Read engine thrust.
///
/// # Errors
///
/// `UnknownIndex` when index 35 is absent.
pub fn read_engine_thrust(packet: &DataPacket) -> PacketResult<Quantity> {
    let [thrust, ..] = *packet.get(index::ENGINE_THRUST)?;
    Ok(RawUnit::PoundsForce.to_si(thrust))
}

/// Read lift, drag and side force.
///
/// # Errors
///
/// `UnknownIndex` when index 64 is absent.
pub fn read_aero_forces(packet: &DataPacket) -> PacketResult<AeroForces> {
    let [lift, drag, side, ..] = *packet.get(index::AERO_FORCES)?;
    Ok(AeroForces {
        lift: RawUnit::PoundsForce.to_si(lift),
        drag: RawUnit::PoundsForce.to_si(drag),
        side: RawUnit::PoundsForce.to_si(side),
    })
}

/// Read the four aileron pairs.
///
/// # Errors
///
/// `UnknownIndex` when index 70 is absent.
pub fn read_aileron_angle(packet: &DataPacket) -> PacketResult<[SurfacePair; 4]> {
    let [l1, r1, l2, r2, l3, r3, l4, r4] = *packet.get(index::AILERON_ANGLE)?;
    Ok([pair(l1, r1), pair(l2, r2), pair(l3, r3), pair(l4, r4)])
}

/// Read the two elevator pairs.
///
/// # Errors
///
/// `UnknownIndex` when index 74 is absent.
pub fn read_elevator_angle(packet: &DataPacket) -> PacketResult<[SurfacePair; 2]> {
    let [l1, r1, l2, r2, ..] = *packet.get(index::ELEVATOR_ANGLE)?;
    Ok([pair(l1, r1), pair(l2, r2)])
}

/// Read the two rudder pairs.
///
/// # Errors
///
/// `UnknownIndex` when index 75 is absent.
pub fn read_rudder_angle(packet: &DataPacket) -> PacketResult<[SurfacePair; 2]> {
    let [l1, r1, l2, r2, ..] = *packet.get(index::RUDDER_ANGLE)?;
    Ok([pair(l1, r1), pair(l2, r2)])
}

/// Read gear and brake state.
///
/// # Errors
///
/// `UnknownIndex` when index 16 is absent.
pub fn read_gear_brakes(packet: &DataPacket) -> PacketResult<GearBrakes> {
    let [gear, wheel, left, right, ..] = *packet.get(index::GEAR_BRAKES)?;
    Ok(GearBrakes {
        gear: RawUnit::Ratio.to_si(gear),
        wheel_brake: RawUnit::Ratio.to_si(wheel),
        left_brake: RawUnit::Ratio.to_si(left),
        right_brake: RawUnit::Ratio.to_si(right),
    })
}
