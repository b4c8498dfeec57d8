//! End-to-end takeoff sequences driven through decoded telemetry.

use proptest::prelude::*;
use xplane_autopilot::{Phase, TakeoffConfig, TakeoffController};
use xplane_fields::{LEAVE_ALONE, index};
use xplane_protocol::{DataPacket, Packet, PacketKind, decode, encode};

type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Lift in pounds-force comfortably above the 5000 N rotation threshold.
const ROTATION_LIFT_LBF: f32 = 1200.0;
/// Altitude in feet just above the 300 m climb threshold.
const CLIMB_COMPLETE_FT: f32 = 1000.0;

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

struct Tick {
    heading_deg: Option<f32>,
    roll_deg: f32,
    lift_lbf: Option<f32>,
    altitude_ft: Option<f32>,
}

impl Tick {
    fn heading(heading_deg: f32) -> Self {
        Self {
            heading_deg: Some(heading_deg),
            roll_deg: 0.0,
            lift_lbf: None,
            altitude_ft: None,
        }
    }

    /// Encode as the host would send it, then decode again.
    fn to_telemetry(&self) -> Result<DataPacket, Box<dyn std::error::Error>> {
        let mut packet = DataPacket::new();
        if let Some(heading) = self.heading_deg {
            packet.insert(
                index::PITCH_ROLL_HEADINGS,
                [2.0, self.roll_deg, heading, heading + 3.0, 0.0, 0.0, 0.0, 0.0],
            );
        }
        if let Some(lift) = self.lift_lbf {
            packet.insert(index::AERO_FORCES, [lift, 40.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        }
        if let Some(altitude) = self.altitude_ft {
            packet.insert(
                index::LAT_LON_ALTITUDE,
                [47.46, -122.31, altitude, altitude - 430.0, 0.0, 0.0, 0.0, 0.0],
            );
        }
        match decode(&Packet::Data(packet).to_bytes())? {
            Packet::Data(data) => Ok(data),
            Packet::Command(_) => Err("decoded a command from DATA bytes".into()),
        }
    }
}

fn armed() -> Result<TakeoffController, Box<dyn std::error::Error>> {
    let mut controller = TakeoffController::new(TakeoffConfig::default())?;
    assert!(controller.begin());
    Ok(controller)
}

fn joystick(outbound: &[Packet]) -> Result<[f32; 3], Box<dyn std::error::Error>> {
    let [Packet::Data(packet)] = outbound else {
        return Err(format!("expected one joystick packet, got {outbound:?}").into());
    };
    let [elevator, aileron, rudder, ..] = *packet.get(index::JOYSTICK)?;
    Ok([elevator, aileron, rudder])
}

#[test]
fn first_tick_releases_brakes_and_opens_throttle() -> TestResult {
    let mut controller = armed()?;
    let outbound = controller.on_tick(&Tick::heading(90.0).to_telemetry()?);

    let [Packet::Command(brakes), Packet::Data(throttle)] = outbound.as_slice() else {
        return Err(format!("unexpected outbound packets {outbound:?}").into());
    };
    assert_eq!(brakes.command(), "sim/flight_controls/brakes_toggle_regular");
    let [engine_1, engine_2, ..] = *throttle.get(index::THROTTLE_COMMAND)?;
    assert!(close(engine_1, 1.0));
    assert!(close(engine_2, LEAVE_ALONE));

    let target = controller.target_heading().ok_or("no target heading")?;
    assert!(close(target, 90f32.to_radians()));
    assert!(matches!(controller.phase(), Phase::Throttle { .. }));
    Ok(())
}

#[test]
fn outbound_packets_survive_the_wire() -> TestResult {
    let mut controller = armed()?;
    let outbound = controller.on_tick(&Tick::heading(90.0).to_telemetry()?);
    let kinds: Vec<PacketKind> = outbound.iter().map(Packet::kind).collect();
    assert_eq!(kinds, [PacketKind::Command, PacketKind::Data]);
    for packet in &outbound {
        assert_eq!(&decode(&encode(packet))?, packet);
    }
    Ok(())
}

#[test]
fn rudder_steers_back_to_runway_heading() -> TestResult {
    let mut controller = armed()?;
    controller.on_tick(&Tick::heading(90.0).to_telemetry()?);

    let [elevator, aileron, rudder] = joystick(&controller.on_tick(&Tick::heading(80.0).to_telemetry()?))?;
    assert!(close(rudder, 5.0 * 10f32.to_radians()));
    assert!(rudder > 0.0);
    assert!(close(elevator, 0.0));
    assert!(close(aileron, 0.0));

    let [_, _, rudder] = joystick(&controller.on_tick(&Tick::heading(95.0).to_telemetry()?))?;
    assert!(close(rudder, -5.0 * 5f32.to_radians()));
    Ok(())
}

#[test]
fn gentle_tuning_uses_lower_gain_and_steeper_rotation() -> TestResult {
    let mut controller = TakeoffController::new(TakeoffConfig::gentle())?;
    controller.begin();
    controller.on_tick(&Tick::heading(90.0).to_telemetry()?);

    let tick = Tick {
        lift_lbf: Some(ROTATION_LIFT_LBF),
        ..Tick::heading(80.0)
    };
    let [elevator, _, rudder] = joystick(&controller.on_tick(&tick.to_telemetry()?))?;
    assert!(close(rudder, 3.0 * 10f32.to_radians()));
    assert!(close(elevator, 0.3));
    Ok(())
}

#[test]
fn lift_rotates_and_counters_roll() -> TestResult {
    let mut controller = armed()?;
    controller.on_tick(&Tick::heading(90.0).to_telemetry()?);

    let tick = Tick {
        roll_deg: 10.0,
        lift_lbf: Some(ROTATION_LIFT_LBF),
        altitude_ft: Some(500.0),
        ..Tick::heading(90.0)
    };
    let [elevator, aileron, rudder] = joystick(&controller.on_tick(&tick.to_telemetry()?))?;
    assert!(close(elevator, 0.25));
    assert!(close(aileron, -10f32.to_radians()));
    assert!(close(rudder, 0.0));
    assert!(controller.is_active());
    Ok(())
}

#[test]
fn lift_below_threshold_keeps_elevator_neutral() -> TestResult {
    let mut controller = armed()?;
    controller.on_tick(&Tick::heading(90.0).to_telemetry()?);

    let tick = Tick {
        roll_deg: 10.0,
        lift_lbf: Some(1000.0),
        ..Tick::heading(90.0)
    };
    let [elevator, aileron, _] = joystick(&controller.on_tick(&tick.to_telemetry()?))?;
    assert!(close(elevator, 0.0));
    assert!(close(aileron, 0.0));
    Ok(())
}

#[test]
fn climb_complete_levels_off_and_finishes() -> TestResult {
    let mut controller = armed()?;
    controller.on_tick(&Tick::heading(90.0).to_telemetry()?);

    let tick = Tick {
        lift_lbf: Some(ROTATION_LIFT_LBF),
        altitude_ft: Some(CLIMB_COMPLETE_FT),
        ..Tick::heading(90.0)
    };
    let [elevator, _, _] = joystick(&controller.on_tick(&tick.to_telemetry()?))?;
    assert!(close(elevator, -0.1));
    assert_eq!(controller.phase(), Phase::Finished);
    assert!(!controller.is_active());

    assert!(controller.on_tick(&tick.to_telemetry()?).is_empty());
    assert_eq!(controller.phase(), Phase::Finished);
    assert!(controller.target_heading().is_none());
    Ok(())
}

#[test]
fn finished_controller_can_fly_again() -> TestResult {
    let mut controller = armed()?;
    controller.on_tick(&Tick::heading(90.0).to_telemetry()?);
    let tick = Tick {
        altitude_ft: Some(CLIMB_COMPLETE_FT),
        ..Tick::heading(90.0)
    };
    controller.on_tick(&tick.to_telemetry()?);
    assert_eq!(controller.phase(), Phase::Finished);

    assert!(controller.begin());
    let outbound = controller.on_tick(&Tick::heading(270.0).to_telemetry()?);
    assert_eq!(outbound.len(), 2);
    let target = controller.target_heading().ok_or("no target heading")?;
    assert!(close(target, 270f32.to_radians()));
    Ok(())
}

#[test]
fn missing_fields_do_not_stall_the_sequence() -> TestResult {
    let mut controller = armed()?;

    let blind = Tick {
        heading_deg: None,
        roll_deg: 0.0,
        lift_lbf: Some(ROTATION_LIFT_LBF),
        altitude_ft: Some(100.0),
    };
    assert!(controller.on_tick(&blind.to_telemetry()?).is_empty());
    assert_eq!(controller.phase(), Phase::Started);

    controller.on_tick(&Tick::heading(90.0).to_telemetry()?);

    let [elevator, aileron, rudder] = joystick(&controller.on_tick(&blind.to_telemetry()?))?;
    assert!(close(elevator, 0.25));
    assert!(close(aileron, LEAVE_ALONE));
    assert!(close(rudder, LEAVE_ALONE));

    let tick = Tick {
        altitude_ft: Some(CLIMB_COMPLETE_FT),
        ..Tick::heading(90.0)
    };
    controller.on_tick(&tick.to_telemetry()?);
    assert_eq!(controller.phase(), Phase::Finished);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_controller_emits_bounded_commands(
        ticks in prop::collection::vec(
            (
                prop::option::of(-720.0f32..720.0),
                -90.0f32..90.0,
                prop::option::of(0.0f32..5000.0),
                prop::option::of(-100.0f32..2000.0),
            ),
            1..40,
        ),
    ) {
        let mut controller = TakeoffController::new(TakeoffConfig::default())
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        controller.begin();

        for (heading_deg, roll_deg, lift_lbf, altitude_ft) in ticks {
            let tick = Tick { heading_deg, roll_deg, lift_lbf, altitude_ft };
            let telemetry = tick.to_telemetry().map_err(|e| TestCaseError::fail(e.to_string()))?;
            let was_throttle = matches!(controller.phase(), Phase::Throttle { .. });
            let outbound = controller.on_tick(&telemetry);

            if was_throttle {
                let axes = joystick(&outbound).map_err(|e| TestCaseError::fail(e.to_string()))?;
                for axis in axes {
                    prop_assert!((-1.0..=1.0).contains(&axis) || close(axis, LEAVE_ALONE));
                }
            } else {
                prop_assert!(outbound.len() <= 2);
            }
        }
    }
}
