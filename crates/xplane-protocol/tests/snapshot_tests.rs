//! Wire-format snapshots for the datagrams the controller sends.
//!
//! Any change to these hex dumps is a wire-format regression.

use insta::assert_snapshot;
use xplane_protocol::{CommandPacket, DataPacket};

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn snapshot_full_throttle_datagram() {
    let mut packet = DataPacket::new();
    packet.insert(25, [1.0, -999.0, -999.0, -999.0, -999.0, -999.0, -999.0, -999.0]);
    assert_snapshot!(
        hex(&packet.to_bytes()),
        @"44 41 54 41 00 19 00 00 00 00 00 80 3f 00 c0 79 c4 00 c0 79 c4 00 c0 79 c4 00 c0 79 c4 00 c0 79 c4 00 c0 79 c4 00 c0 79 c4"
    );
}

#[test]
fn snapshot_brake_toggle_datagram() -> TestResult {
    let packet = CommandPacket::new("sim/flight_controls/brakes_toggle_regular")?;
    assert_snapshot!(
        String::from_utf8_lossy(&packet.to_bytes()).escape_debug().to_string(),
        @r"CMND\0sim/flight_controls/brakes_toggle_regular"
    );
    Ok(())
}
