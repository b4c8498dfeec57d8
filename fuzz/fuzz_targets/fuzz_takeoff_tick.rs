//! Fuzzes the takeoff controller with arbitrary telemetry sequences.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_takeoff_tick
#![no_main]
use libfuzzer_sys::fuzz_target;
use xplane_autopilot::{TakeoffConfig, TakeoffController};
use xplane_protocol::decode_data;

/// Each chunk is one candidate datagram: header plus up to 4 records.
const CHUNK: usize = 5 + 4 * 36;

fuzz_target!(|data: &[u8]| {
    let Ok(mut controller) = TakeoffController::new(TakeoffConfig::default()) else {
        return;
    };
    controller.begin();
    for chunk in data.chunks(CHUNK) {
        if let Ok(telemetry) = decode_data(chunk) {
            let outbound = controller.on_tick(&telemetry);
            assert!(outbound.len() <= 2);
        }
    }
});
