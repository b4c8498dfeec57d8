//! Fuzzes every catalogue reader against decoded DATA bodies.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_read_groups
#![no_main]
use libfuzzer_sys::fuzz_target;
use xplane_fields::{CATALOGUE, SlotLayout, read_angular_velocities_with, read_group};
use xplane_fields::read_pitch_roll_headings_with;
use xplane_protocol::decode_data;

fuzz_target!(|data: &[u8]| {
    let Ok(packet) = decode_data(data) else {
        return;
    };
    for group in CATALOGUE {
        let _ = read_group(&packet, group);
    }
    for layout in [SlotLayout::Documented, SlotLayout::Legacy] {
        let _ = read_angular_velocities_with(&packet, layout);
        let _ = read_pitch_roll_headings_with(&packet, layout);
    }
});
