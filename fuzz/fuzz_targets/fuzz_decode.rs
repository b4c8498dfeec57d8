//! Fuzzes datagram decoding and re-encoding.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_decode
#![no_main]
use libfuzzer_sys::fuzz_target;
use xplane_protocol::{decode, encode};

fuzz_target!(|data: &[u8]| {
    // Errors are expected, panics are not. Whatever decodes must survive a
    // second encode/decode pass unchanged.
    if let Ok(packet) = decode(data) {
        let bytes = encode(&packet);
        let again = decode(&bytes).map(|p| encode(&p));
        assert_eq!(again.as_deref().ok(), Some(bytes.as_slice()));
    }
});
