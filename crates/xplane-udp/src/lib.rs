//! UDP transport for the X-Plane data protocol.
//!
//! [`XPlaneLink`] owns one socket and at most one remote host. It turns
//! datagrams into [`Inbound`] values and [`Packet`]s into datagrams, and
//! nothing else; decoding lives in `xplane-protocol` and decisions in
//! `xplane-autopilot`.
//!
//! Two ways to consume telemetry:
//!
//! - [`XPlaneLink::start_monitoring`] spawns a receive task and streams
//!   [`TelemetryFrame`]s over a bounded channel, for display.
//! - [`run_takeoff`] runs one decode, evaluate, encode and send cycle per
//!   datagram, serially, until the controller finishes.
//!
//! [`Packet`]: xplane_protocol::Packet

#![deny(static_mut_refs)]

use std::sync::OnceLock;
use std::time::Instant;

pub mod error;
pub mod link;
pub mod monitor;
pub mod takeoff;

pub use error::{LinkError, LinkResult};
pub use link::{Inbound, XPlaneLink, classify};
pub use monitor::{TelemetryFrame, TelemetryReceiver};
pub use takeoff::{TakeoffSummary, run_takeoff};

/// Port the host listens on, and sends `DATA` from, by default.
pub const DEFAULT_HOST_PORT: u16 = 49000;

/// Largest datagram read from the socket. Larger datagrams are truncated by
/// the OS and then rejected by the decoder.
pub const MAX_DATAGRAM_SIZE: usize = 8192;

static TELEMETRY_EPOCH: OnceLock<Instant> = OnceLock::new();

/// Monotonic timestamp in nanoseconds since the first call in this process.
pub fn telemetry_now_ns() -> u64 {
    let epoch = TELEMETRY_EPOCH.get_or_init(Instant::now);
    let nanos = Instant::now()
        .checked_duration_since(*epoch)
        .map(|duration| duration.as_nanos())
        .unwrap_or(0);
    u64::try_from(nanos).unwrap_or(u64::MAX)
}
