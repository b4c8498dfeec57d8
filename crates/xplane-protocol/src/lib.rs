//! X-Plane UDP protocol: `DATA` telemetry and `CMND` command datagrams.
//!
//! This crate is intentionally I/O-free. It provides pure types and
//! functions that turn raw datagrams into packets and back, so the codec can
//! be tested and fuzzed without a simulator or a socket.
//!
//! ## Wire format
//!
//! Every datagram starts with a 5-byte header: a 4-byte ASCII kind tag
//! followed by one padding byte.
//!
//! | Kind   | Body                                                               |
//! |--------|--------------------------------------------------------------------|
//! | `DATA` | N × 36-byte records: `i32` LE index, then 8 × `f32` LE values      |
//! | `CMND` | command token as text, filling the rest of the datagram            |
//!
//! There is no checksum and no length prefix; the record count of a `DATA`
//! datagram is implied by its size.
//!
//! ```
//! use xplane_protocol::{DataPacket, Packet, decode};
//!
//! let mut packet = DataPacket::new();
//! packet.insert(25, [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
//! let bytes = packet.to_bytes();
//! assert_eq!(bytes.len(), 5 + 36);
//! assert!(matches!(decode(&bytes), Ok(Packet::Data(p)) if p == packet));
//! ```

#![deny(static_mut_refs)]

pub mod codec;
pub mod command;
pub mod data;
pub mod error;

pub use codec::{Packet, PacketKind, decode, decode_command, decode_data, encode};
pub use command::CommandPacket;
pub use data::{DataPacket, Record, RecordIndex};
pub use error::{PacketError, PacketResult};

/// Header length shared by every datagram kind: 4-byte tag plus padding.
pub const HEADER_LEN: usize = 5;
/// Length of the ASCII kind tag at the start of the header.
pub const TAG_LEN: usize = 4;
/// Number of `f32` values carried by one telemetry record.
pub const VALUES_PER_RECORD: usize = 8;
/// Encoded size of one telemetry record: `i32` index plus 8 × `f32`.
pub const RECORD_LEN: usize = 4 + VALUES_PER_RECORD * 4;

/// Tag of telemetry datagrams.
pub const DATA_TAG: [u8; TAG_LEN] = *b"DATA";
/// Tag of command datagrams.
pub const CMND_TAG: [u8; TAG_LEN] = *b"CMND";
