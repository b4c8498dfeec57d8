//! Codec error taxonomy.

use thiserror::Error;

use crate::data::RecordIndex;

/// Errors returned by packet decoding and record access.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PacketError {
    /// Header or length violation. Never repaired silently.
    #[error("Malformed packet: {reason}")]
    MalformedPacket { reason: String },

    /// The datagram tag names no known message kind. Callers drop the
    /// datagram and carry on.
    #[error("Unrecognized message kind '{}'", .tag.escape_ascii())]
    UnrecognizedKind { tag: [u8; 4] },

    /// The requested record is not present in this packet.
    #[error("Packet does not contain index {0}")]
    UnknownIndex(RecordIndex),

    /// A record write did not carry exactly 8 values.
    #[error("Tried to set values of length {0}, should be 8")]
    InvalidRecordLength(usize),
}

/// Convenience result alias for codec operations.
pub type PacketResult<T> = Result<T, PacketError>;

impl PacketError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        PacketError::MalformedPacket {
            reason: reason.into(),
        }
    }

    /// Whether the caller should log and continue rather than treat the
    /// failure as a protocol violation.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            PacketError::UnrecognizedKind { .. } | PacketError::UnknownIndex(_)
        )
    }
}
