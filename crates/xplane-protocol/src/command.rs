//! `CMND` packets: a single simulator command token.

use crate::codec::{PacketKind, split_header, write_header};
use crate::error::{PacketError, PacketResult};

/// Command packet naming one simulator action, e.g.
/// `sim/flight_controls/brakes_toggle_regular`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommandPacket {
    command: String,
}

impl CommandPacket {
    /// Create a command packet.
    ///
    /// # Errors
    ///
    /// [`PacketError::MalformedPacket`] for an empty token.
    pub fn new(command: impl Into<String>) -> PacketResult<Self> {
        let command = command.into();
        if command.is_empty() {
            return Err(PacketError::malformed("empty command token"));
        }
        Ok(Self { command })
    }

    /// The command token.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Decode a `CMND` datagram. The body is the token verbatim, up to the
    /// end of the buffer.
    ///
    /// # Errors
    ///
    /// - [`PacketError::MalformedPacket`] when the buffer is shorter than the
    ///   header, the token is empty, or the token is not valid UTF-8.
    /// - [`PacketError::UnrecognizedKind`] when the tag is not `CMND`.
    pub fn from_bytes(buf: &[u8]) -> PacketResult<Self> {
        let (kind, body) = split_header(buf)?;
        if kind != PacketKind::Command {
            return Err(PacketError::UnrecognizedKind { tag: kind.tag() });
        }
        Self::decode_body(body)
    }

    pub(crate) fn decode_body(body: &[u8]) -> PacketResult<Self> {
        let Ok(text) = std::str::from_utf8(body) else {
            return Err(PacketError::malformed("command token is not valid UTF-8"));
        };
        Self::new(text)
    }

    /// Encode as a `CMND` datagram: header then the token, no terminator.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(crate::HEADER_LEN + self.command.len());
        write_header(&mut out, PacketKind::Command);
        out.extend_from_slice(self.command.as_bytes());
        out
    }
}
