//! Kind dispatch: header parsing and the [`Packet`] sum type.

use crate::command::CommandPacket;
use crate::data::DataPacket;
use crate::error::{PacketError, PacketResult};
use crate::{CMND_TAG, DATA_TAG, HEADER_LEN, TAG_LEN};

/// Message kinds understood by the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PacketKind {
    /// `DATA`: indexed telemetry records.
    Data,
    /// `CMND`: one command token.
    Command,
}

impl PacketKind {
    /// The 4-byte ASCII tag opening the header.
    pub const fn tag(self) -> [u8; TAG_LEN] {
        match self {
            PacketKind::Data => DATA_TAG,
            PacketKind::Command => CMND_TAG,
        }
    }

    /// Look a tag up. `None` for tags the codec does not handle.
    pub fn from_tag(tag: &[u8; TAG_LEN]) -> Option<Self> {
        match *tag {
            DATA_TAG => Some(PacketKind::Data),
            CMND_TAG => Some(PacketKind::Command),
            _ => None,
        }
    }
}

/// A decoded datagram of either kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Packet {
    Data(DataPacket),
    Command(CommandPacket),
}

impl Packet {
    /// Kind of this packet.
    pub fn kind(&self) -> PacketKind {
        match self {
            Packet::Data(_) => PacketKind::Data,
            Packet::Command(_) => PacketKind::Command,
        }
    }

    /// Encode to a datagram.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Packet::Data(packet) => packet.to_bytes(),
            Packet::Command(packet) => packet.to_bytes(),
        }
    }
}

impl From<DataPacket> for Packet {
    fn from(packet: DataPacket) -> Self {
        Packet::Data(packet)
    }
}

impl From<CommandPacket> for Packet {
    fn from(packet: CommandPacket) -> Self {
        Packet::Command(packet)
    }
}

/// Decode a datagram of any known kind.
///
/// # Errors
///
/// - [`PacketError::MalformedPacket`] for header or length violations.
/// - [`PacketError::UnrecognizedKind`] when the tag names no known kind;
///   callers are expected to drop such datagrams.
pub fn decode(buf: &[u8]) -> PacketResult<Packet> {
    let (kind, body) = split_header(buf)?;
    match kind {
        PacketKind::Data => DataPacket::decode_body(body).map(Packet::Data),
        PacketKind::Command => CommandPacket::decode_body(body).map(Packet::Command),
    }
}

/// Decode a datagram that must be `DATA`.
///
/// # Errors
///
/// See [`DataPacket::from_bytes`].
pub fn decode_data(buf: &[u8]) -> PacketResult<DataPacket> {
    DataPacket::from_bytes(buf)
}

/// Decode a datagram that must be `CMND`.
///
/// # Errors
///
/// See [`CommandPacket::from_bytes`].
pub fn decode_command(buf: &[u8]) -> PacketResult<CommandPacket> {
    CommandPacket::from_bytes(buf)
}

/// Encode a packet of either kind.
pub fn encode(packet: &Packet) -> Vec<u8> {
    packet.to_bytes()
}

/// Split a datagram into its kind and body.
pub(crate) fn split_header(buf: &[u8]) -> PacketResult<(PacketKind, &[u8])> {
    let Some((header, body)) = buf.split_at_checked(HEADER_LEN) else {
        return Err(PacketError::malformed(format!(
            "datagram of {} bytes is shorter than the {HEADER_LEN}-byte header",
            buf.len()
        )));
    };
    let tag: [u8; TAG_LEN] = match header.get(..TAG_LEN).map(<[u8; TAG_LEN]>::try_from) {
        Some(Ok(tag)) => tag,
        _ => return Err(PacketError::malformed("truncated header tag")),
    };
    let kind = PacketKind::from_tag(&tag).ok_or(PacketError::UnrecognizedKind { tag })?;
    Ok((kind, body))
}

/// Write the 5-byte header. The padding byte is always zero.
pub(crate) fn write_header(out: &mut Vec<u8>, kind: PacketKind) {
    out.extend_from_slice(&kind.tag());
    out.push(0);
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn short_buffers_are_malformed() {
        for len in 0..HEADER_LEN {
            let buf = b"DATA\0".get(..len).unwrap_or_default();
            assert!(
                matches!(decode(buf), Err(PacketError::MalformedPacket { .. })),
                "len={len}"
            );
        }
    }

    #[test]
    fn unknown_tag_is_unrecognized() {
        assert_eq!(
            decode(b"RREF\0\x01\x02"),
            Err(PacketError::UnrecognizedKind { tag: *b"RREF" })
        );
    }

    #[test]
    fn dispatches_on_tag() -> TestResult {
        assert_eq!(decode(b"DATA\0")?.kind(), PacketKind::Data);
        assert_eq!(decode(b"CMND\0sim/none")?.kind(), PacketKind::Command);
        Ok(())
    }

    #[test]
    fn tag_lookup_round_trips() {
        for kind in [PacketKind::Data, PacketKind::Command] {
            assert_eq!(PacketKind::from_tag(&kind.tag()), Some(kind));
        }
        assert_eq!(PacketKind::from_tag(b"data"), None);
    }

    #[test]
    fn encode_matches_inner_encoders() -> TestResult {
        let command = CommandPacket::new("sim/none")?;
        assert_eq!(encode(&command.clone().into()), command.to_bytes());
        let data = DataPacket::new();
        assert_eq!(encode(&Packet::from(data.clone())), data.to_bytes());
        Ok(())
    }
}
