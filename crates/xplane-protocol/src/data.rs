//! `DATA` telemetry packets: a sparse map of record index to 8-float record.

use crate::codec::{PacketKind, split_header, write_header};
use crate::error::{PacketError, PacketResult};
use crate::{RECORD_LEN, VALUES_PER_RECORD};

/// Identifies which physical quantity group a record carries.
///
/// The wire field is a signed 32-bit integer, but the host only ever uses
/// small non-negative indices.
pub type RecordIndex = u16;

/// The 8 values carried by one telemetry record, in protocol order.
pub type Record = [f32; VALUES_PER_RECORD];

/// Telemetry packet: records keyed by index.
///
/// Records keep insertion order so that re-encoding a decoded packet is
/// byte-identical to the datagram it came from. Indices are unique; writing
/// an existing index replaces its record in place.
///
/// Equality compares the index-to-record mapping: insertion order is
/// ignored and values are compared by bit pattern, so a NaN payload equals
/// itself and `0.0` differs from `-0.0`.
#[derive(Debug, Clone, Default)]
pub struct DataPacket {
    records: Vec<(RecordIndex, Record)>,
}

impl DataPacket {
    /// Create an empty packet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty packet with room for `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    /// Get the record for `index`.
    ///
    /// # Errors
    ///
    /// [`PacketError::UnknownIndex`] if the packet does not carry `index`.
    pub fn get(&self, index: RecordIndex) -> PacketResult<&Record> {
        self.position(index)
            .and_then(|pos| self.records.get(pos))
            .map(|(_, record)| record)
            .ok_or(PacketError::UnknownIndex(index))
    }

    /// Set the record for `index` from a slice of values.
    ///
    /// # Errors
    ///
    /// [`PacketError::InvalidRecordLength`] if `values` does not hold exactly
    /// 8 floats. The packet is left untouched in that case.
    pub fn set(&mut self, index: RecordIndex, values: &[f32]) -> PacketResult<()> {
        let Ok(record) = Record::try_from(values) else {
            return Err(PacketError::InvalidRecordLength(values.len()));
        };
        self.insert(index, record);
        Ok(())
    }

    /// Set the record for `index`, replacing any previous record.
    pub fn insert(&mut self, index: RecordIndex, record: Record) {
        match self.position(index).and_then(|pos| self.records.get_mut(pos)) {
            Some((_, slot)) => *slot = record,
            None => self.records.push((index, record)),
        }
    }

    /// Remove and return the record for `index`, if present.
    pub fn remove(&mut self, index: RecordIndex) -> Option<Record> {
        self.position(index)
            .map(|pos| self.records.remove(pos))
            .map(|(_, record)| record)
    }

    /// Whether the packet carries `index`.
    pub fn contains(&self, index: RecordIndex) -> bool {
        self.position(index).is_some()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the packet carries no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Indices present, in insertion order.
    pub fn indices(&self) -> impl Iterator<Item = RecordIndex> + '_ {
        self.records.iter().map(|(index, _)| *index)
    }

    /// Records present, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (RecordIndex, &Record)> + '_ {
        self.records.iter().map(|(index, record)| (*index, record))
    }

    /// Size of the encoded datagram in bytes.
    pub fn encoded_len(&self) -> usize {
        crate::HEADER_LEN + self.records.len() * RECORD_LEN
    }

    /// Decode a `DATA` datagram.
    ///
    /// # Errors
    ///
    /// - [`PacketError::MalformedPacket`] when the buffer is shorter than the
    ///   header, the body is not a whole number of records, an index does not
    ///   fit a [`RecordIndex`], or an index repeats.
    /// - [`PacketError::UnrecognizedKind`] when the tag is not `DATA`.
    pub fn from_bytes(buf: &[u8]) -> PacketResult<Self> {
        let (kind, body) = split_header(buf)?;
        if kind != PacketKind::Data {
            return Err(PacketError::UnrecognizedKind { tag: kind.tag() });
        }
        Self::decode_body(body)
    }

    pub(crate) fn decode_body(body: &[u8]) -> PacketResult<Self> {
        if body.len() % RECORD_LEN != 0 {
            return Err(PacketError::malformed(format!(
                "DATA body of {} bytes is not a multiple of {RECORD_LEN}",
                body.len()
            )));
        }

        // Built locally and only returned whole, so a failure part-way
        // through never leaves a partial packet behind.
        let mut packet = Self::with_capacity(body.len() / RECORD_LEN);
        for chunk in body.chunks_exact(RECORD_LEN) {
            let raw_index = read_i32_le(chunk, 0)
                .ok_or_else(|| PacketError::malformed("truncated record index"))?;
            let Ok(index) = RecordIndex::try_from(raw_index) else {
                return Err(PacketError::malformed(format!(
                    "record index {raw_index} out of range"
                )));
            };
            if packet.contains(index) {
                return Err(PacketError::malformed(format!(
                    "record index {index} repeated"
                )));
            }

            let mut record: Record = [0.0; VALUES_PER_RECORD];
            for (slot, value) in record.iter_mut().enumerate() {
                *value = read_f32_le(chunk, 4 + slot * 4)
                    .ok_or_else(|| PacketError::malformed("truncated record values"))?;
            }
            packet.records.push((index, record));
        }
        Ok(packet)
    }

    /// Encode as a `DATA` datagram: header then one 36-byte group per record.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        write_header(&mut out, PacketKind::Data);
        for (index, record) in &self.records {
            out.extend_from_slice(&i32::from(*index).to_le_bytes());
            for value in record {
                out.extend_from_slice(&value.to_le_bytes());
            }
        }
        out
    }

    fn position(&self, index: RecordIndex) -> Option<usize> {
        self.records.iter().position(|(i, _)| *i == index)
    }
}

impl PartialEq for DataPacket {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().all(|(index, record)| {
                other
                    .get(index)
                    .is_ok_and(|theirs| record.map(f32::to_bits) == theirs.map(f32::to_bits))
            })
    }
}

impl Eq for DataPacket {}

impl FromIterator<(RecordIndex, Record)> for DataPacket {
    fn from_iter<I: IntoIterator<Item = (RecordIndex, Record)>>(iter: I) -> Self {
        let mut packet = Self::new();
        for (index, record) in iter {
            packet.insert(index, record);
        }
        packet
    }
}

fn read_f32_le(data: &[u8], offset: usize) -> Option<f32> {
    data.get(offset..offset + 4)
        .and_then(|b| b.try_into().ok())
        .map(f32::from_le_bytes)
}

fn read_i32_le(data: &[u8], offset: usize) -> Option<i32> {
    data.get(offset..offset + 4)
        .and_then(|b| b.try_into().ok())
        .map(i32::from_le_bytes)
}
