// src/container.rs

//! On-disk layout for a compressed file.
//!
//! Three fields, concatenated with no separators: 256 big-endian 4-byte
//! counts in ascending byte-value order, one big-endian 4-byte valid
//! bit count, then the packed payload. Nothing else — no magic, no
//! version tag.

use bytemuck::{cast_slice, Pod, Zeroable};
use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::histogram::Histogram;
use crate::utils::error::{HuffError, Result};

/// Byte length of the serialized histogram block.
pub const HISTOGRAM_LEN: usize = 256 * 4;

/// Byte length of the fixed container header (histogram + bit count).
pub const HEADER_LEN: usize = HISTOGRAM_LEN + 4;

/// Big-endian u32 that can be safely cast to/from bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
struct BeU32([u8; 4]);

impl From<u32> for BeU32 {
    fn from(value: u32) -> Self {
        BeU32(value.to_be_bytes())
    }
}

impl From<BeU32> for u32 {
    fn from(value: BeU32) -> Self {
        u32::from_be_bytes(value.0)
    }
}

/// The persisted artifact of one encode: the normalized histogram, the
/// number of meaningful payload bits, and the packed code bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub histogram: Histogram,
    pub bit_count: u32,
    pub payload: Vec<u8>,
}

impl Container {
    /// Serializes header and payload into one buffer.
    ///
    /// Counts are persisted as 32 bits even though they are tallied in
    /// 64; a count that does not fit fails with `FrequencyOverflow`
    /// rather than silently truncating the stored histogram.
    pub fn serialize(&self) -> Result<Vec<u8>> {
        let mut counts = [BeU32([0; 4]); 256];
        for (i, &freq) in self.histogram.as_counts().iter().enumerate() {
            let narrowed = u32::try_from(freq).map_err(|_| HuffError::FrequencyOverflow {
                byte: i as u8,
                count: freq,
            })?;
            counts[i] = narrowed.into();
        }

        let mut out = Vec::with_capacity(HEADER_LEN + self.payload.len());
        out.extend_from_slice(cast_slice(&counts));
        out.write_u32::<BigEndian>(self.bit_count)?;
        out.extend_from_slice(&self.payload);
        Ok(out)
    }

    /// Parses a serialized container, validating the fixed header
    /// length before touching any field. Everything past the header is
    /// payload, taken verbatim.
    pub fn parse(bytes: &[u8]) -> Result<Container> {
        if bytes.len() < HEADER_LEN {
            return Err(HuffError::TruncatedInput {
                expected: HEADER_LEN,
                actual: bytes.len(),
            });
        }

        let be_counts: &[BeU32] = cast_slice(&bytes[..HISTOGRAM_LEN]);
        let mut counts = [0u64; 256];
        for (slot, &be) in counts.iter_mut().zip(be_counts) {
            *slot = u32::from(be) as u64;
        }

        let mut rest = &bytes[HISTOGRAM_LEN..HEADER_LEN];
        let bit_count = rest.read_u32::<BigEndian>()?;

        Ok(Container {
            histogram: Histogram::from_counts(counts),
            bit_count,
            payload: bytes[HEADER_LEN..].to_vec(),
        })
    }
}
