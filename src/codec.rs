// src/codec.rs

//! The end-to-end encode and decode pipelines, plus thin file-level
//! wrappers around them.

use std::path::Path;

use log::debug;

use crate::bits;
use crate::container::Container;
use crate::histogram::Histogram;
use crate::tree::{CodeTable, HuffmanNode};
use crate::utils::error::{HuffError, Result};

/// Compresses `raw` into a self-describing container.
///
/// Pipeline: frequency scan, degenerate-input normalization, tree
/// build, code derivation, bit packing, container serialization.
pub fn encode(raw: &[u8]) -> Result<Vec<u8>> {
    let mut histogram = Histogram::scan(raw);
    histogram.normalize();

    let root = HuffmanNode::build(&histogram)?;
    let table = CodeTable::derive(&root);
    let bits = bits::pack(raw, &table)?;

    let bit_count =
        u32::try_from(bits.len()).map_err(|_| HuffError::BitCountOverflow(bits.len()))?;
    debug!(
        "encoded {} bytes as {} bits over {} distinct values",
        raw.len(),
        bit_count,
        histogram.nonzero_count()
    );

    Container {
        histogram,
        bit_count,
        payload: bits.into_vec(),
    }
    .serialize()
}

/// Restores the original bytes from a serialized container.
///
/// The tree is rebuilt from the stored histogram; with a zero bit count
/// there is nothing to walk and the result is empty regardless of the
/// histogram's shape.
pub fn decode(data: &[u8]) -> Result<Vec<u8>> {
    let container = Container::parse(data)?;
    if container.bit_count == 0 {
        return Ok(Vec::new());
    }

    let root = HuffmanNode::build(&container.histogram)?;
    let decoded = bits::unpack(&container.payload, container.bit_count as usize, &root)?;
    debug!(
        "decoded {} bits into {} bytes",
        container.bit_count,
        decoded.len()
    );
    Ok(decoded)
}

/// Reads `input` fully, compresses it, and writes the container to
/// `output`. The container is built in memory before the write starts,
/// so a failed encode never leaves a partial output file.
pub fn compress_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<()> {
    let raw = std::fs::read(input)?;
    let encoded = encode(&raw)?;
    std::fs::write(output, encoded)?;
    Ok(())
}

/// Reads a compressed container from `input` and writes the restored
/// bytes to `output`, with the same no-partial-output guarantee as
/// [`compress_file`].
pub fn expand_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<()> {
    let data = std::fs::read(input)?;
    let decoded = decode(&data)?;
    std::fs::write(output, decoded)?;
    Ok(())
}
