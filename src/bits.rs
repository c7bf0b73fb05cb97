// src/bits.rs

//! Bit-level packing of Huffman codes and the decode-side tree walk.
//!
//! Bits are stored MSB-first; `BitVec<u8, Msb0>` gives the packed byte
//! layout directly, with the final partial byte zero-padded. The valid
//! bit count travels in the container header so the unpacker knows
//! where real data ends and padding begins.

use bitvec::prelude::*;

use crate::tree::{CodeTable, HuffmanNode};
use crate::utils::error::{HuffError, Result};

/// Concatenates the code for each input byte into one bit accumulator.
///
/// The caller persists `len()` of the result as the valid bit count and
/// `into_vec()` as the payload. Fails with `UnknownSymbol` if a byte
/// has no code, which cannot happen when the table was derived from a
/// histogram covering the same input.
pub fn pack(data: &[u8], table: &CodeTable) -> Result<BitVec<u8, Msb0>> {
    let mut bits = BitVec::with_capacity(data.len() * 8);
    for &byte in data {
        let code = table.code(byte).ok_or(HuffError::UnknownSymbol(byte))?;
        bits.extend_from_bitslice(code);
    }
    Ok(bits)
}

/// Replays `bit_count` payload bits against the tree: 0 descends left,
/// 1 descends right, and reaching a leaf emits its byte and restarts
/// the walk at the root. Padding bits past `bit_count` are never
/// interpreted, and extra trailing payload bytes are ignored.
pub fn unpack(payload: &[u8], bit_count: usize, root: &HuffmanNode) -> Result<Vec<u8>> {
    if bit_count > payload.len() * 8 {
        return Err(HuffError::TruncatedInput {
            expected: bit_count.div_ceil(8),
            actual: payload.len(),
        });
    }

    let mut decoded = Vec::new();
    let mut node = root;
    for bit in payload.view_bits::<Msb0>()[..bit_count].iter().by_vals() {
        node = match node {
            HuffmanNode::Internal { left, right, .. } => {
                if bit { right.as_ref() } else { left.as_ref() }
            }
            HuffmanNode::Leaf { .. } => {
                return Err(HuffError::MalformedStream(
                    "code tree has no branch to follow".to_string(),
                ));
            }
        };
        if let HuffmanNode::Leaf { byte, .. } = node {
            decoded.push(*byte);
            node = root;
        }
    }

    Ok(decoded)
}
