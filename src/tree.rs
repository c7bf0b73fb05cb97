// src/tree.rs

//! Huffman tree construction and code table derivation.
//!
//! The tree is rebuilt from the histogram on both the encode and the
//! decode side, so its shape must be a pure function of the histogram
//! content. Ties between equal frequencies are broken by sequence
//! number: leaves are seeded in ascending byte-value order and merged
//! nodes take the next number in creation order.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use bitvec::prelude::*;

use crate::histogram::Histogram;
use crate::utils::error::{HuffError, Result};

/// Node in a Huffman tree.
///
/// A leaf carries exactly one byte value; an internal node carries the
/// summed frequency of its two exclusively owned children.
#[derive(Debug, Clone)]
pub enum HuffmanNode {
    Leaf { byte: u8, freq: u64 },
    Internal { freq: u64, left: Box<HuffmanNode>, right: Box<HuffmanNode> },
}

impl HuffmanNode {
    pub fn freq(&self) -> u64 {
        match self {
            HuffmanNode::Leaf { freq, .. } => *freq,
            HuffmanNode::Internal { freq, .. } => *freq,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }

    /// Builds the tree by repeatedly merging the two lowest-frequency
    /// nodes until one root remains. The first node popped becomes the
    /// left child.
    ///
    /// Fails with `MalformedStream` when the histogram holds fewer than
    /// two nonzero entries; the normalizer rules that out on the encode
    /// path, but a hostile container can still present such a histogram
    /// during decode.
    pub fn build(histogram: &Histogram) -> Result<HuffmanNode> {
        let mut heap = BinaryHeap::new();
        let mut seq = 0u32;

        for (byte, freq) in histogram.nonzero() {
            heap.push(Reverse(HeapEntry {
                freq,
                seq,
                node: HuffmanNode::Leaf { byte, freq },
            }));
            seq += 1;
        }

        if heap.len() < 2 {
            return Err(HuffError::MalformedStream(format!(
                "histogram has {} nonzero entries, need at least 2",
                heap.len()
            )));
        }

        while heap.len() > 1 {
            let first = heap.pop().unwrap().0;
            let second = heap.pop().unwrap().0;
            let freq = first.freq + second.freq;

            heap.push(Reverse(HeapEntry {
                freq,
                seq,
                node: HuffmanNode::Internal {
                    freq,
                    left: Box::new(first.node),
                    right: Box::new(second.node),
                },
            }));
            seq += 1;
        }

        Ok(heap.pop().unwrap().0.node)
    }
}

/// Heap entry ordered by `(freq, seq)` so that `BinaryHeap<Reverse<_>>`
/// pops the lowest frequency, earliest-created node first.
#[derive(Debug)]
struct HeapEntry {
    freq: u64,
    seq: u32,
    node: HuffmanNode,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.freq == other.freq && self.seq == other.seq
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.freq.cmp(&other.freq).then(self.seq.cmp(&other.seq))
    }
}

/// Byte value → bit-string code, derived from root-to-leaf paths.
///
/// Only leaves are mapped, so the codes are prefix-free by
/// construction.
#[derive(Debug, Clone)]
pub struct CodeTable {
    codes: Vec<Option<BitVec<u8, Msb0>>>,
}

impl CodeTable {
    /// Walks the tree depth-first, recording the accumulated path at
    /// each leaf: a left edge appends 0, a right edge appends 1.
    pub fn derive(root: &HuffmanNode) -> CodeTable {
        let mut codes = vec![None; 256];
        let mut path = BitVec::new();
        Self::walk(root, &mut path, &mut codes);
        CodeTable { codes }
    }

    fn walk(
        node: &HuffmanNode,
        path: &mut BitVec<u8, Msb0>,
        codes: &mut Vec<Option<BitVec<u8, Msb0>>>,
    ) {
        match node {
            HuffmanNode::Leaf { byte, .. } => {
                codes[*byte as usize] = Some(path.clone());
            }
            HuffmanNode::Internal { left, right, .. } => {
                path.push(false);
                Self::walk(left, path, codes);
                path.pop();
                path.push(true);
                Self::walk(right, path, codes);
                path.pop();
            }
        }
    }

    /// The code bits for one byte value, if it appears in the tree.
    pub fn code(&self, byte: u8) -> Option<&BitSlice<u8, Msb0>> {
        self.codes[byte as usize].as_deref()
    }

    /// Number of byte values that have a code.
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_for(data: &[u8]) -> CodeTable {
        let mut hist = Histogram::scan(data);
        hist.normalize();
        let root = HuffmanNode::build(&hist).unwrap();
        CodeTable::derive(&root)
    }

    #[test]
    fn test_build_rejects_degenerate_histogram() {
        assert!(HuffmanNode::build(&Histogram::new()).is_err());
        assert!(HuffmanNode::build(&Histogram::scan(&[7, 7, 7])).is_err());
    }

    #[test]
    fn test_two_leaf_tree_has_one_bit_codes() {
        let table = table_for(b"AAAB");
        assert_eq!(table.code(b'A').unwrap().len(), 1);
        assert_eq!(table.code(b'B').unwrap().len(), 1);
        assert_ne!(table.code(b'A'), table.code(b'B'));
        assert!(table.code(b'C').is_none());
    }

    #[test]
    fn test_rebuild_is_deterministic() {
        // All frequencies equal, so the shape is decided purely by the
        // tie-break rule; encode and decode must agree on it.
        let hist = Histogram::scan(&[1, 2, 3, 4, 5, 6, 7, 8]);
        let a = CodeTable::derive(&HuffmanNode::build(&hist).unwrap());
        let b = CodeTable::derive(&HuffmanNode::build(&hist).unwrap());
        for byte in 0..=255u8 {
            assert_eq!(a.code(byte), b.code(byte));
        }
    }

    #[test]
    fn test_every_nonzero_entry_gets_a_code() {
        let data: Vec<u8> = (0..=255u8).chain(std::iter::repeat_n(40, 100)).collect();
        let table = table_for(&data);
        assert_eq!(table.len(), 256);
        for byte in 0..=255u8 {
            assert!(!table.code(byte).unwrap().is_empty());
        }
    }

    #[test]
    fn test_codes_are_prefix_free() {
        let data = b"abracadabra, a very abrasive cadaver";
        let table = table_for(data);
        let codes: Vec<_> = (0..=255u8).filter_map(|b| table.code(b)).collect();
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert!(!b.starts_with(a), "code {:?} is a prefix of {:?}", a, b);
                }
            }
        }
    }

    #[test]
    fn test_frequent_bytes_get_shorter_codes() {
        let mut data = vec![b'x'; 1000];
        data.extend_from_slice(b"yyz");
        let table = table_for(&data);
        assert!(table.code(b'x').unwrap().len() <= table.code(b'z').unwrap().len());
    }
}
