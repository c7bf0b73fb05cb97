//! A byte-oriented file compressor built on static Huffman coding.
//!
//! This crate assigns shorter bit-codes to more frequent byte values
//! and losslessly restores the original stream from the compressed
//! form. The whole pipeline runs in memory: frequency analysis, tree
//! construction with a pinned tie-break rule, code derivation, MSB-first
//! bit packing, and a self-describing container layout that lets the
//! decoder rebuild the identical tree from the stored histogram.
//!
//! # Quick Start
//!
//! ```
//! use huffpack::{decode, encode};
//!
//! let original = b"abracadabra".to_vec();
//! let compressed = encode(&original)?;
//! let restored = decode(&compressed)?;
//! assert_eq!(restored, original);
//! # Ok::<(), huffpack::HuffError>(())
//! ```
//!
//! File-level helpers wrap the same pipeline:
//!
//! ```no_run
//! huffpack::compress_file("notes.txt", "notes.txt.huff")?;
//! huffpack::expand_file("notes.txt.huff", "notes_restored.txt")?;
//! # Ok::<(), huffpack::HuffError>(())
//! ```
//!
//! # Container format
//!
//! 256 big-endian 4-byte counts (one per byte value, ascending), a
//! big-endian 4-byte valid-bit count, then the packed payload with the
//! final byte zero-padded. See [`container`] for details.

// Core modules
pub mod bits;
pub mod codec;
pub mod container;
pub mod histogram;
pub mod tree;
pub mod utils;

// Public codec API
pub use codec::{compress_file, decode, encode, expand_file};

// Format and pipeline types (for custom workflows)
pub use container::{Container, HEADER_LEN, HISTOGRAM_LEN};
pub use histogram::Histogram;
pub use tree::{CodeTable, HuffmanNode};

// Error types
pub use utils::error::{HuffError, Result};

// Constants
pub const HUFFPACK_VERSION: &str = "0.1.0";
