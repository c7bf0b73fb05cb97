// src/utils/error.rs

use thiserror::Error;

/// The primary error type for all operations in the huffpack library.
#[derive(Error, Debug)]
pub enum HuffError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("truncated container: need at least {expected} bytes, got {actual}")]
    TruncatedInput { expected: usize, actual: usize },

    #[error("byte 0x{0:02x} has no entry in the code table")]
    UnknownSymbol(u8),

    #[error("malformed bit stream: {0}")]
    MalformedStream(String),

    #[error("frequency {count} for byte 0x{byte:02x} exceeds the 32-bit container field")]
    FrequencyOverflow { byte: u8, count: u64 },

    #[error("encoded length of {0} bits exceeds the 32-bit container field")]
    BitCountOverflow(usize),
}

/// A specialized `Result` type for huffpack operations.
pub type Result<T> = std::result::Result<T, HuffError>;
