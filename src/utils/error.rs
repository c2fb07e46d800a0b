// src/utils/error.rs

use thiserror::Error;

/// The primary error type for all operations in the Huffman codec library.
#[derive(Error, Debug)]
pub enum HuffmanError {
    /// The named input could not be opened or read.
    ///
    /// This is the only failure the encode/decode contract recognizes on the
    /// input side; it propagates to the caller untouched.
    #[error("source unavailable: {0}")]
    SourceUnavailable(std::io::Error),

    /// The header line of an encoded file did not parse as
    /// "<symbol> <count>" pairs.
    #[error("malformed header: {0}")]
    MalformedHeader(String),

    /// The encoded body contained a character other than '0' or '1'.
    #[error("invalid bit character {0:?} in encoded body")]
    InvalidBitstream(char),

    /// An error occurred during output I/O.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for Huffman codec operations.
pub type Result<T> = std::result::Result<T, HuffmanError>;
