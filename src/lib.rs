//! A Rust library for static Huffman coding of byte streams.
//!
//! This crate builds a prefix-free binary code from byte frequency
//! statistics, serializes it as a compact textual header plus bitstream,
//! and reconstructs the original bytes from the serialized form.
//!
//! # Quick Start
//!
//! ```ignore
//! use huffman_codec::{decode_file, encode_file};
//!
//! // Compress a file
//! encode_file("input.txt", "compressed.huff")?;
//!
//! // Decompress it again
//! decode_file("compressed.huff", "output.txt")?;
//! ```
//!
//! In-memory variants are available as [`encode_bytes`] and
//! [`decode_bytes`], and any [`std::io::Read`] source can be fed to
//! [`encode`] and [`decode`].
//!
//! # Wire format
//!
//! Encoded files are line-oriented ASCII text:
//!
//! - Line 1: `"<symbol> <count> ..."` pairs in ascending symbol order —
//!   the frequency table the decoder rebuilds its tree from.
//! - Line 2: the body, one ASCII '0'/'1' character per code bit, present
//!   only when the input had two or more distinct symbols.
//!
//! Empty input encodes to an empty file; input with a single distinct
//! symbol encodes to the header line alone. Tree construction breaks
//! frequency ties by ascending symbol value, so the same input always
//! produces the same bytes.
//!
//! # Features
//!
//! - **`rayon`**: count frequencies of large inputs in parallel. Purely an
//!   optimization; results are identical.

// Core modules
pub mod coding;
pub mod utils;

// Pipeline entry points
pub use coding::{decode, decode_bytes, decode_file, encode, encode_bytes, encode_file};

// Pipeline types (for custom workflows and inspection)
pub use coding::{Code, CodeTable, FrequencyTable, HuffNode, HuffmanTree};

// Error types
pub use utils::error::{HuffmanError, Result};

// Constants
pub const HUFFMAN_CODEC_VERSION: &str = "0.1.0";
