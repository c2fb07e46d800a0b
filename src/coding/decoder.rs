// src/coding/decoder.rs

//! Decode state machine: header → rebuilt tree → bit-by-bit walk.
//!
//! The decoder dispatches on the number of header pairs. Zero pairs mean
//! empty output, one pair expands to a repeated symbol with no tree walk,
//! and two or more rebuild the tree with the same deterministic
//! construction the encoder used and walk the body against it.

use crate::coding::header::parse_header;
use crate::coding::tree::HuffmanTree;
use crate::utils::error::{HuffmanError, Result};
use log::debug;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Decodes an encoded file's content back to the original bytes.
///
/// Fails with [`HuffmanError::MalformedHeader`] or
/// [`HuffmanError::InvalidBitstream`] on content the encoder could not have
/// produced.
pub fn decode_bytes(encoded: &[u8]) -> Result<Vec<u8>> {
    if encoded.is_empty() {
        return Ok(Vec::new());
    }

    let (header_bytes, body) = match encoded.iter().position(|&b| b == b'\n') {
        Some(pos) => (&encoded[..pos], &encoded[pos + 1..]),
        None => (encoded, &encoded[..0]),
    };
    let header_line = std::str::from_utf8(header_bytes)
        .map_err(|_| HuffmanError::MalformedHeader("header is not ASCII text".to_string()))?;
    let freqs = parse_header(header_line)?;

    let mut pairs = freqs.iter_nonzero();
    match (pairs.next(), pairs.next()) {
        // A whitespace-only header line decodes like an empty file.
        (None, _) => Ok(Vec::new()),
        (Some((symbol, count)), None) => {
            debug!("single-symbol expansion: {count} copies of {symbol}");
            Ok(vec![symbol; count as usize])
        }
        (Some(_), Some(_)) => match HuffmanTree::from_frequencies(&freqs) {
            Some(tree) => walk(&tree, body),
            None => Ok(Vec::new()),
        },
    }
}

/// Walks `body` against `tree`, emitting one symbol per leaf arrival.
///
/// Whenever the current node is a leaf its symbol is emitted and the walk
/// resets to the root before the next bit is consumed; the final node's
/// symbol is emitted after the last bit.
fn walk(tree: &HuffmanTree, body: &[u8]) -> Result<Vec<u8>> {
    let root = tree.root();
    let mut current = root;
    let mut out = Vec::new();

    for &ch in body {
        if current.is_leaf() {
            out.push(current.symbol());
            current = root;
        }
        let bit = match ch {
            b'0' => false,
            b'1' => true,
            other => return Err(HuffmanError::InvalidBitstream(other as char)),
        };
        current = current.step(bit);
    }
    out.push(current.symbol());

    debug!("decoded {} bits into {} bytes", body.len(), out.len());
    Ok(out)
}

/// Reads `input` to the end and decodes it.
///
/// Fails with [`HuffmanError::SourceUnavailable`] if the stream cannot be
/// read.
pub fn decode<R: Read>(mut input: R) -> Result<Vec<u8>> {
    let mut encoded = Vec::new();
    input
        .read_to_end(&mut encoded)
        .map_err(HuffmanError::SourceUnavailable)?;
    decode_bytes(&encoded)
}

/// Decodes the encoded file at `input` and writes the original bytes to
/// `output`.
///
/// Fails with [`HuffmanError::SourceUnavailable`] if `input` cannot be
/// opened for reading; output failures surface as [`HuffmanError::Io`].
pub fn decode_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<()> {
    let source = File::open(input.as_ref()).map_err(HuffmanError::SourceUnavailable)?;
    let decoded = decode(source)?;
    std::fs::write(output.as_ref(), decoded)?;
    Ok(())
}
