// src/coding/encoder.rs

//! Encode orchestration: frequency table → tree → code table → wire bytes.

use crate::coding::code::CodeTable;
use crate::coding::frequency::FrequencyTable;
use crate::coding::header::render_header;
use crate::coding::tree::HuffmanTree;
use crate::utils::error::{HuffmanError, Result};
use log::debug;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Encodes `input` into the textual wire format.
///
/// - Empty input yields empty output.
/// - Input with one distinct symbol yields the header line only, with no
///   trailing newline and no body.
/// - Otherwise the output is the header line, a newline, then each input
///   symbol's code as ASCII '0'/'1' characters in input order.
pub fn encode_bytes(input: &[u8]) -> Vec<u8> {
    let freqs = FrequencyTable::from_bytes(input);
    let Some(tree) = HuffmanTree::from_frequencies(&freqs) else {
        return Vec::new();
    };

    let mut out = render_header(&freqs).into_bytes();
    if tree.is_single_leaf() {
        return out;
    }

    let codes = CodeTable::from_tree(&tree);
    out.push(b'\n');
    for &symbol in input {
        for bit in codes.code(symbol).iter() {
            out.push(if *bit { b'1' } else { b'0' });
        }
    }

    debug!(
        "encoded {} input bytes into {} output bytes ({} distinct symbols)",
        input.len(),
        out.len(),
        freqs.distinct()
    );
    out
}

/// Reads `input` to the end and encodes it.
///
/// Fails with [`HuffmanError::SourceUnavailable`] if the stream cannot be
/// read.
pub fn encode<R: Read>(mut input: R) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    input
        .read_to_end(&mut data)
        .map_err(HuffmanError::SourceUnavailable)?;
    Ok(encode_bytes(&data))
}

/// Encodes the file at `input` and writes the result to `output`.
///
/// Fails with [`HuffmanError::SourceUnavailable`] if `input` cannot be
/// opened for reading; output failures surface as [`HuffmanError::Io`].
pub fn encode_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<()> {
    let source = File::open(input.as_ref()).map_err(HuffmanError::SourceUnavailable)?;
    let encoded = encode(source)?;
    std::fs::write(output.as_ref(), encoded)?;
    Ok(())
}
