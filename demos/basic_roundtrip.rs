//! Minimal encode/decode walkthrough.
//!
//! Run with `cargo run --example basic_roundtrip`.

use huffman_codec::{decode_bytes, encode_bytes, FrequencyTable, HuffmanTree};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let sample_text = "Hello, world! This is a sample text for Huffman compression. \
                       The quick brown fox jumps over the lazy dog. \
                       Huffman coding builds optimal prefix codes from symbol frequencies.";

    println!("Input: {} bytes", sample_text.len());

    let freqs = FrequencyTable::from_bytes(sample_text.as_bytes());
    let tree = HuffmanTree::from_frequencies(&freqs).expect("non-empty input");
    println!(
        "Distinct symbols: {}, tree weight: {}",
        freqs.distinct(),
        tree.root().weight()
    );

    let encoded = encode_bytes(sample_text.as_bytes());
    let header_len = encoded
        .iter()
        .position(|&b| b == b'\n')
        .unwrap_or(encoded.len());
    println!(
        "Encoded: {} bytes ({} header, {} body bits as ASCII)",
        encoded.len(),
        header_len,
        encoded.len().saturating_sub(header_len + 1)
    );

    let decoded = decode_bytes(&encoded)?;
    if decoded == sample_text.as_bytes() {
        println!("Round trip OK: decoded output matches the input exactly.");
    } else {
        return Err("round trip mismatch".into());
    }

    Ok(())
}
