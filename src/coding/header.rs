// src/coding/header.rs

//! The textual frequency header.
//!
//! An encoded file opens with one line of space-separated
//! `<symbol> <count>` pairs in ascending symbol order. The decoder rebuilds
//! its frequency table, and from it the tree, from this line alone.
//! Parsing is strict: a header the encoder could not have produced is
//! rejected rather than misparsed, since a guessed table silently
//! desynchronizes the tree walk.

use crate::coding::frequency::FrequencyTable;
use crate::utils::error::{HuffmanError, Result};

/// Renders the header line for `freqs`: non-zero symbols ascending,
/// single-space separated, no trailing newline.
///
/// The table for `"aaabbbbcc"` renders as `"97 3 98 4 99 2"`.
pub fn render_header(freqs: &FrequencyTable) -> String {
    let mut pairs = Vec::with_capacity(freqs.distinct() * 2);
    for (symbol, count) in freqs.iter_nonzero() {
        pairs.push(symbol.to_string());
        pairs.push(count.to_string());
    }
    pairs.join(" ")
}

/// Parses a header line back into a frequency table.
///
/// The exact inverse of [`render_header`]. An empty or all-whitespace line
/// parses to the empty table. Fails with [`HuffmanError::MalformedHeader`]
/// on an odd token count, a non-numeric token, a symbol outside 0–255, a
/// zero count, or a repeated symbol.
pub fn parse_header(line: &str) -> Result<FrequencyTable> {
    let mut freqs = FrequencyTable::new();
    let mut tokens = line.split_whitespace();

    while let Some(symbol_token) = tokens.next() {
        let count_token = tokens.next().ok_or_else(|| {
            HuffmanError::MalformedHeader(format!(
                "symbol {symbol_token} has no count (odd token count)"
            ))
        })?;

        let symbol: u8 = symbol_token.parse().map_err(|_| {
            HuffmanError::MalformedHeader(format!("invalid symbol token {symbol_token:?}"))
        })?;
        let count: u64 = count_token.parse().map_err(|_| {
            HuffmanError::MalformedHeader(format!("invalid count token {count_token:?}"))
        })?;

        if count == 0 {
            return Err(HuffmanError::MalformedHeader(format!(
                "zero count for symbol {symbol}"
            )));
        }
        if freqs.count(symbol) != 0 {
            return Err(HuffmanError::MalformedHeader(format!(
                "symbol {symbol} listed twice"
            )));
        }
        freqs.set(symbol, count);
    }

    Ok(freqs)
}
