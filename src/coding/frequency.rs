// src/coding/frequency.rs

//! Byte frequency statistics over an input stream.
//!
//! The table is the first stage of the encoding pipeline and the anchor of
//! the wire format: the decoder rebuilds the exact same table from the
//! header, so every count here is load-bearing.

use crate::utils::error::{HuffmanError, Result};
use log::trace;
use std::io::Read;

/// Inputs at least this large are counted in parallel chunks when the
/// `rayon` feature is enabled.
#[cfg(feature = "rayon")]
const PARALLEL_THRESHOLD: usize = 1 << 20;

/// Occurrence counts for each of the 256 possible byte values.
///
/// A zero count means the symbol is absent. The sum of all counts equals the
/// number of bytes processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; 256],
}

impl FrequencyTable {
    /// Creates an empty table (all counts zero).
    pub fn new() -> Self {
        Self { counts: [0; 256] }
    }

    /// Counts every byte of `data`.
    pub fn from_bytes(data: &[u8]) -> Self {
        #[cfg(feature = "rayon")]
        {
            if data.len() >= PARALLEL_THRESHOLD {
                use rayon::prelude::*;
                return data
                    .par_chunks(PARALLEL_THRESHOLD)
                    .map(Self::count_chunk)
                    .reduce(Self::new, Self::merge);
            }
        }

        Self::count_chunk(data)
    }

    /// Reads `input` to the end and counts every byte.
    ///
    /// Fails with [`HuffmanError::SourceUnavailable`] if the stream cannot
    /// be read.
    pub fn from_reader<R: Read>(mut input: R) -> Result<Self> {
        let mut data = Vec::new();
        input
            .read_to_end(&mut data)
            .map_err(HuffmanError::SourceUnavailable)?;
        Ok(Self::from_bytes(&data))
    }

    /// Counts every byte of the file at `path`.
    ///
    /// Fails with [`HuffmanError::SourceUnavailable`] if the file cannot be
    /// opened for reading.
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref()).map_err(HuffmanError::SourceUnavailable)?;
        Self::from_reader(file)
    }

    fn count_chunk(data: &[u8]) -> Self {
        let mut table = Self::new();
        for &byte in data {
            table.counts[byte as usize] += 1;
        }
        trace!("counted {} bytes", data.len());
        table
    }

    /// Adds the counts of `other` to this table.
    ///
    /// Partial counts over disjoint slices of an input merge into the same
    /// table the sequential pass would produce.
    pub fn merge(mut self, other: Self) -> Self {
        for (count, extra) in self.counts.iter_mut().zip(other.counts.iter()) {
            *count += extra;
        }
        self
    }

    /// The count recorded for `symbol`.
    pub fn count(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Overwrites the count for `symbol`. Used when rebuilding a table from
    /// a parsed header.
    pub fn set(&mut self, symbol: u8, count: u64) {
        self.counts[symbol as usize] = count;
    }

    /// Total number of bytes counted.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Number of symbols with a non-zero count.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c != 0).count()
    }

    /// Iterates over `(symbol, count)` pairs with non-zero counts, in
    /// ascending symbol order.
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count != 0)
            .map(|(symbol, &count)| (symbol as u8, count))
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_sum_to_input_length() {
        let data = b"the quick brown fox jumps over the lazy dog";
        let table = FrequencyTable::from_bytes(data);
        assert_eq!(table.total(), data.len() as u64);
    }

    #[test]
    fn fixture_counts() {
        // 2 a's, 4 b's, 8 c's, 16 d's, 2 f's
        let data = b"aabbbbccccccccddddddddddddddddff";
        let table = FrequencyTable::from_bytes(data);
        assert_eq!(table.count(b'a'), 2);
        assert_eq!(table.count(b'b'), 4);
        assert_eq!(table.count(b'c'), 8);
        assert_eq!(table.count(b'd'), 16);
        assert_eq!(table.count(b'e'), 0);
        assert_eq!(table.count(b'f'), 2);
        assert_eq!(table.distinct(), 5);
    }

    #[test]
    fn iter_nonzero_is_ascending() {
        let table = FrequencyTable::from_bytes(b"cba");
        let pairs: Vec<_> = table.iter_nonzero().collect();
        assert_eq!(pairs, vec![(b'a', 1), (b'b', 1), (b'c', 1)]);
    }

    #[test]
    fn merge_adds_counts() {
        let left = FrequencyTable::from_bytes(b"aab");
        let right = FrequencyTable::from_bytes(b"abc");
        let merged = left.merge(right);
        assert_eq!(merged.count(b'a'), 3);
        assert_eq!(merged.count(b'b'), 2);
        assert_eq!(merged.count(b'c'), 1);
        assert_eq!(merged.total(), 6);
    }

    #[test]
    fn from_reader_counts_everything() {
        let table = FrequencyTable::from_reader(&b"hello"[..]).unwrap();
        assert_eq!(table.count(b'l'), 2);
        assert_eq!(table.total(), 5);
    }

    #[test]
    fn empty_input_is_all_zero() {
        let table = FrequencyTable::from_bytes(b"");
        assert_eq!(table.total(), 0);
        assert_eq!(table.distinct(), 0);
        assert_eq!(table, FrequencyTable::new());
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn parallel_matches_sequential() {
        let data: Vec<u8> = (0..(PARALLEL_THRESHOLD + 17)).map(|i| (i % 251) as u8).collect();
        let parallel = FrequencyTable::from_bytes(&data);
        let sequential = FrequencyTable::count_chunk(&data);
        assert_eq!(parallel, sequential);
    }
}
