// src/coding/code.rs

//! Per-symbol code assignment.
//!
//! Codes are root-to-leaf paths through the Huffman tree, one bit per step:
//! '0' descends left, '1' descends right. They are held as packed bits and
//! rendered to ASCII only at the wire boundary.

use crate::coding::tree::{HuffNode, HuffmanTree};
use bitvec::order::Msb0;
use bitvec::prelude::*;

/// One symbol's path from the tree root to its leaf.
pub type Code = BitVec<u8, Msb0>;

/// Mapping from every symbol to its code.
///
/// Symbols absent from the tree hold the empty code; looking them up is a
/// caller bug the table cannot detect, so the encoder only consults entries
/// for symbols it counted.
#[derive(Debug, Clone)]
pub struct CodeTable {
    codes: Vec<Code>,
}

impl CodeTable {
    /// A table with every entry empty. This is the code table of the absent
    /// (empty-input) tree.
    pub fn empty() -> Self {
        Self {
            codes: vec![Code::new(); 256],
        }
    }

    /// Walks `tree` depth-first and records each leaf's accumulated path.
    ///
    /// A single-leaf tree yields the empty code for its one symbol; that
    /// case is serialized as a header-only file rather than through the
    /// bitstream.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut table = Self::empty();
        let mut prefix = Code::new();
        Self::assign(tree.root(), &mut prefix, &mut table.codes);
        table
    }

    fn assign(node: &HuffNode, prefix: &mut Code, codes: &mut [Code]) {
        match node {
            HuffNode::Leaf { symbol, .. } => {
                codes[*symbol as usize] = prefix.clone();
            }
            HuffNode::Internal { left, right, .. } => {
                prefix.push(false);
                Self::assign(left, prefix, codes);
                prefix.pop();

                prefix.push(true);
                Self::assign(right, prefix, codes);
                prefix.pop();
            }
        }
    }

    /// The code assigned to `symbol`.
    pub fn code(&self, symbol: u8) -> &Code {
        &self.codes[symbol as usize]
    }

    /// The code for `symbol` rendered as '0'/'1' characters.
    pub fn ascii(&self, symbol: u8) -> String {
        self.code(symbol)
            .iter()
            .map(|bit| if *bit { '1' } else { '0' })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coding::frequency::FrequencyTable;

    fn tree(pairs: &[(u8, u64)]) -> HuffmanTree {
        let mut freqs = FrequencyTable::new();
        for &(symbol, count) in pairs {
            freqs.set(symbol, count);
        }
        HuffmanTree::from_frequencies(&freqs).unwrap()
    }

    #[test]
    fn fixture_codes() {
        let table = CodeTable::from_tree(&tree(&[
            (97, 2),
            (98, 4),
            (99, 8),
            (100, 16),
            (102, 2),
        ]));
        assert_eq!(table.ascii(b'd'), "1");
        assert_eq!(table.ascii(b'a'), "0000");
        assert_eq!(table.ascii(b'f'), "0001");
        assert_eq!(table.ascii(b'b'), "001");
        assert_eq!(table.ascii(b'c'), "01");
    }

    #[test]
    fn equal_frequencies_differ_only_in_tie_break_bit() {
        // a and f tie at weight 2 and end up siblings; the ascending-symbol
        // rule puts a on the '0' branch.
        let table = CodeTable::from_tree(&tree(&[
            (97, 2),
            (98, 4),
            (99, 8),
            (100, 16),
            (102, 2),
        ]));
        let a = table.ascii(b'a');
        let f = table.ascii(b'f');
        assert_eq!(a.len(), f.len());
        assert_eq!(a[..a.len() - 1], f[..f.len() - 1]);
        assert!(a.ends_with('0'));
        assert!(f.ends_with('1'));
    }

    #[test]
    fn lower_frequency_never_gets_shorter_code() {
        let freqs = FrequencyTable::from_bytes(b"abracadabra alakazam");
        let tree = HuffmanTree::from_frequencies(&freqs).unwrap();
        let table = CodeTable::from_tree(&tree);
        let pairs: Vec<_> = freqs.iter_nonzero().collect();
        for &(x, fx) in &pairs {
            for &(y, fy) in &pairs {
                if fx < fy {
                    assert!(
                        table.code(x).len() >= table.code(y).len(),
                        "symbol {x} (freq {fx}) got a shorter code than {y} (freq {fy})"
                    );
                }
            }
        }
    }

    #[test]
    fn single_leaf_has_empty_code() {
        let table = CodeTable::from_tree(&tree(&[(b'q', 9)]));
        assert!(table.code(b'q').is_empty());
        assert_eq!(table.ascii(b'q'), "");
    }

    #[test]
    fn empty_table_is_all_empty() {
        let table = CodeTable::empty();
        for symbol in 0..=255u8 {
            assert!(table.code(symbol).is_empty());
        }
    }
}
