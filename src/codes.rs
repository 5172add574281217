use std::collections::HashMap;

use crate::tree::{HuffmanNode, HuffmanTree};

/// Code assigned when the whole tree is a single leaf.
const LONE_SYMBOL_CODE: [bool; 1] = [false];

/// Forward and reverse code maps derived from one tree.
///
/// Read-only once built, so a single table can back any number of encode
/// and decode calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: HashMap<char, Vec<bool>>,
    reverse: HashMap<Vec<bool>, char>,
}

impl CodeTable {
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut table = CodeTable::default();
        match tree.root() {
            HuffmanNode::Leaf { symbol, .. } => table.insert(*symbol, LONE_SYMBOL_CODE.to_vec()),
            root => table.walk(root, Vec::new()),
        }
        table
    }

    // Left appends 0, right appends 1.
    fn walk(&mut self, node: &HuffmanNode, prefix: Vec<bool>) {
        match node {
            HuffmanNode::Leaf { symbol, .. } => self.insert(*symbol, prefix),
            HuffmanNode::Internal { left, right, .. } => {
                let mut left_prefix = prefix.clone();
                left_prefix.push(false);
                self.walk(left, left_prefix);

                let mut right_prefix = prefix;
                right_prefix.push(true);
                self.walk(right, right_prefix);
            }
        }
    }

    fn insert(&mut self, symbol: char, code: Vec<bool>) {
        self.reverse.insert(code.clone(), symbol);
        self.codes.insert(symbol, code);
    }

    pub fn code(&self, symbol: char) -> Option<&[bool]> {
        self.codes.get(&symbol).map(Vec::as_slice)
    }

    /// Inverse lookup used while decoding.
    pub fn symbol(&self, code: &[bool]) -> Option<char> {
        self.reverse.get(code).copied()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Length of the longest code; bounds how far a decode buffer can grow.
    pub fn max_code_len(&self) -> usize {
        self.codes.values().map(Vec::len).max().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &[bool])> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::to_bit_string;
    use crate::frequency::FrequencyTable;

    fn table_for(text: &str) -> CodeTable {
        let tree = HuffmanTree::build(&FrequencyTable::from_text(text)).unwrap();
        CodeTable::from_tree(&tree)
    }

    fn code_str(table: &CodeTable, symbol: char) -> String {
        to_bit_string(table.code(symbol).unwrap())
    }

    #[test]
    fn aaabbc_codes() {
        let table = table_for("aaabbc");
        assert_eq!(code_str(&table, 'a'), "0");
        assert_eq!(code_str(&table, 'c'), "10");
        assert_eq!(code_str(&table, 'b'), "11");
        assert_eq!(table.symbol(&[true, false]), Some('c'));
        assert_eq!(table.max_code_len(), 2);
    }

    #[test]
    fn lone_symbol_gets_nonempty_code() {
        let table = table_for("aaaa");
        assert_eq!(table.len(), 1);
        assert_eq!(table.code('a'), Some(&[false][..]));
        assert_eq!(table.symbol(&[false]), Some('a'));
    }

    #[test]
    fn codes_are_prefix_free() {
        let table = table_for("the quick brown fox jumps over the lazy dog");
        let codes: Vec<_> = table.iter().collect();
        for (a, code_a) in &codes {
            for (b, code_b) in &codes {
                if a != b {
                    assert!(!code_b.starts_with(code_a), "{a:?} prefixes {b:?}");
                }
            }
        }
    }

    #[test]
    fn frequent_symbols_get_shorter_codes() {
        let text = "eeeeeeeeeettttttaaaoonz";
        let freqs = FrequencyTable::from_text(text);
        let table = table_for(text);
        for (a, code_a) in table.iter() {
            for (b, code_b) in table.iter() {
                if freqs.get(a) > freqs.get(b) {
                    assert!(code_a.len() <= code_b.len());
                }
            }
        }
    }
}
