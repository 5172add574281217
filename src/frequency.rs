use std::collections::HashMap;

/// Occurrence counts per symbol, kept in order of first occurrence.
///
/// The order matters only for tie-breaking when the tree is built, but it
/// must be stable so a table restored from a key file rebuilds the same
/// codes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(char, u64)>,
    index: HashMap<char, usize>,
}

impl FrequencyTable {
    pub fn from_text(text: &str) -> Self {
        let mut table = FrequencyTable::default();
        for symbol in text.chars() {
            table.add(symbol, 1);
        }
        table
    }

    /// Rebuild a table from `(symbol, count)` pairs in their stored order.
    /// Repeated symbols are merged into the first entry.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (char, u64)>,
    {
        let mut table = FrequencyTable::default();
        for (symbol, count) in entries {
            table.add(symbol, count);
        }
        table
    }

    fn add(&mut self, symbol: char, count: u64) {
        match self.index.get(&symbol) {
            Some(&slot) => self.entries[slot].1 += count,
            None => {
                self.index.insert(symbol, self.entries.len());
                self.entries.push((symbol, count));
            }
        }
    }

    pub fn get(&self, symbol: char) -> Option<u64> {
        self.index.get(&symbol).map(|&slot| self.entries[slot].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of symbols counted.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|&(_, count)| count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.entries.iter().copied()
    }
}
