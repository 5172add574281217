//! Persisted code-table seed.
//!
//! Tree construction is deterministic, so storing the frequency table in its
//! original order is enough to rebuild the exact code table later. The
//! artifact itself stays headerless; the key travels as a separate file.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CodecError;
use crate::frequency::FrequencyTable;

pub const KEY_VERSION: u8 = 1;

/// Conventional extension for key files written next to an artifact.
pub const KEY_EXT: &str = "hkey";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct KeyFile {
    version: u8,
    entries: Vec<(char, u64)>,
}

impl KeyFile {
    pub fn from_frequencies(frequencies: &FrequencyTable) -> Self {
        KeyFile {
            version: KEY_VERSION,
            entries: frequencies.iter().collect(),
        }
    }

    pub fn frequencies(&self) -> FrequencyTable {
        FrequencyTable::from_entries(self.entries.iter().copied())
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CodecError> {
        bincode::serialize(self).map_err(|e| CodecError::KeyFile(e.to_string()))
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, CodecError> {
        let key: KeyFile =
            bincode::deserialize(data).map_err(|e| CodecError::KeyFile(e.to_string()))?;
        if key.version != KEY_VERSION {
            return Err(CodecError::KeyFile(format!(
                "unsupported version {} (expected {KEY_VERSION})",
                key.version
            )));
        }
        key.validate()?;
        Ok(key)
    }

    // Counts come from disk; anything the tree builder would choke on is
    // rejected here.
    fn validate(&self) -> Result<(), CodecError> {
        let mut seen = HashSet::with_capacity(self.entries.len());
        let mut total = 0u64;
        for &(symbol, count) in &self.entries {
            if count == 0 {
                return Err(CodecError::KeyFile(format!("symbol {symbol:?} has a zero count")));
            }
            if !seen.insert(symbol) {
                return Err(CodecError::KeyFile(format!("symbol {symbol:?} is listed twice")));
            }
            total = total
                .checked_add(count)
                .ok_or_else(|| CodecError::KeyFile("symbol counts overflow".to_string()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_roundtrip_preserves_order() {
        let table = FrequencyTable::from_text("zyxzz");
        let key = KeyFile::from_frequencies(&table);
        let restored = KeyFile::from_bytes(&key.to_bytes().unwrap()).unwrap();
        assert_eq!(restored, key);
        assert_eq!(restored.frequencies(), table);
    }

    #[test]
    fn rejects_other_versions() {
        let key = KeyFile {
            version: KEY_VERSION + 1,
            entries: vec![('a', 1)],
        };
        let bytes = bincode::serialize(&key).unwrap();
        assert!(matches!(
            KeyFile::from_bytes(&bytes),
            Err(CodecError::KeyFile(_))
        ));
    }

    fn encoded(entries: Vec<(char, u64)>) -> Vec<u8> {
        bincode::serialize(&KeyFile {
            version: KEY_VERSION,
            entries,
        })
        .unwrap()
    }

    #[test]
    fn rejects_overflowing_counts() {
        let bytes = encoded(vec![('a', u64::MAX), ('b', 1), ('c', 1)]);
        assert_eq!(
            KeyFile::from_bytes(&bytes),
            Err(CodecError::KeyFile("symbol counts overflow".to_string()))
        );
    }

    #[test]
    fn rejects_zero_and_duplicate_counts() {
        assert!(matches!(
            KeyFile::from_bytes(&encoded(vec![('a', 3), ('b', 0)])),
            Err(CodecError::KeyFile(_))
        ));
        assert!(matches!(
            KeyFile::from_bytes(&encoded(vec![('a', 3), ('b', 1), ('a', 2)])),
            Err(CodecError::KeyFile(_))
        ));
    }

    #[test]
    fn accepts_counts_up_to_the_limit() {
        let bytes = encoded(vec![('a', u64::MAX - 1), ('b', 1)]);
        let key = KeyFile::from_bytes(&bytes).unwrap();
        assert_eq!(key.frequencies().total(), u64::MAX);
    }

    #[test]
    fn rejects_truncated_bytes() {
        assert!(matches!(
            KeyFile::from_bytes(&[KEY_VERSION, 2]),
            Err(CodecError::KeyFile(_))
        ));
    }
}
