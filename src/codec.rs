use tracing::debug;

use crate::codes::CodeTable;
use crate::decoder;
use crate::error::CodecError;
use crate::frequency::FrequencyTable;
use crate::keyfile::KeyFile;
use crate::packer;
use crate::tree::HuffmanTree;

/// One encoding session: the frequency table of the trained text and the
/// code table derived from it.
///
/// Artifacts carry no code table, so a codec must stay alive (or be
/// restored from a [`KeyFile`]) for as long as its artifacts need decoding.
#[derive(Debug, Clone)]
pub struct HuffmanCodec {
    frequencies: FrequencyTable,
    table: CodeTable,
}

impl HuffmanCodec {
    /// Builds the codes for `text`. Fails with [`CodecError::EmptyInput`]
    /// when `text` is empty.
    pub fn train(text: &str) -> Result<Self, CodecError> {
        Self::from_frequencies(FrequencyTable::from_text(text))
    }

    pub fn from_frequencies(frequencies: FrequencyTable) -> Result<Self, CodecError> {
        let tree = HuffmanTree::build(&frequencies)?;
        let table = CodeTable::from_tree(&tree);
        debug!(
            symbols = frequencies.len(),
            total = frequencies.total(),
            max_code_len = table.max_code_len(),
            "built code table"
        );
        Ok(HuffmanCodec { frequencies, table })
    }

    pub fn from_key_file(key: &KeyFile) -> Result<Self, CodecError> {
        Self::from_frequencies(key.frequencies())
    }

    pub fn compress(&self, text: &str) -> Result<Vec<u8>, CodecError> {
        packer::encode(text, &self.table)
    }

    pub fn decompress(&self, artifact: &[u8]) -> Result<String, CodecError> {
        decoder::decode(artifact, &self.table)
    }

    pub fn code_table(&self) -> &CodeTable {
        &self.table
    }

    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    /// Snapshot from which this codec can be rebuilt later.
    pub fn key_file(&self) -> KeyFile {
        KeyFile::from_frequencies(&self.frequencies)
    }
}

/// Trains on `text` and compresses it in one step.
pub fn compress_text(text: &str) -> Result<(HuffmanCodec, Vec<u8>), CodecError> {
    let codec = HuffmanCodec::train(text)?;
    let artifact = codec.compress(text)?;
    Ok((codec, artifact))
}
