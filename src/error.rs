//! Error type shared by every stage of the codec.

use thiserror::Error;

/// Failures surfaced by the encode and decode pipelines.
///
/// Every variant is fatal for the operation that raised it; no partial
/// artifact or partial text is ever returned alongside one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The frequency table was empty, so no tree root exists.
    #[error("cannot build a Huffman tree from empty input")]
    EmptyInput,

    /// A symbol in the stream has no entry in the code table.
    #[error("symbol {0:?} is not in the code table")]
    UnknownSymbol(char),

    /// The artifact could not be resolved into symbols.
    #[error("malformed stream: {0}")]
    MalformedStream(String),

    /// A persisted key file could not be read back.
    #[error("invalid key file: {0}")]
    KeyFile(String),
}

impl CodecError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        CodecError::MalformedStream(reason.into())
    }

    /// Returns true if the artifact itself was at fault.
    #[inline]
    pub fn is_malformed(&self) -> bool {
        matches!(self, CodecError::MalformedStream(_))
    }
}
