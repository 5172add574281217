//! Decode side: artifact back to the symbol stream.

use tracing::debug;

use crate::bits::BitReader;
use crate::codes::CodeTable;
use crate::error::CodecError;

/// Reads and validates the padding header of an artifact.
pub fn padding_of(artifact: &[u8]) -> Result<u8, CodecError> {
    read_padding(&mut BitReader::new(artifact))
}

fn read_padding(reader: &mut BitReader<'_>) -> Result<u8, CodecError> {
    let padding = reader
        .read_byte()
        .ok_or_else(|| CodecError::malformed("artifact is empty"))?;
    if !(1..=8).contains(&padding) {
        return Err(CodecError::malformed(format!(
            "padding header {padding} is outside 1..=8"
        )));
    }
    Ok(padding)
}

/// Decodes an artifact produced by [`crate::packer::encode`] with the same
/// table.
///
/// Bits accumulate in a candidate buffer until it equals a known code. A
/// buffer longer than every code can never match, so decoding stops there
/// instead of scanning the rest of the stream.
pub fn decode(artifact: &[u8], table: &CodeTable) -> Result<String, CodecError> {
    if table.is_empty() {
        return Err(CodecError::malformed("code table is empty"));
    }

    let mut reader = BitReader::new(artifact);
    let padding = read_padding(&mut reader)?;
    let payload_bits = reader
        .remaining()
        .checked_sub(padding as usize)
        .ok_or_else(|| {
            CodecError::malformed(format!(
                "padding of {padding} bits exceeds the {} payload bits",
                reader.remaining()
            ))
        })?;

    let max_len = table.max_code_len();
    let mut text = String::new();
    let mut candidate = Vec::with_capacity(max_len);

    for _ in 0..payload_bits {
        let bit = reader
            .read_bit()
            .ok_or_else(|| CodecError::malformed("stream ended early"))?;
        candidate.push(bit);

        if let Some(symbol) = table.symbol(&candidate) {
            text.push(symbol);
            candidate.clear();
        } else if candidate.len() >= max_len {
            return Err(CodecError::malformed(format!(
                "no code matches {} bits after {} symbols",
                candidate.len(),
                text.chars().count()
            )));
        }
    }

    if !candidate.is_empty() {
        return Err(CodecError::malformed(format!(
            "{} trailing bits do not form a code",
            candidate.len()
        )));
    }

    debug!(payload_bits, padding, "decoded stream");
    Ok(text)
}
