//! Encode side: symbol stream to padded, byte-aligned artifact.

use tracing::debug;

use crate::bits::BitWriter;
use crate::codes::CodeTable;
use crate::error::CodecError;

/// Width of the padding header at the front of every artifact.
pub const HEADER_BITS: usize = 8;

/// Zero bits appended after `encoded_bits` of payload.
///
/// Always 1..=8: a payload that is already byte-aligned still gets a full
/// byte of padding, which is what the decoder expects.
pub fn padding_for(encoded_bits: usize) -> u8 {
    (8 - encoded_bits % 8) as u8
}

/// Encodes `text` with `table` into the artifact layout
/// `[padding: 8 bits][codes...][padding zero bits]`.
pub fn encode(text: &str, table: &CodeTable) -> Result<Vec<u8>, CodecError> {
    let codes = text
        .chars()
        .map(|symbol| table.code(symbol).ok_or(CodecError::UnknownSymbol(symbol)))
        .collect::<Result<Vec<_>, _>>()?;

    let encoded_bits: usize = codes.iter().map(|code| code.len()).sum();
    let padding = padding_for(encoded_bits);
    let total_bits = HEADER_BITS + encoded_bits + padding as usize;

    let mut writer = BitWriter::with_capacity(total_bits / 8);
    writer.write_byte(padding);
    for code in codes {
        writer.write_bits(code);
    }
    writer.write_zeros(padding as usize);
    debug_assert!(writer.is_aligned());

    debug!(symbols = text.chars().count(), encoded_bits, padding, "encoded stream");
    Ok(writer.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::FrequencyTable;
    use crate::tree::HuffmanTree;

    fn table_for(text: &str) -> CodeTable {
        let tree = HuffmanTree::build(&FrequencyTable::from_text(text)).unwrap();
        CodeTable::from_tree(&tree)
    }

    #[test]
    fn padding_range() {
        assert_eq!(padding_for(0), 8);
        assert_eq!(padding_for(1), 7);
        assert_eq!(padding_for(7), 1);
        assert_eq!(padding_for(8), 8);
        assert_eq!(padding_for(9), 7);
    }

    #[test]
    fn aaabbc_layout() {
        // a=0 c=10 b=11 gives 000 11 11 10, nine bits, seven of padding.
        let bytes = encode("aaabbc", &table_for("aaabbc")).unwrap();
        assert_eq!(bytes, vec![0b0000_0111, 0b0001_1111, 0b0000_0000]);
    }

    #[test]
    fn aligned_payload_gets_full_padding_byte() {
        // Eight symbols of one bit each.
        let bytes = encode("aaaaaaaa", &table_for("a")).unwrap();
        assert_eq!(bytes, vec![8, 0, 0]);
    }

    #[test]
    fn unknown_symbol() {
        let err = encode("abx", &table_for("ab")).unwrap_err();
        assert_eq!(err, CodecError::UnknownSymbol('x'));
    }

    #[test]
    fn length_is_header_plus_padded_payload() {
        let text = "mississippi river";
        let table = table_for(text);
        let encoded_bits: usize = text.chars().map(|c| table.code(c).unwrap().len()).sum();
        let bytes = encode(text, &table).unwrap();
        assert_eq!(
            bytes.len() * 8,
            HEADER_BITS + encoded_bits + padding_for(encoded_bits) as usize
        );
    }
}
