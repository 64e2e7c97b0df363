use bitvec::prelude::*;

use crate::{algorithms::huffman::code_table::CodeTable, compressor::HuffmanError};

if_tracing! {
    use tracing::{debug, info};
}

/// Number of zero bits appended after `raw_bits` bits of codes.
///
/// Always in `1..=8`: a stream that already ends on a byte boundary still gets a full byte of padding.
pub const fn padding_for(raw_bits: usize) -> u8 {
    (8 - raw_bits % 8) as u8
}

/// Encodes `text` with `table` into the packed stream: a one byte padding count, the codes of
/// every symbol, then the padding, all packed most significant bit first.
///
/// # Errors
///
/// Returns [`HuffmanError::UnknownSymbol`] if the text contains a symbol the table has no code for.
pub fn encode(text: &str, table: &CodeTable) -> Result<Vec<u8>, HuffmanError> {
    if_tracing! {{
        debug!(target = "huffman", input_len = text.len(), "encode start");
    }}

    let raw = encode_bits(text, table)?;
    let packed = pack(&raw);

    if_tracing! {{
        info!(target = "huffman", input_len = text.len(), code_bits = raw.len(), output_len = packed.len(), "encode complete");
    }}

    Ok(packed)
}

/// Concatenates the code of every symbol of `text`, in order.
pub fn encode_bits(text: &str, table: &CodeTable) -> Result<BitVec<u8, Msb0>, HuffmanError> {
    let mut bits = BitVec::new();
    for symbol in text.chars() {
        let code = table.code(symbol).ok_or(HuffmanError::UnknownSymbol(symbol))?;
        bits.extend_from_bitslice(code.as_bits());
    }
    Ok(bits)
}

/// Frames raw code bits with the padding header and the padding itself, then packs them into bytes.
pub fn pack(raw: &BitSlice<u8, Msb0>) -> Vec<u8> {
    let padding = padding_for(raw.len());

    let mut stream: BitVec<u8, Msb0> = BitVec::with_capacity(8 + raw.len() + padding as usize);
    stream.extend_from_bitslice(padding.view_bits::<Msb0>());
    stream.extend_from_bitslice(raw);
    stream.resize(stream.len() + padding as usize, false);

    assert!(
        stream.len() % 8 == 0,
        "padded stream is {} bits long, which is not a whole number of bytes",
        stream.len()
    );

    stream.into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::huffman::{code_table::Code, frequency::count_frequencies, tree::build_tree};

    fn table_for(text: &str) -> CodeTable {
        CodeTable::from_tree(&build_tree(&count_frequencies(text)).unwrap())
    }

    #[test]
    fn padding_is_never_zero() {
        assert_eq!(padding_for(0), 8);
        assert_eq!(padding_for(1), 7);
        assert_eq!(padding_for(7), 1);
        assert_eq!(padding_for(8), 8);
        assert_eq!(padding_for(9), 7);
        assert_eq!(padding_for(23), 1);
    }

    #[test]
    fn two_symbol_text_packs_into_three_bytes() {
        // ' ' = 0, 'A' = 1: 11110111 1 + seven padding zeros
        let packed = encode("AAAA AAAA", &table_for("AAAA AAAA")).unwrap();
        assert_eq!(packed, vec![7, 0b1111_0111, 0b1000_0000]);
    }

    #[test]
    fn byte_aligned_codes_still_get_a_padding_byte() {
        let table = table_for("ab");
        let packed = encode("abababab", &table).unwrap();
        assert_eq!(packed.len(), 3);
        assert_eq!(packed[0], 8);
        assert_eq!(packed[2], 0);
    }

    #[test]
    fn abracadabra_length() {
        let text = "abracadabra";
        let table = table_for(text);
        let code_bits = table.weighted_length(&count_frequencies(text));
        let packed = encode(text, &table).unwrap();
        assert_eq!(packed.len(), (8 + code_bits).div_ceil(8));
        assert_eq!(packed[0] as usize, 8 - code_bits % 8);
    }

    #[test]
    fn single_symbol_uses_one_bit_per_symbol() {
        let packed = encode("aaaa", &table_for("aaaa")).unwrap();
        assert_eq!(packed, vec![4, 0]);
    }

    #[test]
    fn empty_text_is_a_header_and_a_padding_byte() {
        assert_eq!(encode("", &table_for("x")).unwrap(), vec![8, 0]);
    }

    #[test]
    fn unknown_symbol_is_reported() {
        let table = CodeTable::from_codes([('a', "0".parse::<Code>().unwrap()), ('b', "1".parse().unwrap())]).unwrap();
        assert_eq!(encode("abc", &table), Err(HuffmanError::UnknownSymbol('c')));
    }
}
