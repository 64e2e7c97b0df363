use bitvec::prelude::*;

use crate::{
    algorithms::huffman::code_table::{Code, CodeTable},
    compressor::HuffmanError,
};

if_tracing! {
    use tracing::{debug, info, warn};
}

/// Decodes a packed stream produced by [`encode`](super::encoder::encode) with a matching table.
///
/// # Errors
///
/// Returns [`HuffmanError::CorruptedBitstream`] if the padding header is missing or out of range,
/// or if the code bits do not split into codes of `table`.
pub fn decode(data: &[u8], table: &CodeTable) -> Result<String, HuffmanError> {
    if_tracing! {{
        debug!(target = "huffman", input_len = data.len(), "decode start");
    }}

    let result = unpack(data).and_then(|bits| decode_bits(bits, table));

    if_tracing! {{
        match result {
            Ok(ref text) => info!(target = "huffman", input_len = data.len(), output_len = text.len(), "decode complete"),
            Err(ref err) => warn!(target = "huffman", error = %err, "decode failed"),
        }
    }}

    result
}

/// Strips the padding header and the trailing padding, returning the code bits in between.
pub fn unpack(data: &[u8]) -> Result<&BitSlice<u8, Msb0>, HuffmanError> {
    let Some((&padding, body)) = data.split_first() else {
        return Err(HuffmanError::CorruptedBitstream("stream has no padding header".to_string()));
    };
    if !(1..=8).contains(&padding) {
        return Err(HuffmanError::CorruptedBitstream(format!(
            "padding header is {}, expected 1 to 8",
            padding
        )));
    }

    let bits = body.view_bits::<Msb0>();
    let padding = padding as usize;
    if padding > bits.len() {
        return Err(HuffmanError::CorruptedBitstream(format!(
            "padding header claims {} bits but only {} follow it",
            padding,
            bits.len()
        )));
    }

    Ok(&bits[..bits.len() - padding])
}

/// Reads codes off `bits` greedily, emitting a symbol as soon as the collected bits form a code.
pub fn decode_bits(bits: &BitSlice<u8, Msb0>, table: &CodeTable) -> Result<String, HuffmanError> {
    let mut text = String::new();
    let mut candidate = Code::new();

    for (position, bit) in bits.iter().by_vals().enumerate() {
        candidate.push(bit);
        if let Some(symbol) = table.symbol(&candidate) {
            text.push(symbol);
            candidate.clear();
        } else if candidate.len() >= table.max_code_len() {
            return Err(HuffmanError::CorruptedBitstream(format!(
                "bits {} ending at bit {} match no code",
                candidate,
                position
            )));
        }
    }

    if !candidate.is_empty() {
        return Err(HuffmanError::CorruptedBitstream(format!(
            "stream ends inside a code, {} bits ({}) left over",
            candidate.len(),
            candidate
        )));
    }

    Ok(text)
}
