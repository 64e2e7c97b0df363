use std::fmt::Display;

use anyhow::anyhow;

use crate::compressor::{Compressor, HuffmanError, Result};

pub mod code_table;
pub mod decoder;
pub mod encoder;
pub mod frequency;
pub mod queue;
pub mod tree;

use self::{code_table::CodeTable, frequency::count_frequencies, tree::build_tree};

if_tracing! {
    use tracing::debug;
}

/// A Huffman coding session.
///
/// Compression builds a fresh code table from the text and keeps it resident; the compressed
/// stream carries no table, so decompression decodes with whatever table the session holds.
#[derive(Clone, Debug, Default)]
pub struct HuffmanCoding {
    table: Option<CodeTable>,
}

impl HuffmanCoding {
    pub const fn new() -> Self {
        Self { table: None }
    }

    /// Starts a session that decodes with a table built elsewhere.
    pub const fn with_table(table: CodeTable) -> Self {
        Self { table: Some(table) }
    }

    pub const fn code_table(&self) -> Option<&CodeTable> {
        self.table.as_ref()
    }

    pub fn huffman_encode(&mut self, text: &str) -> Result<Vec<u8>, HuffmanError> {
        let frequencies = count_frequencies(text);
        let root = build_tree(&frequencies)?;
        let table = CodeTable::from_tree(&root);
        let packed = encoder::encode(text, &table)?;

        if_tracing! {{
            debug!(target = "huffman", symbols = table.len(), "code table resident");
        }}

        self.table = Some(table);
        Ok(packed)
    }

    pub fn huffman_decode(&mut self, data: &[u8]) -> Result<String, HuffmanError> {
        let table = self.table.as_ref().ok_or(HuffmanError::MissingCodeTable)?;
        decoder::decode(data, table)
    }
}

impl Compressor for HuffmanCoding {
    fn compress_text(&mut self, text: &str) -> Result<Vec<u8>> {
        self.huffman_encode(text).map_err(|e| anyhow!(e))
    }

    fn decompress_bytes(&mut self, data: &[u8]) -> Result<String> {
        self.huffman_decode(data).map_err(|e| anyhow!(e))
    }

    fn compressor_name(&self) -> String {
        self.to_string()
    }
}

impl Display for HuffmanCoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Huffman Coding")
    }
}
