pub use anyhow::Result;
use thiserror::Error;

/// Represents an error emitted while building a code, encoding text or decoding a bitstream.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HuffmanError {
    /// A code tree was requested for text without a single symbol.
    #[error("cannot build a prefix code from empty text")]
    EmptyAlphabet,

    /// The bitstream given to the decoder could not be split into codes of the table.
    ///
    /// The argument is a string that describes what went wrong.
    #[error("Input data was malformed, and could not be decoded: {0}")]
    CorruptedBitstream(String),

    /// The text contains a symbol that has no code in the table used for encoding.
    #[error("symbol {0:?} has no code in the code table")]
    UnknownSymbol(char),

    /// Decompression was attempted before any code table was built or loaded.
    #[error("no code table is resident; compress something or load a table first")]
    MissingCodeTable,

    /// A code table loaded from outside the session is not a usable prefix code.
    #[error("invalid code table: {0}")]
    InvalidCodeTable(String),
}

/// Represents shared behavior for all text compressors.
///
/// Provides a method [`compress_text`](Compressor::compress_text) to compress text and
/// [`decompress_bytes`](Compressor::decompress_bytes) to decompress data.
///
/// # Note
///
/// A compressor may keep state between the two calls. Huffman coding keeps the code table
/// built by the last compression resident, and decompression reads it back.
pub trait Compressor {
    /// Compresses the given text and returns the encoded data.
    ///
    /// # Errors
    ///
    /// Returns an error if the text cannot be encoded, for instance when it is empty.
    fn compress_text(&mut self, text: &str) -> Result<Vec<u8>>;

    /// Decompresses a given byte slice and returns the decoded text.
    ///
    /// # Errors
    ///
    /// Returns an error if the input data was malformed, or if the compressor has no state to decode with.
    fn decompress_bytes(&mut self, data: &[u8]) -> Result<String>;

    /// Returns the name of the compressor algorithm.
    fn compressor_name(&self) -> String {
        core::any::type_name::<Self>().to_string()
    }

    /// Performs a round-trip test on the compressor, keeping the compressor's state between both halves.
    ///
    /// `store` receives the compressed data and returns the bytes to decompress, which lets the
    /// caller send them through a file or any other medium first.
    fn test_roundtrip_through<'orig, F>(&mut self, text: &'orig str, store: F) -> Result<RoundTripTestResult<'orig>>
    where
        Self: Sized,
        F: FnOnce(&[u8]) -> Result<Vec<u8>>,
    {
        let compressed = store(&self.compress_text(text)?)?;
        let decompressed = self.decompress_bytes(&compressed)?;
        let equal = text == decompressed;

        Ok(RoundTripTestResult {
            equal,
            original: text,
            compressed,
            decompressed,
        })
    }

    /// Performs an in-memory round-trip test on the compressor.
    #[cfg(test)]
    fn test_roundtrip<'orig>(&mut self, text: &'orig str) -> Result<RoundTripTestResult<'orig>>
    where
        Self: Sized,
    {
        self.test_roundtrip_through(text, |compressed| Ok(compressed.to_vec()))
    }
}

/// Represents the result of a round-trip test.
///
/// Use accessor methods to retrieve the [`result`][RoundTripTestResult::is_successful],
/// the [`original text`][RoundTripTestResult::get_original],
/// the [`compressed data`][RoundTripTestResult::get_compressed],
/// and the [`decompressed text`][RoundTripTestResult::get_decompressed].
#[derive(Clone, Debug, Hash)]
pub struct RoundTripTestResult<'orig> {
    pub(crate) equal: bool,
    pub(crate) original: &'orig str,
    pub(crate) compressed: Vec<u8>,
    pub(crate) decompressed: String,
}

impl<'orig> RoundTripTestResult<'orig> {
    /// Whether the original and decompressed text were equal.
    pub const fn is_successful(&self) -> bool {
        self.equal
    }

    /// The text before any action was taken.
    pub const fn get_original(&self) -> &'orig str {
        self.original
    }

    /// The data after it has been encoded by the compressor.
    pub fn get_compressed(&self) -> &[u8] {
        self.compressed.as_slice()
    }

    /// The text after it has been decoded by the decompressor.
    pub fn get_decompressed(&self) -> &str {
        self.decompressed.as_str()
    }

    /// Compressed size over original size in bytes. Zero for empty originals.
    pub fn ratio(&self) -> f64 {
        if self.original.is_empty() {
            return 0.0;
        }
        self.compressed.len() as f64 / self.original.len() as f64
    }
}
