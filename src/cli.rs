//! cli component of the huffpack project.
//!
//! lines starting with `> ` denote commands that are valid under the current implementation.
//! `$exename` stands for the executable name, `<description>` denotes a required argument, while
//! `[description]` denotes an optional argument.
//!
//! # Compression
//!
//! > `$exename enc <path to text file> [--output <path>] [--no-table]`
//!
//! the text is read as UTF-8 and trailing whitespace is stripped before counting symbols.
//! the compressed stream is written to `<stem>.bin` next to the input unless `--output` says otherwise.
//! the stream holds only a padding header and the codes, so the code table is written separately
//! to `<output stem>.codes.json`. passing `--no-table` skips that file, leaving the stream undecodable
//! by anyone who does not already know the codes.
//!
//! # Decompression
//!
//! > `$exename dec <path to compressed file> --table <path to codes.json> [--output <path>]`
//!
//! the table is loaded, checked to be a prefix code, and used to decode the stream.
//! the text is written to `<stem>_decompressed.txt` next to the input unless `--output` says otherwise.
//!
//! # Testing
//!
//! > `$exename test <path to text file>`
//!
//! compresses the file to `<stem>.bin`, reads that file back and decompresses it with the table still
//! held by the same session into `<stem>_decompressed.txt`, then compares the result with the stripped input.
//! no table file is involved.
//!
//! # Code tables
//!
//! > `$exename codes <path to text file> [--detailed]`
//!
//! prints the code of every symbol of the file. `--detailed` adds symbol counts and the encoded size.
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::algorithms::huffman::code_table::{CodeTable, StoredCodeTable};
use crate::compressor::HuffmanError;

pub mod codes;
pub mod decode;
pub mod encode;

/// Error types for CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Huffman(#[from] HuffmanError),

    #[error(transparent)]
    Compressor(#[from] anyhow::Error),

    #[error("Invalid path: {0}")]
    InvalidPath(PathBuf),

    #[error("Roundtrip of {0} did not reproduce the input")]
    RoundTripMismatch(PathBuf),
}

pub type Result<T> = std::result::Result<T, CliError>;

/// CLI arguments for the huffpack application
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Supported commands for huffpack
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode (compress) a text file
    #[command(alias = "enc")]
    Encode(EncodeArgs),

    /// Decode (decompress) a file using a saved code table
    #[command(alias = "dec")]
    Decode(DecodeArgs),

    /// Compress and decompress a text file in one session and compare
    Test(TestArgs),

    /// Print the code table built for a text file
    Codes(CodesArgs),
}

/// Arguments specific to the encode command
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Path to the input text file
    pub input_path: PathBuf,

    /// Path for the compressed file [default: <input stem>.bin]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Do not write the <output stem>.codes.json code table
    #[arg(long)]
    pub no_table: bool,
}

/// Arguments specific to the decode command
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Path to the compressed file
    pub input_path: PathBuf,

    /// Code table written when the file was encoded
    #[arg(long)]
    pub table: PathBuf,

    /// Path for the decompressed text [default: <input stem>_decompressed.txt]
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments specific to the test command
#[derive(Args, Debug)]
pub struct TestArgs {
    /// Path to the original text file
    pub input_path: PathBuf,
}

/// Arguments specific to the codes command
#[derive(Args, Debug)]
pub struct CodesArgs {
    /// Path to the text file
    pub input_path: PathBuf,

    /// Show symbol counts and the encoded size
    #[arg(long)]
    pub detailed: bool,
}

/// Reads a text file with trailing whitespace stripped.
pub fn read_text(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path)?;
    Ok(text.trim_end().to_string())
}

fn file_stem(path: &Path) -> Result<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .ok_or_else(|| CliError::InvalidPath(path.to_path_buf()))
}

/// `notes.txt` compresses to `notes.bin`.
pub fn compressed_path(input: &Path) -> Result<PathBuf> {
    let output = input.with_extension("bin");
    ensure_distinct(input, &output)?;
    Ok(output)
}

/// `notes.bin` decompresses to `notes_decompressed.txt`.
pub fn decompressed_path(input: &Path) -> Result<PathBuf> {
    let stem = file_stem(input)?;
    Ok(input.with_file_name(format!("{}_decompressed.txt", stem)))
}

/// The code table of `notes.bin` lives in `notes.codes.json`.
pub fn code_table_path(output: &Path) -> Result<PathBuf> {
    let stem = file_stem(output)?;
    Ok(output.with_file_name(format!("{}.codes.json", stem)))
}

/// Refuses to write an output over the file it is read from, however either path is spelled.
pub fn ensure_distinct(input: &Path, output: &Path) -> Result<()> {
    let same_file = match (fs::canonicalize(input), fs::canonicalize(output)) {
        (Ok(input), Ok(output)) => input == output,
        // an output that does not exist yet cannot be the input
        _ => input == output,
    };
    if same_file {
        return Err(CliError::InvalidPath(output.to_path_buf()));
    }
    Ok(())
}

pub fn save_code_table(table: &CodeTable, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(&StoredCodeTable::from(table))?;
    fs::write(path, json)?;
    Ok(())
}

pub fn load_code_table(path: &Path) -> Result<CodeTable> {
    let data = fs::read(path)?;
    let stored: StoredCodeTable = serde_json::from_slice(&data)?;
    Ok(CodeTable::try_from(stored)?)
}
