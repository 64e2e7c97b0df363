use std::fs;

use crate::algorithms::HuffmanCoding;
use crate::cli::{DecodeArgs, Result, decompressed_path, ensure_distinct, load_code_table};

pub fn decode(args: DecodeArgs) -> Result<()> {
    let input_path = &args.input_path;
    let output_path = match args.output {
        Some(path) => path,
        None => decompressed_path(input_path)?,
    };
    ensure_distinct(input_path, &output_path)?;

    let compressed_data = fs::read(input_path)?;
    let table = load_code_table(&args.table)?;
    let text = HuffmanCoding::with_table(table).huffman_decode(&compressed_data)?;
    fs::write(&output_path, &text)?;
    println!("Decompressed {} into {}", input_path.display(), output_path.display());

    if_tracing! {{
        tracing::info!(event = "decode_complete", input = %input_path.display(), output = %output_path.display(), decompressed_len = text.len(), "decode finished");
    }}

    Ok(())
}
