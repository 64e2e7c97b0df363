use std::fs;

use crate::algorithms::HuffmanCoding;
use crate::cli::{EncodeArgs, Result, code_table_path, compressed_path, ensure_distinct, read_text, save_code_table};

pub fn encode(args: EncodeArgs) -> Result<()> {
    let input_path = &args.input_path;
    let output_path = match args.output {
        Some(path) => path,
        None => compressed_path(input_path)?,
    };
    ensure_distinct(input_path, &output_path)?;

    let text = read_text(input_path)?;
    let mut session = HuffmanCoding::new();
    let compressed = session.huffman_encode(&text)?;
    fs::write(&output_path, &compressed)?;
    println!("Compressed {} into {}", input_path.display(), output_path.display());

    match session.code_table() {
        Some(table) if !args.no_table => {
            let table_path = code_table_path(&output_path)?;
            save_code_table(table, &table_path)?;
            println!("Code table: {}", table_path.display());
        }
        _ => {}
    }

    if_tracing! {{
        tracing::info!(event = "encode_complete", input = %input_path.display(), output = %output_path.display(), original_len = text.len(), compressed_len = compressed.len(), "encode finished");
    }}

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::tests::scratch_dir;

    #[test]
    fn writes_stream_and_table() {
        let dir = scratch_dir("encode-default");
        let input = dir.join("story.txt");
        fs::write(&input, "AAAA AAAA\n").unwrap();

        encode(EncodeArgs {
            input_path: input,
            output: None,
            no_table: false,
        })
        .unwrap();

        assert_eq!(fs::read(dir.join("story.bin")).unwrap(), vec![7, 0b1111_0111, 0b1000_0000]);
        assert!(dir.join("story.codes.json").exists());
    }

    #[test]
    fn no_table_skips_the_sidecar() {
        let dir = scratch_dir("encode-no-table");
        let input = dir.join("story.txt");
        let output = dir.join("packed.huff");
        fs::write(&input, "abracadabra").unwrap();

        encode(EncodeArgs {
            input_path: input,
            output: Some(output.clone()),
            no_table: true,
        })
        .unwrap();

        assert_eq!(fs::read(&output).unwrap().len(), 4);
        assert!(!dir.join("packed.codes.json").exists());
    }

    #[test]
    fn output_naming_the_input_is_refused() {
        let dir = scratch_dir("encode-over-input");
        let input = dir.join("notes.txt");
        fs::write(&input, "do not overwrite").unwrap();

        let result = encode(EncodeArgs {
            input_path: input.clone(),
            output: Some(dir.join(".").join("notes.txt")),
            no_table: true,
        });
        assert!(matches!(result, Err(crate::cli::CliError::InvalidPath(_))));
        assert_eq!(fs::read_to_string(&input).unwrap(), "do not overwrite");
    }

    #[test]
    fn empty_file_is_rejected() {
        let dir = scratch_dir("encode-empty");
        let input = dir.join("blank.txt");
        fs::write(&input, " \n\t\n").unwrap();

        let result = encode(EncodeArgs {
            input_path: input,
            output: None,
            no_table: false,
        });
        assert!(result.is_err());
        assert!(!dir.join("blank.bin").exists());
    }
}
