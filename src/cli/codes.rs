use crate::algorithms::huffman::{
    code_table::CodeTable, encoder::padding_for, frequency::count_frequencies, tree::build_tree,
};
use crate::cli::{CodesArgs, Result, read_text};

pub fn codes(args: CodesArgs) -> Result<()> {
    let text = read_text(&args.input_path)?;
    let frequencies = count_frequencies(&text);
    let table = CodeTable::from_tree(&build_tree(&frequencies)?);

    for (symbol, code) in table.iter() {
        if args.detailed {
            let count = frequencies.get(&symbol).copied().unwrap_or(0);
            println!("{:?}\t{}\tcount: {}\tbits: {}", symbol, code, count, count * code.len());
        } else {
            println!("{:?}\t{}", symbol, code);
        }
    }

    if args.detailed {
        let code_bits = table.weighted_length(&frequencies);
        println!(
            "\nSymbols: {}\nCode bits: {}\nCompressed size: {} bytes",
            table.len(),
            code_bits,
            (8 + code_bits + usize::from(padding_for(code_bits))) / 8
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{CliError, tests::scratch_dir};
    use crate::compressor::HuffmanError;
    use std::fs;

    #[test]
    fn prints_codes_for_a_file() {
        let dir = scratch_dir("codes");
        let input = dir.join("input.txt");
        fs::write(&input, "abracadabra").unwrap();

        codes(CodesArgs {
            input_path: input,
            detailed: true,
        })
        .unwrap();
    }

    #[test]
    fn empty_file_has_no_codes() {
        let dir = scratch_dir("codes-empty");
        let input = dir.join("input.txt");
        fs::write(&input, "\n").unwrap();

        let result = codes(CodesArgs {
            input_path: input,
            detailed: false,
        });
        assert!(matches!(result, Err(CliError::Huffman(HuffmanError::EmptyAlphabet))));
    }
}
