use std::collections::BTreeMap;

if_tracing! {
    use tracing::debug;
}

/// Occurrence count of every symbol seen in a text, ordered by symbol.
///
/// Every symbol of the counted text has exactly one entry, and the counts sum up
/// to the number of symbols in the text.
pub type FrequencyTable = BTreeMap<char, usize>;

pub fn count_frequencies(text: &str) -> FrequencyTable {
    let mut frequencies = FrequencyTable::new();
    for symbol in text.chars() {
        *frequencies.entry(symbol).or_insert(0) += 1;
    }

    if_tracing! {{
        debug!(target = "huffman", distinct = frequencies.len(), "frequency count complete");
    }}

    frequencies
}
