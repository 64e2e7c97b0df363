use core::{fmt, str::FromStr};
use std::collections::{BTreeMap, HashMap};

use bitvec::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    algorithms::huffman::{frequency::FrequencyTable, tree::TreeNode},
    compressor::HuffmanError,
};

if_tracing! {
    use tracing::debug;
}

/// The bit sequence assigned to one symbol, first bit first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Code(BitVec<u8, Msb0>);

impl Code {
    pub fn new() -> Self {
        Self(BitVec::new())
    }

    pub fn push(&mut self, bit: bool) {
        self.0.push(bit);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_bits(&self) -> &BitSlice<u8, Msb0> {
        self.0.as_bitslice()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.0.iter().by_vals() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = HuffmanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut code = Code::new();
        for c in s.chars() {
            match c {
                '0' => code.push(false),
                '1' => code.push(true),
                other => {
                    return Err(HuffmanError::InvalidCodeTable(format!(
                        "code {:?} contains {:?}, only '0' and '1' are allowed",
                        s, other
                    )));
                }
            }
        }
        Ok(code)
    }
}

/// Bijective mapping between symbols and their prefix-free codes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<char, Code>,
    symbols: HashMap<Code, char>,
    max_code_len: usize,
}

impl CodeTable {
    /// Walks the tree depth-first and records the path to each leaf, `0` for left and `1` for right.
    ///
    /// A tree that is a single leaf has an empty path to its only symbol; that symbol gets the code `0`.
    pub fn from_tree(root: &TreeNode) -> Self {
        let mut codes = BTreeMap::new();
        let mut path = Code::new();
        assign_codes(root, &mut path, &mut codes);

        let table = Self::from_valid_codes(codes);
        if_tracing! {{
            debug!(target = "huffman", symbols = table.len(), max_code_len = table.max_code_len, "code table generated");
        }}
        table
    }

    /// Builds a table from codes that did not come from a tree, checking that they form a prefix code.
    ///
    /// # Errors
    ///
    /// Returns [`HuffmanError::InvalidCodeTable`] on empty codes, repeated symbols, repeated codes,
    /// or a code that is a prefix of another one.
    pub fn from_codes<I>(entries: I) -> Result<Self, HuffmanError>
    where
        I: IntoIterator<Item = (char, Code)>,
    {
        let mut codes = BTreeMap::new();
        for (symbol, code) in entries {
            if code.is_empty() {
                return Err(HuffmanError::InvalidCodeTable(format!("symbol {:?} has an empty code", symbol)));
            }
            if codes.insert(symbol, code).is_some() {
                return Err(HuffmanError::InvalidCodeTable(format!("symbol {:?} appears twice", symbol)));
            }
        }

        // after sorting, a code that prefixes any other code also prefixes its direct successor
        let mut sorted: Vec<(String, char)> = codes.iter().map(|(&symbol, code)| (code.to_string(), symbol)).collect();
        sorted.sort();
        for pair in sorted.windows(2) {
            let ((shorter, a), (longer, b)) = (&pair[0], &pair[1]);
            if longer.starts_with(shorter.as_str()) {
                return Err(HuffmanError::InvalidCodeTable(format!(
                    "code {} of {:?} is a prefix of code {} of {:?}",
                    shorter, a, longer, b
                )));
            }
        }

        Ok(Self::from_valid_codes(codes))
    }

    fn from_valid_codes(codes: BTreeMap<char, Code>) -> Self {
        let symbols = codes.iter().map(|(&symbol, code)| (code.clone(), symbol)).collect();
        let max_code_len = codes.values().map(Code::len).max().unwrap_or(0);
        Self {
            codes,
            symbols,
            max_code_len,
        }
    }

    pub fn code(&self, symbol: char) -> Option<&Code> {
        self.codes.get(&symbol)
    }

    pub fn symbol(&self, code: &Code) -> Option<char> {
        self.symbols.get(code).copied()
    }

    /// Length of the longest code. No valid encoding needs a longer candidate.
    pub const fn max_code_len(&self) -> usize {
        self.max_code_len
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Iterates over `(symbol, code)` pairs in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &Code)> {
        self.codes.iter().map(|(&symbol, code)| (symbol, code))
    }

    /// Number of bits the text described by `frequencies` occupies once encoded, padding excluded.
    pub fn weighted_length(&self, frequencies: &FrequencyTable) -> usize {
        frequencies
            .iter()
            .map(|(symbol, &count)| count * self.codes.get(symbol).map_or(0, Code::len))
            .sum()
    }
}

fn assign_codes(node: &TreeNode, path: &mut Code, codes: &mut BTreeMap<char, Code>) {
    match node {
        TreeNode::Leaf { symbol, .. } => {
            let code = if path.is_empty() {
                let mut fallback = Code::new();
                fallback.push(false);
                fallback
            } else {
                path.clone()
            };
            codes.insert(*symbol, code);
        }
        TreeNode::Internal { left, right, .. } => {
            path.push(false);
            assign_codes(left, path, codes);
            path.0.pop();

            path.push(true);
            assign_codes(right, path, codes);
            path.0.pop();
        }
    }
}

/// On-disk form of a [`CodeTable`], written next to compressed files as `<stem>.codes.json`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StoredCodeTable {
    /// Version of the program that wrote the table.
    pub version: String,

    /// One entry per symbol, ordered by symbol.
    pub codes: Vec<StoredCode>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StoredCode {
    pub symbol: char,
    pub code: String,
}

impl From<&CodeTable> for StoredCodeTable {
    fn from(table: &CodeTable) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            codes: table
                .iter()
                .map(|(symbol, code)| StoredCode {
                    symbol,
                    code: code.to_string(),
                })
                .collect(),
        }
    }
}

impl TryFrom<StoredCodeTable> for CodeTable {
    type Error = HuffmanError;

    fn try_from(stored: StoredCodeTable) -> Result<Self, Self::Error> {
        if stored.codes.is_empty() {
            return Err(HuffmanError::InvalidCodeTable("table has no codes".to_string()));
        }
        let entries = stored
            .codes
            .iter()
            .map(|entry| Ok((entry.symbol, entry.code.parse::<Code>()?)))
            .collect::<Result<Vec<_>, HuffmanError>>()?;
        CodeTable::from_codes(entries)
    }
}
