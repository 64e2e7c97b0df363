use crate::{
    algorithms::huffman::{
        frequency::FrequencyTable,
        queue::{MinQueue, Weighted},
    },
    compressor::HuffmanError,
};

if_tracing! {
    use tracing::debug;
}

/// A node of a Huffman code tree.
///
/// Internal nodes own both of their children; the tree is built bottom-up and never
/// changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    Leaf {
        symbol: char,
        frequency: usize,
    },
    Internal {
        frequency: usize,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
}

impl TreeNode {
    pub const fn leaf(symbol: char, frequency: usize) -> Self {
        Self::Leaf { symbol, frequency }
    }

    /// Joins two subtrees under a new internal node weighing as much as both together.
    pub fn merge(left: TreeNode, right: TreeNode) -> Self {
        Self::Internal {
            frequency: left.frequency() + right.frequency(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub const fn frequency(&self) -> usize {
        match self {
            Self::Leaf { frequency, .. } | Self::Internal { frequency, .. } => *frequency,
        }
    }

    /// Number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf { .. } => 0,
            Self::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

impl Weighted for TreeNode {
    fn weight(&self) -> usize {
        self.frequency()
    }
}

/// Builds the Huffman tree for the given frequencies and returns its root.
///
/// The two lightest nodes are merged until one node is left; the node popped first
/// becomes the left child. A table with a single symbol yields a lone leaf as root.
///
/// # Errors
///
/// Returns [`HuffmanError::EmptyAlphabet`] if the table has no entries.
pub fn build_tree(frequencies: &FrequencyTable) -> Result<TreeNode, HuffmanError> {
    let mut queue: MinQueue<TreeNode> = frequencies
        .iter()
        .map(|(&symbol, &frequency)| TreeNode::leaf(symbol, frequency))
        .collect();

    loop {
        let first = queue.pop().ok_or(HuffmanError::EmptyAlphabet)?;
        match queue.pop() {
            Some(second) => queue.push(TreeNode::merge(first, second)),
            None => {
                if_tracing! {{
                    debug!(target = "huffman", leaves = frequencies.len(), depth = first.depth(), "tree built");
                }}
                return Ok(first);
            }
        }
    }
}
