pub mod huffman;

pub use self::huffman::HuffmanCoding;
