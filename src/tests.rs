use crate::compressor::Compressor;

const SHORT_DATA: &str = "Hello, World!";
const LONG_DATA: &str =
    "This is a longer string to test the huffman coding algorithm. It should be able to handle various lengths and characters.";
const REPEATING_DATA: &str = "a baba da babble da dabble babble doo bee babble dabble dooble dee boo dooble daddle boo";
const SINGLE_SYMBOL_DATA: &str = "aaaa";
const SINGLE_CHAR_DATA: &str = "x";
const ABRACADABRA: &str = "abracadabra";
const BYTE_PACKING_DATA: &str = "AAAA AAAA";
const WHITESPACE_DATA: &str = "tabs\tand\nnewlines\r\n  inside\u{0}nul";
const UNICODE_DATA: &str = "ação, naïve café, Ελληνικά, 日本語, 🦀🦀🦀";

const TEST_CASES: &[(&str, &str)] = &[
    (REPEATING_DATA, "repeating data"),
    (SHORT_DATA, "short data"),
    (LONG_DATA, "long data"),
    (SINGLE_SYMBOL_DATA, "single symbol data"),
    (SINGLE_CHAR_DATA, "single char data"),
    (ABRACADABRA, "abracadabra"),
    (BYTE_PACKING_DATA, "byte packing data"),
    (WHITESPACE_DATA, "whitespace data"),
    (UNICODE_DATA, "unicode data"),
];

pub fn roundtrip_test<C: Compressor>(mut compressor: C) {
    for &(test_case, test_name) in TEST_CASES {
        match compressor.test_roundtrip(test_case) {
            Ok(eq) => {
                eprintln!(
                    "Compression ratio for {} with {}: {:.2}%",
                    test_name,
                    compressor.compressor_name(),
                    eq.ratio() * 100.0
                );

                assert!(
                    eq.is_successful(),
                    "Roundtrip test for {} failed at {}:\n\tExpected: {:?}\n\tGot: {:?}\n\tCompressed: {:?}",
                    compressor.compressor_name(),
                    test_name,
                    eq.get_original(),
                    eq.get_decompressed(),
                    eq.get_compressed(),
                );
            }
            Err(e) => {
                panic!(
                    "Fatal error while trying to compress/decompress {} with {}: {}",
                    test_name,
                    compressor.compressor_name(),
                    e
                );
            }
        }
    }
}
