//! Translation — codon to amino-acid code
//!
//! The binary carries a custom 31-entry codon table as two parallel
//! arrays; codons outside it translate to `?`. Misses are expected and
//! meaningful (untranslated codons), not an error.

use std::collections::HashMap;

/// Codons defined by the binary, in table order.
pub const CODON_KEYS: [&str; 31] = [
    "UUU", "UUC", "UUA", "UUG", "UCU", "UCC", "UCA", "UCG", "UAU", "UAC", "UAA", "UAG", "UGU",
    "UGC", "UGA", "UGG", "CUU", "CUC", "CUA", "CUG", "CCU", "CCC", "CCA", "CCG", "CAU", "CAC",
    "CAA", "CAG", "CGU", "CGC", "CGA",
];

/// Amino-acid codes, parallel to [`CODON_KEYS`].
pub const CODON_VALS: [u8; 31] = [
    0x02, 0x03, 0x09, 0x0c, 0x0f, 0x11, 0x14, 0x17, 0x1b, 0x27, 0x34, 0x35, 0x39, 0x3c, 0x3f,
    0x42, 0x44, 0x48, 0x4c, 0x4e, 0x4f, 0x50, 0x55, 0x56, 0x5d, 0x6a, 0x71, 0x78, 0x7a, 0x7b,
    0x7c,
];

/// Code substituted for codons missing from the table.
pub const MISS_SENTINEL: u8 = b'?';

/// Build the codon → code map from the parallel arrays.
pub fn codon_table() -> HashMap<&'static str, u8> {
    CODON_KEYS.iter().copied().zip(CODON_VALS).collect()
}

/// Translate each codon through the table, substituting the sentinel on a
/// miss.
pub fn translate(codons: &[&str], table: &HashMap<&'static str, u8>, sentinel: u8) -> Vec<u8> {
    codons
        .iter()
        .map(|&c| table.get(c).copied().unwrap_or(sentinel))
        .collect()
}
