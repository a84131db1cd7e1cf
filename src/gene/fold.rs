//! XOR folding
//!
//! The binary folds the translated codes with a position-dependent
//! keystream before comparing against its stored fingerprint. XOR with the
//! same keystream is self-inverse, so the one function below both folds
//! and unfolds.

/// Keystream byte for position `i`: `(i·11 + 31) mod 128`.
pub fn keystream(i: usize) -> u8 {
    ((i * 11 + 31) & 0x7f) as u8
}

/// XOR each code with its keystream byte.
pub fn xor_fold(codes: &[u8]) -> Vec<u8> {
    codes
        .iter()
        .enumerate()
        .map(|(i, &c)| c ^ keystream(i))
        .collect()
}
