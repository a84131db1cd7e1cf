//! Codon reordering — the mutation lives here
//!
//! The binary permutes codons before translation. Its table is the
//! identity except that entries 4 and 11 are transposed; swapping them
//! back undoes the single injected fault.

/// Number of codons in the strand.
pub const N_CODONS: usize = 36;

/// Permutation table as found in the binary. Entries 4 and 11 are swapped.
pub const PERM: [usize; N_CODONS] = [
    0, 1, 2, 3, 11, 5, 6, 7, 8, 9, 10, 4, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25,
    26, 27, 28, 29, 30, 31, 32, 33, 34, 35,
];

/// First transposed position.
pub const SWAP_A: usize = 4;
/// Second transposed position.
pub const SWAP_B: usize = 11;

/// Undo a known transposition: swap the entries at `a` and `b` back.
pub fn correct_permutation(perm: &[usize; N_CODONS], a: usize, b: usize) -> [usize; N_CODONS] {
    let mut fixed = *perm;
    fixed.swap(a, b);
    fixed
}

/// Apply a permutation: output position `i` takes `codons[perm[i]]`.
/// `perm` must be a bijection on the codon indices; an out-of-range entry
/// panics on the index.
pub fn reorder<'a>(codons: &[&'a str], perm: &[usize]) -> Vec<&'a str> {
    perm.iter().map(|&i| codons[i]).collect()
}
