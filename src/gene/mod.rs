//! "The Corrupted Gene" — DNA pipeline decoder
//!
//! The challenge binary runs a hardcoded strand through the central dogma:
//! transcription → codon reordering → translation → XOR folding, then
//! compares against a stored fingerprint. The reordering table carries one
//! injected transposition; with it undone the pipeline reads out the flag.
//!
//! The binary also ships a codon-frequency analyser and a structural
//! validator. Both are decoys with no effect on the check and are not
//! reproduced here.

mod codon;
mod fold;
mod perm;
mod transcript;

pub use codon::{codon_table, translate, CODON_KEYS, CODON_VALS, MISS_SENTINEL};
pub use fold::{keystream, xor_fold};
pub use perm::{correct_permutation, reorder, N_CODONS, PERM, SWAP_A, SWAP_B};
pub use transcript::{split_codons, transcribe};

/// Symbols per codon.
pub const CODON_WIDTH: usize = 3;

/// The DNA template strand (3'→5') from the binary's data section.
pub const DNA: &str = "GATGGAGGCATCACAACTAGAAATAAGGTTGAGGGCGTGGCAACCATGGCTATTAGGAAAGGAGTGGACGTCAGCGGTGGGGCTAACACGATAGAAAGTACAGCGGTA";

/// Folded fingerprint the binary checks its pipeline output against.
/// Under the corrected permutation the folded sequence reproduces it
/// byte for byte, so the fingerprint doubles as the flag.
pub const TARGET: [u8; N_CODONS] = [
    0x53, 0x65, 0x63, 0x75, 0x72, 0x69, 0x6e, 0x65, 0x74, 0x73, 0x45, 0x4e, 0x49, 0x54, 0x7b,
    0x63, 0x33, 0x6e, 0x74, 0x72, 0x34, 0x6c, 0x5f, 0x64, 0x30, 0x67, 0x6d, 0x34, 0x5f, 0x62,
    0x72, 0x30, 0x6b, 0x33, 0x6e, 0x7d,
];

/// Run the full pipeline with the corrected permutation and return the
/// decoded flag.
pub fn decode_flag() -> String {
    let mrna = transcribe(DNA);
    log::debug!("mRNA: {}", mrna);

    let codons = split_codons(&mrna, CODON_WIDTH, N_CODONS);
    let fixed = correct_permutation(&PERM, SWAP_A, SWAP_B);
    let reordered = reorder(&codons, &fixed);

    let table = codon_table();
    let codes = translate(&reordered, &table, MISS_SENTINEL);
    let unfolded = xor_fold(&codes);

    if unfolded == TARGET {
        log::info!("unfolded sequence matches the binary's fingerprint");
    } else {
        log::warn!("unfolded sequence does not match the fingerprint; check the extraction");
    }

    unfolded.iter().map(|&b| b as char).collect()
}
