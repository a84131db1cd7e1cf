//! Transcription — DNA template (3'→5') to mRNA (5'→3')

/// Complement each base: A→U, T→A, C→G, G→C. Anything else becomes `?`,
/// matching the binary's default switch arm.
pub fn transcribe(dna: &str) -> String {
    dna.chars()
        .map(|b| match b {
            'A' => 'U',
            'T' => 'A',
            'C' => 'G',
            'G' => 'C',
            _ => '?',
        })
        .collect()
}

/// Slice the transcript into `count` consecutive groups of `width` symbols.
/// Trailing symbols past `width * count` are ignored.
pub fn split_codons(transcript: &str, width: usize, count: usize) -> Vec<&str> {
    (0..count)
        .map(|i| &transcript[i * width..(i + 1) * width])
        .collect()
}
