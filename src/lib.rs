//! Solvers for two SecurinetsENIT CTF 2025 reversing challenges
//!
//! - [`maze`] — "The Shattered Maze": reassemble a QR code from six
//!   XOR-encrypted shards lifted from the binary's data section.
//! - [`gene`] — "The Corrupted Gene": run a hardcoded DNA strand through
//!   the binary's decode pipeline with its permutation fault undone.
//!
//! All inputs are constants extracted by static reverse engineering; each
//! solver is a one-shot batch transformation.

pub mod gene;
pub mod maze;

pub use gene::decode_flag;
pub use maze::{QrGrid, Shard};
