//! "The Shattered Maze" — QR shard decoder
//!
//! The challenge binary scatters a 29×29 QR code across six encrypted
//! shards in its data section. Decoding is a straight line: XOR-decrypt
//! each shard, unpack the bits MSB-first, drop each tile at its grid
//! offset, rasterize with a quiet zone.

mod grid;
mod render;
mod shard;

pub use grid::{QrGrid, QR_SIZE};
pub use render::{render, save_png, RenderError, QUIET_ZONE, SCALE};
pub use shard::{decode_tile, Shard, REAL_SHARDS};
