//! Shard extraction and decryption
//!
//! The binary's SHARD_TABLE holds nine entries; only the six with
//! `is_real == 1` carry QR data. The maze randomizes which room hands out
//! which shard on every run, so dynamic collection goes nowhere — the
//! constants below were lifted statically from the table.

/// One real entry of the SHARD_TABLE: an XOR-encrypted bit payload plus
/// the tile geometry it decodes into.
#[derive(Debug, Clone, Copy)]
pub struct Shard {
    /// Encrypted payload as found in the binary
    pub data: &'static [u8],
    /// Single-byte XOR key
    pub key: u8,
    /// Row of the tile's top-left corner in the QR grid
    pub row: usize,
    /// Column of the tile's top-left corner in the QR grid
    pub col: usize,
    /// Tile height in modules
    pub rows: usize,
    /// Tile width in modules
    pub cols: usize,
}

/// The six `is_real == 1` shards, in table order.
pub const REAL_SHARDS: [Shard; 6] = [
    // rows 0-13, cols 0-8
    Shard {
        data: &[
            0xa4, 0x1b, 0x74, 0xed, 0x11, 0xfe, 0x49, 0xa0, 0x5b, 0xb5, 0xfe, 0x9d, 0xf4, 0xfc,
            0x75, 0x72,
        ],
        key: 0x5a,
        row: 0,
        col: 0,
        rows: 14,
        cols: 9,
    },
    // rows 0-13, cols 9-18
    Shard {
        data: &[
            0xd5, 0x73, 0x7f, 0x50, 0x50, 0x88, 0x60, 0xb4, 0x27, 0xbf, 0xa3, 0x6b, 0x2f, 0x3a,
            0x82, 0xa5, 0xb0, 0x01,
        ],
        key: 0x71,
        row: 0,
        col: 9,
        rows: 14,
        cols: 10,
    },
    // rows 0-13, cols 19-28
    Shard {
        data: &[
            0x57, 0x6c, 0x99, 0xff, 0xd5, 0x1f, 0xfc, 0x9d, 0x74, 0x88, 0xb9, 0x90, 0x9c, 0xb7,
            0x99, 0xbe, 0xc8, 0x38,
        ],
        key: 0x88,
        row: 0,
        col: 19,
        rows: 14,
        cols: 10,
    },
    // rows 14-28, cols 0-8
    Shard {
        data: &[
            0x99, 0x7f, 0x90, 0x30, 0x26, 0xfc, 0xfd, 0x47, 0x9e, 0x61, 0x5e, 0xf1, 0x28, 0xd4,
            0x33, 0x88, 0x65,
        ],
        key: 0x9f,
        row: 14,
        col: 0,
        rows: 15,
        cols: 9,
    },
    // rows 14-28, cols 9-18
    Shard {
        data: &[
            0xbf, 0xfe, 0x9d, 0xbe, 0x50, 0xc2, 0x31, 0x96, 0xf6, 0xa7, 0x8e, 0x3e, 0x0a, 0x9f,
            0xf2, 0x93, 0xbd, 0x59, 0x3a,
        ],
        key: 0xb6,
        row: 14,
        col: 9,
        rows: 15,
        cols: 10,
    },
    // rows 14-28, cols 19-28
    Shard {
        data: &[
            0xf1, 0x35, 0xc2, 0x80, 0x82, 0xc6, 0x1b, 0xd2, 0x08, 0xd9, 0x99, 0x1c, 0xda, 0x0a,
            0xde, 0xa2, 0x97, 0xe2, 0x21,
        ],
        key: 0xcd,
        row: 14,
        col: 19,
        rows: 15,
        cols: 10,
    },
];

impl Shard {
    /// Number of modules this shard's tile covers.
    pub fn bit_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Decrypt and unpack this shard into its tile bits.
    pub fn decode(&self) -> Vec<u8> {
        decode_tile(self.data, self.key, self.rows, self.cols)
    }
}

/// XOR-decrypt `enc` with `key` and unpack the result into `rows * cols`
/// bits, most-significant bit first.
///
/// Unpacking stops as soon as the target count is reached; trailing bits of
/// a partially consumed byte are discarded. A payload shorter than the tile
/// yields fewer bits — the table entries never trigger that, and the grid
/// assembly will panic on the shortfall rather than paper over it.
pub fn decode_tile(enc: &[u8], key: u8, rows: usize, cols: usize) -> Vec<u8> {
    let plain: Vec<u8> = enc.iter().map(|&b| b ^ key).collect();
    log::debug!(
        "shard key {:#04x}: {} bytes -> {}",
        key,
        plain.len(),
        hex::encode(&plain)
    );
    plain
        .iter()
        .flat_map(|&b| (0..8).rev().map(move |i| (b >> i) & 1))
        .take(rows * cols)
        .collect()
}
