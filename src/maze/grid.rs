//! QR grid assembly
//!
//! Each decoded shard fills one rectangular tile; the six tiles partition
//! the 29×29 module grid exactly.

use super::shard::Shard;

/// Side length of the QR code in modules (version 3).
pub const QR_SIZE: usize = 29;

/// A 29×29 matrix of 0/1 modules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrGrid {
    cells: [[u8; QR_SIZE]; QR_SIZE],
}

impl QrGrid {
    /// Decode every shard and place its bits row-major into the tile at
    /// `(shard.row, shard.col)`. Tiles are independent, so order does not
    /// matter; a shard whose payload is too short for its tile panics here
    /// on the out-of-range bit index.
    pub fn assemble(shards: &[Shard]) -> Self {
        let mut cells = [[0u8; QR_SIZE]; QR_SIZE];
        for shard in shards {
            let bits = shard.decode();
            log::debug!(
                "placing {}x{} tile at ({}, {})",
                shard.rows,
                shard.cols,
                shard.row,
                shard.col
            );
            let mut idx = 0;
            for r in 0..shard.rows {
                for c in 0..shard.cols {
                    cells[shard.row + r][shard.col + c] = bits[idx];
                    idx += 1;
                }
            }
        }
        Self { cells }
    }

    /// Module value at `(row, col)`: 0 or 1.
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row][col]
    }

    /// True if the module at `(row, col)` is dark.
    pub fn is_dark(&self, row: usize, col: usize) -> bool {
        self.cells[row][col] != 0
    }

    /// Terminal rendering, two glyphs per module so the aspect ratio is
    /// roughly square.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(QR_SIZE * (QR_SIZE * 2 + 1));
        for row in &self.cells {
            for &cell in row {
                out.push_str(if cell != 0 { "██" } else { "  " });
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::shard::REAL_SHARDS;

    /// Reference bit pattern, recorded from the first successful decode and
    /// confirmed by scanning the rendered PNG.
    const GOLDEN: [&str; QR_SIZE] = [
        "#######..#.#..#....##.#######",
        "#.....#......#.....#..#.....#",
        "#.###.#.####...#......#.###.#",
        "#.###.#...#..#....###.#.###.#",
        "#.###.#..#####..#..#..#.###.#",
        "#.....#...#...###..##.#.....#",
        "#######.#.#.#.#.#.#.#.#######",
        "........##.##..###...........",
        "###.#######.#..#.....##...#..",
        ".#..#..##.##.#..#.#.##......#",
        "...####.####..#..#..#....####",
        ".###.#.#.######..####...#...#",
        ".##...#.###.#.#..##..##.##..#",
        "###..#.#......#.###......#.##",
        ".....##.#....#..#.#..####..##",
        "##.........#.....#.###.......",
        "..#####.##.##....#.####.#..##",
        ".#####.##..###..##..#.#..####",
        "#..#.##...###.#..#.....#.####",
        ".##.##......###..#..#.##....#",
        "#.##.##.......#....######...#",
        "........#.....#...#.#...#.#..",
        "#######.#..###...#..#.#.#..##",
        "#.....#.#..#...#.##.#...#...#",
        "#.###.#.###....#.#..#####...#",
        "#.###.#...#.#...#..##...#..##",
        "#.###.#.#..#..#.#...##.####.#",
        "#.....#.#..#.#####..##.#...#.",
        "#######.######...#########.##",
    ];

    #[test]
    fn test_tiles_partition_grid() {
        let mut covered = [[0u32; QR_SIZE]; QR_SIZE];
        for shard in &REAL_SHARDS {
            for r in shard.row..shard.row + shard.rows {
                for c in shard.col..shard.col + shard.cols {
                    covered[r][c] += 1;
                }
            }
        }
        for row in &covered {
            for &count in row {
                assert_eq!(count, 1, "tiles must cover every module exactly once");
            }
        }
    }

    #[test]
    fn test_assemble_matches_golden() {
        let grid = QrGrid::assemble(&REAL_SHARDS);
        for (r, line) in GOLDEN.iter().enumerate() {
            for (c, glyph) in line.chars().enumerate() {
                let expected = (glyph == '#') as u8;
                assert_eq!(grid.get(r, c), expected, "module ({}, {})", r, c);
            }
        }
    }

    #[test]
    fn test_finder_patterns_present() {
        // A sane decode has the three 7x7 finder squares
        let grid = QrGrid::assemble(&REAL_SHARDS);
        for (r0, c0) in [(0, 0), (0, QR_SIZE - 7), (QR_SIZE - 7, 0)] {
            for i in 0..7 {
                assert!(grid.is_dark(r0, c0 + i));
                assert!(grid.is_dark(r0 + 6, c0 + i));
                assert!(grid.is_dark(r0 + i, c0));
                assert!(grid.is_dark(r0 + i, c0 + 6));
            }
        }
    }

    #[test]
    fn test_text_rendering_glyphs() {
        let grid = QrGrid::assemble(&REAL_SHARDS);
        let text = grid.to_text();
        assert_eq!(text.lines().count(), QR_SIZE);
        assert!(text.starts_with("██████████████"));
    }
}
