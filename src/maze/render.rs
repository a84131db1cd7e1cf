//! Raster output
//!
//! Expands the module grid into a grayscale PNG with a quiet zone, sized
//! for optical scanning.

use super::grid::{QrGrid, QR_SIZE};
use image::{GrayImage, Luma};
use std::path::Path;

/// Pixels per module.
pub const SCALE: u32 = 10;
/// Quiet-zone width in modules on each side.
pub const QUIET_ZONE: u32 = 4;

const WHITE: Luma<u8> = Luma([255]);
const BLACK: Luma<u8> = Luma([0]);

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
}

/// Rasterize the grid: white background, each dark module painted as a
/// `scale × scale` black block offset by the quiet zone.
pub fn render(grid: &QrGrid, scale: u32, quiet_zone: u32) -> GrayImage {
    let side = (QR_SIZE as u32 + 2 * quiet_zone) * scale;
    let mut img = GrayImage::from_pixel(side, side, WHITE);
    for r in 0..QR_SIZE {
        for c in 0..QR_SIZE {
            if !grid.is_dark(r, c) {
                continue;
            }
            let x0 = (quiet_zone + c as u32) * scale;
            let y0 = (quiet_zone + r as u32) * scale;
            for dy in 0..scale {
                for dx in 0..scale {
                    img.put_pixel(x0 + dx, y0 + dy, BLACK);
                }
            }
        }
    }
    img
}

/// Serialize the raster to a PNG file.
pub fn save_png(img: &GrayImage, path: impl AsRef<Path>) -> Result<(), RenderError> {
    img.save(path.as_ref())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::shard::REAL_SHARDS;

    #[test]
    fn test_raster_dimensions() {
        let grid = QrGrid::assemble(&REAL_SHARDS);
        let img = render(&grid, SCALE, QUIET_ZONE);
        let side = (QR_SIZE as u32 + 2 * QUIET_ZONE) * SCALE;
        assert_eq!(img.dimensions(), (side, side));
    }

    #[test]
    fn test_quiet_zone_stays_white() {
        let grid = QrGrid::assemble(&REAL_SHARDS);
        let img = render(&grid, SCALE, QUIET_ZONE);
        let (w, _) = img.dimensions();
        let margin = QUIET_ZONE * SCALE;
        for i in 0..margin {
            assert_eq!(img.get_pixel(i, i), &WHITE);
            assert_eq!(img.get_pixel(w - 1 - i, i), &WHITE);
        }
    }

    #[test]
    fn test_modules_paint_full_blocks() {
        let grid = QrGrid::assemble(&REAL_SHARDS);
        let img = render(&grid, SCALE, QUIET_ZONE);
        let origin = QUIET_ZONE * SCALE;
        // module (0, 0) is the finder corner, always dark
        assert!(grid.is_dark(0, 0));
        for dy in 0..SCALE {
            for dx in 0..SCALE {
                assert_eq!(img.get_pixel(origin + dx, origin + dy), &BLACK);
            }
        }
    }
}
