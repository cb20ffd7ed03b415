//! Composites the final mosaic image from tile assignments
//!
//! The rendering collaborator consumed by the CLI: the matching core only
//! emits [`TileAssignment`] records and performs no pixel compositing of its
//! own.

use crate::io::error::{MosaicError, Result};
use crate::mosaic::assembler::TileAssignment;
use image::RgbaImage;
use image::imageops::{self, FilterType};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Composite the mosaic and save it to the output path
///
/// Each matched candidate is decoded once, resized to the tile frame with
/// the same Lanczos3 filter used for fingerprinting, and pasted at its grid
/// position. Assignments reference candidates that were readable moments ago
/// during the scan, so a reload failure here is treated as fatal rather
/// than skipped.
///
/// # Errors
///
/// Returns [`MosaicError::ImageLoad`] when a matched candidate can no longer
/// be decoded and [`MosaicError::ImageExport`] when the canvas cannot be
/// saved.
pub fn render_mosaic(
    assignments: &[TileAssignment],
    tile_size: u32,
    multiplier: u32,
    output_path: &Path,
) -> Result<()> {
    let side = multiplier * tile_size;
    let mut canvas = RgbaImage::new(side, side);
    let mut tiles: HashMap<PathBuf, RgbaImage> = HashMap::new();

    for assignment in assignments {
        if !tiles.contains_key(&assignment.identity) {
            let decoded =
                image::open(&assignment.identity).map_err(|source| MosaicError::ImageLoad {
                    path: assignment.identity.clone(),
                    source,
                })?;
            let tile = decoded
                .resize_exact(tile_size, tile_size, FilterType::Lanczos3)
                .to_rgba8();
            tiles.insert(assignment.identity.clone(), tile);
        }

        if let Some(tile) = tiles.get(&assignment.identity) {
            imageops::replace(
                &mut canvas,
                tile,
                i64::from(assignment.column * tile_size),
                i64::from(assignment.row * tile_size),
            );
        }
    }

    canvas
        .save(output_path)
        .map_err(|source| MosaicError::ImageExport {
            path: output_path.to_path_buf(),
            source,
        })
}
