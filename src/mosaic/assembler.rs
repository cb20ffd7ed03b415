//! Partitions a target image into tiles and resolves each against the index

use crate::index::similarity::SimilarityIndex;
use crate::io::configuration::MIN_GRID_MULTIPLIER;
use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::signature::engine::FingerprintEngine;
use image::DynamicImage;
use image::imageops::FilterType;
use std::path::PathBuf;

/// One resolved tile of the mosaic grid
///
/// Emitted in row-major scan order and read-only once emitted; the external
/// renderer composites from these. A candidate may appear in any number of
/// assignments; there is no use-once constraint across tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileAssignment {
    /// Tile row in the output grid
    pub row: u32,
    /// Tile column in the output grid
    pub column: u32,
    /// Canonical identity of the matched candidate
    pub identity: PathBuf,
    /// Display name of the matched candidate
    pub name: String,
}

/// Grid side length in tiles for a candidate corpus of the given size
///
/// Smallest multiplier n, at least [`MIN_GRID_MULTIPLIER`], with n² tiles
/// covering the corpus, enough grid granularity that every candidate could
/// in principle appear.
pub fn grid_multiplier(candidate_count: usize) -> u32 {
    let mut multiplier = MIN_GRID_MULTIPLIER;
    while multiplier * multiplier < candidate_count {
        multiplier += 1;
    }
    multiplier as u32
}

/// Resolve every tile of the target image to its best-matching candidate
///
/// The target is resized to exactly n·`tile_size` on each side with the same
/// Lanczos3 filter the fingerprint engine uses, partitioned into
/// non-overlapping `tile_size` square blocks, and scanned row-major; each
/// tile is fingerprinted and matched through the index. Always yields
/// exactly n² assignments covering the canvas with no gaps or overlaps.
///
/// # Errors
///
/// Returns [`MosaicError::NoCandidates`] for an empty index and
/// [`MosaicError::InvalidParameter`] for a zero tile size.
pub fn assemble(
    target: &DynamicImage,
    index: &SimilarityIndex,
    engine: &mut FingerprintEngine,
    tile_size: u32,
) -> Result<Vec<TileAssignment>> {
    if index.is_empty() {
        return Err(MosaicError::NoCandidates);
    }
    if tile_size == 0 {
        return Err(invalid_parameter(
            "tile_size",
            &tile_size,
            &"tile size must be at least one pixel",
        ));
    }

    let multiplier = grid_multiplier(index.len());
    let side = multiplier * tile_size;
    let resized = target.resize_exact(side, side, FilterType::Lanczos3);

    let mut assignments = Vec::with_capacity((multiplier * multiplier) as usize);
    for row in 0..multiplier {
        for column in 0..multiplier {
            let tile = resized.crop_imm(column * tile_size, row * tile_size, tile_size, tile_size);
            let probe = engine.fingerprint(&tile);
            let matched = index.find_best(&probe)?;

            assignments.push(TileAssignment {
                row,
                column,
                identity: matched.identity.clone(),
                name: matched.name.clone(),
            });
        }
    }

    Ok(assignments)
}
