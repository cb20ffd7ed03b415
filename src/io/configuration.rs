//! Tunable constants and runtime defaults

/// Side length of the fingerprint coefficient grid
///
/// Images larger than this are downsampled to exactly this square before the
/// transform; smaller images are zero-padded at native resolution. All
/// fingerprints in one store must share this width; changing it invalidates
/// persisted caches semantically, though stale entries still age out through
/// the (name, mtime) check when their sources change.
pub const SIGNATURE_WIDTH: usize = 128;

/// Default cache store file for thumbnail fingerprints
pub const DEFAULT_CACHE_FILE: &str = "mosaic.db";

/// Default edge length of one mosaic tile in pixels
pub const DEFAULT_TILE_SIZE: u32 = 128;

// Lower bound keeps tiny corpora from degenerating into a 1x1 "mosaic"
/// Minimum grid side length in tiles
pub const MIN_GRID_MULTIPLIER: usize = 3;
