//! Photomosaic assembly driven by frequency-domain image signatures
//!
//! The system reduces every image to a fixed-size 2D DFT fingerprint, keeps
//! candidate fingerprints in a persistent cache invalidated by file name and
//! modification time, sorts the candidates into a binary-searchable index,
//! and resolves each tile of a target image to its closest candidate.

#![forbid(unsafe_code)]

/// Persistent thumbnail fingerprint cache with staleness detection
pub mod cache;
/// Ordered candidate index and the coefficient scan comparator
pub mod index;
/// Input/output operations, orchestration, and error handling
pub mod io;
/// Tile grid partitioning and tile-to-candidate assignment
pub mod mosaic;
/// Frequency-domain fingerprint computation
pub mod signature;

pub use io::error::{MosaicError, Result};
