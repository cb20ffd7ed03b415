//! Tile grid partitioning and tile-to-candidate assignment
//!
//! This module contains mosaic-related functionality including:
//! - [`TileAssignment`], one resolved tile of the output grid
//! - [`assemble`], the tile scan resolving every tile against the index

/// Grid sizing, tile partitioning, and best-match resolution
pub mod assembler;

pub use assembler::{TileAssignment, assemble, grid_multiplier};
