//! Input/output operations, orchestration, and error handling
//!
//! This module contains I/O-related functionality including:
//! - Command-line parsing and the end-to-end mosaic run
//! - Error types shared across the crate
//! - Tunable constants, progress reporting, and mosaic compositing

/// Command-line interface and run orchestration
pub mod cli;
/// Tunable constants and runtime defaults
pub mod configuration;
/// Error types and result alias for mosaic operations
pub mod error;
/// Progress reporting for candidate scans
pub mod progress;
/// Mosaic compositing from tile assignments
pub mod render;
