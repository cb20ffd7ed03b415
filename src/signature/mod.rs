//! Frequency-domain fingerprint computation
//!
//! This module contains signature-related functionality including:
//! - The fixed-size complex-valued [`Fingerprint`] type
//! - The [`FingerprintEngine`] reducing images to fingerprints via a 2D DFT

/// Grayscale normalization and the row-column 2D DFT pipeline
pub mod engine;
/// Fixed-size complex coefficient grid with magnitude access
pub mod fingerprint;

pub use engine::FingerprintEngine;
pub use fingerprint::Fingerprint;
