//! Image-to-fingerprint reduction via grayscale normalization and a 2D DFT
//!
//! The pipeline is fixed for determinism: grayscale conversion with the
//! `image` crate's luma weighting, Lanczos3 downsampling when the source
//! exceeds the signature width (never upsampling; smaller sources are
//! zero-padded at native resolution), then an unnormalized row-column DFT.

use crate::io::configuration::SIGNATURE_WIDTH;
use crate::signature::fingerprint::Fingerprint;
use image::DynamicImage;
use image::imageops::{self, FilterType};
use ndarray::Array2;
use num_complex::Complex64;
use num_traits::Zero;
use rustfft::{Fft, FftPlanner};
use std::sync::Arc;

/// Computes frequency-domain fingerprints for images
///
/// Holds a planner-cached DFT of the signature width plus owned data and
/// scratch buffers. Both buffers are fully overwritten on every call, so no
/// state leaks between computations; the engine is deterministic and
/// side-effect free per call. Because the buffers are owned mutably, one
/// engine must not be shared across concurrent workers; give each worker
/// its own.
pub struct FingerprintEngine {
    fft: Arc<dyn Fft<f64>>,
    buffer: Vec<Complex64>,
    scratch: Vec<Complex64>,
}

impl Default for FingerprintEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl FingerprintEngine {
    /// Create an engine with a planned DFT for the signature width
    pub fn new() -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(SIGNATURE_WIDTH);
        let scratch = vec![Complex64::zero(); fft.get_inplace_scratch_len()];

        Self {
            fft,
            buffer: vec![Complex64::zero(); SIGNATURE_WIDTH * SIGNATURE_WIDTH],
            scratch,
        }
    }

    /// Compute the fingerprint of a decoded image
    ///
    /// Deterministic: identical image content yields bit-identical
    /// fingerprints across calls, engines, and process restarts.
    pub fn fingerprint(&mut self, image: &DynamicImage) -> Fingerprint {
        let gray = normalize(image);
        let side = SIGNATURE_WIDTH;

        self.buffer.fill(Complex64::zero());
        for (x, y, pixel) in gray.enumerate_pixels() {
            let index = y as usize * side + x as usize;
            if let Some(slot) = self.buffer.get_mut(index) {
                *slot = Complex64::new(f64::from(pixel.0[0]), 0.0);
            }
        }

        // Row-column decomposition: transform rows, transpose, transform
        // again, transpose back to (row frequency, column frequency) layout.
        for row in self.buffer.chunks_exact_mut(side) {
            self.fft.process_with_scratch(row, &mut self.scratch);
        }
        transpose_in_place(&mut self.buffer, side);
        for row in self.buffer.chunks_exact_mut(side) {
            self.fft.process_with_scratch(row, &mut self.scratch);
        }
        transpose_in_place(&mut self.buffer, side);

        let coefficients = Array2::from_shape_vec((side, side), self.buffer.clone())
            .unwrap_or_else(|_| Array2::zeros((side, side)));
        Fingerprint::new(coefficients)
    }
}

// Grayscale with the image crate's fixed luma weighting, then downsample to
// the signature frame when the source is larger. Smaller sources keep their
// native resolution; the engine zero-pads them into the grid.
fn normalize(image: &DynamicImage) -> image::GrayImage {
    let gray = imageops::grayscale(image);
    let side = SIGNATURE_WIDTH as u32;
    let (width, height) = gray.dimensions();

    if width > side || height > side {
        imageops::resize(&gray, side, side, FilterType::Lanczos3)
    } else {
        gray
    }
}

// In-place transpose of a square matrix in row-major storage
fn transpose_in_place(data: &mut [Complex64], side: usize) {
    for row in 0..side {
        for column in (row + 1)..side {
            data.swap(row * side + column, column * side + row);
        }
    }
}
