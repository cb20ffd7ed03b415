//! Fixed-size frequency-domain signature of an image

use ndarray::Array2;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Frequency-domain signature of one image
///
/// A square grid of complex DFT coefficients over a grayscale,
/// size-normalized intensity grid. Immutable once computed; two fingerprints
/// of byte-identical image content compare bit-equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fingerprint {
    coefficients: Array2<Complex64>,
}

impl Fingerprint {
    /// Wrap a square coefficient grid as a fingerprint
    ///
    /// The grid must be square; comparisons treat out-of-range positions as
    /// zero-magnitude.
    pub const fn new(coefficients: Array2<Complex64>) -> Self {
        Self { coefficients }
    }

    /// Side length of the coefficient grid
    pub fn width(&self) -> usize {
        self.coefficients.nrows()
    }

    /// Squared magnitude (re² + im²) of the coefficient at a grid position
    ///
    /// Positions outside the grid read as `0.0`, so fingerprints of differing
    /// widths remain comparable.
    pub fn magnitude_squared(&self, row: usize, column: usize) -> f64 {
        self.coefficients
            .get((row, column))
            .map_or(0.0, Complex64::norm_sqr)
    }
}
