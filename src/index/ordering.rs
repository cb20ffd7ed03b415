//! Total order over fingerprints via a fixed coefficient scan sequence
//!
//! The comparator walks a precomputed sequence of grid positions (the DC
//! coefficient first, then outward ring by ring of increasing frequency) and
//! decides at the first position where the squared magnitudes differ. This is
//! a deliberately cheap one-dimensional proxy for similarity in the full
//! coefficient space: it guarantees a consistent total order for sorting and
//! binary search, not a true nearest neighbor. Replacing it with a proper
//! multi-dimensional index would change observable match results and is left
//! as an extension.

use crate::signature::fingerprint::Fingerprint;
use std::cmp::Ordering;

/// Fixed scan sequence over fingerprint grid positions
///
/// Built once per index; comparing through the same `CoefficientOrder`
/// yields a strict weak ordering (`f64::total_cmp` keeps it total even for
/// non-finite magnitudes).
#[derive(Debug, Clone)]
pub struct CoefficientOrder {
    positions: Vec<(usize, usize)>,
}

impl CoefficientOrder {
    /// Build the scan sequence for a square grid of the given side length
    ///
    /// Positions are ordered by their frequency ring, the wrap-around
    /// distance `min(k, side - k)` taken across both axes, so the DC
    /// coefficient at (0, 0) comes first and low-frequency structure
    /// dominates the comparison. Ties within a ring resolve row-major.
    pub fn new(side: usize) -> Self {
        let ring = |k: usize| k.min(side - k);
        let mut positions: Vec<(usize, usize)> = (0..side)
            .flat_map(|row| (0..side).map(move |column| (row, column)))
            .collect();
        positions.sort_by_key(|&(row, column)| (ring(row).max(ring(column)), row, column));

        Self { positions }
    }

    /// Compare two fingerprints along the scan sequence
    ///
    /// The first scanned position with differing squared magnitudes decides;
    /// smaller magnitude sorts first. Fingerprints equal at every scanned
    /// position are order-equivalent.
    pub fn compare(&self, a: &Fingerprint, b: &Fingerprint) -> Ordering {
        for &(row, column) in &self.positions {
            let ordering = a
                .magnitude_squared(row, column)
                .total_cmp(&b.magnitude_squared(row, column));
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }

    /// Number of scanned positions
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the scan sequence is empty
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
