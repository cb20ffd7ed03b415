//! Immutable sorted candidate index answering best-match queries

use crate::cache::record::ThumbnailRecord;
use crate::index::ordering::CoefficientOrder;
use crate::io::configuration::SIGNATURE_WIDTH;
use crate::io::error::{MosaicError, Result};
use crate::signature::fingerprint::Fingerprint;
use std::cmp::Ordering;

/// Binary-searchable index over candidate fingerprints
///
/// Owns a sequence of records sorted by the coefficient scan comparator for
/// the lifetime of one run. The index is rebuilt, never mutated, when the
/// candidate set changes; once built it is freely shared by concurrent
/// readers.
pub struct SimilarityIndex {
    entries: Vec<ThumbnailRecord>,
    order: CoefficientOrder,
}

impl SimilarityIndex {
    /// Sort the given records into a queryable index
    ///
    /// Building over zero records yields a valid empty index; querying it
    /// fails with [`MosaicError::NoCandidates`].
    pub fn build(mut records: Vec<ThumbnailRecord>) -> Self {
        let order = CoefficientOrder::new(SIGNATURE_WIDTH);
        records.sort_by(|a, b| order.compare(&a.fingerprint, &b.fingerprint));

        Self {
            entries: records,
            order,
        }
    }

    /// Best-matching record for a probe fingerprint
    ///
    /// Returns the record at the probe's insertion position in the sorted
    /// sequence, the first entry that sorts at or after the probe, clamped
    /// to the first entry when the probe sorts before everything and to the
    /// last when it sorts after everything. Approximate by construction: the
    /// guarantee is consistency with the scan-order comparator, not true
    /// nearest-neighbor distance.
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::NoCandidates`] when the index is empty.
    pub fn find_best(&self, probe: &Fingerprint) -> Result<&ThumbnailRecord> {
        let last = self
            .entries
            .len()
            .checked_sub(1)
            .ok_or(MosaicError::NoCandidates)?;
        let insertion = self
            .entries
            .partition_point(|entry| self.order.compare(&entry.fingerprint, probe) == Ordering::Less);

        self.entries
            .get(insertion.min(last))
            .ok_or(MosaicError::NoCandidates)
    }

    /// Indexed records in their sorted order
    pub fn records(&self) -> &[ThumbnailRecord] {
        &self.entries
    }

    /// Number of indexed candidates
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index holds no candidates
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
