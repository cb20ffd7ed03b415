//! Ordered candidate index and the coefficient scan comparator
//!
//! This module contains index-related functionality including:
//! - [`CoefficientOrder`], the fixed DC-first scan order over fingerprint
//!   coefficients and the total order it induces
//! - [`SimilarityIndex`], a binary-searchable sorted candidate sequence

/// Fixed coefficient scan sequence and fingerprint comparison
pub mod ordering;
/// Immutable sorted candidate index with best-match queries
pub mod similarity;

pub use ordering::CoefficientOrder;
pub use similarity::SimilarityIndex;
