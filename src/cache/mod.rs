//! Persistent thumbnail fingerprint cache with staleness detection
//!
//! This module contains cache-related functionality including:
//! - [`ThumbnailRecord`], one cached fingerprint with its source identity
//! - [`CacheStore`], the persisted identity-to-record map

/// Cached fingerprint record and freshness check
pub mod record;
/// Persisted record map with best-effort load and explicit save
pub mod store;

pub use record::ThumbnailRecord;
pub use store::CacheStore;
