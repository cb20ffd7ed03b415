//! Cached fingerprint record keyed by source file identity

use crate::signature::fingerprint::Fingerprint;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::SystemTime;

/// One cached fingerprint with the identity of its source file
///
/// A record is fresh while the observed file name and modification time
/// still equal the stored values; any mismatch marks it stale and forces
/// recomputation. Freshness is deliberately not content-based, so a rename
/// that preserves the modification time goes undetected, a known
/// limitation of the (name, mtime) check, accepted for its cheapness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThumbnailRecord {
    /// Canonical (absolute, normalized) source path used as cache key
    pub identity: PathBuf,
    /// Display name of the source file
    pub name: String,
    /// Modification time observed when the fingerprint was computed
    pub modified: SystemTime,
    /// Frequency-domain signature of the source image
    pub fingerprint: Fingerprint,
}

impl ThumbnailRecord {
    /// Whether the record still matches the observed file name and mtime
    pub fn is_fresh(&self, name: &str, modified: SystemTime) -> bool {
        self.name == name && self.modified == modified
    }
}
