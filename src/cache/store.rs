//! Persisted fingerprint store with best-effort load and explicit save

use crate::cache::record::ThumbnailRecord;
use crate::io::error::{MosaicError, Result};
use crate::signature::fingerprint::Fingerprint;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Persistent map from canonical source identity to cached fingerprint
///
/// Keys are canonicalized paths; each logical source appears at most once.
/// Entries are never evicted: sources that stop being referenced keep their
/// records across runs, so the store grows monotonically unless pruned
/// externally. An accepted bound of the design, flagged for anyone adding
/// eviction later.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CacheStore {
    entries: HashMap<PathBuf, ThumbnailRecord>,
}

impl CacheStore {
    /// Load a persisted store, degrading to empty on any failure
    ///
    /// A missing or undecodable store file is not an error: prior state is
    /// an optimization, and losing it only costs recomputation.
    pub fn load(path: &Path) -> Self {
        std::fs::read(path)
            .ok()
            .and_then(|bytes| serde_json::from_slice(&bytes).ok())
            .unwrap_or_default()
    }

    /// Persist the full store to the given path
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::FileSystem`] when the store file cannot be
    /// created and [`MosaicError::CachePersist`] when encoding fails. Either
    /// way the in-memory store stays valid for the current run.
    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|source| MosaicError::FileSystem {
            path: path.to_path_buf(),
            operation: "create cache store",
            source,
        })?;

        serde_json::to_writer(BufWriter::new(file), self).map_err(|source| {
            MosaicError::CachePersist {
                path: path.to_path_buf(),
                source,
            }
        })
    }

    /// Canonical cache key for a source path
    ///
    /// Normalizes to an absolute path without requiring the file to exist or
    /// resolving symlinks, matching the identity rule used by the keys of a
    /// persisted store.
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::FileSystem`] when the path cannot be made
    /// absolute (for example, an empty path).
    pub fn canonical_identity(path: &Path) -> Result<PathBuf> {
        std::path::absolute(path).map_err(|source| MosaicError::FileSystem {
            path: path.to_path_buf(),
            operation: "canonicalize path",
            source,
        })
    }

    /// Cached record for an identity, recomputing when stale
    ///
    /// Returns the stored record when its name and modification time match
    /// the observed values, without invoking `compute`. Otherwise `compute`
    /// supplies a fresh fingerprint and the entry is replaced.
    ///
    /// # Errors
    ///
    /// Propagates the error from `compute`; the stale or missing entry is
    /// left unwritten so the identity is simply skipped for this run.
    pub fn get_or_compute<F>(
        &mut self,
        identity: &Path,
        name: &str,
        modified: SystemTime,
        compute: F,
    ) -> Result<&ThumbnailRecord>
    where
        F: FnOnce() -> Result<Fingerprint>,
    {
        match self.entries.entry(identity.to_path_buf()) {
            Entry::Occupied(mut slot) => {
                if !slot.get().is_fresh(name, modified) {
                    let fingerprint = compute()?;
                    slot.insert(ThumbnailRecord {
                        identity: identity.to_path_buf(),
                        name: name.to_owned(),
                        modified,
                        fingerprint,
                    });
                }
                Ok(slot.into_mut())
            }
            Entry::Vacant(slot) => {
                let fingerprint = compute()?;
                Ok(slot.insert(ThumbnailRecord {
                    identity: identity.to_path_buf(),
                    name: name.to_owned(),
                    modified,
                    fingerprint,
                }))
            }
        }
    }

    /// Record stored for an identity, if any
    pub fn get(&self, identity: &Path) -> Option<&ThumbnailRecord> {
        self.entries.get(identity)
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
