//! Error types and result alias for mosaic operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all mosaic operations
///
/// Per-candidate failures (`ImageLoad` on a thumbnail, `FileSystem` on a
/// stat) are reported and the candidate skipped; structural failures
/// (`NoCandidates`, `ImageLoad` on the target, `ImageExport`) abort the run.
#[derive(Debug)]
pub enum MosaicError {
    /// Failed to open or decode an image file
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to save the composited mosaic to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to encode the cache store for persistence
    ///
    /// Non-destructive: the in-memory store and the run's output remain
    /// usable, but the failure is surfaced to the operator.
    CachePersist {
        /// Path of the cache store file
        path: PathBuf,
        /// Underlying serialization error
        source: serde_json::Error,
    },

    /// No valid candidates to build or query the similarity index with
    ///
    /// Occurs when every candidate was skipped (stat or decode failures) or
    /// an empty index is queried. There is no meaningful mosaic without at
    /// least one candidate.
    NoCandidates,

    /// Runtime parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export mosaic to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::CachePersist { path, source } => {
                write!(
                    f,
                    "Failed to persist cache store '{}': {source}",
                    path.display()
                )
            }
            Self::NoCandidates => {
                write!(f, "No valid candidate thumbnails available")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::CachePersist { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, MosaicError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MosaicError {
    MosaicError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skippable_errors_carry_their_path() {
        let err = MosaicError::FileSystem {
            path: PathBuf::from("/tmp/thumb.png"),
            operation: "stat",
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };

        let message = err.to_string();
        assert!(message.contains("/tmp/thumb.png"));
        assert!(message.contains("stat"));
    }
}
