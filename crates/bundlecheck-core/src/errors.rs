//! Error types for bundle verification.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for verification operations.
pub type CheckResult<T> = Result<T, CheckError>;

/// Errors that can occur while checking a bundle against its manifest.
///
/// An unexpected file is not an error at this level — it is a reportable
/// business outcome carried in [`crate::CheckReport`].
#[derive(Debug, Error)]
pub enum CheckError {
    /// Bundle root is missing or not a directory. Reported before any
    /// traversal begins.
    #[error("{}: not a directory", .path.display())]
    NotADirectory { path: PathBuf },

    /// Manifest file could not be read (missing, unreadable, or not UTF-8).
    #[error("{}: {source}", .path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Traversal failed below the bundle root.
    #[error(transparent)]
    Walk(#[from] walkdir::Error),
}

impl CheckError {
    /// True when the bundle root precondition failed.
    pub fn is_not_a_directory(&self) -> bool {
        matches!(self, Self::NotADirectory { .. })
    }
}
