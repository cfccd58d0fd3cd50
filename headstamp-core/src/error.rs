//! Error types for headstamp-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from manifest discovery and parsing.
///
/// A *missing* manifest is not an error — `manifest::load` returns
/// `Ok(None)` and the caller skips the file silently. Only a manifest
/// that exists but cannot be read or parsed is fatal.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Underlying I/O failure (permission denied, unreadable file, etc.).
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parse error on a manifest that exists — includes file path and
    /// line context from serde_json.
    #[error("failed to parse manifest at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience constructor for [`ManifestError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> ManifestError {
    ManifestError::Io {
        path: path.into(),
        source,
    }
}
