//! `composer.json` discovery and parsing.
//!
//! The manifest decides whether a workspace is a Flarum extension at all.
//! Absence of the file is the normal "not our project" case and surfaces as
//! `Ok(None)`; a manifest that exists but will not parse is fatal to the
//! invocation.

use std::path::{Path, PathBuf};

use crate::error::{io_err, ManifestError};
use crate::types::ManifestRecord;

/// Fixed manifest filename probed at the workspace root.
pub const MANIFEST_FILE: &str = "composer.json";

/// Load the manifest at `<workspace_root>/composer.json`.
///
/// Returns `Ok(None)` if the file does not exist,
/// `ManifestError::Parse` (with path + line context) if malformed JSON.
pub fn load(workspace_root: &Path) -> Result<Option<ManifestRecord>, ManifestError> {
    let path = workspace_root.join(MANIFEST_FILE);
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
    let record: ManifestRecord =
        serde_json::from_str(&content).map_err(|source| ManifestError::Parse {
            path: path.clone(),
            source,
        })?;
    Ok(Some(record))
}

/// Find the workspace root for a file: the nearest ancestor directory that
/// contains a `composer.json`.
///
/// Editors pass the workspace root explicitly with the save event; this is
/// the fallback for plain CLI invocations.
pub fn discover_workspace(file: &Path) -> Option<PathBuf> {
    file.ancestors()
        .skip(1)
        .find(|dir| dir.join(MANIFEST_FILE).is_file())
        .map(Path::to_path_buf)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
