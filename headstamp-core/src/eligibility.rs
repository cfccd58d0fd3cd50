//! Eligibility gate chain.
//!
//! Five ordered, short-circuiting gates decide whether a saved file is
//! touched at all. The first failing gate wins and names itself as the
//! [`SkipReason`] — no mutable flags, no partial state. Skipping is not an
//! error: the hook simply does nothing for that file.

use std::fmt;
use std::path::Path;

use crate::types::{EligibleContext, Language, ManifestRecord, PackageName};

// ---------------------------------------------------------------------------
// Policy
// ---------------------------------------------------------------------------

/// Process-wide, immutable eligibility configuration.
///
/// The default is the production policy for Glowing Blue Flarum extensions;
/// tests construct narrower policies inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Policy {
    /// Required `composer.json` `type` value.
    pub manifest_type: &'static str,
    /// Required package-name prefix, including the trailing slash.
    pub org_prefix: &'static str,
    /// Workspace-relative path prefixes that may carry a header.
    pub path_allowlist: &'static [&'static str],
    /// Languages that may carry a header.
    pub languages: &'static [Language],
}

impl Default for Policy {
    fn default() -> Self {
        Policy {
            manifest_type: "flarum-extension",
            org_prefix: "glowingblue/",
            path_allowlist: &[
                "/src",
                "/tests",
                "/js/src/forum",
                "/js/src/admin",
                "/js/src/common",
                "/migrations",
                "/extend.php",
            ],
            languages: &[Language::Php, Language::Javascript, Language::Typescript],
        }
    }
}

// ---------------------------------------------------------------------------
// Skip reasons
// ---------------------------------------------------------------------------

/// Why a file was left alone. The variants mirror the gate order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No `composer.json` at the workspace root.
    NoManifest,
    /// Manifest `type` missing or not the required value.
    ManifestType,
    /// Package name missing or outside the organization prefix.
    PackagePrefix,
    /// File path outside the allow-listed source prefixes.
    PathNotAllowed,
    /// Document language missing or not allow-listed.
    LanguageNotAllowed,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoManifest => write!(f, "no manifest in workspace"),
            SkipReason::ManifestType => write!(f, "manifest type is not flarum-extension"),
            SkipReason::PackagePrefix => write!(f, "package name outside organization prefix"),
            SkipReason::PathNotAllowed => write!(f, "file path not allow-listed"),
            SkipReason::LanguageNotAllowed => write!(f, "language not allow-listed"),
        }
    }
}

// ---------------------------------------------------------------------------
// Gate chain
// ---------------------------------------------------------------------------

/// Run the ordered gate chain for one saved file.
///
/// `language` is the editor-declared language id when available, or an
/// extension-inferred one; `None` fails the language gate.
pub fn check(
    manifest: Option<&ManifestRecord>,
    file: &Path,
    workspace_root: &Path,
    language: Option<Language>,
    policy: &Policy,
) -> Result<EligibleContext, SkipReason> {
    // Gate 1: a manifest must exist at all.
    let manifest = manifest.ok_or(SkipReason::NoManifest)?;

    // Gate 2: it must declare the extension type.
    if manifest.package_type.as_deref() != Some(policy.manifest_type) {
        return Err(SkipReason::ManifestType);
    }

    // Gate 3: the package must belong to the organization.
    let package_name = manifest
        .name
        .as_deref()
        .map(PackageName::from)
        .ok_or(SkipReason::PackagePrefix)?;
    if !package_name.starts_with_org(policy.org_prefix) {
        return Err(SkipReason::PackagePrefix);
    }

    // Gate 4: the file must live under an allow-listed path prefix.
    let relative = relative_path(file, workspace_root).ok_or(SkipReason::PathNotAllowed)?;
    if !policy.path_allowlist.iter().any(|p| relative.starts_with(p)) {
        return Err(SkipReason::PathNotAllowed);
    }

    // Gate 5: the language must be allow-listed.
    let language = language.ok_or(SkipReason::LanguageNotAllowed)?;
    if !policy.languages.contains(&language) {
        return Err(SkipReason::LanguageNotAllowed);
    }

    Ok(EligibleContext {
        package_name,
        language,
        line_offset: language.line_offset(),
    })
}

/// Workspace-relative path as a `/`-separated string with a leading `/`,
/// matching the allow-list entries. `None` when the file is outside the
/// workspace root.
fn relative_path(file: &Path, workspace_root: &Path) -> Option<String> {
    let rel = file.strip_prefix(workspace_root).ok()?;
    let mut out = String::new();
    for component in rel.components() {
        out.push('/');
        out.push_str(&component.as_os_str().to_string_lossy());
    }
    Some(out)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
