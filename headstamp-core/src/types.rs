//! Domain types for headstamp.
//!
//! All path fields use `PathBuf`; never `&str` or `String` for filesystem
//! paths. Everything here is transient — computed once per save-hook
//! invocation and discarded.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed composer package name, e.g. `glowingblue/acme`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageName(pub String);

impl PackageName {
    /// Whether the package belongs to the given organization,
    /// e.g. `starts_with_org("glowingblue/")`.
    pub fn starts_with_org(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for PackageName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for PackageName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Manifest
// ---------------------------------------------------------------------------

/// The subset of `composer.json` headstamp cares about. Unknown fields are
/// ignored; both fields are optional because a manifest without them is
/// merely ineligible, not malformed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ManifestRecord {
    #[serde(rename = "type")]
    pub package_type: Option<String>,
    pub name: Option<String>,
}

// ---------------------------------------------------------------------------
// Language
// ---------------------------------------------------------------------------

/// A source language headstamp knows how to stamp.
///
/// Identifiers follow the editor convention (`php`, `javascript`,
/// `typescript`), the same strings a save event delivers as the document's
/// declared language id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Php,
    Javascript,
    Typescript,
}

impl Language {
    /// Line offset at which the header region begins.
    ///
    /// PHP files open with a mandatory `<?php` marker line; the header sits
    /// two lines below it. All other languages start at line 0.
    pub fn line_offset(&self) -> usize {
        match self {
            Language::Php => 2,
            Language::Javascript | Language::Typescript => 0,
        }
    }

    /// Infer the language from a file extension, for callers that have no
    /// editor-declared language id at hand.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str())? {
            "php" => Some(Language::Php),
            "js" | "jsx" | "mjs" | "cjs" => Some(Language::Javascript),
            "ts" | "tsx" => Some(Language::Typescript),
            _ => None,
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "php" => Ok(Language::Php),
            "javascript" => Ok(Language::Javascript),
            "typescript" => Ok(Language::Typescript),
            other => Err(format!(
                "unknown language id '{other}'; expected: php, javascript, typescript"
            )),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Php => write!(f, "php"),
            Language::Javascript => write!(f, "javascript"),
            Language::Typescript => write!(f, "typescript"),
        }
    }
}

// ---------------------------------------------------------------------------
// Eligible context
// ---------------------------------------------------------------------------

/// Output of a passing eligibility gate chain — everything the header
/// pipeline needs to know about the file being saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EligibleContext {
    pub package_name: PackageName,
    pub language: Language,
    /// Document line at which the header region begins.
    pub line_offset: usize,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn package_name_display_and_org() {
        let name = PackageName::from("glowingblue/acme");
        assert_eq!(name.to_string(), "glowingblue/acme");
        assert!(name.starts_with_org("glowingblue/"));
        assert!(!name.starts_with_org("flarum/"));
    }

    #[test]
    fn language_parse_roundtrip() {
        for id in ["php", "javascript", "typescript"] {
            let lang: Language = id.parse().expect("parse");
            assert_eq!(lang.to_string(), id);
        }
        assert!("rust".parse::<Language>().is_err());
    }

    #[test]
    fn language_parse_is_case_insensitive() {
        assert_eq!("PHP".parse::<Language>(), Ok(Language::Php));
    }

    #[test]
    fn php_offset_skips_opener_lines() {
        assert_eq!(Language::Php.line_offset(), 2);
        assert_eq!(Language::Javascript.line_offset(), 0);
        assert_eq!(Language::Typescript.line_offset(), 0);
    }

    #[test]
    fn language_from_extension() {
        assert_eq!(
            Language::from_path(&PathBuf::from("/p/src/Foo.php")),
            Some(Language::Php)
        );
        assert_eq!(
            Language::from_path(&PathBuf::from("index.tsx")),
            Some(Language::Typescript)
        );
        assert_eq!(
            Language::from_path(&PathBuf::from("app.mjs")),
            Some(Language::Javascript)
        );
        assert_eq!(Language::from_path(&PathBuf::from("README.md")), None);
        assert_eq!(Language::from_path(&PathBuf::from("Makefile")), None);
    }

    #[test]
    fn manifest_record_ignores_unknown_fields() {
        let record: ManifestRecord = serde_json::from_str(
            r#"{"type": "flarum-extension", "name": "glowingblue/acme", "require": {}}"#,
        )
        .expect("parse");
        assert_eq!(record.package_type.as_deref(), Some("flarum-extension"));
        assert_eq!(record.name.as_deref(), Some("glowingblue/acme"));
    }

    #[test]
    fn manifest_record_fields_are_optional() {
        let record: ManifestRecord = serde_json::from_str(r#"{"name": "x/y"}"#).expect("parse");
        assert_eq!(record.package_type, None);
    }
}
