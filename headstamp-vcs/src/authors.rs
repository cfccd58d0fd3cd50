//! Authorship queries and the author-merge rule.
//!
//! The header's author field is computed from two external lookups:
//! `git shortlog` for the file's historical authors (count-descending) and
//! `git config user.name` for the local identity. The merge discards the
//! ranking: the final field is the alphabetically sorted union, joined with
//! `", "`.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::VcsError;

// ---------------------------------------------------------------------------
// Capability trait
// ---------------------------------------------------------------------------

/// Source of authorship facts for a single file.
///
/// Production uses [`GitAuthorSource`]; tests inject a fixed fake so the
/// merge logic is deterministic without a repository.
pub trait AuthorSource {
    /// Historical commit authors for `file_name` (a path relative to `dir`),
    /// ordered by commit count descending.
    fn file_authors(&self, dir: &Path, file_name: &str) -> Result<Vec<String>, VcsError>;

    /// The locally configured identity name, surrounding whitespace removed.
    fn identity(&self, dir: &Path) -> Result<String, VcsError>;
}

// ---------------------------------------------------------------------------
// Git implementation
// ---------------------------------------------------------------------------

/// [`AuthorSource`] backed by subprocess `git` invocations in the file's
/// directory. No timeout is applied; a hung git blocks the hook, which the
/// host is expected to surface.
#[derive(Debug, Clone, Default)]
pub struct GitAuthorSource;

impl GitAuthorSource {
    pub fn new() -> Self {
        Self
    }

    fn run(&self, dir: &Path, args: &[&str]) -> Result<String, VcsError> {
        let output = Command::new("git")
            .current_dir(dir)
            .args(args)
            .output()
            .map_err(|source| VcsError::Spawn {
                program: "git",
                dir: dir.to_path_buf(),
                source,
            })?;

        if !output.status.success() {
            return Err(VcsError::Command {
                program: "git",
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|_| VcsError::Output { program: "git" })
    }
}

impl AuthorSource for GitAuthorSource {
    fn file_authors(&self, dir: &Path, file_name: &str) -> Result<Vec<String>, VcsError> {
        // `shortlog` reads stdin when no revision is given outside a tty,
        // so HEAD is passed explicitly.
        let stdout = self.run(dir, &["shortlog", "-sn", "HEAD", "--", file_name])?;
        let authors = parse_shortlog(&stdout);
        debug!(file = file_name, count = authors.len(), "queried file authors");
        Ok(authors)
    }

    fn identity(&self, dir: &Path) -> Result<String, VcsError> {
        let stdout = self.run(dir, &["config", "user.name"])?;
        Ok(stdout.trim().to_string())
    }
}

// ---------------------------------------------------------------------------
// Parsing and merging
// ---------------------------------------------------------------------------

/// Parse `git shortlog -sn` output: repeated lines of
/// `<count><whitespace><author name>`, already sorted by count descending.
/// Lines without a leading integer count are ignored.
pub fn parse_shortlog(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim_start();
            let rest = trimmed.trim_start_matches(|c: char| c.is_ascii_digit());
            if rest.len() == trimmed.len() {
                return None;
            }
            let name = rest.trim();
            (!name.is_empty()).then(|| name.to_string())
        })
        .collect()
}

/// Compute the header's author field for one file.
///
/// The local identity is appended only when non-empty and not already among
/// the historical authors (exact string match); the union is then sorted
/// lexicographically, de-duplicated, and joined with `", "`.
pub fn resolve_authors<S: AuthorSource>(
    source: &S,
    dir: &Path,
    file_name: &str,
) -> Result<String, VcsError> {
    let mut authors = source.file_authors(dir, file_name)?;

    let identity = source.identity(dir)?;
    if !identity.is_empty() && !authors.iter().any(|a| a == &identity) {
        authors.push(identity);
    }

    authors.sort();
    authors.dedup();
    Ok(authors.join(", "))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
