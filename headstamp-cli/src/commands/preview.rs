//! `headstamp preview` — print the header that would be generated.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::warn;

use headstamp_core::manifest;
use headstamp_engine::{current_year, render, HeaderVariant};
use headstamp_vcs::{AuthorSource, GitAuthorSource};

/// Arguments for `headstamp preview`.
#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Package name to fill in (defaults to the workspace manifest's name).
    #[arg(long)]
    pub package: Option<String>,

    /// Workspace root to read the manifest from (defaults to the current
    /// directory).
    #[arg(long)]
    pub workspace: Option<PathBuf>,

    /// Use the year-less, author-less header variant.
    #[arg(long)]
    pub minimal: bool,
}

impl PreviewArgs {
    pub fn run(self) -> Result<()> {
        let workspace = match self.workspace.clone() {
            Some(root) => root,
            None => std::env::current_dir().context("could not determine current directory")?,
        };

        let package = match self.package.clone() {
            Some(name) => name,
            None => manifest::load(&workspace)
                .with_context(|| format!("loading manifest in '{}'", workspace.display()))?
                .and_then(|record| record.name)
                .context("no package name; pass --package or run inside a workspace")?,
        };

        let (variant, authors) = if self.minimal {
            (HeaderVariant::Minimal, String::new())
        } else {
            // Preview has no file to query history for; the configured
            // identity is the best available author field.
            let authors = match GitAuthorSource::new().identity(&workspace) {
                Ok(identity) => identity,
                Err(err) => {
                    warn!(%err, "could not read git identity; leaving authors empty");
                    String::new()
                }
            };
            (HeaderVariant::Authored, authors)
        };

        println!("{}", render(variant, &package, current_year(), &authors));
        Ok(())
    }
}
