//! `headstamp hook` — synchronize the header of one saved file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use headstamp_core::{eligibility, manifest, Language, Policy};
use headstamp_engine::{
    current_year, render, synchronize, FileHost, HeaderVariant, SyncOutcome,
};
use headstamp_vcs::{resolve_authors, GitAuthorSource};

/// Arguments for `headstamp hook`.
#[derive(Args, Debug)]
pub struct HookArgs {
    /// The file that was just saved.
    pub file: PathBuf,

    /// Workspace root (defaults to the nearest ancestor with a composer.json).
    #[arg(long)]
    pub workspace: Option<PathBuf>,

    /// Editor-declared language id (php, javascript, typescript);
    /// inferred from the file extension when omitted.
    #[arg(long)]
    pub language: Option<Language>,

    /// Use the year-less, author-less header variant and skip the git
    /// authorship queries.
    #[arg(long)]
    pub minimal: bool,

    /// Report what would happen without editing the file.
    #[arg(long)]
    pub dry_run: bool,
}

impl HookArgs {
    pub fn run(self) -> Result<()> {
        let cwd = std::env::current_dir().context("could not determine current directory")?;
        let file = if self.file.is_absolute() {
            self.file.clone()
        } else {
            cwd.join(&self.file)
        };

        // The workspace root must be absolute too, or stripping it from the
        // absolutized file path can never match.
        let workspace = match self
            .workspace
            .clone()
            .map(|root| if root.is_absolute() { root } else { cwd.join(root) })
            .or_else(|| manifest::discover_workspace(&file))
        {
            Some(root) => root,
            None => {
                debug!(file = %file.display(), "skipped: no workspace with a manifest");
                return Ok(());
            }
        };

        let record = manifest::load(&workspace)
            .with_context(|| format!("loading manifest in '{}'", workspace.display()))?;

        let language = self.language.or_else(|| Language::from_path(&file));

        let ctx = match eligibility::check(
            record.as_ref(),
            &file,
            &workspace,
            language,
            &Policy::default(),
        ) {
            Ok(ctx) => ctx,
            Err(reason) => {
                debug!(file = %file.display(), %reason, "skipped");
                return Ok(());
            }
        };

        let (variant, authors) = if self.minimal {
            (HeaderVariant::Minimal, String::new())
        } else {
            let dir = file
                .parent()
                .with_context(|| format!("'{}' has no parent directory", file.display()))?;
            let name = file
                .file_name()
                .and_then(|n| n.to_str())
                .with_context(|| format!("'{}' has no UTF-8 file name", file.display()))?;
            let authors = resolve_authors(&GitAuthorSource::new(), dir, name)
                .with_context(|| format!("authorship query failed for '{}'", file.display()))?;
            (HeaderVariant::Authored, authors)
        };

        let header = render(variant, &ctx.package_name.0, current_year(), &authors);

        let mut host = FileHost::open(&file)
            .with_context(|| format!("opening '{}'", file.display()))?;
        let outcome = synchronize(&mut host, &ctx, &header, self.dry_run)
            .with_context(|| format!("synchronizing '{}'", file.display()))?;

        match outcome {
            SyncOutcome::Replaced => println!("✓ {} — header replaced", file.display()),
            SyncOutcome::Inserted => println!("✓ {} — header inserted", file.display()),
            SyncOutcome::Unchanged => println!("✓ {} — header already current", file.display()),
            SyncOutcome::WouldReplace => {
                println!("[dry-run] {} — would replace header", file.display())
            }
            SyncOutcome::WouldInsert => {
                println!("[dry-run] {} — would insert header", file.display())
            }
        }

        Ok(())
    }
}
