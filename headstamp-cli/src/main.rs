//! Headstamp — copyright-header synchronizer for Glowing Blue Flarum
//! extensions.
//!
//! # Usage
//!
//! ```text
//! headstamp hook <file> [--workspace <dir>] [--language <id>] [--minimal] [--dry-run]
//! headstamp preview [--package <name>] [--workspace <dir>] [--minimal]
//! ```
//!
//! `hook` is the per-save entry point: an editor's on-save hook invokes it
//! with the saved file, and it rewrites (or inserts) the copyright header
//! when the file qualifies. Ineligible files are left alone silently.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{hook::HookArgs, preview::PreviewArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "headstamp",
    version,
    about = "Keep copyright headers in Flarum extension sources in sync",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Synchronize the header of one saved file (the on-save hook).
    Hook(HookArgs),

    /// Print the header that would be generated, without touching any file.
    Preview(PreviewArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::Hook(args) => args.run(),
        Commands::Preview(args) => args.run(),
    }
}
