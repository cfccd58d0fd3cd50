//! Error types for headstamp-vcs.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// All errors that can arise from version-control queries.
///
/// Every variant is fatal to the save-hook invocation: a file with no
/// usable history aborts the header write rather than falling back to a
/// guess.
#[derive(Debug, Error)]
pub enum VcsError {
    /// The subprocess could not be spawned (git missing, bad directory).
    #[error("failed to run {program} in {dir}: {source}")]
    Spawn {
        program: &'static str,
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The subprocess ran but exited non-zero.
    #[error("{program} exited with {status}: {stderr}")]
    Command {
        program: &'static str,
        status: ExitStatus,
        stderr: String,
    },

    /// The subprocess produced non-UTF-8 output.
    #[error("{program} produced non-UTF-8 output")]
    Output { program: &'static str },
}
