//! Header reconciliation pipeline.
//!
//! One call per save event: scan the bounded window at the language offset,
//! compare any existing header against the generated one, and replace,
//! insert, or leave the document alone. The host is persisted only when an
//! edit was actually applied.

use headstamp_core::EligibleContext;
use tracing::{debug, info};

use crate::error::EngineError;
use crate::host::{DocumentHost, Edit};
use crate::locator::{find_header, SCAN_WINDOW_LINES};

/// Outcome of reconciling one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// A stale header was replaced in place.
    Replaced,
    /// No header existed; one was inserted at the offset.
    Inserted,
    /// The existing header already matches — no edit, no persist.
    Unchanged,
    /// Dry-run: a stale header *would* have been replaced.
    WouldReplace,
    /// Dry-run: a header *would* have been inserted.
    WouldInsert,
}

/// Reconcile the document's header with `header` (the fully rendered text).
///
/// Replacement spans from the offset line to `offset + line_span` with the
/// matched final-line column, and writes the header plus a single trailing
/// newline, leaving everything after the old header byte-identical.
/// Insertion writes the header plus one blank line at the offset.
pub fn synchronize<H: DocumentHost>(
    host: &mut H,
    ctx: &EligibleContext,
    header: &str,
    dry_run: bool,
) -> Result<SyncOutcome, EngineError> {
    let offset = ctx.line_offset;
    let window = host.read_window(offset, SCAN_WINDOW_LINES)?;

    match find_header(&window) {
        Some(existing) if existing.text == header => {
            debug!(package = %ctx.package_name, "header already current");
            Ok(SyncOutcome::Unchanged)
        }
        Some(existing) => {
            if dry_run {
                return Ok(SyncOutcome::WouldReplace);
            }
            host.apply(&Edit::Replace {
                start_line: offset,
                end_line: offset + existing.line_span,
                end_col: existing.last_line_len,
                text: format!("{header}\n"),
            })?;
            host.persist()?;
            info!(package = %ctx.package_name, "replaced stale header");
            Ok(SyncOutcome::Replaced)
        }
        None => {
            if dry_run {
                return Ok(SyncOutcome::WouldInsert);
            }
            host.apply(&Edit::Insert {
                line: offset,
                text: format!("{header}\n\n"),
            })?;
            host.persist()?;
            info!(package = %ctx.package_name, "inserted missing header");
            Ok(SyncOutcome::Inserted)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
