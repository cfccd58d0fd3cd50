//! # headstamp-engine
//!
//! Header detection, generation and in-place reconciliation.
//!
//! Call [`synchronize`] with a [`DocumentHost`] (the editor-agnostic document
//! surface), an eligible context from `headstamp-core`, and a rendered header
//! to replace a stale header, insert a missing one, or do nothing when the
//! document is already correct.

pub mod error;
pub mod host;
pub mod locator;
pub mod sync;
pub mod template;

pub use error::EngineError;
pub use host::{DocumentHost, Edit, FileHost, MemoryHost};
pub use locator::{find_header, HeaderMatch, SCAN_WINDOW_LINES};
pub use sync::{synchronize, SyncOutcome};
pub use template::{current_year, render, HeaderVariant};
