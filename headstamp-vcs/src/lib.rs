//! # headstamp-vcs
//!
//! Version-control authorship queries behind the [`AuthorSource`] capability
//! trait: ranked historical authors for a file, plus the locally configured
//! identity. [`GitAuthorSource`] shells out to `git`; tests inject fixed
//! fakes.

pub mod authors;
pub mod error;

pub use authors::{resolve_authors, AuthorSource, GitAuthorSource};
pub use error::VcsError;
