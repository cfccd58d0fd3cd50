//! Headstamp core library — domain types, manifest discovery, eligibility.
//!
//! Public API surface:
//! - [`types`] — newtypes and domain structs
//! - [`error`] — [`ManifestError`]
//! - [`manifest`] — find / load `composer.json`
//! - [`eligibility`] — the ordered gate chain

pub mod eligibility;
pub mod error;
pub mod manifest;
pub mod types;

pub use eligibility::{Policy, SkipReason};
pub use error::ManifestError;
pub use types::{EligibleContext, Language, ManifestRecord, PackageName};
