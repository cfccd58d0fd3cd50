//! Header templates and placeholder fill.
//!
//! Two fixed variants, baked in at compile time. Substitution is verbatim
//! `str::replace` — package names and author names are trusted not to
//! contain text that would break the comment structure, and no escaping is
//! performed.

use chrono::{Datelike, Utc};

/// Which header layout to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderVariant {
    /// Full header with copyright year and author list.
    #[default]
    Authored,
    /// Year-less, author-less header (the original extension's layout).
    Minimal,
}

const AUTHORED: &str = "/*
 * This file is part of {package-name}.
 *
 * Copyright (c) {year} Glowing Blue AG.
 * Authors: {authors}.
 *
 * For the full copyright and license information, please view the LICENSE.md
 * file that was distributed with this source code.
 */";

const MINIMAL: &str = "/*
 * This file is part of {package-name}.
 *
 * Copyright (c) Glowing Blue AG.
 *
 * For the full copyright and license information, please view the LICENSE.md
 * file that was distributed with this source code.
 */";

/// The current UTC year, for the `{year}` placeholder.
pub fn current_year() -> i32 {
    Utc::now().year()
}

/// Fill the template placeholders. `year` and `authors` are ignored by the
/// minimal variant.
pub fn render(variant: HeaderVariant, package_name: &str, year: i32, authors: &str) -> String {
    match variant {
        HeaderVariant::Authored => AUTHORED
            .replace("{package-name}", package_name)
            .replace("{year}", &year.to_string())
            .replace("{authors}", authors),
        HeaderVariant::Minimal => MINIMAL.replace("{package-name}", package_name),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
