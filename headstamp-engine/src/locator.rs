//! Existing-header detection.
//!
//! Pure string functions: given the bounded window of text at the top of a
//! document, find the last C-style block comment and record enough geometry
//! (line span, last-line length) to recompute its exact document range.

use once_cell::sync::Lazy;
use regex::Regex;

/// How many lines below the language offset are scanned for a header.
/// A heuristic bound, not a structural guarantee — real headers fit easily.
pub const SCAN_WINDOW_LINES: usize = 20;

/// Greedy, non-nested C-style block comment.
static BLOCK_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/\*[^*]*\*+(?:[^/*][^*]*\*+)*/").expect("block comment pattern"));

/// An existing header comment found in the scan window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMatch {
    /// The matched comment text, verbatim.
    pub text: String,
    /// Number of lines the comment spans.
    pub line_span: usize,
    /// Character length of the comment's final line.
    pub last_line_len: usize,
}

/// Find an existing header comment in the window text.
///
/// When several block comments fall inside the window the last one wins —
/// in practice at most one header-shaped comment appears there, but being
/// greedy about it keeps the replacement from stopping short.
pub fn find_header(window: &str) -> Option<HeaderMatch> {
    let matched = BLOCK_COMMENT.find_iter(window).last()?;
    let text = matched.as_str().to_string();
    let line_span = text.split('\n').count();
    let last_line_len = text
        .split('\n')
        .next_back()
        .map_or(0, |line| line.chars().count());
    Some(HeaderMatch {
        text,
        line_span,
        last_line_len,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "/*\n * This file is part of glowingblue/acme.\n *\n * Copyright (c) Glowing Blue AG.\n *\n * For the full copyright and license information, please view the LICENSE.md\n * file that was distributed with this source code.\n */";

    #[test]
    fn finds_a_multiline_header() {
        let window = format!("{HEADER}\n\nnamespace Acme;\n");
        let m = find_header(&window).expect("match");
        assert_eq!(m.text, HEADER);
        assert_eq!(m.line_span, 8);
        assert_eq!(m.last_line_len, 3); // " */"
    }

    #[test]
    fn no_comment_means_no_match() {
        assert_eq!(find_header("namespace Acme;\n\nclass Foo {}\n"), None);
        assert_eq!(find_header(""), None);
    }

    #[test]
    fn single_line_comment_geometry() {
        let m = find_header("/* compact */\ncode();\n").expect("match");
        assert_eq!(m.text, "/* compact */");
        assert_eq!(m.line_span, 1);
        assert_eq!(m.last_line_len, 13);
    }

    #[test]
    fn last_of_several_comments_wins() {
        let window = "/* first */\nuse Thing;\n/* second */\n";
        let m = find_header(window).expect("match");
        assert_eq!(m.text, "/* second */");
    }

    #[test]
    fn line_comments_are_not_headers() {
        assert_eq!(find_header("// not a block comment\ncode();\n"), None);
    }

    #[test]
    fn unterminated_comment_is_ignored() {
        assert_eq!(find_header("/*\n * dangling\n"), None);
    }

    #[test]
    fn match_stops_at_first_terminator() {
        let m = find_header("/* a */ trailing text").expect("match");
        assert_eq!(m.text, "/* a */");
    }
}
