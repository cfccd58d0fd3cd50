//! The document host capability — the seam between the substitution logic
//! and whatever surface actually holds the text.
//!
//! Positions follow the editor convention: `(line, column)` with line starts
//! as anchors and columns counted in characters, and out-of-range positions
//! clamped to the document (a column past the end of a line means
//! end-of-line, a line past the end of the buffer means end-of-buffer). [`MemoryHost`] backs tests and previews;
//! [`FileHost`] is the production surface, persisting through a temp file
//! and an atomic rename.

use std::path::{Path, PathBuf};

use crate::error::{io_err, EngineError};

// ---------------------------------------------------------------------------
// Edits
// ---------------------------------------------------------------------------

/// A single text edit, expressed in editor line/column coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// Replace the range from the start of `start_line` up to column
    /// `end_col` on `end_line` with `text`.
    Replace {
        start_line: usize,
        end_line: usize,
        end_col: usize,
        text: String,
    },
    /// Insert `text` at the start of `line`.
    Insert { line: usize, text: String },
}

// ---------------------------------------------------------------------------
// Capability trait
// ---------------------------------------------------------------------------

/// Minimal document surface required by the header pipeline: read a bounded
/// line window, apply one edit, persist.
pub trait DocumentHost {
    /// The text from the start of `start_line` to the start of
    /// `start_line + line_count` (clamped at end of document).
    fn read_window(&self, start_line: usize, line_count: usize) -> Result<String, EngineError>;

    /// Apply one edit to the document buffer.
    fn apply(&mut self, edit: &Edit) -> Result<(), EngineError>;

    /// Commit the current buffer to durable storage.
    fn persist(&mut self) -> Result<(), EngineError>;
}

// ---------------------------------------------------------------------------
// Buffer geometry
// ---------------------------------------------------------------------------

/// Byte offsets of every line start. A trailing newline yields a final empty
/// line, matching the editor line model.
fn line_starts(buffer: &str) -> Vec<usize> {
    let mut starts = vec![0];
    for (i, b) in buffer.bytes().enumerate() {
        if b == b'\n' {
            starts.push(i + 1);
        }
    }
    starts
}

fn line_len(buffer: &str, starts: &[usize], line: usize) -> usize {
    match starts.get(line + 1) {
        Some(next) => next - starts[line] - 1,
        None => buffer.len() - starts[line],
    }
}

fn window_of(buffer: &str, start_line: usize, line_count: usize) -> String {
    let starts = line_starts(buffer);
    let Some(&begin) = starts.get(start_line) else {
        return String::new();
    };
    let end = starts
        .get(start_line + line_count)
        .copied()
        .unwrap_or(buffer.len());
    buffer[begin..end].to_string()
}

fn apply_to_buffer(buffer: &mut String, edit: &Edit) {
    let starts = line_starts(buffer);
    let last_line = starts.len() - 1;
    match edit {
        Edit::Replace {
            start_line,
            end_line,
            end_col,
            text,
        } => {
            let sl = (*start_line).min(last_line);
            let el = (*end_line).min(last_line);
            let begin = starts[sl];
            // Columns count characters, not bytes; a multi-byte line must
            // never be split mid-character.
            let line_start = starts[el];
            let line = &buffer[line_start..line_start + line_len(buffer, &starts, el)];
            let col_bytes = line
                .char_indices()
                .nth(*end_col)
                .map(|(i, _)| i)
                .unwrap_or(line.len());
            let end = line_start + col_bytes;
            buffer.replace_range(begin..end.max(begin), text);
        }
        Edit::Insert { line, text } => {
            let at = starts.get(*line).copied().unwrap_or(buffer.len());
            buffer.insert_str(at, text);
        }
    }
}

// ---------------------------------------------------------------------------
// In-memory host
// ---------------------------------------------------------------------------

/// [`DocumentHost`] over a plain string buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryHost {
    buffer: String,
    persisted: bool,
}

impl MemoryHost {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            buffer: text.into(),
            persisted: false,
        }
    }

    /// The current buffer contents.
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Whether `persist` has been called.
    pub fn persisted(&self) -> bool {
        self.persisted
    }
}

impl DocumentHost for MemoryHost {
    fn read_window(&self, start_line: usize, line_count: usize) -> Result<String, EngineError> {
        Ok(window_of(&self.buffer, start_line, line_count))
    }

    fn apply(&mut self, edit: &Edit) -> Result<(), EngineError> {
        apply_to_buffer(&mut self.buffer, edit);
        Ok(())
    }

    fn persist(&mut self) -> Result<(), EngineError> {
        self.persisted = true;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// On-disk host
// ---------------------------------------------------------------------------

/// [`DocumentHost`] backed by a file on disk.
///
/// The file is read once at construction; edits mutate the in-memory buffer
/// and `persist` writes it back through `<path>.headstamp.tmp` followed by
/// an atomic rename, so a crash mid-write never leaves a torn file.
#[derive(Debug)]
pub struct FileHost {
    path: PathBuf,
    buffer: String,
}

impl FileHost {
    pub fn open(path: &Path) -> Result<Self, EngineError> {
        let buffer = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
        Ok(Self {
            path: path.to_path_buf(),
            buffer,
        })
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }
}

impl DocumentHost for FileHost {
    fn read_window(&self, start_line: usize, line_count: usize) -> Result<String, EngineError> {
        Ok(window_of(&self.buffer, start_line, line_count))
    }

    fn apply(&mut self, edit: &Edit) -> Result<(), EngineError> {
        apply_to_buffer(&mut self.buffer, edit);
        Ok(())
    }

    fn persist(&mut self) -> Result<(), EngineError> {
        let tmp = PathBuf::from(format!("{}.headstamp.tmp", self.path.display()));
        std::fs::write(&tmp, &self.buffer).map_err(|e| io_err(&tmp, e))?;
        if let Err(e) = std::fs::rename(&tmp, &self.path) {
            let _ = std::fs::remove_file(&tmp);
            return Err(io_err(&self.path, e));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn window_spans_whole_lines() {
        let host = MemoryHost::new("a\nb\nc\nd\n");
        assert_eq!(host.read_window(1, 2).unwrap(), "b\nc\n");
    }

    #[test]
    fn window_clamps_at_end_of_document() {
        let host = MemoryHost::new("a\nb\n");
        assert_eq!(host.read_window(0, 20).unwrap(), "a\nb\n");
        assert_eq!(host.read_window(5, 20).unwrap(), "");
    }

    #[test]
    fn window_includes_unterminated_last_line() {
        let host = MemoryHost::new("a\nb");
        assert_eq!(host.read_window(0, 20).unwrap(), "a\nb");
    }

    #[test]
    fn replace_spans_lines_and_final_column() {
        let mut host = MemoryHost::new("one\ntwo\nthree\nrest\n");
        host.apply(&Edit::Replace {
            start_line: 0,
            end_line: 2,
            end_col: 5,
            text: "X\n".to_string(),
        })
        .unwrap();
        assert_eq!(host.text(), "X\n\nrest\n");
    }

    #[test]
    fn replace_end_column_clamps_to_line_length() {
        // End position lands on a blank line; a column beyond its length
        // clamps to the line start, editor-style.
        let mut host = MemoryHost::new("old\n\nbody\n");
        host.apply(&Edit::Replace {
            start_line: 0,
            end_line: 1,
            end_col: 3,
            text: "new\n".to_string(),
        })
        .unwrap();
        assert_eq!(host.text(), "new\n\nbody\n");
    }

    #[test]
    fn replace_end_column_counts_characters_not_bytes() {
        // The end position lands on a line of multi-byte characters; column
        // 3 means three characters, never a byte offset inside one.
        let mut host = MemoryHost::new("/* old\n */\néé();\n");
        host.apply(&Edit::Replace {
            start_line: 0,
            end_line: 2,
            end_col: 3,
            text: "new\n".to_string(),
        })
        .unwrap();
        assert_eq!(host.text(), "new\n);\n");
    }

    #[test]
    fn replace_end_column_clamps_on_multibyte_line() {
        let mut host = MemoryHost::new("old\né\nbody\n");
        host.apply(&Edit::Replace {
            start_line: 0,
            end_line: 1,
            end_col: 9,
            text: "new\n".to_string(),
        })
        .unwrap();
        assert_eq!(host.text(), "new\n\nbody\n");
    }

    #[test]
    fn insert_at_line_start() {
        let mut host = MemoryHost::new("<?php\n\nnamespace Acme;\n");
        host.apply(&Edit::Insert {
            line: 2,
            text: "HEADER\n\n".to_string(),
        })
        .unwrap();
        assert_eq!(host.text(), "<?php\n\nHEADER\n\nnamespace Acme;\n");
    }

    #[test]
    fn insert_past_end_appends() {
        let mut host = MemoryHost::new("<?php\n");
        host.apply(&Edit::Insert {
            line: 9,
            text: "H\n".to_string(),
        })
        .unwrap();
        assert_eq!(host.text(), "<?php\nH\n");
    }

    #[test]
    fn memory_host_tracks_persist() {
        let mut host = MemoryHost::new("x");
        assert!(!host.persisted());
        host.persist().unwrap();
        assert!(host.persisted());
    }

    #[test]
    fn file_host_round_trips_through_tmp_rename() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Foo.php");
        fs::write(&path, "<?php\n\nbody\n").unwrap();

        let mut host = FileHost::open(&path).unwrap();
        host.apply(&Edit::Insert {
            line: 2,
            text: "H\n\n".to_string(),
        })
        .unwrap();
        host.persist().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "<?php\n\nH\n\nbody\n");
        let tmp = dir.path().join("Foo.php.headstamp.tmp");
        assert!(!tmp.exists(), "tmp file must be cleaned up");
    }

    #[test]
    fn file_host_open_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = FileHost::open(&dir.path().join("absent.php")).expect_err("must fail");
        assert!(matches!(err, EngineError::Io { .. }));
    }
}
