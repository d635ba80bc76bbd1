//! # Entries
//!
//! An entry is an opaque blob of bytes stored under its file name. The file
//! name (extension included) is the entry's identity on disk; the **id** used
//! for retrieval is that name with the last extension stripped:
//!
//! ```text
//! do_tests.md   -> do_tests
//! notes.tar.gz  -> notes.tar
//! README        -> README
//! .hidden       -> .hidden
//! ```
//!
//! Content is never parsed. The only place it is decoded as text is
//! [`EntrySummary`], which exists for human scanning in `pp list`.

use serde::Serialize;
use unicode_width::UnicodeWidthChar;

/// Default display width of the first-line preview in listings.
pub const DEFAULT_PREVIEW_WIDTH: usize = 64;

const ELLIPSIS: &str = "...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub content: Vec<u8>,
}

impl Entry {
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    pub fn id(&self) -> &str {
        entry_id(&self.name)
    }
}

/// One row of `pp list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntrySummary {
    pub name: String,
    pub line_count: usize,
    pub char_count: usize,
    pub preview: String,
}

impl EntrySummary {
    pub fn from_entry(entry: &Entry, preview_width: usize) -> Self {
        let text = String::from_utf8_lossy(&entry.content);
        let first_line = text.split('\n').next().unwrap_or_default().trim();

        Self {
            name: entry.name.clone(),
            line_count: text.matches('\n').count() + 1,
            char_count: text.chars().count(),
            preview: truncate_to_width(first_line, preview_width),
        }
    }
}

/// Splits a file name into `(stem, extension)`, the extension keeping its dot.
///
/// A name whose only dot is the leading one has no extension.
pub fn split_name(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(pos) if pos > 0 => name.split_at(pos),
        _ => (name, ""),
    }
}

pub fn entry_id(name: &str) -> &str {
    split_name(name).0
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width {
            result.push_str(ELLIPSIS);
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_strips_last_extension_only() {
        assert_eq!(entry_id("do_tests.md"), "do_tests");
        assert_eq!(entry_id("notes.tar.gz"), "notes.tar");
        assert_eq!(entry_id("README"), "README");
        assert_eq!(entry_id(".hidden"), ".hidden");
    }

    #[test]
    fn entry_id_matches_free_function() {
        assert_eq!(Entry::new("review.txt", "").id(), "review");
    }

    #[test]
    fn split_keeps_dot_on_extension() {
        assert_eq!(split_name("x.md"), ("x", ".md"));
        assert_eq!(split_name("x"), ("x", ""));
    }

    #[test]
    fn summary_counts_lines_and_chars() {
        let entry = Entry::new("a.md", "first line\nsecond\n");
        let summary = EntrySummary::from_entry(&entry, DEFAULT_PREVIEW_WIDTH);
        assert_eq!(summary.line_count, 3);
        assert_eq!(summary.char_count, 18);
        assert_eq!(summary.preview, "first line");
    }

    #[test]
    fn summary_counts_chars_not_bytes() {
        let entry = Entry::new("u.md", "héllo");
        let summary = EntrySummary::from_entry(&entry, DEFAULT_PREVIEW_WIDTH);
        assert_eq!(summary.char_count, 5);
    }

    #[test]
    fn long_first_line_is_truncated() {
        let line = "x".repeat(100);
        let entry = Entry::new("long.md", line);
        let summary = EntrySummary::from_entry(&entry, 10);
        assert_eq!(summary.preview, "xxxxxxxxxx...");
    }

    #[test]
    fn empty_entry_has_one_line_and_blank_preview() {
        let summary = EntrySummary::from_entry(&Entry::new("e.md", ""), 64);
        assert_eq!(summary.line_count, 1);
        assert_eq!(summary.char_count, 0);
        assert!(summary.preview.is_empty());
    }
}
