//! # Name Resolution
//!
//! Users address entries by id (`do_tests`), while the store keys them by
//! file name (`do_tests.md`). This module maps one to the other, and guards
//! the namespace against names the CLI would shadow.
//!
//! Everything here is a pure function over a directory listing, so the
//! collision resolver and the command layer can be tested without a
//! filesystem.

use crate::error::{PasteError, Result};
use crate::model::entry_id;

/// Operation names the CLI dispatches on. An entry whose id starts with one
/// of these could not be retrieved with `pp <id>`.
pub const RESERVED_WORDS: &[&str] = &["list", "ls", "rm", "add", "store", "save", "config"];

/// Finds the stored file name an id refers to.
///
/// An exact file-name match wins (`pp notes.md`). Otherwise the first name,
/// in sorted order, whose stem equals `id`. No partial matching.
pub fn resolve_id<'a, I>(id: &str, names: I) -> Option<String>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut stem_match: Option<&String> = None;
    for name in names {
        if name == id {
            return Some(name.clone());
        }
        if entry_id(name) == id && stem_match.map_or(true, |best| name < best) {
            stem_match = Some(name);
        }
    }
    stem_match.cloned()
}

/// Checks that `name` can be stored as an entry.
///
/// The reserved-word test is a plain prefix match on the id, so `addendum`
/// is rejected along with `add`.
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(PasteError::rejected(name, "name is empty"));
    }
    if name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(PasteError::rejected(name, "must be a plain file name"));
    }

    let id = entry_id(name);
    if let Some(word) = RESERVED_WORDS.iter().find(|word| id.starts_with(**word)) {
        return Err(PasteError::rejected(
            name,
            format!("starts with the reserved command word '{}'", word),
        ));
    }
    Ok(())
}
