//! # Storage Layer
//!
//! The [`DataStore`] trait is the only way the rest of the crate touches
//! stored entries. It deals purely in file names; mapping ids to names is
//! the job of [`crate::index`].
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one file per entry directly
//!   under the storage root
//! - [`memory::InMemoryStore`]: in-memory storage for testing
//!
//! ## Storage Format
//!
//! ```text
//! ~/.prompt_paste/
//! ├── do_tests.md
//! ├── review_checklist.txt
//! └── review_checklist_2.txt
//! ```
//!
//! There is no index or metadata file: the directory listing is the catalog.
//! Subdirectories and anything that is not a regular file are ignored.

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for entry storage.
pub trait DataStore {
    /// Names of all stored entries, sorted.
    fn entry_names(&self) -> Result<Vec<String>>;

    /// Whether an entry with exactly this file name exists.
    fn exists(&self, name: &str) -> bool;

    /// Create or overwrite an entry. Content is stored byte for byte.
    fn write_entry(&mut self, name: &str, content: &[u8]) -> Result<()>;

    /// Read an entry by exact file name.
    fn read_entry(&self, name: &str) -> Result<Option<Vec<u8>>>;

    /// Remove an entry by exact file name. Returns false if it was absent.
    fn remove_entry(&mut self, name: &str) -> Result<bool>;
}
