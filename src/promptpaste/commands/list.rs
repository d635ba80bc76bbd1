use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Entry, EntrySummary};
use crate::store::DataStore;
use log::warn;

pub fn run<S: DataStore>(store: &S, preview_width: usize) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut listed = Vec::new();
    for name in store.entry_names()? {
        let content = match store.read_entry(&name) {
            Ok(Some(content)) => content,
            // Entries can vanish between listing and reading when another
            // invocation deletes them.
            Ok(None) => continue,
            Err(e) => {
                warn!("cannot read {}: {}", name, e);
                result.add_message(CmdMessage::warning(format!("Could not read {}", name)));
                continue;
            }
        };
        listed.push(EntrySummary::from_entry(
            &Entry::new(name, content),
            preview_width,
        ));
    }

    Ok(result.with_listed_entries(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::PasteError;
    use crate::model::DEFAULT_PREVIEW_WIDTH;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use std::io;

    /// Store whose reads of one name fail.
    struct FailingRead {
        inner: InMemoryStore,
        broken: &'static str,
    }

    impl DataStore for FailingRead {
        fn entry_names(&self) -> Result<Vec<String>> {
            self.inner.entry_names()
        }

        fn exists(&self, name: &str) -> bool {
            self.inner.exists(name)
        }

        fn write_entry(&mut self, name: &str, content: &[u8]) -> Result<()> {
            self.inner.write_entry(name, content)
        }

        fn read_entry(&self, name: &str) -> Result<Option<Vec<u8>>> {
            if name == self.broken {
                return Err(PasteError::Io(io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    "denied",
                )));
            }
            self.inner.read_entry(name)
        }

        fn remove_entry(&mut self, name: &str) -> Result<bool> {
            self.inner.remove_entry(name)
        }
    }

    #[test]
    fn lists_sorted_by_name() {
        let store = StoreFixture::new()
            .with_entries(&["two.txt", "one.md", "Three.md"])
            .store;
        let res = run(&store, DEFAULT_PREVIEW_WIDTH).unwrap();

        let names: Vec<_> = res.listed_entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Three.md", "one.md", "two.txt"]);
    }

    #[test]
    fn rows_carry_counts_and_preview() {
        let store = StoreFixture::new()
            .with_entry("review.md", "  Review this PR  \nstep one\nstep two")
            .store;
        let res = run(&store, DEFAULT_PREVIEW_WIDTH).unwrap();

        let row = &res.listed_entries[0];
        assert_eq!(row.line_count, 3);
        assert_eq!(row.char_count, 36);
        assert_eq!(row.preview, "Review this PR");
    }

    #[test]
    fn empty_store_lists_nothing() {
        let res = run(&InMemoryStore::new(), DEFAULT_PREVIEW_WIDTH).unwrap();
        assert!(res.listed_entries.is_empty());
        assert!(res.messages.is_empty());
    }

    #[test]
    fn unreadable_entry_is_skipped_with_warning() {
        let inner = StoreFixture::new()
            .with_entry("bad.md", "locked")
            .with_entry("good.md", "fine")
            .store;
        let store = FailingRead {
            inner,
            broken: "bad.md",
        };

        let res = run(&store, DEFAULT_PREVIEW_WIDTH).unwrap();

        let names: Vec<_> = res.listed_entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["good.md"]);
        assert_eq!(res.messages.len(), 1);
        assert_eq!(res.messages[0].level, MessageLevel::Warning);
        assert_eq!(res.messages[0].content, "Could not read bad.md");
    }
}
