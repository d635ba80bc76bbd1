use super::DataStore;
use crate::error::Result;
use std::collections::BTreeMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    entries: BTreeMap<String, Vec<u8>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DataStore for InMemoryStore {
    fn entry_names(&self) -> Result<Vec<String>> {
        Ok(self.entries.keys().cloned().collect())
    }

    fn exists(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    fn write_entry(&mut self, name: &str, content: &[u8]) -> Result<()> {
        self.entries.insert(name.to_string(), content.to_vec());
        Ok(())
    }

    fn read_entry(&self, name: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.get(name).cloned())
    }

    fn remove_entry(&mut self, name: &str) -> Result<bool> {
        Ok(self.entries.remove(name).is_some())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_entry(mut self, name: &str, content: &str) -> Self {
            self.store.write_entry(name, content.as_bytes()).unwrap();
            self
        }

        pub fn with_entries(mut self, names: &[&str]) -> Self {
            for name in names {
                let content = format!("content of {}", name);
                self.store.write_entry(name, content.as_bytes()).unwrap();
            }
            self
        }
    }
}
