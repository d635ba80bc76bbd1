use super::DataStore;
use crate::error::{PasteError, Result};
use log::{debug, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates the storage root (and any missing ancestors) if absent.
    pub fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            debug!("creating storage root {}", self.root.display());
            fs::create_dir_all(&self.root).map_err(PasteError::Io)?;
        }
        Ok(())
    }

    fn entry_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl DataStore for FileStore {
    fn entry_names(&self) -> Result<Vec<String>> {
        let dir = match fs::read_dir(&self.root) {
            Ok(dir) => dir,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(PasteError::Io(e)),
        };

        let mut names = Vec::new();
        for item in dir {
            let item = item.map_err(PasteError::Io)?;
            if !item.path().is_file() {
                continue;
            }
            match item.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => warn!("skipping entry with non UTF-8 name: {:?}", raw),
            }
        }
        names.sort();
        Ok(names)
    }

    fn exists(&self, name: &str) -> bool {
        self.entry_path(name).is_file()
    }

    fn write_entry(&mut self, name: &str, content: &[u8]) -> Result<()> {
        self.ensure_root()?;
        let path = self.entry_path(name);
        if path.exists() && !path.is_file() {
            return Err(PasteError::rejected(
                name,
                "something other than a file already has this name in storage",
            ));
        }
        fs::write(&path, content).map_err(PasteError::Io)?;
        debug!("wrote {} bytes to {}", content.len(), path.display());
        Ok(())
    }

    fn read_entry(&self, name: &str) -> Result<Option<Vec<u8>>> {
        let path = self.entry_path(name);
        if !path.is_file() {
            return Ok(None);
        }
        fs::read(path).map(Some).map_err(PasteError::Io)
    }

    fn remove_entry(&mut self, name: &str) -> Result<bool> {
        let path = self.entry_path(name);
        if !path.is_file() {
            return Ok(false);
        }
        fs::remove_file(&path).map_err(PasteError::Io)?;
        debug!("removed {}", path.display());
        Ok(true)
    }
}
