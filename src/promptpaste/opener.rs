use crate::error::{PasteError, Result};
use crate::store::fs::FileStore;
use log::{debug, warn};
use std::env;
use std::path::Path;
use std::process::Command;

/// Opens the storage root in the platform file manager, falling back to
/// `$EDITOR` (or `vi`) when no opener is available.
pub fn open_storage(store: &FileStore) -> Result<()> {
    store.ensure_root()?;
    let dir = store.root();

    match Command::new(platform_opener()).arg(dir).status() {
        Ok(status) if status.success() => return Ok(()),
        Ok(status) => warn!("{} exited with {}", platform_opener(), status),
        Err(e) => debug!("{} unavailable: {}", platform_opener(), e),
    }

    open_in_editor(dir)
}

fn open_in_editor(dir: &Path) -> Result<()> {
    let editor = env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    let status = Command::new(&editor)
        .arg(dir)
        .status()
        .map_err(PasteError::Io)?;

    if !status.success() {
        return Err(PasteError::Store(format!(
            "{} exited with {}",
            editor, status
        )));
    }
    Ok(())
}

fn platform_opener() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(windows) {
        "explorer"
    } else {
        "xdg-open"
    }
}
