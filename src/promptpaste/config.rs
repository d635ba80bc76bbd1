use crate::error::{PasteError, Result};
use crate::model::DEFAULT_PREVIEW_WIDTH;
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "config.json";

/// User configuration, stored as `config.json` in the per-user config
/// directory. Never stored inside the storage root.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PasteConfig {
    /// Where entries live. `PROMPT_PASTE_STORAGE` takes precedence.
    #[serde(default)]
    pub storage_dir: Option<PathBuf>,

    /// Display width of the first-line preview in `pp list`.
    #[serde(default = "default_preview_width")]
    pub preview_width: usize,
}

fn default_preview_width() -> usize {
    DEFAULT_PREVIEW_WIDTH
}

impl Default for PasteConfig {
    fn default() -> Self {
        Self {
            storage_dir: None,
            preview_width: DEFAULT_PREVIEW_WIDTH,
        }
    }
}

impl PasteConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        debug!("loading config from {}", config_path.display());
        let content = fs::read_to_string(&config_path).map_err(PasteError::Io)?;
        let config: PasteConfig =
            serde_json::from_str(&content).map_err(PasteError::Serialization)?;
        Ok(config)
    }
}
