use crate::api::{PasteApi, PastePaths};
use crate::config::PasteConfig;
use crate::store::fs::FileStore;
use directories::{BaseDirs, ProjectDirs};
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the storage root.
pub const STORAGE_ENV: &str = "PROMPT_PASTE_STORAGE";

/// Directory under the home directory used when nothing else is configured.
pub const DEFAULT_STORAGE_DIR: &str = ".prompt_paste";

pub struct PasteContext {
    pub api: PasteApi<FileStore>,
}

/// Picks the storage root: explicit override, then the config file's
/// `storage_dir`, then `~/.prompt_paste`.
pub fn resolve_storage_root(
    env_override: Option<&Path>,
    config: &PasteConfig,
    home: Option<&Path>,
) -> PathBuf {
    if let Some(dir) = env_override.filter(|p| !p.as_os_str().is_empty()) {
        return dir.to_path_buf();
    }
    if let Some(dir) = &config.storage_dir {
        return dir.clone();
    }
    home.map(|h| h.join(DEFAULT_STORAGE_DIR))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_DIR))
}

pub fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "promptpaste", "promptpaste").map(|d| d.config_dir().to_path_buf())
}

/// Builds the context for one invocation. `env_override` is the already
/// looked-up value of [`STORAGE_ENV`].
pub fn initialize(env_override: Option<PathBuf>) -> PasteContext {
    let config_dir = config_dir();
    let config = match &config_dir {
        Some(dir) => PasteConfig::load(dir).unwrap_or_else(|e| {
            warn!("ignoring unreadable config: {}", e);
            PasteConfig::default()
        }),
        None => PasteConfig::default(),
    };

    let home = BaseDirs::new().map(|bd| bd.home_dir().to_path_buf());
    let storage = resolve_storage_root(env_override.as_deref(), &config, home.as_deref());
    debug!("storage root: {}", storage.display());

    let store = FileStore::new(storage.clone());
    let paths = PastePaths {
        storage,
        config_dir,
    };
    let api = PasteApi::new(store, paths, config);

    PasteContext { api }
}
