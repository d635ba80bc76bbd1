//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! promptpaste operation. It dispatches to `commands/*.rs` and returns
//! structured [`CmdResult`] values; it never prints and never exits.
//!
//! `PasteApi<S: DataStore>` is generic over the storage backend:
//! - Production: `PasteApi<FileStore>`
//! - Testing: `PasteApi<InMemoryStore>`

use crate::commands;
use crate::config::PasteConfig;
use crate::error::Result;
use crate::prompt::Prompter;
use crate::store::DataStore;
use std::path::PathBuf;

/// Locations resolved for one invocation.
#[derive(Debug, Clone)]
pub struct PastePaths {
    pub storage: PathBuf,
    pub config_dir: Option<PathBuf>,
}

pub struct PasteApi<S: DataStore> {
    store: S,
    paths: PastePaths,
    config: PasteConfig,
}

impl<S: DataStore> PasteApi<S> {
    pub fn new(store: S, paths: PastePaths, config: PasteConfig) -> Self {
        Self {
            store,
            paths,
            config,
        }
    }

    pub fn save_entry<P: Prompter>(
        &mut self,
        request: &SaveRequest,
        prompter: &mut P,
    ) -> Result<CmdResult> {
        commands::save::run(&mut self.store, request, prompter)
    }

    pub fn get_entry(&self, id: &str) -> Result<CmdResult> {
        commands::get::run(&self.store, id)
    }

    pub fn list_entries(&self) -> Result<CmdResult> {
        commands::list::run(&self.store, self.config.preview_width)
    }

    pub fn remove_entry(&mut self, id: &str) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn config(&self) -> Result<CmdResult> {
        commands::config::run(&self.config, &self.paths.storage)
    }

    pub fn paths(&self) -> &PastePaths {
        &self.paths
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::collision::CollisionMode;
pub use commands::save::SaveRequest;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
