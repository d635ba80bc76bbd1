//! # promptpaste Architecture
//!
//! promptpaste keeps reusable text snippets (prompts, checklists,
//! instructions) as plain files in one directory and hands them back by
//! name. The `pp` binary is a thin client over this library.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, returns `CmdResult`           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - save (with collision resolution), get, list, delete      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: FileStore, InMemoryStore                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Entries and ids
//!
//! An entry is stored under its original file name (`do_tests.md`) and
//! retrieved by id, the name without its extension (`do_tests`). Ids that
//! start with a command word (`list`, `rm`, `add`, `store`, `save`) are
//! refused at save time so every entry stays reachable as `pp <id>`.
//!
//! ## Misses are quiet
//!
//! Retrieving or deleting an id that matches nothing is a normal outcome,
//! not an error: `pp typo | pbcopy` prints nothing and exits 0. Saving is the
//! opposite: a missing source, a refused name or an explicit-name collision
//! all surface as [`error::PasteError`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic, including [`commands::collision`]
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Entry`, `EntrySummary` and name splitting
//! - [`index`]: id → file name resolution and name validation
//! - [`prompt`]: Line-based interaction channel for collision prompts
//! - [`config`]: Configuration file
//! - [`init`]: Storage root resolution and context setup
//! - [`opener`]: Opening the storage directory
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod init;
pub mod model;
pub mod opener;
pub mod prompt;
pub mod store;
