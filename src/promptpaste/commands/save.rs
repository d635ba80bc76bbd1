use crate::commands::collision::{self, CollisionMode, Resolution};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PasteError, Result};
use crate::prompt::Prompter;
use crate::store::DataStore;
use log::debug;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// File that marks a directory as a single-file skill.
pub const SKILL_FILE: &str = "SKILL.md";

#[derive(Debug, Clone, Default)]
pub struct SaveRequest {
    pub source: PathBuf,
    /// Destination name. Defaults to the source's file name.
    pub name: Option<String>,
    pub mode: CollisionMode,
}

impl SaveRequest {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            ..Default::default()
        }
    }

    pub fn with_mode(mut self, mode: CollisionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Saves under `name`, failing if it is already taken.
    pub fn with_explicit_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self.mode = CollisionMode::ExplicitName;
        self
    }
}

/// What a save copies from.
struct Source {
    file: PathBuf,
    default_name: String,
    /// Folder name when the source is a skill folder.
    skill: Option<String>,
}

pub fn run<S: DataStore, P: Prompter>(
    store: &mut S,
    request: &SaveRequest,
    prompter: &mut P,
) -> Result<CmdResult> {
    let source = locate_source(&request.source)?;
    let requested = request.name.clone().unwrap_or(source.default_name);

    let taken: BTreeSet<String> = store.entry_names()?.into_iter().collect();
    let mut result = CmdResult::default();

    match collision::resolve(&requested, request.mode, &taken, prompter)? {
        Resolution::Write(name) => {
            let content = fs::read(&source.file).map_err(PasteError::Io)?;
            store.write_entry(&name, &content)?;
            debug!("saved {} as {}", source.file.display(), name);
            let message = match &source.skill {
                Some(folder) => format!("Imported skill '{}' as {}", folder, name),
                None => format!("Saved entry as {}", name),
            };
            result.add_message(CmdMessage::success(message));
            result.saved_as = Some(name);
        }
        Resolution::Cancelled => {
            result.add_message(CmdMessage::info("Cancelled."));
            result.cancelled = true;
        }
    }

    Ok(result)
}

/// Finds the file to copy and the name it is saved under by default.
///
/// A directory holding nothing but `SKILL.md` saves that file as
/// `<directory>.md`. Any other directory is refused, as is anything that is
/// not a regular file.
fn locate_source(source: &Path) -> Result<Source> {
    if !source.exists() {
        return Err(PasteError::SourceMissing(source.to_path_buf()));
    }

    if source.is_dir() {
        if !is_single_skill_folder(source)? {
            return Err(PasteError::SourceIsDirectory(source.to_path_buf()));
        }
        let folder = file_name(source)?;
        return Ok(Source {
            file: source.join(SKILL_FILE),
            default_name: format!("{}.md", folder),
            skill: Some(folder),
        });
    }

    if !source.is_file() {
        return Err(PasteError::SourceMissing(source.to_path_buf()));
    }

    Ok(Source {
        file: source.to_path_buf(),
        default_name: file_name(source)?,
        skill: None,
    })
}

fn is_single_skill_folder(dir: &Path) -> Result<bool> {
    let mut files = Vec::new();
    for item in fs::read_dir(dir).map_err(PasteError::Io)? {
        let path = item.map_err(PasteError::Io)?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    Ok(files.len() == 1 && files[0].file_name().is_some_and(|n| n == SKILL_FILE))
}

fn file_name(path: &Path) -> Result<String> {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .ok_or_else(|| PasteError::rejected(path.display().to_string(), "no usable file name"))
}
