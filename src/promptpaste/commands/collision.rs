//! # Collision Resolution
//!
//! Decides which name a save writes to when the requested name is already
//! taken. The resolver never touches storage: it works against the set of
//! taken names handed to it and talks to the user only through a
//! [`Prompter`].
//!
//! ```text
//!            ┌──────────────┐  free / overwrite / rename   ┌──────┐
//!  name ───▶ │   Resolve    │ ───────────────────────────▶ │ Done │
//!            └──────────────┘                              └──────┘
//!               ▲       │ taken (interactive)
//!   typed name  │       ▼
//!            ┌──────────────┐   n / empty / end of input   ┌───────────┐
//!            │  AwaitName   │ ───────────────────────────▶ │ Cancelled │
//!            └──────────────┘                              └───────────┘
//! ```
//!
//! Every name entering `Resolve` is validated first, including names typed
//! at the prompt; a rejected name ends the save with an error.

use crate::error::{PasteError, Result};
use crate::index::validate_name;
use crate::model::split_name;
use crate::prompt::Prompter;
use log::debug;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionMode {
    /// Ask the user what to do.
    #[default]
    Interactive,
    /// Pick the first free `<stem>_N<ext>`.
    AutoRename,
    /// Replace the existing entry.
    Overwrite,
    /// The name was given explicitly and must not be taken.
    ExplicitName,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Write(String),
    Cancelled,
}

enum State {
    Resolve(String),
    AwaitName(String),
    Done(String),
    Cancelled,
}

pub fn resolve<P: Prompter>(
    requested: &str,
    mode: CollisionMode,
    taken: &BTreeSet<String>,
    prompter: &mut P,
) -> Result<Resolution> {
    let mut state = State::Resolve(requested.to_string());

    loop {
        state = match state {
            State::Resolve(name) => {
                validate_name(&name)?;
                if !taken.contains(&name) {
                    State::Done(name)
                } else {
                    debug!("'{}' is taken, resolving with {:?}", name, mode);
                    match mode {
                        CollisionMode::ExplicitName => {
                            return Err(PasteError::NameCollision(name));
                        }
                        CollisionMode::Overwrite => State::Done(name),
                        CollisionMode::AutoRename => State::Done(next_free_name(&name, taken)),
                        CollisionMode::Interactive => State::AwaitName(name),
                    }
                }
            }
            State::AwaitName(name) => {
                let suggested = next_free_name(&name, taken);
                let answer = prompter.ask(&collision_prompt(&name, &suggested))?;
                let answer = answer.as_deref().map(str::trim).unwrap_or_default();

                match answer.to_lowercase().as_str() {
                    "" | "n" => State::Cancelled,
                    "r" => State::Done(suggested),
                    "o" => State::Done(name),
                    _ => State::Resolve(answer.to_string()),
                }
            }
            State::Done(name) => return Ok(Resolution::Write(name)),
            State::Cancelled => return Ok(Resolution::Cancelled),
        };
    }
}

/// First name of the form `<stem>_N<ext>`, N counting up from 2, that is
/// not in `taken`.
pub fn next_free_name(name: &str, taken: &BTreeSet<String>) -> String {
    let (stem, ext) = split_name(name);
    (2..)
        .map(|n| format!("{}_{}{}", stem, n, ext))
        .find(|candidate| !taken.contains(candidate))
        .unwrap_or_else(|| name.to_string())
}

fn collision_prompt(name: &str, suggested: &str) -> String {
    format!(
        "Entry '{name}' already exists.\n\
         \n\
         Options:\n\
         \x20 n/N - Cancel and exit\n\
         \x20 r/R - Rename to suggested name: '{suggested}'\n\
         \x20 o/O - Overwrite existing file\n\
         \x20 <type> - Enter your own name\n\
         \n\
         Your choice: "
    )
}
