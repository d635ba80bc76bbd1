//! Line-based interaction channel used when a save collides with an
//! existing entry.
//!
//! [`TerminalPrompter`] talks to the invoking terminal; [`ScriptedPrompter`]
//! replays canned answers so the collision loop can be tested.

use crate::error::{PasteError, Result};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

pub trait Prompter {
    /// Shows `message` and reads one line of input, without its line ending.
    /// Returns `None` once input is exhausted.
    fn ask(&mut self, message: &str) -> Result<Option<String>>;
}

/// Prompts on stderr and reads answers from stdin, leaving stdout for
/// entry content.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&mut self, message: &str) -> Result<Option<String>> {
        let mut stderr = io::stderr();
        write!(stderr, "{}", message).map_err(PasteError::Io)?;
        stderr.flush().map_err(PasteError::Io)?;

        let mut input = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut input)
            .map_err(PasteError::Io)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Answers prompts from a fixed script and records what it was shown.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    pub asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, message: &str) -> Result<Option<String>> {
        self.asked.push(message.to_string());
        Ok(self.answers.pop_front())
    }
}
