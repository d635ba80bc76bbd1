use crate::model::EntrySummary;

pub mod collision;
pub mod config;
pub mod delete;
pub mod get;
pub mod list;
pub mod save;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Rows for `pp list`.
    pub listed_entries: Vec<EntrySummary>,
    /// Raw content of a retrieved entry. `None` on a miss.
    pub content: Option<Vec<u8>>,
    /// Final name a save wrote to.
    pub saved_as: Option<String>,
    /// Set when the user aborted an interactive save.
    pub cancelled: bool,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_entries(mut self, entries: Vec<EntrySummary>) -> Self {
        self.listed_entries = entries;
        self
    }

    pub fn with_content(mut self, content: Vec<u8>) -> Self {
        self.content = Some(content);
        self
    }
}
