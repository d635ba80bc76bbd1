use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PasteError {
    #[error("source file not found: {}", .0.display())]
    SourceMissing(PathBuf),

    #[error("source is a directory: {}", .0.display())]
    SourceIsDirectory(PathBuf),

    #[error("'{name}' cannot be used as an entry name: {reason}")]
    NameRejected { name: String, reason: String },

    #[error("Name '{0}' already exists in storage.")]
    NameCollision(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

/// Coarse classification the CLI uses to pick exit codes and messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    SourceMissing,
    NameRejected,
    NameCollision,
    Io,
}

impl PasteError {
    pub fn rejected(name: impl Into<String>, reason: impl Into<String>) -> Self {
        PasteError::NameRejected {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            PasteError::SourceMissing(_) | PasteError::SourceIsDirectory(_) => {
                ErrorKind::SourceMissing
            }
            PasteError::NameRejected { .. } => ErrorKind::NameRejected,
            PasteError::NameCollision(_) => ErrorKind::NameCollision,
            PasteError::Io(_) | PasteError::Serialization(_) | PasteError::Store(_) => {
                ErrorKind::Io
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PasteError>;
