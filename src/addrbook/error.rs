use crate::validation::FieldError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookError {
    #[error("Invalid format: {0}")]
    InvalidFormat(#[from] FieldError),

    #[error("{0}")]
    NotFound(String),

    #[error("Contact '{0}' already exists")]
    DuplicateName(String),

    #[error("{0}")]
    UnknownCommand(String),

    #[error("Usage: {0}")]
    Usage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

impl BookError {
    pub fn contact_not_found(name: &str) -> Self {
        BookError::NotFound(format!("Contact '{}' not found", name))
    }

    pub fn note_not_found(id: u64) -> Self {
        BookError::NotFound(format!("Note {} not found", id))
    }

    /// Errors that leave the record store unusable or unsaved. Everything else
    /// is reported to the user and the session goes on.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            BookError::Io(_) | BookError::Serialization(_) | BookError::Store(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, BookError>;
