//! Error types for social-storage

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StorageError>;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Document encoding error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{0}")]
    NotFound(String),

    #[error("user {0} doesn't exist")]
    UnknownUser(String),
}

/// Coarse classification callers translate into their own responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    NotFound,
    Validation,
}

impl StorageError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StorageError::Io(_) | StorageError::Decode(_) => ErrorKind::Io,
            StorageError::NotFound(_) | StorageError::UnknownUser(_) => ErrorKind::NotFound,
        }
    }
}
