use std::path::PathBuf;

use crate::errors::FeedbackError;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Storage backend unavailable: {message}")]
    Unavailable { message: String },
}

impl FeedbackError for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            StorageError::Read { .. } => "STORAGE_READ_FAILED",
            StorageError::Write { .. } => "STORAGE_WRITE_FAILED",
            StorageError::Unavailable { .. } => "STORAGE_UNAVAILABLE",
        }
    }
}
