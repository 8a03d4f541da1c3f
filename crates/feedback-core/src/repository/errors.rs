use crate::errors::FeedbackError;
use crate::storage::StorageError;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Storage operation failed: {source}")]
    Storage {
        #[from]
        source: StorageError,
    },

    #[error("Failed to serialize feedback records: {source}")]
    Serialization { source: serde_json::Error },

    /// The persisted blob could not be parsed. `Repository::load` recovers
    /// from this by starting empty; it never reaches callers of `load`.
    #[error("Persisted feedback data is malformed: {source}")]
    MalformedPersistedData { source: serde_json::Error },

    #[error("A feedback record with id '{id}' already exists")]
    DuplicateId { id: String },
}

impl FeedbackError for RepositoryError {
    fn error_code(&self) -> &'static str {
        match self {
            RepositoryError::Storage { .. } => "STORAGE_ERROR",
            RepositoryError::Serialization { .. } => "SERIALIZATION_ERROR",
            RepositoryError::MalformedPersistedData { .. } => "MALFORMED_PERSISTED_DATA",
            RepositoryError::DuplicateId { .. } => "DUPLICATE_ID",
        }
    }
}
