//! feedback-core: Core library for student feedback collection
//!
//! Students submit structured ratings for a course/faculty pair; an admin
//! authenticates to view, search, and delete the accumulated records. All
//! state lives in a local durable store. Used by the `feedback` CLI.
//!
//! # Main Entry Points
//!
//! - [`form`] - Draft capture, validation, and submission
//! - [`repository`] - The ordered record collection and its durable mirror
//! - [`storage`] - Key-value storage backends (file, memory)
//! - [`session`] - Admin authentication
//! - [`state`] - Section state machine and command dispatch

pub mod confirm;
pub mod errors;
pub mod events;
pub mod form;
pub mod logging;
pub mod records;
pub mod repository;
pub mod session;
pub mod state;
pub mod storage;

// Re-export config types from feedback-config
pub use feedback_config::{ConfigError, FeedbackConfig};

pub use confirm::{AutoConfirm, Confirmation};
pub use errors::{FeedbackError, FeedbackResult};
pub use form::{DraftField, FeedbackDraft, FormError};
pub use records::{FeedbackRecord, Rating, RatingError, Ratings};
pub use repository::{ClearOutcome, DeleteOutcome, Repository, RepositoryError};
pub use session::{AdminSession, SessionError};
pub use state::{Command, DispatchError, Event, FeedbackApp, Section, Store};
pub use storage::{DurableStorage, FileStorage, MemoryStorage, STORAGE_KEY, StorageError};

// Re-export logging initialization
pub use logging::init_logging;

/// Open the file-backed repository selected by config and an optional CLI override.
pub fn open_file_repository(
    config: &FeedbackConfig,
    store_override: Option<&std::path::Path>,
) -> Result<Repository<FileStorage>, Box<dyn std::error::Error>> {
    let dir = config.storage_dir(store_override)?;
    let repository = Repository::load(FileStorage::new(dir))?;
    Ok(repository)
}
