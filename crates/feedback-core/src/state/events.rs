use serde::{Deserialize, Serialize};

use super::types::Section;

/// State changes produced by a successful dispatch.
///
/// Each variant describes what happened. Failures travel through the
/// `Err(DispatchError)` channel, never as events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    SectionChanged { from: Section, to: Section },
    FeedbackSubmitted { id: String },
    FeedbackDeleted { id: String },
    /// Deletion was confirmed but no record had the id.
    FeedbackNotFound { id: String },
    FeedbackCleared { removed: usize },
    /// The admin declined a delete or clear prompt.
    DeletionCancelled,
    LoggedIn,
    LoggedOut,
}
