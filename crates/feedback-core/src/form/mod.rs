//! Student feedback form: draft values, validation and submission.

mod draft;
mod errors;

pub use draft::{DraftField, FeedbackDraft};
pub use errors::FormError;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::records::FeedbackRecord;
use crate::repository::Repository;
use crate::storage::DurableStorage;

/// Validate the draft, store the resulting record, and reset the draft.
///
/// On any failure the draft and the repository are left untouched.
pub fn submit<S: DurableStorage>(
    draft: &mut FeedbackDraft,
    repo: &mut Repository<S>,
) -> Result<FeedbackRecord, FormError> {
    submit_at(draft, repo, Utc::now())
}

/// [`submit`] with an explicit creation time.
pub fn submit_at<S: DurableStorage>(
    draft: &mut FeedbackDraft,
    repo: &mut Repository<S>,
    now: DateTime<Utc>,
) -> Result<FeedbackRecord, FormError> {
    debug!(event = "core.form.submit_started");

    let record = match draft.build_record(now, |id| repo.contains_id(id)) {
        Ok(record) => record,
        Err(e) => {
            warn!(event = "core.form.submit_rejected", error = %e);
            return Err(e);
        }
    };

    repo.add(record.clone())?;
    draft.reset();

    info!(
        event = "core.form.submit_completed",
        id = %record.id,
        course = %record.course_name
    );
    Ok(record)
}
