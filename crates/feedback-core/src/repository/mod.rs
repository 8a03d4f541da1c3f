//! The ordered feedback collection and its durable mirror.
//!
//! Loaded once at startup, rewritten in full on every mutation. Newest
//! records come first.

mod errors;

pub use errors::RepositoryError;

use tracing::{debug, info, warn};

use crate::confirm::{Confirmation, DELETE_ALL_PROMPT, DELETE_ONE_PROMPT};
use crate::records::FeedbackRecord;
use crate::storage::{DurableStorage, STORAGE_KEY};

/// Result of a confirmation-gated single delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Removed(FeedbackRecord),
    /// Confirmed, but no record had that id. Nothing changed.
    NotFound,
    /// The confirmation was declined. Nothing changed.
    Cancelled,
}

/// Result of a confirmation-gated clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    Cleared { removed: usize },
    Cancelled,
}

#[derive(Debug)]
pub struct Repository<S: DurableStorage> {
    storage: S,
    records: Vec<FeedbackRecord>,
}

impl<S: DurableStorage> Repository<S> {
    /// Read the durable blob and build the in-memory sequence.
    ///
    /// An absent key gives an empty repository. So does a blob that does not
    /// parse: the malformed data is logged and ignored, and is overwritten on
    /// the next mutation. Only storage I/O failures are returned.
    pub fn load(storage: S) -> Result<Self, RepositoryError> {
        let records = match storage.read(STORAGE_KEY)? {
            None => Vec::new(),
            Some(blob) => match decode(&blob) {
                Ok(records) => records,
                Err(e) => {
                    warn!(
                        event = "core.repository.malformed_data_recovered",
                        error = %e,
                        bytes = blob.len()
                    );
                    Vec::new()
                }
            },
        };

        info!(event = "core.repository.load_completed", count = records.len());
        Ok(Self { storage, records })
    }

    /// All records, newest first.
    pub fn records(&self) -> &[FeedbackRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&FeedbackRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Give the storage back, e.g. to reload it as a fresh process would.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Prepend a record and persist the whole sequence.
    ///
    /// Ids must be unique; a duplicate is rejected without touching storage.
    pub fn add(&mut self, record: FeedbackRecord) -> Result<(), RepositoryError> {
        if self.contains_id(&record.id) {
            return Err(RepositoryError::DuplicateId { id: record.id });
        }

        let id = record.id.clone();
        let mut next = Vec::with_capacity(self.records.len() + 1);
        next.push(record);
        next.extend(self.records.iter().cloned());
        self.commit(next)?;

        info!(
            event = "core.repository.record_added",
            id = %id,
            count = self.records.len()
        );
        Ok(())
    }

    /// Remove the record with `id` once `confirm` agrees.
    ///
    /// An unknown id is a no-op, not an error. Relative order of the
    /// remaining records is preserved.
    pub fn delete(
        &mut self,
        id: &str,
        confirm: &mut dyn Confirmation,
    ) -> Result<DeleteOutcome, RepositoryError> {
        if !confirm.confirm(DELETE_ONE_PROMPT) {
            info!(event = "core.repository.delete_cancelled", id = id);
            return Ok(DeleteOutcome::Cancelled);
        }

        let Some(index) = self.records.iter().position(|r| r.id == id) else {
            debug!(event = "core.repository.delete_not_found", id = id);
            // Persist anyway: every confirmed mutation rewrites the blob.
            self.commit(self.records.clone())?;
            return Ok(DeleteOutcome::NotFound);
        };

        let mut next = self.records.clone();
        let removed = next.remove(index);
        self.commit(next)?;

        info!(
            event = "core.repository.record_deleted",
            id = id,
            count = self.records.len()
        );
        Ok(DeleteOutcome::Removed(removed))
    }

    /// Remove every record once `confirm` agrees.
    pub fn clear(&mut self, confirm: &mut dyn Confirmation) -> Result<ClearOutcome, RepositoryError> {
        if !confirm.confirm(DELETE_ALL_PROMPT) {
            info!(event = "core.repository.clear_cancelled");
            return Ok(ClearOutcome::Cancelled);
        }

        let removed = self.records.len();
        self.commit(Vec::new())?;

        info!(event = "core.repository.cleared", removed = removed);
        Ok(ClearOutcome::Cleared { removed })
    }

    /// Records whose faculty or course name contains `query`, case-insensitively.
    ///
    /// Pure: no persistence, order preserved. An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&FeedbackRecord> {
        let needle = query.to_lowercase();
        self.records
            .iter()
            .filter(|r| r.matches_lowercase(&needle))
            .collect()
    }

    /// Persist `next` in full, then make it the in-memory state.
    ///
    /// If the write fails the in-memory sequence is left as it was.
    fn commit(&mut self, next: Vec<FeedbackRecord>) -> Result<(), RepositoryError> {
        let blob = encode(&next)?;
        self.storage.write(STORAGE_KEY, &blob)?;
        self.records = next;
        Ok(())
    }
}

fn encode(records: &[FeedbackRecord]) -> Result<String, RepositoryError> {
    serde_json::to_string(records).map_err(|e| RepositoryError::Serialization { source: e })
}

fn decode(blob: &str) -> Result<Vec<FeedbackRecord>, RepositoryError> {
    serde_json::from_str(blob).map_err(|e| RepositoryError::MalformedPersistedData { source: e })
}
