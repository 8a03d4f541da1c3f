//! Durable key-value storage for the record blob.
//!
//! The repository reads one key at startup and rewrites it in full on every
//! change. Backends only move opaque strings; encoding is the repository's job.

mod errors;
mod file;
mod memory;

pub use errors::StorageError;
pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Key holding the serialized record sequence.
pub const STORAGE_KEY: &str = "feedbacks";

/// A single-writer key-value store.
pub trait DurableStorage {
    /// Read the value stored under `key`. A key that was never written reads as `None`.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}
