use std::fs;
use std::path::{Path, PathBuf};

use feedback_paths::FeedbackPaths;
use tracing::{debug, warn};

use super::{DurableStorage, StorageError};

/// One JSON file per key under a storage directory.
///
/// Writes go to `<key>.json.tmp` and are renamed over the target, so a reader
/// never observes a half-written blob.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn file_for(&self, key: &str) -> PathBuf {
        FeedbackPaths::store_file(&self.dir, key)
    }
}

fn cleanup_temp_file(temp_file: &Path, original_error: &std::io::Error) {
    if let Err(cleanup_err) = fs::remove_file(temp_file) {
        warn!(
            event = "core.storage.temp_file_cleanup_failed",
            temp_file = %temp_file.display(),
            original_error = %original_error,
            cleanup_error = %cleanup_err,
        );
    }
}

impl DurableStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.file_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => {
                debug!(
                    event = "core.storage.read_completed",
                    path = %path.display(),
                    bytes = content.len()
                );
                Ok(Some(content))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(event = "core.storage.key_absent", path = %path.display());
                Ok(None)
            }
            Err(e) => Err(StorageError::Read { path, source: e }),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|e| StorageError::Write {
            path: self.dir.clone(),
            source: e,
        })?;

        let path = self.file_for(key);
        let mut temp_name = path.clone().into_os_string();
        temp_name.push(".tmp");
        let temp_file = PathBuf::from(temp_name);

        if let Err(e) = fs::write(&temp_file, value) {
            cleanup_temp_file(&temp_file, &e);
            return Err(StorageError::Write {
                path: temp_file,
                source: e,
            });
        }

        if let Err(e) = fs::rename(&temp_file, &path) {
            cleanup_temp_file(&temp_file, &e);
            return Err(StorageError::Write { path, source: e });
        }

        debug!(
            event = "core.storage.write_completed",
            path = %path.display(),
            bytes = value.len()
        );
        Ok(())
    }
}
