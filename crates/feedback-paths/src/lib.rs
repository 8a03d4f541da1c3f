use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum PathError {
    #[error("home directory not found — set $HOME environment variable")]
    HomeNotFound,
}

/// Centralized path construction for the `~/.feedback/` directory layout.
///
/// Single source of truth for every path under `~/.feedback/`. Use `resolve()`
/// in production code and `from_dir()` in tests.
#[derive(Debug, Clone)]
pub struct FeedbackPaths {
    feedback_dir: PathBuf,
}

impl FeedbackPaths {
    /// Resolve paths from the user's home directory (`~/.feedback`).
    pub fn resolve() -> Result<Self, PathError> {
        let home = dirs::home_dir().ok_or(PathError::HomeNotFound)?;
        Ok(Self {
            feedback_dir: home.join(".feedback"),
        })
    }

    /// Create paths from an explicit base directory. Use in tests.
    pub fn from_dir(feedback_dir: PathBuf) -> Self {
        Self { feedback_dir }
    }

    /// The base `~/.feedback` directory.
    pub fn feedback_dir(&self) -> &Path {
        &self.feedback_dir
    }

    /// Directory holding one JSON blob per storage key.
    pub fn store_dir(&self) -> PathBuf {
        self.feedback_dir.join("store")
    }

    pub fn user_config(&self) -> PathBuf {
        self.feedback_dir.join("config.toml")
    }

    /// Blob file for a storage key: `<dir>/<safe_key>.json`.
    ///
    /// Path separators in the key are replaced so a key can never escape `dir`.
    pub fn store_file(dir: &Path, key: &str) -> PathBuf {
        let safe_key = key.replace(['/', '\\'], "_");
        dir.join(format!("{safe_key}.json"))
    }

    /// Project-level config: `<project_root>/.feedback/config.toml`.
    pub fn project_config(project_root: &Path) -> PathBuf {
        project_root.join(".feedback").join("config.toml")
    }
}
