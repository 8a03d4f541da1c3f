//! # feedback-config
//!
//! TOML configuration types, loading, and validation for the feedback tool.
//!
//! Single source of truth for `FeedbackConfig`. Depends only on `feedback-paths`.

mod loading;
mod validation;

pub mod errors;
pub mod types;

// Public API re-exports
pub use errors::ConfigError;
pub use loading::{load_hierarchy, load_hierarchy_from, merge_configs};
pub use types::{
    DEFAULT_COMMENT_WIDTH, DEFAULT_DATE_FORMAT, DisplayConfig, FeedbackConfig, ShellConfig,
    StorageConfig,
};
pub use validation::{MIN_COMMENT_WIDTH, validate_config};

impl FeedbackConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate_config(self)
    }
}
