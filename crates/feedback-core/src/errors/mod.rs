use std::error::Error;

/// Base trait for all application errors
pub trait FeedbackError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Common result type for the application
pub type FeedbackResult<T> = Result<T, Box<dyn FeedbackError>>;

impl FeedbackError for feedback_config::ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            feedback_config::ConfigError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            feedback_config::ConfigError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            feedback_config::ConfigError::PathResolution { .. } => "CONFIG_PATH_RESOLUTION",
            feedback_config::ConfigError::IoError { .. } => "CONFIG_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            feedback_config::ConfigError::ConfigParseError { .. }
                | feedback_config::ConfigError::InvalidConfiguration { .. }
        )
    }
}
