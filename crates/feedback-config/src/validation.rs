//! Configuration validation logic.

use chrono::format::{Item, StrftimeItems};

use crate::errors::ConfigError;
use crate::types::FeedbackConfig;

/// Smallest non-zero comment width; anything shorter cannot fit the ellipsis.
pub const MIN_COMMENT_WIDTH: usize = 4;

/// Validate a FeedbackConfig, returning an error if any values are invalid.
///
/// # Validation Rules
///
/// - `display.comment_width` must be `0` (no truncation) or at least [`MIN_COMMENT_WIDTH`]
/// - `display.date_format` must be non-empty and a valid strftime format
pub fn validate_config(config: &FeedbackConfig) -> Result<(), ConfigError> {
    let width = config.display.comment_width();
    if width != 0 && width < MIN_COMMENT_WIDTH {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "display.comment_width must be 0 or at least {}, got {}",
                MIN_COMMENT_WIDTH, width
            ),
        });
    }

    let date_format = config.display.date_format();
    if date_format.trim().is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "display.date_format cannot be empty".to_string(),
        });
    }
    if StrftimeItems::new(date_format).any(|item| matches!(item, Item::Error)) {
        return Err(ConfigError::InvalidConfiguration {
            message: format!("display.date_format '{}' is not a valid format", date_format),
        });
    }

    Ok(())
}
