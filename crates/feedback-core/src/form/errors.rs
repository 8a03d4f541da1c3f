use crate::errors::FeedbackError;
use crate::records::RatingError;
use crate::repository::RepositoryError;

use super::draft::DraftField;

fn labels(fields: &[DraftField]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error(
        "Please fill Student Name, ID, Course and Faculty Name. Missing: {}",
        labels(.fields)
    )]
    MissingRequiredField { fields: Vec<DraftField> },

    #[error("{field}: {source}")]
    InvalidRating {
        field: DraftField,
        source: RatingError,
    },

    #[error("Failed to save feedback: {source}")]
    Persistence {
        #[from]
        source: RepositoryError,
    },
}

impl FeedbackError for FormError {
    fn error_code(&self) -> &'static str {
        match self {
            FormError::MissingRequiredField { .. } => "MISSING_REQUIRED_FIELD",
            FormError::InvalidRating { .. } => "INVALID_RATING",
            FormError::Persistence { .. } => "FEEDBACK_PERSISTENCE_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            FormError::MissingRequiredField { .. } | FormError::InvalidRating { .. }
        )
    }
}
