use crate::errors::FeedbackError;
use crate::form::FormError;
use crate::repository::RepositoryError;
use crate::session::SessionError;

use super::types::Section;

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("Admin login required")]
    NotAuthenticated,

    #[error("Cannot go from '{from}' to '{to}'")]
    InvalidTransition { from: Section, to: Section },

    #[error("This action is only available on the '{expected}' screen (currently '{actual}')")]
    WrongSection { expected: Section, actual: Section },
}

impl FeedbackError for DispatchError {
    fn error_code(&self) -> &'static str {
        match self {
            DispatchError::Form(e) => e.error_code(),
            DispatchError::Session(e) => e.error_code(),
            DispatchError::Repository(e) => e.error_code(),
            DispatchError::NotAuthenticated => "NOT_AUTHENTICATED",
            DispatchError::InvalidTransition { .. } => "INVALID_TRANSITION",
            DispatchError::WrongSection { .. } => "WRONG_SECTION",
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            DispatchError::Form(e) => e.is_user_error(),
            DispatchError::Session(e) => e.is_user_error(),
            DispatchError::Repository(e) => e.is_user_error(),
            DispatchError::NotAuthenticated
            | DispatchError::InvalidTransition { .. }
            | DispatchError::WrongSection { .. } => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_errors_keep_their_codes() {
        let err = DispatchError::from(SessionError::InvalidCredentials);
        assert_eq!(err.error_code(), "INVALID_CREDENTIALS");
        assert_eq!(err.to_string(), "Invalid Credentials");
        assert!(err.is_user_error());
    }

    #[test]
    fn test_invalid_transition_display() {
        let err = DispatchError::InvalidTransition {
            from: Section::Welcome,
            to: Section::Admin,
        };
        assert_eq!(err.to_string(), "Cannot go from 'welcome' to 'admin'");
        assert_eq!(err.error_code(), "INVALID_TRANSITION");
    }
}
