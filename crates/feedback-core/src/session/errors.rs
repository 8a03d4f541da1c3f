use crate::errors::FeedbackError;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Invalid Credentials")]
    InvalidCredentials,

    #[error("Admin login required")]
    NotAuthenticated,
}

impl FeedbackError for SessionError {
    fn error_code(&self) -> &'static str {
        match self {
            SessionError::InvalidCredentials => "INVALID_CREDENTIALS",
            SessionError::NotAuthenticated => "NOT_AUTHENTICATED",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}
