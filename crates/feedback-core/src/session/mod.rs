//! Admin authentication.
//!
//! Memory only: a fresh process always starts unauthenticated. The credential
//! pair is fixed in code and is a placeholder, not a security boundary.

mod errors;

pub use errors::SessionError;

use tracing::{info, warn};

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin123";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminSession {
    authenticated: bool,
}

impl AdminSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Authenticate on an exact match of both values.
    ///
    /// A failed attempt leaves the session unauthenticated, even if it was
    /// authenticated before.
    pub fn login(&mut self, username: &str, password: &str) -> Result<(), SessionError> {
        if username == ADMIN_USERNAME && password == ADMIN_PASSWORD {
            self.authenticated = true;
            info!(event = "core.session.login_succeeded");
            Ok(())
        } else {
            self.authenticated = false;
            warn!(event = "core.session.login_failed", username = username);
            Err(SessionError::InvalidCredentials)
        }
    }

    pub fn logout(&mut self) {
        self.authenticated = false;
        info!(event = "core.session.logged_out");
    }

    /// Fail with `NotAuthenticated` unless logged in.
    pub fn require_authenticated(&self) -> Result<(), SessionError> {
        if self.authenticated {
            Ok(())
        } else {
            Err(SessionError::NotAuthenticated)
        }
    }
}
