use std::fmt;

use serde::{Deserialize, Serialize};

use crate::form::FeedbackDraft;

/// A screen of the interactive app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    /// Landing screen. Left once, never returned to.
    #[default]
    Welcome,
    Home,
    /// The feedback form.
    Student,
    AdminLogin,
    /// Record table. Only shown to an authenticated admin.
    Admin,
}

impl Section {
    pub fn as_str(self) -> &'static str {
        match self {
            Section::Welcome => "welcome",
            Section::Home => "home",
            Section::Student => "student",
            Section::AdminLogin => "adminLogin",
            Section::Admin => "admin",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All operations that can be dispatched through the store.
///
/// Commands own their data so they can be serialized and replayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Move to another section, subject to the transition rules.
    Navigate { to: Section },
    /// Validate and store a completed form. Only accepted on the form screen.
    SubmitFeedback { draft: FeedbackDraft },
    Login { username: String, password: String },
    Logout,
    /// Delete one record after confirmation. Admin only.
    DeleteFeedback { id: String },
    /// Delete every record after confirmation. Admin only.
    ClearFeedback,
}
