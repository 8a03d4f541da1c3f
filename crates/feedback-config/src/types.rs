use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";
pub const DEFAULT_COMMENT_WIDTH: usize = 40;

/// Top-level configuration, as read from `config.toml`.
///
/// Every field is optional in the file. Accessors supply the defaults so that
/// merging can tell "unset" apart from "set to the default value".
///
/// # Example
///
/// ```toml
/// [storage]
/// dir = "/srv/feedback"
///
/// [display]
/// date_format = "%d/%m/%Y"
/// comment_width = 60
///
/// [shell]
/// show_welcome = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackConfig {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub shell: ShellConfig,
}

/// Where the durable record blob lives.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage directory. Default: `~/.feedback/store`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl StorageConfig {
    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }
}

/// How records are rendered in the admin table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// strftime format for the Date column, rendered in local time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,

    /// Comments longer than this are truncated in the table. `0` disables truncation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_width: Option<usize>,
}

impl DisplayConfig {
    pub fn date_format(&self) -> &str {
        self.date_format.as_deref().unwrap_or(DEFAULT_DATE_FORMAT)
    }

    pub fn comment_width(&self) -> usize {
        self.comment_width.unwrap_or(DEFAULT_COMMENT_WIDTH)
    }
}

/// Interactive shell behaviour.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Start on the welcome screen. `false` starts directly on home.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_welcome: Option<bool>,
}

impl ShellConfig {
    pub fn show_welcome(&self) -> bool {
        self.show_welcome.unwrap_or(true)
    }
}
