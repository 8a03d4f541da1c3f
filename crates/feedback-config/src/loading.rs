//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.feedback/config.toml` (global user preferences)
//! 3. **Project config** - `./.feedback/config.toml` (directory-specific overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority, applied by the caller)

use std::fs;
use std::path::{Path, PathBuf};

use feedback_paths::FeedbackPaths;
use tracing::debug;

use crate::errors::ConfigError;
use crate::types::{DisplayConfig, FeedbackConfig, ShellConfig, StorageConfig};
use crate::validation::validate_config;

/// Load configuration from the hierarchy of config files.
///
/// Resolves `~/.feedback/config.toml` and `./.feedback/config.toml`, then
/// delegates to [`load_hierarchy_from`].
///
/// # Errors
///
/// Returns an error if a config file cannot be parsed or validation fails.
/// Missing config files are not errors.
pub fn load_hierarchy() -> Result<FeedbackConfig, ConfigError> {
    let user_config = FeedbackPaths::resolve()
        .map(|paths| paths.user_config())
        .map_err(|e| ConfigError::PathResolution {
            message: e.to_string(),
        })?;
    let project_root = std::env::current_dir()?;
    load_hierarchy_from(
        Some(&user_config),
        &FeedbackPaths::project_config(&project_root),
    )
}

/// Load and merge the given user and project config files over the defaults.
pub fn load_hierarchy_from(
    user_config: Option<&Path>,
    project_config: &Path,
) -> Result<FeedbackConfig, ConfigError> {
    let mut config = FeedbackConfig::default();

    if let Some(path) = user_config
        && let Some(user) = load_config_file(path)?
    {
        config = merge_configs(config, user);
    }

    if let Some(project) = load_config_file(project_config)? {
        config = merge_configs(config, project);
    }

    validate_config(&config)?;

    Ok(config)
}

/// Load a configuration file. A missing file yields `Ok(None)`.
fn load_config_file(path: &Path) -> Result<Option<FeedbackConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(
                event = "config.file_not_found",
                path = %path.display()
            );
            return Ok(None);
        }
        Err(e) => return Err(ConfigError::IoError { source: e }),
    };

    let config: FeedbackConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    debug!(event = "config.file_loaded", path = %path.display());
    Ok(Some(config))
}

/// Merge two configurations, with override_config taking precedence.
///
/// Optional fields in the override replace base values only if present.
pub fn merge_configs(base: FeedbackConfig, override_config: FeedbackConfig) -> FeedbackConfig {
    FeedbackConfig {
        storage: StorageConfig {
            dir: override_config.storage.dir.or(base.storage.dir),
        },
        display: DisplayConfig {
            date_format: override_config
                .display
                .date_format
                .or(base.display.date_format),
            comment_width: override_config
                .display
                .comment_width
                .or(base.display.comment_width),
        },
        shell: ShellConfig {
            show_welcome: override_config
                .shell
                .show_welcome
                .or(base.shell.show_welcome),
        },
    }
}

impl FeedbackConfig {
    /// Resolve the storage directory: CLI override, then config, then `~/.feedback/store`.
    pub fn storage_dir(&self, cli_override: Option<&Path>) -> Result<PathBuf, ConfigError> {
        if let Some(dir) = cli_override {
            return Ok(dir.to_path_buf());
        }
        if let Some(dir) = self.storage.dir() {
            return Ok(dir.to_path_buf());
        }
        FeedbackPaths::resolve()
            .map(|paths| paths.store_dir())
            .map_err(|e| ConfigError::PathResolution {
                message: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_merge_override_wins() {
        let base = FeedbackConfig {
            display: DisplayConfig {
                date_format: Some("%Y".to_string()),
                comment_width: Some(10),
            },
            ..Default::default()
        };
        let over = FeedbackConfig {
            display: DisplayConfig {
                date_format: Some("%d".to_string()),
                comment_width: None,
            },
            ..Default::default()
        };

        let merged = merge_configs(base, over);
        assert_eq!(merged.display.date_format(), "%d");
        assert_eq!(merged.display.comment_width(), 10);
    }

    #[test]
    fn test_merge_keeps_base_when_override_empty() {
        let base = FeedbackConfig {
            storage: StorageConfig {
                dir: Some(PathBuf::from("/data")),
            },
            shell: ShellConfig {
                show_welcome: Some(false),
            },
            ..Default::default()
        };

        let merged = merge_configs(base.clone(), FeedbackConfig::default());
        assert_eq!(merged, base);
    }

    #[test]
    fn test_load_hierarchy_missing_files_gives_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let config = load_hierarchy_from(
            Some(&temp.path().join("user.toml")),
            &temp.path().join("project.toml"),
        )
        .unwrap();
        assert_eq!(config, FeedbackConfig::default());
    }

    #[test]
    fn test_load_hierarchy_project_overrides_user() {
        let temp = tempfile::tempdir().unwrap();
        let user = write_file(
            temp.path(),
            "user.toml",
            "[display]\ncomment_width = 20\ndate_format = \"%Y\"\n",
        );
        let project = write_file(temp.path(), "project.toml", "[display]\ncomment_width = 80\n");

        let config = load_hierarchy_from(Some(&user), &project).unwrap();
        assert_eq!(config.display.comment_width(), 80);
        assert_eq!(config.display.date_format(), "%Y");
    }

    #[test]
    fn test_load_hierarchy_parse_error_is_reported() {
        let temp = tempfile::tempdir().unwrap();
        let user = write_file(temp.path(), "user.toml", "[display\ncomment_width = ");

        let result = load_hierarchy_from(Some(&user), &temp.path().join("none.toml"));
        assert!(matches!(
            result,
            Err(ConfigError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_load_hierarchy_validates_merged_config() {
        let temp = tempfile::tempdir().unwrap();
        let project = write_file(temp.path(), "project.toml", "[display]\ncomment_width = 2\n");

        let result = load_hierarchy_from(None, &project);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_load_hierarchy_reads_home_and_cwd() {
        let home = tempfile::tempdir().unwrap();
        fs::create_dir_all(home.path().join(".feedback")).unwrap();
        write_file(
            &home.path().join(".feedback"),
            "config.toml",
            "[shell]\nshow_welcome = false\n",
        );

        let config = temp_env::with_var("HOME", Some(home.path()), load_hierarchy).unwrap();
        assert!(!config.shell.show_welcome());
    }

    #[test]
    fn test_storage_dir_precedence() {
        let mut config = FeedbackConfig::default();
        config.storage.dir = Some(PathBuf::from("/from/config"));

        assert_eq!(
            config.storage_dir(Some(Path::new("/from/cli"))).unwrap(),
            PathBuf::from("/from/cli")
        );
        assert_eq!(
            config.storage_dir(None).unwrap(),
            PathBuf::from("/from/config")
        );
    }

    #[test]
    fn test_storage_dir_defaults_under_home() {
        let home = tempfile::tempdir().unwrap();
        let dir = temp_env::with_var("HOME", Some(home.path()), || {
            FeedbackConfig::default().storage_dir(None)
        })
        .unwrap();
        assert_eq!(dir, home.path().join(".feedback").join("store"));
    }
}
