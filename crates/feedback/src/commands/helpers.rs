use std::io::{self, Write};
use std::path::PathBuf;

use clap::ArgMatches;
use tracing::{error, warn};

use feedback_core::{
    Command, Confirmation, FeedbackApp, FeedbackConfig, FileStorage, Section, Store, events,
    open_file_repository,
};

use crate::color;

/// Load configuration with warning on errors.
///
/// Falls back to defaults if loading or validation fails, but notifies the
/// user via stderr and a `cli.config.load_failed` log event.
pub fn load_config_with_warning() -> FeedbackConfig {
    let result = FeedbackConfig::load_hierarchy().and_then(|config| {
        config.validate()?;
        Ok(config)
    });

    match result {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "{}",
                color::warning(&format!(
                    "Warning: Could not load config: {}. Using defaults.",
                    e
                ))
            );
            eprintln!(
                "{}",
                color::hint(
                    "Tip: Check ~/.feedback/config.toml and ./.feedback/config.toml for errors."
                )
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            FeedbackConfig::default()
        }
    }
}

/// Check if user confirmation input indicates acceptance.
/// Accepts "y" or "yes" (case-insensitive).
pub fn is_confirmation_accepted(input: &str) -> bool {
    let normalized = input.trim().to_lowercase();
    normalized == "y" || normalized == "yes"
}

/// Print `label` to stderr and read one line from stdin, without the line
/// ending. Stdout stays reserved for command output.
///
/// Returns `None` at end of input.
pub fn prompt_line(label: &str) -> io::Result<Option<String>> {
    eprint!("{}", label);
    io::stderr().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim_end_matches(['\r', '\n']).to_string()))
}

/// Confirmation provider for the CLI.
#[derive(Debug, Clone, Copy)]
pub enum CliConfirm {
    /// `--force`: every prompt is accepted.
    Force,
    /// Ask on stdin with a `[y/N]` prompt. End of input declines.
    Prompt,
}

impl CliConfirm {
    pub fn from_force(force: bool) -> Self {
        if force { Self::Force } else { Self::Prompt }
    }
}

impl Confirmation for CliConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        match self {
            CliConfirm::Force => true,
            CliConfirm::Prompt => match prompt_line(&format!("{} [y/N] ", prompt)) {
                Ok(Some(answer)) => is_confirmation_accepted(&answer),
                Ok(None) => false,
                Err(e) => {
                    warn!(event = "cli.confirm.read_failed", error = %e);
                    false
                }
            },
        }
    }
}

/// `--store` override, if given.
pub fn store_override(matches: &ArgMatches) -> Option<PathBuf> {
    matches.get_one::<PathBuf>("store").cloned()
}

/// Open the configured store and build the app around it.
pub fn open_app<C: Confirmation>(
    matches: &ArgMatches,
    config: &FeedbackConfig,
    confirm: C,
) -> Result<FeedbackApp<FileStorage, C>, Box<dyn std::error::Error>> {
    let store = store_override(matches);
    match open_file_repository(config, store.as_deref()) {
        Ok(repository) => Ok(FeedbackApp::new(repository, confirm)),
        Err(e) => {
            eprintln!("{}", color::error(&format!("Could not open feedback store: {}", e)));
            error!(event = "cli.store.open_failed", error = %e);
            Err(e)
        }
    }
}

/// `--user`/`--password`, prompting on stdin for whichever is missing.
pub fn resolve_credentials(
    matches: &ArgMatches,
) -> Result<(String, String), Box<dyn std::error::Error>> {
    let username = match matches.get_one::<String>("user") {
        Some(user) => user.clone(),
        None => prompt_line("Username: ")?.ok_or("No username given")?,
    };
    let password = match matches.get_one::<String>("password") {
        Some(password) => password.clone(),
        None => prompt_line("Password: ")?.ok_or("No password given")?,
    };
    Ok((username, password))
}

/// Open the app and log in as admin through the login screen.
///
/// Wrong credentials print "Invalid Credentials" and fail.
pub fn open_admin_app<C: Confirmation>(
    matches: &ArgMatches,
    confirm: C,
) -> Result<(FeedbackApp<FileStorage, C>, FeedbackConfig), Box<dyn std::error::Error>> {
    let config = load_config_with_warning();
    let (username, password) = resolve_credentials(matches)?;
    let mut app = open_app(matches, &config, confirm)?.skip_welcome();

    let login = app
        .dispatch(Command::Navigate {
            to: Section::AdminLogin,
        })
        .and_then(|_| app.dispatch(Command::Login { username, password }));
    if let Err(e) = login {
        eprintln!("{}", color::error(&e.to_string()));
        events::log_app_error(&e);
        return Err(e.into());
    }

    Ok((app, config))
}

/// Format a count with proper singular/plural form.
pub fn format_count(count: usize) -> String {
    if count == 1 {
        "1 feedback".to_string()
    } else {
        format!("{} feedbacks", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_confirmation_accepted() {
        assert!(is_confirmation_accepted("y"));
        assert!(is_confirmation_accepted("Y"));
        assert!(is_confirmation_accepted("yes"));
        assert!(is_confirmation_accepted(" YES \n"));
        assert!(!is_confirmation_accepted(""));
        assert!(!is_confirmation_accepted("n"));
        assert!(!is_confirmation_accepted("yep"));
    }

    #[test]
    fn test_force_confirms_without_reading() {
        assert!(CliConfirm::Force.confirm("Delete this feedback?"));
        assert!(matches!(CliConfirm::from_force(true), CliConfirm::Force));
        assert!(matches!(CliConfirm::from_force(false), CliConfirm::Prompt));
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0 feedbacks");
        assert_eq!(format_count(1), "1 feedback");
        assert_eq!(format_count(7), "7 feedbacks");
    }
}
