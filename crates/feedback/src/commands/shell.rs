//! Interactive app: a line-driven loop over the section state machine.
//!
//! Each screen prints its content and a prompt. Menu words (`home`,
//! `student`, `admin`, `quit`) work everywhere after the welcome screen.
//! `login` only works on the login screen and `logout` on the dashboard.

use std::io;

use clap::ArgMatches;
use tracing::{error, info};

use feedback_core::{
    Command, Confirmation, DispatchError, DraftField, Event, FeedbackApp, FeedbackConfig,
    FeedbackDraft, FileStorage, Section, Store, events,
};

use super::helpers::{CliConfirm, format_count, load_config_with_warning, open_app, prompt_line};
use crate::color;
use crate::table::TableFormatter;

/// One line of user input, interpreted for the current section.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ShellInput {
    Go(Section),
    /// Empty input on a screen without a default action.
    Refresh,
    Fill,
    Login,
    Logout,
    Search(String),
    Delete(String),
    Clear,
    Help,
    Quit,
    Unknown(String),
}

fn parse_input(section: Section, line: &str) -> ShellInput {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    if section == Section::Welcome {
        return match word.to_lowercase().as_str() {
            "" | "home" => ShellInput::Go(Section::Home),
            "q" | "quit" | "exit" => ShellInput::Quit,
            _ => ShellInput::Unknown(line.to_string()),
        };
    }

    match word.to_lowercase().as_str() {
        "" => match section {
            Section::Student => ShellInput::Fill,
            Section::AdminLogin => ShellInput::Login,
            _ => ShellInput::Refresh,
        },
        "home" => ShellInput::Go(Section::Home),
        "student" | "feedback" => ShellInput::Go(Section::Student),
        "admin" => ShellInput::Go(Section::AdminLogin),
        "fill" => ShellInput::Fill,
        "login" if section == Section::AdminLogin => ShellInput::Login,
        "logout" if section == Section::Admin => ShellInput::Logout,
        "search" => ShellInput::Search(rest.to_string()),
        "delete" if !rest.is_empty() => ShellInput::Delete(rest.to_string()),
        "clear" => ShellInput::Clear,
        "help" | "?" => ShellInput::Help,
        "q" | "quit" | "exit" => ShellInput::Quit,
        _ => ShellInput::Unknown(line.to_string()),
    }
}

/// A row number from the displayed table, or a record id as-is.
fn resolve_delete_target(target: &str, shown_ids: &[&str]) -> String {
    target
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| shown_ids.get(i))
        .map_or_else(|| target.to_string(), |id| id.to_string())
}

struct Shell<C: Confirmation> {
    app: FeedbackApp<FileStorage, C>,
    config: FeedbackConfig,
    draft: FeedbackDraft,
    query: String,
}

impl<C: Confirmation> Shell<C> {
    fn new(app: FeedbackApp<FileStorage, C>, config: FeedbackConfig) -> Self {
        Self {
            app,
            config,
            draft: FeedbackDraft::default(),
            query: String::new(),
        }
    }

    fn run(&mut self) -> io::Result<()> {
        loop {
            self.render();

            let prompt = format!("{} > ", color::muted(self.app.section().as_str()));
            let Some(line) = prompt_line(&prompt)? else {
                break;
            };

            let keep_going = match parse_input(self.app.section(), &line) {
                ShellInput::Quit => false,
                ShellInput::Go(to) => {
                    self.dispatch(Command::Navigate { to });
                    true
                }
                ShellInput::Refresh => true,
                ShellInput::Fill => self.fill_form()?,
                ShellInput::Login => self.login()?,
                ShellInput::Logout => {
                    self.query.clear();
                    self.dispatch(Command::Logout);
                    true
                }
                ShellInput::Search(query) => {
                    self.search(query);
                    true
                }
                ShellInput::Delete(target) => {
                    let shown: Vec<&str> = self
                        .app
                        .search(&self.query)
                        .iter()
                        .map(|r| r.id.as_str())
                        .collect();
                    let id = resolve_delete_target(&target, &shown);
                    self.dispatch(Command::DeleteFeedback { id });
                    true
                }
                ShellInput::Clear => {
                    self.dispatch(Command::ClearFeedback);
                    true
                }
                ShellInput::Help => {
                    print_help();
                    true
                }
                ShellInput::Unknown(input) => {
                    eprintln!(
                        "{}",
                        color::warning(&format!("Unknown command '{}'. Type 'help'.", input))
                    );
                    true
                }
            };

            if !keep_going {
                break;
            }
        }
        Ok(())
    }

    fn render(&self) {
        println!();
        match self.app.section() {
            Section::Welcome => {
                println!("{}", color::bold("Student Feedback System"));
                println!("Share honest feedback about your courses and faculty.");
                println!("{}", color::muted("Press Enter to go to Home, or type 'quit'."));
            }
            Section::Home => {
                println!("{}", color::bold("Home"));
                println!("  {}  Give feedback on a course", color::ice("student"));
                println!("  {}    Admin login", color::ice("admin"));
                println!("  {}     Exit", color::ice("quit"));
            }
            Section::Student => {
                println!("{}", color::bold("Student Feedback Form"));
                println!(
                    "{}",
                    color::muted("Press Enter to fill in the form, or type 'home'.")
                );
            }
            Section::AdminLogin => {
                println!("{}", color::bold("Admin Login"));
                println!("{}", color::muted("Press Enter to log in, or type 'home'."));
            }
            Section::Admin => self.render_dashboard(),
        }
    }

    fn render_dashboard(&self) {
        println!("{}", color::bold("Admin Dashboard"));
        if !self.query.is_empty() {
            println!("Search: {}", color::kiri(&self.query));
        }

        let records = self.app.search(&self.query);
        if records.is_empty() {
            println!("No feedbacks available");
        } else {
            println!("{}:", format_count(records.len()));
            TableFormatter::new(
                &records,
                self.config.display.date_format(),
                self.config.display.comment_width(),
            )
            .print_table();
        }
        println!(
            "{}",
            color::muted("search <text> | delete <#|id> | clear | logout | home")
        );
    }

    /// Returns false when input ends mid-form.
    fn fill_form(&mut self) -> io::Result<bool> {
        if self.app.section() != Section::Student {
            self.dispatch(Command::Navigate {
                to: Section::Student,
            });
            if self.app.section() != Section::Student {
                return Ok(true);
            }
        }

        println!("{}", color::muted("Enter keeps the value in brackets."));
        for field in DraftField::ALL {
            let marker = if field.is_required() { "*" } else { "" };
            let label = format!("{}{} [{}]: ", field.label(), marker, self.draft.get(field));
            let Some(value) = prompt_line(&label)? else {
                return Ok(false);
            };
            if !value.trim().is_empty() {
                self.draft.set(field, value);
            }
        }

        let draft = self.draft.clone();
        if self.dispatch(Command::SubmitFeedback { draft }) {
            self.draft.reset();
        }
        Ok(true)
    }

    /// Returns false when input ends mid-prompt.
    fn login(&mut self) -> io::Result<bool> {
        let Some(username) = prompt_line("Username: ")? else {
            return Ok(false);
        };
        let Some(password) = prompt_line("Password: ")? else {
            return Ok(false);
        };
        self.dispatch(Command::Login { username, password });
        Ok(true)
    }

    fn search(&mut self, query: String) {
        if self.app.section() == Section::Admin {
            self.query = query;
        } else {
            eprintln!("{}", color::error(&DispatchError::NotAuthenticated.to_string()));
        }
    }

    /// Dispatch and report. Returns whether the command succeeded.
    fn dispatch(&mut self, cmd: Command) -> bool {
        match self.app.dispatch(cmd) {
            Ok(emitted) => {
                for event in &emitted {
                    report(event);
                }
                true
            }
            Err(e) => {
                eprintln!("{}", color::error(&e.to_string()));
                events::log_app_error(&e);
                false
            }
        }
    }
}

fn report(event: &Event) {
    match event {
        Event::SectionChanged { .. } => {}
        Event::FeedbackSubmitted { .. } => println!("{}", color::aurora("✅ Feedback submitted!")),
        Event::FeedbackDeleted { id } => println!("{} {}", color::aurora("Deleted."), color::muted(id)),
        Event::FeedbackNotFound { id } => println!("No feedback with id '{}'.", id),
        Event::FeedbackCleared { removed } => println!(
            "{}",
            color::aurora(&format!("Cleared {}.", format_count(*removed)))
        ),
        Event::DeletionCancelled => println!("Aborted."),
        Event::LoggedIn => println!("{}", color::aurora("Logged in.")),
        Event::LoggedOut => println!("Logged out."),
    }
}

fn print_help() {
    println!("{}", color::bold("Commands"));
    println!("  home | student | admin   go to a screen");
    println!("  fill                     fill in and submit the feedback form");
    println!("  login                    log in (admin login screen)");
    println!("  logout                   log out (dashboard)");
    println!("  search <text>            filter by course or faculty (admin)");
    println!("  delete <#|id>            delete one feedback (admin)");
    println!("  clear                    delete all feedback (admin)");
    println!("  quit                     exit");
}

pub(crate) fn handle_shell_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.shell_started");

    let config = load_config_with_warning();
    let mut app = open_app(matches, &config, CliConfirm::Prompt)?;
    if matches.get_flag("skip-welcome") || !config.shell.show_welcome() {
        app = app.skip_welcome();
    }

    let mut shell = Shell::new(app, config);
    if let Err(e) = shell.run() {
        eprintln!("{}", color::error(&format!("Input error: {}", e)));
        error!(event = "cli.shell_failed", error = %e);
        return Err(e.into());
    }

    events::log_app_shutdown();
    info!(event = "cli.shell_completed");
    Ok(())
}
