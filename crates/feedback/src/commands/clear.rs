use clap::ArgMatches;
use tracing::{error, info};

use feedback_core::{Command, Event, Store, events};

use super::helpers::{CliConfirm, format_count, open_admin_app};
use crate::color;

pub(crate) fn handle_clear_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let force = matches.get_flag("force");

    info!(event = "cli.clear_started", force = force);

    let (mut app, _) = open_admin_app(matches, CliConfirm::from_force(force))?;

    match app.dispatch(Command::ClearFeedback) {
        Ok(emitted) => {
            for event in &emitted {
                match event {
                    Event::FeedbackCleared { removed } => {
                        println!(
                            "{}",
                            color::aurora(&format!("Cleared {}.", format_count(*removed)))
                        );
                    }
                    Event::DeletionCancelled => println!("Aborted."),
                    _ => {}
                }
            }

            info!(event = "cli.clear_completed");
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", color::error(&format!("Could not clear feedback: {}", e)));

            error!(event = "cli.clear_failed", error = %e);

            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
