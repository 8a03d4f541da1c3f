use clap::ArgMatches;
use tracing::{error, info};

use feedback_core::{Command, Event, Store, events};

use super::helpers::{CliConfirm, open_admin_app};
use crate::color;

pub(crate) fn handle_delete_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let id = matches
        .get_one::<String>("id")
        .ok_or("Id argument is required")?
        .clone();
    let force = matches.get_flag("force");

    info!(event = "cli.delete_started", id = %id, force = force);

    let (mut app, _) = open_admin_app(matches, CliConfirm::from_force(force))?;

    match app.dispatch(Command::DeleteFeedback { id: id.clone() }) {
        Ok(emitted) => {
            for event in &emitted {
                match event {
                    Event::FeedbackDeleted { id } => {
                        println!("{} {}", color::aurora("Deleted."), color::muted(id));
                    }
                    Event::FeedbackNotFound { id } => {
                        println!("No feedback with id '{}'. Nothing deleted.", id);
                    }
                    Event::DeletionCancelled => println!("Aborted."),
                    _ => {}
                }
            }

            info!(event = "cli.delete_completed", id = %id);
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", color::error(&format!("Could not delete '{}': {}", id, e)));

            error!(event = "cli.delete_failed", id = %id, error = %e);

            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
