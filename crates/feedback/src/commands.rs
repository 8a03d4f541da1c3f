use clap::ArgMatches;
use tracing::error;

use feedback_core::events;

mod clear;
mod delete;
mod helpers;
mod list;
mod shell;
mod submit;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("submit", sub_matches)) => submit::handle_submit_command(sub_matches),
        Some(("list", sub_matches)) => list::handle_list_command(sub_matches),
        Some(("delete", sub_matches)) => delete::handle_delete_command(sub_matches),
        Some(("clear", sub_matches)) => clear::handle_clear_command(sub_matches),
        Some(("shell", sub_matches)) => shell::handle_shell_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}
