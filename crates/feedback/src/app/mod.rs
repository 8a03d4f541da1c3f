mod admin;
mod global;
mod misc;
mod student;


use clap::Command;

pub fn build_cli() -> Command {
    global::root_command()
        .subcommand(student::submit_command())
        .subcommand(admin::list_command())
        .subcommand(admin::delete_command())
        .subcommand(admin::clear_command())
        .subcommand(misc::shell_command())
}
