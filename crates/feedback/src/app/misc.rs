use clap::{Arg, ArgAction, Command};

pub fn shell_command() -> Command {
    Command::new("shell")
        .about("Start the interactive feedback app")
        .long_about("Start the interactive feedback app: a welcome screen, a home menu, the student feedback form, and the admin login and dashboard.")
        .arg(
            Arg::new("skip-welcome")
                .long("skip-welcome")
                .help("Start on the home menu instead of the welcome screen")
                .action(ArgAction::SetTrue),
        )
}
