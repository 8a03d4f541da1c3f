use clap::{Arg, ArgAction, Command};

/// Credentials shared by every admin subcommand. Missing values are prompted.
fn with_credentials(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("user")
            .long("user")
            .short('u')
            .help("Admin username (prompted if omitted)"),
    )
    .arg(
        Arg::new("password")
            .long("password")
            .short('p')
            .help("Admin password (prompted if omitted)"),
    )
}

pub fn list_command() -> Command {
    with_credentials(
        Command::new("list")
            .about("List submitted feedback (admin)")
            .arg(
                Arg::new("search")
                    .long("search")
                    .short('s')
                    .help("Only show feedback whose course or faculty contains this text")
                    .value_name("QUERY"),
            )
            .arg(
                Arg::new("json")
                    .long("json")
                    .help("Output in JSON format")
                    .action(ArgAction::SetTrue),
            ),
    )
}

pub fn delete_command() -> Command {
    with_credentials(
        Command::new("delete")
            .about("Delete one feedback record (admin)")
            .arg(
                Arg::new("id")
                    .help("Id of the feedback to delete (see 'feedback list')")
                    .required(true)
                    .index(1),
            )
            .arg(
                Arg::new("force")
                    .long("force")
                    .short('f')
                    .help("Skip the confirmation prompt")
                    .action(ArgAction::SetTrue),
            ),
    )
}

pub fn clear_command() -> Command {
    with_credentials(
        Command::new("clear")
            .about("Delete all feedback (admin)")
            .arg(
                Arg::new("force")
                    .long("force")
                    .short('f')
                    .help("Skip the confirmation prompt")
                    .action(ArgAction::SetTrue),
            ),
    )
}
