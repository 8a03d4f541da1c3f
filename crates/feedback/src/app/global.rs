use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};

pub fn root_command() -> Command {
    Command::new("feedback")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Collect and review student course feedback")
        .long_about("Students submit ratings and comments for a course and its faculty. An admin logs in to list, search, and delete the collected feedback. Everything is stored locally in ~/.feedback/store unless --store or the config file points elsewhere.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("store")
                .long("store")
                .help("Directory holding the feedback store (overrides config)")
                .value_name("DIR")
                .value_parser(clap::value_parser!(PathBuf))
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
}
