use clap::ArgMatches;
use tracing::info;

use feedback_core::AutoConfirm;

use super::helpers::{format_count, open_admin_app};
use crate::table::TableFormatter;

pub(crate) fn handle_list_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let query = matches
        .get_one::<String>("search")
        .map(|s| s.as_str())
        .unwrap_or("");

    info!(
        event = "cli.list_started",
        json_output = json_output,
        query = query
    );

    let (app, config) = open_admin_app(matches, AutoConfirm(false))?;
    let records = app.search(query);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else if records.is_empty() {
        println!("No feedbacks available");
    } else {
        println!("{}:", format_count(records.len()));
        let formatter = TableFormatter::new(
            &records,
            config.display.date_format(),
            config.display.comment_width(),
        );
        formatter.print_table();
    }

    info!(event = "cli.list_completed", count = records.len());

    Ok(())
}
