use clap::ArgMatches;
use tracing::{error, info};

use feedback_core::{AutoConfirm, Command, DraftField, Event, FeedbackDraft, Section, Store, events};

use super::helpers::{load_config_with_warning, open_app};
use crate::color;

/// Flag name for each form field.
const FIELD_FLAGS: [(&str, DraftField); 7] = [
    ("name", DraftField::StudentName),
    ("student-id", DraftField::StudentId),
    ("department", DraftField::Department),
    ("year", DraftField::YearOrSemester),
    ("course", DraftField::CourseName),
    ("faculty", DraftField::FacultyName),
    ("comments", DraftField::Comments),
];

const RATING_FLAGS: [(&str, DraftField); 4] = [
    ("teaching", DraftField::TeachingQuality),
    ("communication", DraftField::CommunicationSkills),
    ("clarity", DraftField::ClarityExplanation),
    ("overall", DraftField::OverallSatisfaction),
];

fn draft_from_matches(matches: &ArgMatches) -> FeedbackDraft {
    let mut draft = FeedbackDraft::default();
    for (flag, field) in FIELD_FLAGS {
        if let Some(value) = matches.get_one::<String>(flag) {
            draft.set(field, value.as_str());
        }
    }
    for (flag, field) in RATING_FLAGS {
        if let Some(value) = matches.get_one::<u8>(flag) {
            draft.set(field, value.to_string());
        }
    }
    draft
}

pub(crate) fn handle_submit_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let draft = draft_from_matches(matches);

    info!(event = "cli.submit_started", course = %draft.course_name);

    let config = load_config_with_warning();
    let mut app = open_app(matches, &config, AutoConfirm(false))?.skip_welcome();

    let result = app
        .dispatch(Command::Navigate {
            to: Section::Student,
        })
        .and_then(|_| app.dispatch(Command::SubmitFeedback { draft }));

    match result {
        Ok(emitted) => {
            let id = emitted.iter().find_map(|e| match e {
                Event::FeedbackSubmitted { id } => Some(id.as_str()),
                _ => None,
            });
            println!("{}", color::aurora("✅ Feedback submitted!"));
            if let Some(id) = id {
                println!("  Id: {}", color::muted(id));
            }

            info!(event = "cli.submit_completed", id = id.unwrap_or_default());
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", color::error(&e.to_string()));

            error!(event = "cli.submit_failed", error = %e);

            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
