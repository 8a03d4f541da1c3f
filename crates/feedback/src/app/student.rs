use clap::{Arg, Command};

fn rating_arg(id: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .long(id)
        .help(help)
        .value_name("1-5")
        .value_parser(clap::value_parser!(u8).range(1..=5))
        .default_value("5")
}

pub fn submit_command() -> Command {
    Command::new("submit")
        .about("Submit feedback for a course")
        .long_about("Submit feedback for a course. Student name, student ID, course and faculty are required; ratings default to 5.")
        .arg(Arg::new("name").long("name").help("Student name"))
        .arg(Arg::new("student-id").long("student-id").help("Student ID"))
        .arg(
            Arg::new("department")
                .long("department")
                .help("Department (optional)"),
        )
        .arg(
            Arg::new("year")
                .long("year")
                .help("Year or semester (optional)"),
        )
        .arg(Arg::new("course").long("course").help("Course name"))
        .arg(Arg::new("faculty").long("faculty").help("Faculty name"))
        .arg(rating_arg("teaching", "Teaching quality"))
        .arg(rating_arg("communication", "Communication skills"))
        .arg(rating_arg("clarity", "Clarity of explanation"))
        .arg(rating_arg("overall", "Overall satisfaction"))
        .arg(
            Arg::new("comments")
                .long("comments")
                .help("Free-form comments (optional)"),
        )
}
