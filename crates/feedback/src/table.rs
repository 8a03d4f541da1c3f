use chrono::Local;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use feedback_core::FeedbackRecord;

use crate::color;

const HEADERS: [&str; 8] = [
    "#", "Student", "Course", "Faculty", "Ratings", "Comments", "Date", "Id",
];

/// One record rendered to plain cell text, before padding and color.
struct Row {
    cells: [String; 8],
    overall: u8,
}

impl Row {
    fn new(index: usize, record: &FeedbackRecord, date_format: &str, comment_width: usize) -> Self {
        let comments = record.comments.replace(['\r', '\n'], " ");
        Self {
            cells: [
                (index + 1).to_string(),
                record.student_label(),
                record.course_name.clone(),
                record.faculty_name.clone(),
                record.ratings.summary(),
                truncate(&comments, comment_width),
                record
                    .created_at
                    .with_timezone(&Local)
                    .format(date_format)
                    .to_string(),
                record.id.clone(),
            ],
            overall: record.ratings.overall_satisfaction.value(),
        }
    }
}

pub struct TableFormatter {
    widths: [usize; 8],
    rows: Vec<Row>,
}

impl TableFormatter {
    /// `comment_width` of 0 prints comments in full.
    pub fn new(records: &[&FeedbackRecord], date_format: &str, comment_width: usize) -> Self {
        // Minimum widths = header label lengths
        let mut widths = HEADERS.map(display_width);

        let rows: Vec<Row> = records
            .iter()
            .enumerate()
            .map(|(i, record)| Row::new(i, record, date_format, comment_width))
            .collect();

        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(&row.cells) {
                *width = (*width).max(display_width(cell));
            }
        }

        Self { widths, rows }
    }

    pub fn print_table(&self) {
        println!("{}", self.top_border());
        println!("{}", self.header_row());
        println!("{}", self.separator());
        for row in &self.rows {
            println!("{}", self.format_row(row));
        }
        println!("{}", self.bottom_border());
    }

    fn format_row(&self, row: &Row) -> String {
        let [index, student, course, faculty, ratings, comments, date, id] = &row.cells;
        let [w_index, w_student, w_course, w_faculty, w_ratings, w_comments, w_date, w_id] =
            self.widths;
        let sep = color::muted("│");

        format!(
            "{sep} {} {sep} {} {sep} {} {sep} {} {sep} {} {sep} {} {sep} {} {sep} {} {sep}",
            pad(index, w_index),
            color::ice(&pad(student, w_student)),
            color::kiri(&pad(course, w_course)),
            pad(faculty, w_faculty),
            color::score(&pad(ratings, w_ratings), row.overall),
            pad(comments, w_comments),
            color::muted(&pad(date, w_date)),
            color::muted(&pad(id, w_id)),
        )
    }

    fn header_row(&self) -> String {
        let sep = color::muted("│");
        let cells: Vec<String> = HEADERS
            .iter()
            .zip(self.widths)
            .map(|(h, w)| format!(" {} ", color::bold(&pad(h, w))))
            .collect();
        format!("{sep}{}{sep}", cells.join(sep.as_str()))
    }

    fn border(&self, left: &str, mid: &str, right: &str) -> String {
        let segments: Vec<String> = self.widths.iter().map(|w| "─".repeat(w + 2)).collect();
        color::muted(&format!("{left}{}{right}", segments.join(mid)))
    }

    fn top_border(&self) -> String {
        self.border("┌", "┬", "┐")
    }

    fn separator(&self) -> String {
        self.border("├", "┼", "┤")
    }

    fn bottom_border(&self) -> String {
        self.border("└", "┴", "┘")
    }
}

/// Compute the terminal display width of a string.
///
/// Wide characters (CJK, emoji) count as 2 columns.
pub(crate) fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Pad a string to a minimum display width without truncating.
pub(crate) fn pad(s: &str, min_width: usize) -> String {
    let width = display_width(s);
    if width >= min_width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(min_width - width))
    }
}

/// Cut a string to at most `max_width` columns, ending in "...".
///
/// A `max_width` of 0 means no limit.
pub(crate) fn truncate(s: &str, max_width: usize) -> String {
    if max_width == 0 || display_width(s) <= max_width {
        return s.to_string();
    }

    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}
