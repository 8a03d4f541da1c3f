use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::records::{FeedbackRecord, Rating, Ratings, generate_id};

use super::errors::FormError;

/// A named input of the feedback form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DraftField {
    StudentName,
    StudentId,
    Department,
    YearOrSemester,
    CourseName,
    FacultyName,
    TeachingQuality,
    CommunicationSkills,
    ClarityExplanation,
    OverallSatisfaction,
    Comments,
}

impl DraftField {
    /// Every field, in form order.
    pub const ALL: [DraftField; 11] = [
        DraftField::StudentName,
        DraftField::StudentId,
        DraftField::Department,
        DraftField::YearOrSemester,
        DraftField::CourseName,
        DraftField::FacultyName,
        DraftField::TeachingQuality,
        DraftField::CommunicationSkills,
        DraftField::ClarityExplanation,
        DraftField::OverallSatisfaction,
        DraftField::Comments,
    ];

    /// Fields that must be non-blank for a submission to be accepted.
    pub const REQUIRED: [DraftField; 4] = [
        DraftField::StudentName,
        DraftField::StudentId,
        DraftField::CourseName,
        DraftField::FacultyName,
    ];

    pub fn key(self) -> &'static str {
        match self {
            DraftField::StudentName => "studentName",
            DraftField::StudentId => "studentId",
            DraftField::Department => "department",
            DraftField::YearOrSemester => "yearOrSemester",
            DraftField::CourseName => "courseName",
            DraftField::FacultyName => "facultyName",
            DraftField::TeachingQuality => "teachingQuality",
            DraftField::CommunicationSkills => "communicationSkills",
            DraftField::ClarityExplanation => "clarityExplanation",
            DraftField::OverallSatisfaction => "overallSatisfaction",
            DraftField::Comments => "comments",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DraftField::StudentName => "Student Name",
            DraftField::StudentId => "Student ID",
            DraftField::Department => "Department",
            DraftField::YearOrSemester => "Year / Semester",
            DraftField::CourseName => "Course Name",
            DraftField::FacultyName => "Faculty Name",
            DraftField::TeachingQuality => "Teaching Quality (1-5)",
            DraftField::CommunicationSkills => "Communication Skills (1-5)",
            DraftField::ClarityExplanation => "Clarity of Explanation (1-5)",
            DraftField::OverallSatisfaction => "Overall Satisfaction (1-5)",
            DraftField::Comments => "Comments",
        }
    }

    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }

    pub fn is_rating(self) -> bool {
        matches!(
            self,
            DraftField::TeachingQuality
                | DraftField::CommunicationSkills
                | DraftField::ClarityExplanation
                | DraftField::OverallSatisfaction
        )
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DraftField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown form field '{}'", s))
    }
}

/// The form's current values, as entered. Ratings are kept as text until
/// submission coerces them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackDraft {
    pub student_name: String,
    pub student_id: String,
    pub department: String,
    pub year_or_semester: String,
    pub course_name: String,
    pub faculty_name: String,
    pub teaching_quality: String,
    pub communication_skills: String,
    pub clarity_explanation: String,
    pub overall_satisfaction: String,
    pub comments: String,
}

impl Default for FeedbackDraft {
    fn default() -> Self {
        let rating = Rating::DEFAULT.to_string();
        Self {
            student_name: String::new(),
            student_id: String::new(),
            department: String::new(),
            year_or_semester: String::new(),
            course_name: String::new(),
            faculty_name: String::new(),
            teaching_quality: rating.clone(),
            communication_skills: rating.clone(),
            clarity_explanation: rating.clone(),
            overall_satisfaction: rating,
            comments: String::new(),
        }
    }
}

impl FeedbackDraft {
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::StudentName => &self.student_name,
            DraftField::StudentId => &self.student_id,
            DraftField::Department => &self.department,
            DraftField::YearOrSemester => &self.year_or_semester,
            DraftField::CourseName => &self.course_name,
            DraftField::FacultyName => &self.faculty_name,
            DraftField::TeachingQuality => &self.teaching_quality,
            DraftField::CommunicationSkills => &self.communication_skills,
            DraftField::ClarityExplanation => &self.clarity_explanation,
            DraftField::OverallSatisfaction => &self.overall_satisfaction,
            DraftField::Comments => &self.comments,
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let slot = match field {
            DraftField::StudentName => &mut self.student_name,
            DraftField::StudentId => &mut self.student_id,
            DraftField::Department => &mut self.department,
            DraftField::YearOrSemester => &mut self.year_or_semester,
            DraftField::CourseName => &mut self.course_name,
            DraftField::FacultyName => &mut self.faculty_name,
            DraftField::TeachingQuality => &mut self.teaching_quality,
            DraftField::CommunicationSkills => &mut self.communication_skills,
            DraftField::ClarityExplanation => &mut self.clarity_explanation,
            DraftField::OverallSatisfaction => &mut self.overall_satisfaction,
            DraftField::Comments => &mut self.comments,
        };
        *slot = value.into();
    }

    /// Back to empty text and default ratings.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Required fields that are empty after trimming, in form order.
    pub fn missing_required(&self) -> Vec<DraftField> {
        DraftField::REQUIRED
            .into_iter()
            .filter(|f| self.get(*f).trim().is_empty())
            .collect()
    }

    /// Check presence of required fields and coerce the four ratings.
    pub fn validate(&self) -> Result<Ratings, FormError> {
        let missing = self.missing_required();
        if !missing.is_empty() {
            return Err(FormError::MissingRequiredField { fields: missing });
        }

        Ok(Ratings {
            teaching_quality: self.rating(DraftField::TeachingQuality)?,
            communication_skills: self.rating(DraftField::CommunicationSkills)?,
            clarity_explanation: self.rating(DraftField::ClarityExplanation)?,
            overall_satisfaction: self.rating(DraftField::OverallSatisfaction)?,
        })
    }

    /// A blank rating means the selector was never touched.
    fn rating(&self, field: DraftField) -> Result<Rating, FormError> {
        let raw = self.get(field);
        if raw.trim().is_empty() {
            return Ok(Rating::DEFAULT);
        }
        raw.parse()
            .map_err(|source| FormError::InvalidRating { field, source })
    }

    /// Validate and produce a record stamped with `now`.
    ///
    /// `is_taken` reports ids already in use so the new id is unique.
    pub fn build_record(
        &self,
        now: DateTime<Utc>,
        is_taken: impl Fn(&str) -> bool,
    ) -> Result<FeedbackRecord, FormError> {
        let ratings = self.validate()?;
        Ok(FeedbackRecord {
            id: generate_id(now, is_taken),
            student_name: self.student_name.trim().to_string(),
            student_id: self.student_id.trim().to_string(),
            department: self.department.trim().to_string(),
            year_or_semester: self.year_or_semester.trim().to_string(),
            course_name: self.course_name.trim().to_string(),
            faculty_name: self.faculty_name.trim().to_string(),
            comments: self.comments.trim().to_string(),
            ratings,
            created_at: now,
        })
    }
}
