use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid rating '{value}': must be a whole number from 1 to 5")]
pub struct RatingError {
    pub value: String,
}

/// A single score on the 1..=5 scale.
///
/// Construction is the only validation point: a `Rating` that exists is in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;
    /// Value used when the form never set the selector.
    pub const DEFAULT: Rating = Rating(5);

    pub fn new(value: u8) -> Result<Self, RatingError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RatingError {
                value: value.to_string(),
            })
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl FromStr for Rating {
    type Err = RatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<u8>()
            .ok()
            .and_then(|v| Self::new(v).ok())
            .ok_or_else(|| RatingError {
                value: trimmed.to_string(),
            })
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The four fixed scores of a feedback submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ratings {
    pub teaching_quality: Rating,
    pub communication_skills: Rating,
    pub clarity_explanation: Rating,
    pub overall_satisfaction: Rating,
}

impl Ratings {
    /// Compact dashboard form: `T:5 | C:4 | Cl:3 | O:5`.
    pub fn summary(&self) -> String {
        format!(
            "T:{} | C:{} | Cl:{} | O:{}",
            self.teaching_quality,
            self.communication_skills,
            self.clarity_explanation,
            self.overall_satisfaction
        )
    }
}

/// A submitted piece of student feedback. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    pub id: String,
    pub student_name: String,
    pub student_id: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub year_or_semester: String,
    pub course_name: String,
    pub faculty_name: String,
    #[serde(default)]
    pub comments: String,
    pub ratings: Ratings,
    pub created_at: DateTime<Utc>,
}

impl FeedbackRecord {
    /// Case-insensitive substring match on faculty or course name.
    ///
    /// `needle` must already be lowercase; an empty needle matches everything.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.faculty_name.to_lowercase().contains(needle)
            || self.course_name.to_lowercase().contains(needle)
    }

    /// `Name (StudentId)`, as shown in the Student column.
    pub fn student_label(&self) -> String {
        format!("{} ({})", self.student_name, self.student_id)
    }
}

/// Generate a timestamp-derived id (`f_<unix-millis>`) not rejected by `is_taken`.
///
/// Two submissions in the same millisecond get consecutive suffixes.
pub fn generate_id(now: DateTime<Utc>, is_taken: impl Fn(&str) -> bool) -> String {
    let mut millis = now.timestamp_millis();
    loop {
        let id = format!("f_{millis}");
        if !is_taken(&id) {
            return id;
        }
        millis += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_record() -> FeedbackRecord {
        FeedbackRecord {
            id: "f_1700000000000".to_string(),
            student_name: "Alice".to_string(),
            student_id: "S1".to_string(),
            department: "CSE".to_string(),
            year_or_semester: "3".to_string(),
            course_name: "CS101".to_string(),
            faculty_name: "Dr. X".to_string(),
            comments: "Great pace".to_string(),
            ratings: Ratings {
                teaching_quality: Rating::new(4).unwrap(),
                communication_skills: Rating::new(3).unwrap(),
                clarity_explanation: Rating::DEFAULT,
                overall_satisfaction: Rating::new(1).unwrap(),
            },
            created_at: Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap(),
        }
    }

    #[test]
    fn test_rating_bounds() {
        assert!(Rating::new(0).is_err());
        assert_eq!(Rating::new(1).unwrap().value(), 1);
        assert_eq!(Rating::new(5).unwrap().value(), 5);
        assert!(Rating::new(6).is_err());
    }

    #[test]
    fn test_rating_default_is_five() {
        assert_eq!(Rating::default().value(), 5);
        let ratings = Ratings::default();
        assert_eq!(ratings.teaching_quality.value(), 5);
        assert_eq!(ratings.overall_satisfaction.value(), 5);
    }

    #[test]
    fn test_rating_from_str() {
        assert_eq!("3".parse::<Rating>().unwrap().value(), 3);
        assert_eq!(" 2 ".parse::<Rating>().unwrap().value(), 2);

        let err = "seven".parse::<Rating>().unwrap_err();
        assert_eq!(err.value, "seven");
        assert!("0".parse::<Rating>().is_err());
        assert!("2.5".parse::<Rating>().is_err());
        assert!("-1".parse::<Rating>().is_err());
    }

    #[test]
    fn test_rating_error_message() {
        let err = Rating::new(9).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid rating '9': must be a whole number from 1 to 5"
        );
    }

    #[test]
    fn test_rating_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<Rating>("4").is_ok());
        assert!(serde_json::from_str::<Rating>("9").is_err());
        assert!(serde_json::from_str::<Rating>("\"4\"").is_err());
    }

    #[test]
    fn test_record_json_uses_camel_case_keys() {
        let json = serde_json::to_value(sample_record()).unwrap();

        assert_eq!(json["studentName"], "Alice");
        assert_eq!(json["studentId"], "S1");
        assert_eq!(json["yearOrSemester"], "3");
        assert_eq!(json["courseName"], "CS101");
        assert_eq!(json["facultyName"], "Dr. X");
        assert_eq!(json["ratings"]["teachingQuality"], 4);
        assert_eq!(json["ratings"]["communicationSkills"], 3);
        assert_eq!(json["ratings"]["clarityExplanation"], 5);
        assert_eq!(json["ratings"]["overallSatisfaction"], 1);
        assert_eq!(json["createdAt"], "2023-11-14T22:13:20Z");
    }

    #[test]
    fn test_record_optional_fields_default_when_absent() {
        let json = r#"{
            "id": "f_1",
            "studentName": "Bob",
            "studentId": "S2",
            "courseName": "MA201",
            "facultyName": "Dr. Y",
            "ratings": {
                "teachingQuality": 5,
                "communicationSkills": 5,
                "clarityExplanation": 5,
                "overallSatisfaction": 5
            },
            "createdAt": "2024-01-01T00:00:00Z"
        }"#;
        let record: FeedbackRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.department, "");
        assert_eq!(record.year_or_semester, "");
        assert_eq!(record.comments, "");
    }

    #[test]
    fn test_matches_lowercase() {
        let record = sample_record();
        assert!(record.matches_lowercase("cs"));
        assert!(record.matches_lowercase("dr. x"));
        assert!(record.matches_lowercase(""));
        assert!(!record.matches_lowercase("dr. y"));
        // Student fields are not searched
        assert!(!record.matches_lowercase("alice"));
    }

    #[test]
    fn test_display_helpers() {
        let record = sample_record();
        assert_eq!(record.student_label(), "Alice (S1)");
        assert_eq!(record.ratings.summary(), "T:4 | C:3 | Cl:5 | O:1");
    }

    #[test]
    fn test_generate_id_uses_millis() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        assert_eq!(generate_id(now, |_| false), "f_1700000000123");
    }

    #[test]
    fn test_generate_id_skips_taken() {
        let now = Utc.timestamp_millis_opt(1_000).unwrap();
        let taken = ["f_1000", "f_1001"];
        assert_eq!(generate_id(now, |id| taken.contains(&id)), "f_1002");
    }
}
