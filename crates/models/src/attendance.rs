use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, require_id, Entity};

/// One attendance mark. `date` carries no time component and serializes as `YYYY-MM-DD`.
///
/// Nothing prevents two records sharing the same (student, course, date).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: u64,
    pub student_id: u64,
    pub course_id: u64,
    pub date: NaiveDate,
    pub present: bool,
}

impl AttendanceRecord {
    pub fn new(student_id: u64, course_id: u64, date: NaiveDate, present: bool) -> Self {
        Self { id: 0, student_id, course_id, date, present }
    }
}

impl Entity for AttendanceRecord {
    const KIND: &'static str = "Attendance record";

    fn id(&self) -> u64 { self.id }
    fn set_id(&mut self, id: u64) { self.id = id; }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceInput {
    pub student_id: u64,
    pub course_id: u64,
    pub date: NaiveDate,
    #[serde(default)]
    pub present: bool,
}

impl AttendanceInput {
    /// Shape checks only; whether the referenced student/course exist is decided by the caller.
    pub fn validate(&self) -> Result<(), ModelError> {
        require_id("student ID", self.student_id)?;
        require_id("course ID", self.course_id)?;
        Ok(())
    }

    pub fn into_record(self) -> AttendanceRecord {
        AttendanceRecord::new(self.student_id, self.course_id, self.date, self.present)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_date_and_defaults_present() {
        let input: AttendanceInput =
            serde_json::from_str(r#"{"studentId":1,"courseId":2,"date":"2024-03-05"}"#).unwrap();
        assert_eq!(input.date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert!(!input.present);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn rejects_zero_ids() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let input = AttendanceInput { student_id: 0, course_id: 1, date, present: true };
        assert_eq!(
            input.validate(),
            Err(ModelError::Validation("valid student ID is required".into()))
        );
        let input = AttendanceInput { student_id: 1, course_id: 0, date, present: true };
        assert_eq!(
            input.validate(),
            Err(ModelError::Validation("valid course ID is required".into()))
        );
    }

    #[test]
    fn date_serializes_without_time() {
        let rec = AttendanceRecord::new(1, 1, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(), true);
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["date"], "2024-12-31");
        assert_eq!(json["studentId"], 1);
    }
}
