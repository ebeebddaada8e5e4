use serde::{Deserialize, Deserializer, Serialize};

use crate::{errors::ModelError, require_id, require_text, Entity};

/// A student and the set of course ids they registered for.
///
/// `registered_courses` never holds duplicates. The list is informational only:
/// attendance may be recorded for courses a student never registered for.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: u64,
    pub full_name: String,
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_courses")]
    registered_courses: Vec<u64>,
}

impl Student {
    pub fn new(full_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: 0,
            full_name: full_name.into(),
            email: email.into(),
            registered_courses: Vec::new(),
        }
    }

    pub fn with_courses(mut self, courses: &[u64]) -> Self {
        self.set_registered_courses(courses);
        self
    }

    /// Copy of the registered course ids.
    pub fn registered_courses(&self) -> Vec<u64> {
        self.registered_courses.clone()
    }

    /// Replace the course list with a de-duplicated copy of `courses` (first occurrence wins).
    pub fn set_registered_courses(&mut self, courses: &[u64]) {
        self.registered_courses = dedup(courses);
    }

    /// Returns `false` if the course was already registered.
    pub fn register_course(&mut self, course_id: u64) -> bool {
        if self.is_registered_for(course_id) {
            return false;
        }
        self.registered_courses.push(course_id);
        true
    }

    /// Returns `false` if the course was not registered.
    pub fn unregister_course(&mut self, course_id: u64) -> bool {
        let before = self.registered_courses.len();
        self.registered_courses.retain(|c| *c != course_id);
        before != self.registered_courses.len()
    }

    pub fn is_registered_for(&self, course_id: u64) -> bool {
        self.registered_courses.contains(&course_id)
    }
}

impl Entity for Student {
    const KIND: &'static str = "Student";

    fn id(&self) -> u64 { self.id }
    fn set_id(&mut self, id: u64) { self.id = id; }
}

fn dedup(courses: &[u64]) -> Vec<u64> {
    let mut out = Vec::with_capacity(courses.len());
    for c in courses {
        if !out.contains(c) {
            out.push(*c);
        }
    }
    out
}

fn deserialize_courses<'de, D>(deserializer: D) -> Result<Vec<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<u64>::deserialize(deserializer)?;
    Ok(dedup(&raw))
}

/// Create/update payload: no id, the store assigns it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StudentInput {
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub registered_courses: Vec<u64>,
}

impl StudentInput {
    pub fn validate(&self) -> Result<(), ModelError> {
        require_text("full name", &self.full_name)?;
        require_text("email", &self.email)?;
        for course_id in &self.registered_courses {
            require_id("registered course ID", *course_id)?;
        }
        Ok(())
    }

    /// Build an unsaved student (id 0) from this input.
    pub fn into_student(self) -> Student {
        Student::new(self.full_name, self.email).with_courses(&self.registered_courses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_list_is_deduplicated() {
        let s = Student::new("Ada", "ada@example.com").with_courses(&[3, 1, 3, 2, 1]);
        assert_eq!(s.registered_courses(), vec![3, 1, 2]);
    }

    #[test]
    fn register_and_unregister() {
        let mut s = Student::new("Ada", "ada@example.com");
        assert!(s.register_course(7));
        assert!(!s.register_course(7));
        assert!(s.is_registered_for(7));
        assert!(s.unregister_course(7));
        assert!(!s.unregister_course(7));
        assert!(s.registered_courses().is_empty());
    }

    #[test]
    fn returned_course_list_is_a_copy() {
        let s = Student::new("Ada", "ada@example.com").with_courses(&[1]);
        let mut courses = s.registered_courses();
        courses.push(99);
        assert_eq!(s.registered_courses(), vec![1]);
    }

    #[test]
    fn input_requires_name_and_email() {
        let mut input = StudentInput {
            full_name: "  ".into(),
            email: "a@b.c".into(),
            registered_courses: vec![],
        };
        assert_eq!(
            input.validate(),
            Err(ModelError::Validation("full name is required".into()))
        );
        input.full_name = "Ada".into();
        input.email = String::new();
        assert_eq!(input.validate(), Err(ModelError::Validation("email is required".into())));
        input.email = "ada@example.com".into();
        assert!(input.validate().is_ok());
    }

    #[test]
    fn input_rejects_zero_course_id() {
        let input = StudentInput {
            full_name: "Ada".into(),
            email: "ada@example.com".into(),
            registered_courses: vec![3, 0],
        };
        assert_eq!(
            input.validate(),
            Err(ModelError::Validation("valid registered course ID is required".into()))
        );
    }

    #[test]
    fn deserialized_course_list_is_deduplicated() {
        let s: Student = serde_json::from_value(serde_json::json!({
            "id": 0,
            "fullName": "Ada",
            "email": "ada@example.com",
            "registeredCourses": [4, 4, 2, 4]
        }))
        .unwrap();
        assert_eq!(s.registered_courses(), vec![4, 2]);

        let bare: Student = serde_json::from_value(serde_json::json!({
            "id": 1,
            "fullName": "Ada",
            "email": "ada@example.com"
        }))
        .unwrap();
        assert!(bare.registered_courses().is_empty());
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let s = Student::new("Ada", "ada@example.com").with_courses(&[2]);
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["fullName"], "Ada");
        assert_eq!(json["registeredCourses"], serde_json::json!([2]));
    }
}
