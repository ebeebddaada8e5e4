use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, require_text, Entity};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Course {
    pub id: u64,
    pub name: String,
    pub instructor: String,
}

impl Course {
    pub fn new(name: impl Into<String>, instructor: impl Into<String>) -> Self {
        Self { id: 0, name: name.into(), instructor: instructor.into() }
    }
}

impl Entity for Course {
    const KIND: &'static str = "Course";

    fn id(&self) -> u64 { self.id }
    fn set_id(&mut self, id: u64) { self.id = id; }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CourseInput {
    pub name: String,
    pub instructor: String,
}

impl CourseInput {
    pub fn validate(&self) -> Result<(), ModelError> {
        require_text("course name", &self.name)?;
        require_text("instructor", &self.instructor)?;
        Ok(())
    }

    pub fn into_course(self) -> Course {
        Course::new(self.name, self.instructor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_validation() {
        let ok = CourseInput { name: "Data Structures".into(), instructor: "Prof. Davis".into() };
        assert!(ok.validate().is_ok());
        let bad = CourseInput { instructor: "".into(), ..ok };
        assert!(matches!(bad.validate(), Err(ModelError::Validation(_))));
    }
}
