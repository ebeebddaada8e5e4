use std::sync::Arc;

use models::{Student, StudentInput};
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::storage::DataStore;

#[derive(Clone)]
pub struct StudentService {
    store: Arc<DataStore>,
}

impl StudentService {
    pub fn new(store: Arc<DataStore>) -> Self { Self { store } }

    pub fn list(&self) -> Vec<Student> {
        self.store.list_students()
    }

    pub fn get(&self, id: u64) -> Option<Student> {
        self.store.get_student(id)
    }

    #[instrument(skip(self, input), fields(email = %input.email))]
    pub fn create(&self, input: StudentInput) -> Result<Student, ServiceError> {
        input.validate()?;
        let student = self.store.add_student(input.into_student());
        info!(id = student.id, "student_created");
        Ok(student)
    }

    /// Replace the whole student; the id comes from the path, never the body.
    #[instrument(skip(self, input))]
    pub fn update(&self, id: u64, input: StudentInput) -> Result<Student, ServiceError> {
        input.validate()?;
        let mut student = input.into_student();
        student.id = id;
        let updated = self.store.update_student(student)?;
        info!(id, "student_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub fn delete(&self, id: u64) -> bool {
        let removed = self.store.delete_student(id);
        if removed {
            info!(id, "student_deleted");
        }
        removed
    }

    /// Add `course_id` to the student's registrations. Registering twice is a no-op.
    #[instrument(skip(self))]
    pub fn register_course(
        &self,
        student_id: u64,
        course_id: u64,
    ) -> Result<Student, ServiceError> {
        if !self.store.course_exists(course_id) {
            return Err(ServiceError::unknown_reference("Course", course_id));
        }
        let student = self.store.modify_student(student_id, |s| {
            s.register_course(course_id);
        })?;
        info!(student_id, course_id, "course_registered");
        Ok(student)
    }

    #[instrument(skip(self))]
    pub fn unregister_course(
        &self,
        student_id: u64,
        course_id: u64,
    ) -> Result<Student, ServiceError> {
        let student = self.store.modify_student(student_id, |s| {
            s.unregister_course(course_id);
        })?;
        info!(student_id, course_id, "course_unregistered");
        Ok(student)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::Course;

    fn input(name: &str, email: &str) -> StudentInput {
        StudentInput { full_name: name.into(), email: email.into(), registered_courses: vec![] }
    }

    #[test]
    fn create_validates_fields() {
        let svc = StudentService::new(Arc::new(DataStore::new()));
        assert!(matches!(svc.create(input("", "a@x")), Err(ServiceError::Model(_))));
        assert!(matches!(svc.create(input("Ada", " ")), Err(ServiceError::Model(_))));
        let s = svc.create(input("Ada", "ada@example.com")).unwrap();
        assert_eq!(s.id, 1);
        assert_eq!(svc.list().len(), 1);
    }

    #[test]
    fn update_missing_is_not_found() {
        let svc = StudentService::new(Arc::new(DataStore::new()));
        let err = svc.update(5, input("Ada", "ada@example.com")).unwrap_err();
        assert!(matches!(
            err,
            ServiceError::NotFound(ref m) if m == "Student not found with ID: 5"
        ));
    }

    #[test]
    fn register_requires_existing_course() {
        let store = Arc::new(DataStore::new());
        let svc = StudentService::new(store.clone());
        let s = svc.create(input("Ada", "ada@example.com")).unwrap();
        assert!(matches!(svc.register_course(s.id, 1), Err(ServiceError::UnknownReference(_))));

        let c = store.add_course(Course::new("Math", "T"));
        let s = svc.register_course(s.id, c.id).unwrap();
        let s = svc.register_course(s.id, c.id).unwrap();
        assert_eq!(s.registered_courses(), vec![c.id]);
        let s = svc.unregister_course(s.id, c.id).unwrap();
        assert!(s.registered_courses().is_empty());
        assert!(matches!(svc.unregister_course(99, c.id), Err(ServiceError::NotFound(_))));
    }
}
