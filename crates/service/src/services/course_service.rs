use std::sync::Arc;

use models::{Course, CourseInput};
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::storage::DataStore;

#[derive(Clone)]
pub struct CourseService {
    store: Arc<DataStore>,
}

impl CourseService {
    pub fn new(store: Arc<DataStore>) -> Self { Self { store } }

    pub fn list(&self) -> Vec<Course> { self.store.list_courses() }

    pub fn get(&self, id: u64) -> Option<Course> { self.store.get_course(id) }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub fn create(&self, input: CourseInput) -> Result<Course, ServiceError> {
        input.validate()?;
        let course = self.store.add_course(input.into_course());
        info!(id = course.id, "course_created");
        Ok(course)
    }

    #[instrument(skip(self, input))]
    pub fn update(&self, id: u64, input: CourseInput) -> Result<Course, ServiceError> {
        input.validate()?;
        let mut course = input.into_course();
        course.id = id;
        let updated = self.store.update_course(course)?;
        info!(id, "course_updated");
        Ok(updated)
    }

    /// Attendance records pointing at the course are left in place.
    #[instrument(skip(self))]
    pub fn delete(&self, id: u64) -> bool {
        let removed = self.store.delete_course(id);
        if removed {
            info!(id, "course_deleted");
        }
        removed
    }
}
