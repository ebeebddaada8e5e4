use std::sync::Arc;

use models::{AttendanceInput, AttendanceRecord};
use tracing::{info, instrument, warn};

use crate::errors::ServiceError;
use crate::storage::{AttendanceFilter, DataStore};

/// Attendance workflows with advisory referential integrity.
///
/// Student/course existence is checked before each write, but the check and the write are
/// separate store calls: a concurrent delete in between can still leave a dangling record.
#[derive(Clone)]
pub struct AttendanceService {
    store: Arc<DataStore>,
}

impl AttendanceService {
    pub fn new(store: Arc<DataStore>) -> Self { Self { store } }

    pub fn get(&self, id: u64) -> Option<AttendanceRecord> { self.store.get_attendance(id) }

    fn check_references(&self, student_id: u64, course_id: u64) -> Result<(), ServiceError> {
        if !self.store.student_exists(student_id) {
            warn!(student_id, "attendance_unknown_student");
            return Err(ServiceError::unknown_reference("Student", student_id));
        }
        if !self.store.course_exists(course_id) {
            warn!(course_id, "attendance_unknown_course");
            return Err(ServiceError::unknown_reference("Course", course_id));
        }
        Ok(())
    }

    /// Filtered listing. A set filter must name an existing entity.
    #[instrument(skip(self))]
    pub fn query(&self, filter: AttendanceFilter) -> Result<Vec<AttendanceRecord>, ServiceError> {
        if let Some(id) = filter.student_id {
            if !self.store.student_exists(id) {
                return Err(ServiceError::unknown_reference("Student", id));
            }
        }
        if let Some(id) = filter.course_id {
            if !self.store.course_exists(id) {
                return Err(ServiceError::unknown_reference("Course", id));
            }
        }
        let records = self.store.query_attendance(filter);
        info!(count = records.len(), "attendance_listed");
        Ok(records)
    }

    #[instrument(
        skip(self, input),
        fields(student_id = input.student_id, course_id = input.course_id)
    )]
    pub fn create(&self, input: AttendanceInput) -> Result<AttendanceRecord, ServiceError> {
        input.validate()?;
        self.check_references(input.student_id, input.course_id)?;
        let record = self.store.add_attendance(input.into_record());
        info!(id = record.id, "attendance_created");
        Ok(record)
    }

    #[instrument(
        skip(self, input),
        fields(student_id = input.student_id, course_id = input.course_id)
    )]
    pub fn update(
        &self,
        id: u64,
        input: AttendanceInput,
    ) -> Result<AttendanceRecord, ServiceError> {
        if !self.store.attendance_exists(id) {
            return Err(ServiceError::not_found("Attendance record", id));
        }
        input.validate()?;
        self.check_references(input.student_id, input.course_id)?;
        let mut record = input.into_record();
        record.id = id;
        let updated = self.store.update_attendance(record)?;
        info!(id, "attendance_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub fn delete(&self, id: u64) -> bool {
        let removed = self.store.delete_attendance(id);
        if removed {
            info!(id, "attendance_deleted");
        }
        removed
    }
}
