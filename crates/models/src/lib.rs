//! Entity definitions for the attendance domain.
//! - `Student`, `Course` and `AttendanceRecord` are plain values; ids are assigned by the store.
//! - `*Input` types carry client-supplied fields and own their field-level validation.

pub mod errors;
pub mod student;
pub mod course;
pub mod attendance;

pub use attendance::{AttendanceInput, AttendanceRecord};
pub use course::{Course, CourseInput};
pub use errors::ModelError;
pub use student::{Student, StudentInput};

/// Common shape of every stored entity type.
pub trait Entity: Clone {
    /// Human readable type name used in errors and logs.
    const KIND: &'static str;

    fn id(&self) -> u64;
    fn set_id(&mut self, id: u64);
}

/// Reject blank (empty or whitespace-only) required text fields.
pub(crate) fn require_text(field: &str, value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Reject zero ids; the store never issues them.
pub(crate) fn require_id(field: &str, value: u64) -> Result<(), ModelError> {
    if value == 0 {
        return Err(ModelError::Validation(format!("valid {field} is required")));
    }
    Ok(())
}
