//! Application services: the only callers of `DataStore`.
//!
//! Field validation and the student/course existence checks for attendance live here,
//! so the store's write path stays a plain insert.

pub mod student_service;
pub mod course_service;
pub mod attendance_service;

pub use attendance_service::AttendanceService;
pub use course_service::CourseService;
pub use student_service::StudentService;
