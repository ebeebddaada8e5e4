use std::fmt;

use chrono::{Days, Local};
use models::{AttendanceRecord, Course, Student};
use serde::Serialize;
use tracing::{debug, info};

use crate::errors::StoreError;
use crate::storage::entity_table::EntityTable;

/// Optional filters for attendance queries. `None` matches any id.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AttendanceFilter {
    pub student_id: Option<u64>,
    pub course_id: Option<u64>,
}

impl AttendanceFilter {
    pub fn student(id: u64) -> Self { Self { student_id: Some(id), course_id: None } }
    pub fn course(id: u64) -> Self { Self { student_id: None, course_id: Some(id) } }

    pub fn matches(&self, record: &AttendanceRecord) -> bool {
        self.student_id.map_or(true, |id| record.student_id == id)
            && self.course_id.map_or(true, |id| record.course_id == id)
    }
}

/// Row counts at the time of the call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreStats {
    pub students: usize,
    pub courses: usize,
    pub attendance_records: usize,
}

impl fmt::Display for StoreStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DataStore Statistics: {} students, {} courses, {} attendance records",
            self.students, self.courses, self.attendance_records
        )
    }
}

/// Process-wide in-memory store for students, courses and attendance records.
///
/// Construct once and share behind an `Arc`. Each entity type is locked independently;
/// no operation spans two types atomically. In particular the store does not check that
/// an attendance record's student/course exist; callers check before writing, and a
/// concurrent delete between that check and the write is tolerated. Deleting a student
/// or course never touches attendance records that reference it.
#[derive(Debug, Default)]
pub struct DataStore {
    students: EntityTable<Student>,
    courses: EntityTable<Course>,
    attendance: EntityTable<AttendanceRecord>,
}

impl DataStore {
    pub fn new() -> Self { Self::default() }

    // Students

    pub fn add_student(&self, student: Student) -> Student {
        let stored = self.students.insert(student);
        debug!(id = stored.id, "student_added");
        stored
    }

    pub fn get_student(&self, id: u64) -> Option<Student> { self.students.get(id) }

    pub fn list_students(&self) -> Vec<Student> { self.students.list() }

    pub fn update_student(&self, student: Student) -> Result<Student, StoreError> {
        self.students.replace(student)
    }

    /// Apply `f` to the stored student atomically with respect to other student writes.
    pub fn modify_student<F>(&self, id: u64, f: F) -> Result<Student, StoreError>
    where
        F: FnOnce(&mut Student),
    {
        self.students.update_with(id, f)
    }

    pub fn delete_student(&self, id: u64) -> bool {
        let removed = self.students.remove(id);
        debug!(id, removed, "student_delete");
        removed
    }

    pub fn student_exists(&self, id: u64) -> bool { self.students.contains(id) }

    // Courses

    pub fn add_course(&self, course: Course) -> Course {
        let stored = self.courses.insert(course);
        debug!(id = stored.id, "course_added");
        stored
    }

    pub fn get_course(&self, id: u64) -> Option<Course> { self.courses.get(id) }

    pub fn list_courses(&self) -> Vec<Course> { self.courses.list() }

    pub fn update_course(&self, course: Course) -> Result<Course, StoreError> {
        self.courses.replace(course)
    }

    pub fn delete_course(&self, id: u64) -> bool {
        let removed = self.courses.remove(id);
        debug!(id, removed, "course_delete");
        removed
    }

    pub fn course_exists(&self, id: u64) -> bool { self.courses.contains(id) }

    // Attendance

    /// Stores the record as given; referenced ids are trusted.
    pub fn add_attendance(&self, record: AttendanceRecord) -> AttendanceRecord {
        let stored = self.attendance.insert(record);
        debug!(
            id = stored.id,
            student_id = stored.student_id,
            course_id = stored.course_id,
            "attendance_added"
        );
        stored
    }

    pub fn get_attendance(&self, id: u64) -> Option<AttendanceRecord> { self.attendance.get(id) }

    pub fn list_attendance(&self) -> Vec<AttendanceRecord> { self.attendance.list() }

    pub fn update_attendance(
        &self,
        record: AttendanceRecord,
    ) -> Result<AttendanceRecord, StoreError> {
        self.attendance.replace(record)
    }

    pub fn delete_attendance(&self, id: u64) -> bool {
        let removed = self.attendance.remove(id);
        debug!(id, removed, "attendance_delete");
        removed
    }

    pub fn attendance_exists(&self, id: u64) -> bool { self.attendance.contains(id) }

    /// Records matching every set filter. An empty result is not an error.
    pub fn query_attendance(&self, filter: AttendanceFilter) -> Vec<AttendanceRecord> {
        self.attendance.filter(|r| filter.matches(r))
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            students: self.students.len(),
            courses: self.courses.len(),
            attendance_records: self.attendance.len(),
        }
    }

    /// Populate a small demo data set. Ids come from the normal sequences.
    pub fn seed_sample_data(&self) {
        let s1 = self.add_student(Student::new("Mitsos Karatasou", "mitsos.kara@gmail.com"));
        let s2 = self.add_student(Student::new("Maria Eleutheriou", "maria.ele@email.com"));
        let s3 = self.add_student(Student::new("Arnold Schwarz", "arnie.sch@email.com"));

        let c1 = self.add_course(Course::new("Java Programming", "Dr. John"));
        let c2 = self.add_course(Course::new("Data Structures", "Prof. Davis"));
        let c3 = self.add_course(Course::new("Web Development", "Sir Mathews"));

        let today = Local::now().date_naive();
        let yesterday = today.checked_sub_days(Days::new(1)).unwrap_or(today);
        self.add_attendance(AttendanceRecord::new(s1.id, c1.id, yesterday, true));
        self.add_attendance(AttendanceRecord::new(s1.id, c2.id, yesterday, false));
        self.add_attendance(AttendanceRecord::new(s2.id, c1.id, yesterday, true));
        self.add_attendance(AttendanceRecord::new(s3.id, c3.id, today, true));

        info!(stats = %self.stats(), "sample_data_seeded");
    }
}
