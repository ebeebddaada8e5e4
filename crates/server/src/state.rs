use std::sync::Arc;

use service::services::{AttendanceService, CourseService, StudentService};
use service::DataStore;

/// Router state. Every service shares the one `DataStore` built at startup.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DataStore>,
    pub students: StudentService,
    pub courses: CourseService,
    pub attendance: AttendanceService,
}

impl AppState {
    pub fn new(store: Arc<DataStore>) -> Self {
        Self {
            students: StudentService::new(Arc::clone(&store)),
            courses: CourseService::new(Arc::clone(&store)),
            attendance: AttendanceService::new(Arc::clone(&store)),
            store,
        }
    }
}
