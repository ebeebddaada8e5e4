//! Service layer for the attendance system.
//! - `storage` holds the in-memory `DataStore` shared by the whole process.
//! - `services` validates input and applies referential checks before calling the store.
//! - `errors` defines the store and service error taxonomies.

pub mod errors;
pub mod storage;
pub mod services;

pub use errors::{ServiceError, StoreError};
pub use storage::{AttendanceFilter, DataStore, StoreStats};
