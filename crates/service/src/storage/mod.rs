//! In-memory storage for the attendance domain.
//!
//! One `EntityTable` per entity type, each with its own lock and its own id sequence.
//! Nothing here is durable; contents are dropped with the process.

mod entity_table;
pub mod data_store;

pub use data_store::{AttendanceFilter, DataStore, StoreStats};
