//! Core data structures for the to-do list.

mod task;

pub use task::{Task, TaskStatus, DEFAULT_PRIORITY, RECORD_FIELDS};
