//! Business logic over the task entities.

pub mod tasks;

pub use tasks::{LoadOutcome, TaskStore, EMPTY_LIST_NOTICE};
