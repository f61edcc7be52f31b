#![warn(clippy::pedantic)]
// Allow common pedantic lints that don't affect correctness
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

//! # Todo List
//!
//! A personal to-do list driven by a numbered text menu.
//!
//! This crate provides:
//! - The [`Task`](entities::Task) record and its persisted field mapping
//! - An ordered in-memory [`TaskStore`](domain::TaskStore)
//! - JSON file storage behind the [`Storage`](storage::Storage) trait
//! - The interactive [`Shell`](shell::Shell) used by the `todo` binary
//!
//! ## Example
//!
//! ```rust,no_run
//! use todo_list::domain::TaskStore;
//!
//! let mut store = TaskStore::new();
//! store.add_task("Buy milk", "", Some("2024-01-01".into()), "High");
//! store.complete_task(0);
//! store.save_to_file("tasks.json")?;
//! # Ok::<(), todo_list::errors::TodoError>(())
//! ```

pub mod domain;
pub mod entities;
pub mod errors;
pub mod shell;
pub mod storage;
pub mod ui;

pub use domain::{LoadOutcome, TaskStore};
pub use entities::{Task, TaskStatus};
pub use errors::{TodoError, TodoResult};
pub use shell::Shell;
pub use storage::{JsonFileStorage, Storage};
