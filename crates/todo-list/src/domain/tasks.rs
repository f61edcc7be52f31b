//! Task store: the ordered in-memory task list and its operations.

use std::path::Path;

use tracing::debug;

use crate::entities::Task;
use crate::errors::TodoResult;
use crate::storage::{JsonFileStorage, Storage};

/// Line shown by [`TaskStore::list_tasks`] for an empty store
pub const EMPTY_LIST_NOTICE: &str = "No tasks to display.";

/// Result of loading tasks from storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The store now holds this many tasks
    Loaded(usize),
    /// Nothing was saved; the store is unchanged
    NotFound,
}

/// Owns the ordered task sequence.
///
/// Insertion order is the only order. Positions are 0-based; callers
/// that show 1-based numbers convert before calling in.
#[derive(Debug, Default, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Append a new pending task
    pub fn add_task(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: Option<String>,
        priority: impl Into<String>,
    ) -> &Task {
        self.tasks.push(Task::new(title, description, due_date, priority));
        let position = self.tasks.len() - 1;
        debug!(position, "Added task");
        &self.tasks[position]
    }

    /// Display lines for every task, in order
    pub fn list_tasks(&self) -> impl Iterator<Item = String> + '_ {
        let notice = self
            .tasks
            .is_empty()
            .then(|| EMPTY_LIST_NOTICE.to_string());

        let entries = self
            .tasks
            .iter()
            .enumerate()
            .flat_map(|(idx, task)| {
                let header = format!(
                    "{}. {} - {} (Priority: {})",
                    idx + 1,
                    task.title(),
                    task.status(),
                    task.priority()
                );
                let due = task
                    .due_date()
                    .filter(|d| !d.is_empty())
                    .map(|d| format!("   Due Date: {d}"));
                let description = Some(task.description())
                    .filter(|d| !d.is_empty())
                    .map(|d| format!("   Description: {d}"));
                std::iter::once(header).chain(due).chain(description)
            });

        notice.into_iter().chain(entries)
    }

    /// Mark the task at `position` completed.
    ///
    /// Returns `None` and leaves the store untouched when `position` is out
    /// of range.
    pub fn complete_task(&mut self, position: i64) -> Option<&Task> {
        let idx = self.index(position)?;
        self.tasks[idx].mark_completed();
        debug!(position = idx, "Completed task");
        Some(&self.tasks[idx])
    }

    /// Remove and return the task at `position`; later tasks shift down
    pub fn delete_task(&mut self, position: i64) -> Option<Task> {
        let idx = self.index(position)?;
        debug!(position = idx, "Deleted task");
        Some(self.tasks.remove(idx))
    }

    /// Write every task to `path` as a JSON array
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> TodoResult<()> {
        self.save_with(&JsonFileStorage::new(path))
    }

    /// Replace the store contents with the tasks saved in `path`
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> TodoResult<LoadOutcome> {
        self.load_with(&JsonFileStorage::new(path))
    }

    pub fn save_with(&self, storage: &dyn Storage) -> TodoResult<()> {
        storage.save(&self.tasks)
    }

    /// Load from any storage. The store is only replaced once every
    /// record has been read successfully.
    pub fn load_with(&mut self, storage: &dyn Storage) -> TodoResult<LoadOutcome> {
        match storage.load()? {
            Some(tasks) => {
                self.tasks = tasks;
                debug!(
                    storage = storage.storage_type(),
                    count = self.tasks.len(),
                    "Replaced task list"
                );
                Ok(LoadOutcome::Loaded(self.tasks.len()))
            }
            None => Ok(LoadOutcome::NotFound),
        }
    }

    fn index(&self, position: i64) -> Option<usize> {
        usize::try_from(position)
            .ok()
            .filter(|&idx| idx < self.tasks.len())
    }
}
