//! Storage trait definitions.

use crate::entities::Task;
use crate::errors::TodoResult;

/// Storage interface for task persistence
pub trait Storage {
    /// Get storage type identifier
    fn storage_type(&self) -> &'static str;

    /// Load every saved task in order.
    ///
    /// Returns `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> TodoResult<Option<Vec<Task>>>;

    /// Save all tasks, replacing whatever was stored before
    fn save(&self, tasks: &[Task]) -> TodoResult<()>;
}
