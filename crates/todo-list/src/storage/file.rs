//! JSON file storage implementation.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use tracing::debug;

use super::traits::Storage;
use crate::entities::Task;
use crate::errors::{TodoError, TodoResult};

const INDENT: &[u8] = b"    ";

/// Stores tasks as a pretty-printed JSON array in a single file
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn write_error(&self, err: impl ToString) -> TodoError {
        TodoError::FileWriteError {
            path: self.path.display().to_string(),
            reason: err.to_string(),
        }
    }

    /// Serialize records as a JSON array with four-space indentation
    fn render(tasks: &[Task]) -> TodoResult<Vec<u8>> {
        let records: Vec<Value> = tasks.iter().map(Task::to_record).collect();
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        records.serialize(&mut ser)?;
        Ok(buf)
    }
}

impl Storage for JsonFileStorage {
    fn storage_type(&self) -> &'static str {
        "json-file"
    }

    fn load(&self) -> TodoResult<Option<Vec<Task>>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No saved tasks file");
                return Ok(None);
            }
            Err(e) => {
                return Err(TodoError::FileReadError {
                    path: self.path.display().to_string(),
                    reason: e.to_string(),
                })
            }
        };

        let data: Value = serde_json::from_str(&content)?;
        let records = data.as_array().ok_or_else(|| TodoError::InvalidRecord {
            reason: format!("'{}' does not contain a JSON array", self.path.display()),
        })?;

        let tasks = records
            .iter()
            .map(Task::from_record)
            .collect::<TodoResult<Vec<_>>>()?;

        debug!(path = %self.path.display(), count = tasks.len(), "Loaded tasks");
        Ok(Some(tasks))
    }

    fn save(&self, tasks: &[Task]) -> TodoResult<()> {
        let content = Self::render(tasks)?;
        let mut file = fs::File::create(&self.path).map_err(|e| self.write_error(e))?;
        file.write_all(&content).map_err(|e| self.write_error(e))?;
        file.flush().map_err(|e| self.write_error(e))?;

        debug!(path = %self.path.display(), count = tasks.len(), "Saved tasks");
        Ok(())
    }
}
