//! Task entity and related types.

use serde_json::{Map, Value};

use crate::errors::{TodoError, TodoResult};

/// Keys every persisted task record must carry.
pub const RECORD_FIELDS: [&str; 5] = ["title", "description", "due_date", "priority", "status"];

/// Priority given to tasks created without one.
pub const DEFAULT_PRIORITY: &str = "Medium";

/// Task status values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TaskStatus {
    #[default]
    Pending,
    Completed,
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Completed => write!(f, "Completed"),
        }
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Completed" => Ok(Self::Completed),
            _ => Err(TodoError::InvalidStatus {
                status: s.to_string(),
            }),
        }
    }
}

/// A single to-do item.
///
/// The title is fixed at creation. Status only ever moves from
/// `Pending` to `Completed`, except when a task is rebuilt from a saved
/// record with [`Task::from_record`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    title: String,
    description: String,
    due_date: Option<String>,
    /// Free text; `Low`/`Medium`/`High` by convention only
    priority: String,
    status: TaskStatus,
}

impl Task {
    /// Create a new pending task
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: Option<String>,
        priority: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            due_date,
            priority: priority.into(),
            status: TaskStatus::default(),
        }
    }

    /// Create a pending task with only a title
    pub fn titled(title: impl Into<String>) -> Self {
        Self::new(title, "", None, DEFAULT_PRIORITY)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn due_date(&self) -> Option<&str> {
        self.due_date.as_deref()
    }

    pub fn priority(&self) -> &str {
        &self.priority
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// Mark task as completed. Calling it again is a no-op.
    pub fn mark_completed(&mut self) {
        self.status = TaskStatus::Completed;
    }

    /// Field mapping used for persistence
    pub fn to_record(&self) -> Value {
        let mut record = Map::new();
        record.insert("title".into(), Value::String(self.title.clone()));
        record.insert(
            "description".into(),
            Value::String(self.description.clone()),
        );
        record.insert(
            "due_date".into(),
            self.due_date.clone().map_or(Value::Null, Value::String),
        );
        record.insert("priority".into(), Value::String(self.priority.clone()));
        record.insert("status".into(), Value::String(self.status.to_string()));
        Value::Object(record)
    }

    /// Rebuild a task from a persisted record.
    ///
    /// Unlike [`Task::new`], the status comes from the record.
    pub fn from_record(record: &Value) -> TodoResult<Self> {
        let map = record.as_object().ok_or_else(|| TodoError::InvalidRecord {
            reason: format!("expected an object, found {}", json_kind(record)),
        })?;

        for field in RECORD_FIELDS {
            if !map.contains_key(field) {
                return Err(TodoError::MissingField {
                    field: field.to_string(),
                });
            }
        }

        let due_date = match &map["due_date"] {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => {
                return Err(TodoError::InvalidRecord {
                    reason: format!("'due_date' must be a string or null, found {}", json_kind(other)),
                })
            }
        };

        Ok(Self {
            title: string_field(map, "title")?,
            description: string_field(map, "description")?,
            due_date,
            priority: string_field(map, "priority")?,
            status: string_field(map, "status")?.parse()?,
        })
    }
}

fn string_field(map: &Map<String, Value>, field: &str) -> TodoResult<String> {
    match &map[field] {
        Value::String(s) => Ok(s.clone()),
        other => Err(TodoError::InvalidRecord {
            reason: format!("'{field}' must be a string, found {}", json_kind(other)),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
