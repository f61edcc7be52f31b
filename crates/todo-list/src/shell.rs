//! Interactive text-menu shell over a [`TaskStore`].

use std::io::{BufRead, Write};
use std::num::IntErrorKind;
use std::path::PathBuf;

use tracing::debug;

use crate::domain::{LoadOutcome, TaskStore};
use crate::errors::{TodoError, TodoResult};
use crate::ui;

/// Filename offered when the user leaves the save/load prompt blank
pub const DEFAULT_FILE: &str = "tasks.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Menu-driven session that owns the task store.
///
/// Reads one line per prompt from `input` and writes everything to
/// `output`. Ends on the exit choice or at end of input.
pub struct Shell<R, W> {
    store: TaskStore,
    input: R,
    output: W,
    default_file: PathBuf,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(store: TaskStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
            default_file: PathBuf::from(DEFAULT_FILE),
        }
    }

    /// Use `path` when the save/load filename prompt is left blank
    pub fn with_default_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.default_file = path.into();
        self
    }

    pub fn into_store(self) -> TaskStore {
        self.store
    }

    /// Run the menu loop until the user exits.
    ///
    /// Malformed save files, write failures, and a non-numeric task index
    /// end the session with an error.
    pub fn run(&mut self) -> TodoResult<()> {
        loop {
            ui::print_menu(&mut self.output)?;
            let Some(choice) = self.read_line("Enter your choice: ")? else {
                return Ok(());
            };
            debug!(choice = %choice, "Menu choice");

            let flow = match choice.as_str() {
                "1" => self.add_task()?,
                "2" => self.view_tasks()?,
                "3" => self.complete_task()?,
                "4" => self.delete_task()?,
                "5" => self.save_tasks()?,
                "6" => self.load_tasks()?,
                "7" => {
                    writeln!(self.output, "Exiting the application.")?;
                    Flow::Exit
                }
                _ => {
                    ui::print_warning(&mut self.output, "Invalid choice. Please try again.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Load the default file before the menu is shown
    pub fn load_default(&mut self) -> TodoResult<()> {
        let path = self.default_file.clone();
        self.load_from(path)
    }

    fn add_task(&mut self) -> TodoResult<Flow> {
        let Some(title) = self.read_line("Enter task title: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(description) = self.read_line("Enter task description (optional): ")? else {
            return Ok(Flow::Exit);
        };
        let Some(due_date) = self.read_line("Enter due date (optional, format YYYY-MM-DD): ")?
        else {
            return Ok(Flow::Exit);
        };
        let Some(priority) = self.read_line("Enter priority (Low, Medium, High): ")? else {
            return Ok(Flow::Exit);
        };

        self.store.add_task(title, description, Some(due_date), priority);
        ui::print_success(&mut self.output, "Task added.")?;
        Ok(Flow::Continue)
    }

    fn view_tasks(&mut self) -> TodoResult<Flow> {
        for line in self.store.list_tasks() {
            writeln!(self.output, "{line}")?;
        }
        Ok(Flow::Continue)
    }

    fn complete_task(&mut self) -> TodoResult<Flow> {
        let Some(position) = self.read_position("Enter task index to mark as completed: ")? else {
            return Ok(Flow::Exit);
        };
        match self.store.complete_task(position) {
            Some(task) => {
                let message = format!("Task '{}' marked as completed.", task.title());
                ui::print_success(&mut self.output, &message)?;
            }
            None => ui::print_warning(&mut self.output, "Invalid task index.")?,
        }
        Ok(Flow::Continue)
    }

    fn delete_task(&mut self) -> TodoResult<Flow> {
        let Some(position) = self.read_position("Enter task index to delete: ")? else {
            return Ok(Flow::Exit);
        };
        match self.store.delete_task(position) {
            Some(task) => {
                let message = format!("Task '{}' deleted.", task.title());
                ui::print_success(&mut self.output, &message)?;
            }
            None => ui::print_warning(&mut self.output, "Invalid task index.")?,
        }
        Ok(Flow::Continue)
    }

    fn save_tasks(&mut self) -> TodoResult<Flow> {
        let Some(path) = self.read_filename("save")? else {
            return Ok(Flow::Exit);
        };
        self.store.save_to_file(&path)?;
        ui::print_success(&mut self.output, "Tasks saved to file.")?;
        Ok(Flow::Continue)
    }

    fn load_tasks(&mut self) -> TodoResult<Flow> {
        let Some(path) = self.read_filename("load")? else {
            return Ok(Flow::Exit);
        };
        self.load_from(path)?;
        Ok(Flow::Continue)
    }

    fn load_from(&mut self, path: PathBuf) -> TodoResult<()> {
        match self.store.load_from_file(&path)? {
            LoadOutcome::Loaded(_) => ui::print_success(&mut self.output, "Tasks loaded from file.")?,
            LoadOutcome::NotFound => ui::print_info(&mut self.output, "No saved tasks found.")?,
        }
        Ok(())
    }

    fn read_filename(&mut self, action: &str) -> TodoResult<Option<PathBuf>> {
        let label = format!(
            "Enter filename to {action} tasks (default: {}): ",
            self.default_file.display()
        );
        let Some(name) = self.read_line(&label)? else {
            return Ok(None);
        };
        if name.is_empty() {
            Ok(Some(self.default_file.clone()))
        } else {
            Ok(Some(PathBuf::from(name)))
        }
    }

    /// Read a 1-based task number and convert it to a 0-based position.
    ///
    /// Numbers too large for `i64` are out of range rather than fatal.
    fn read_position(&mut self, label: &str) -> TodoResult<Option<i64>> {
        let Some(raw) = self.read_line(label)? else {
            return Ok(None);
        };
        let parsed = raw.trim().parse::<i64>();
        let number = match parsed {
            Ok(n) => n,
            Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow) => i64::MAX,
            Err(e) if matches!(e.kind(), IntErrorKind::NegOverflow) => i64::MIN,
            Err(_) => return Err(TodoError::InvalidIndexInput { input: raw }),
        };
        Ok(Some(number.saturating_sub(1)))
    }

    /// Prompt and read one line without its line terminator.
    /// `None` means input is exhausted.
    fn read_line(&mut self, label: &str) -> TodoResult<Option<String>> {
        ui::prompt(&mut self.output, label)?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(script: &str) -> (TodoResult<()>, TaskStore, String) {
        let mut output = Vec::new();
        let mut shell = Shell::new(TaskStore::new(), Cursor::new(script.to_string()), &mut output);
        let result = shell.run();
        let store = shell.into_store();
        (result, store, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_exit_choice() {
        let (result, store, out) = run("7\n");
        assert!(result.is_ok());
        assert!(store.is_empty());
        assert!(out.contains("Enter your choice: "));
        assert!(out.ends_with("Exiting the application.\n"));
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (result, _, out) = run("");
        assert!(result.is_ok());
        assert!(!out.contains("Exiting"));
    }

    #[test]
    fn test_blank_fields_are_kept_as_typed() {
        let (result, store, out) = run("1\nTitle\n\n\n\n2\n7\n");
        assert!(result.is_ok());
        let task = &store.tasks()[0];
        assert_eq!(task.title(), "Title");
        assert_eq!(task.description(), "");
        assert_eq!(task.due_date(), Some(""));
        assert_eq!(task.priority(), "");
        assert!(out.contains("1. Title - Pending (Priority: )\n"));
        assert!(!out.contains("Due Date:"));
    }

    #[test]
    fn test_crlf_input() {
        let (result, store, _) = run("1\r\nA\r\nnote\r\n\r\nHigh\r\n7\r\n");
        assert!(result.is_ok());
        assert_eq!(store.tasks()[0].description(), "note");
        assert_eq!(store.tasks()[0].priority(), "High");
    }

    #[test]
    fn test_choice_is_not_trimmed() {
        let (_, _, out) = run("1 \n7\n");
        assert!(out.contains("Invalid choice. Please try again."));
    }

    #[test]
    fn test_zero_and_huge_index_are_out_of_range() {
        let (result, store, out) = run("1\nA\n\n\n\n3\n0\n3\n99999999999999999999999\n7\n");
        assert!(result.is_ok());
        assert_eq!(out.matches("Invalid task index.").count(), 2);
        assert!(!store.tasks()[0].is_completed());
    }

    #[test]
    fn test_non_numeric_index_is_fatal() {
        let (result, _, _) = run("1\nA\n\n\n\n4\nfirst\n7\n");
        match result {
            Err(TodoError::InvalidIndexInput { input }) => assert_eq!(input, "first"),
            other => panic!("expected InvalidIndexInput, got {other:?}"),
        }
    }

    #[test]
    fn test_index_allows_surrounding_spaces() {
        let (result, store, _) = run("1\nA\n\n\n\n3\n 1 \n7\n");
        assert!(result.is_ok());
        assert!(store.tasks()[0].is_completed());
    }
}
