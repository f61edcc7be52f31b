//! Terminal output helpers for the interactive shell.
//!
//! Every helper writes to the given sink rather than stdout so the shell
//! can be driven from tests.

use std::io::{self, Write};

use colored::Colorize;

/// Menu entries in display order; the number is the position plus one
pub const MENU_ITEMS: [&str; 7] = [
    "Add Task",
    "View Tasks",
    "Mark Task as Completed",
    "Delete Task",
    "Save Tasks to File",
    "Load Tasks from File",
    "Exit",
];

/// Print the numbered main menu
pub fn print_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "To-Do List Application".bold())?;
    for (idx, item) in MENU_ITEMS.iter().enumerate() {
        writeln!(out, "{}. {item}", idx + 1)?;
    }
    Ok(())
}

/// Print a prompt without a trailing newline and flush it
pub fn prompt(out: &mut impl Write, label: &str) -> io::Result<()> {
    write!(out, "{label}")?;
    out.flush()
}

/// Print success message
pub fn print_success(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{} {}", "✓".green().bold(), message)
}

/// Print error message
pub fn print_error(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{} {}", "✗".red().bold(), message)
}

/// Print info message
pub fn print_info(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{} {}", "ℹ".blue().bold(), message)
}

/// Print warning message
pub fn print_warning(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{} {}", "⚠".yellow().bold(), message)
}
