//! Todo CLI - interactive to-do list.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::disallowed_macros)]

use std::io;
use std::path::PathBuf;

use clap::Parser;

use todo_list::domain::TaskStore;
use todo_list::errors::TodoError;
use todo_list::shell::{Shell, DEFAULT_FILE};
use todo_list::ui;

#[derive(Parser)]
#[command(name = "todo")]
#[command(about = "Personal to-do list with a text menu", long_about = None)]
#[command(version)]
struct Cli {
    /// File used when the save/load filename prompt is left blank
    #[arg(long, env = "TODO_FILE", default_value = DEFAULT_FILE)]
    file: PathBuf,

    /// Load the default file before showing the menu
    #[arg(long)]
    load: bool,
}

fn main() {
    // Logs go to stderr; stdout carries the menu
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!(error = %e, "Session aborted");
        let _ = ui::print_error(&mut io::stdout(), &e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), TodoError> {
    let stdin = io::stdin();
    let mut shell = Shell::new(TaskStore::new(), stdin.lock(), io::stdout()).with_default_file(cli.file);

    if cli.load {
        shell.load_default()?;
    }

    shell.run()
}
