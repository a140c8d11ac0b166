use clap::{Parser, Subcommand};

/// CLI surface definition. clap doubles as the arity/parse validation table:
/// missing arguments and non-numeric ids fail uniformly with a usage error.
#[derive(Parser, Debug)]
#[command(
    name = "tasktrack",
    about = "File-backed task tracker",
    version,
    propagate_version = true
)]
pub struct Cli {
    /// Optional subcommand; prints usage when absent.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a new task with status `todo`.
    Add {
        /// Task description (free-form text).
        description: String,
    },
    /// Replace the description of an existing task.
    Update {
        id: u64,
        description: String,
    },
    /// Delete a task by id.
    Delete { id: u64 },
    /// Mark a task as in progress.
    MarkInProgress { id: u64 },
    /// Mark a task as done.
    MarkDone { id: u64 },
    /// List tasks, optionally filtered by status (todo, in-progress, done).
    List {
        /// Status filter; a value matching no task lists nothing.
        status: Option<String>,
    },
    /// Anything else is reported as an unknown command.
    #[command(external_subcommand)]
    External(Vec<String>),
}
