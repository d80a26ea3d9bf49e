use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "todo")]
#[command(about = "A local todo list")]
#[command(version)]
pub struct Cli {
    /// SQLite file holding the todos (overrides TODO_DB_PATH)
    #[arg(long, value_name = "PATH", global = true)]
    pub db: Option<PathBuf>,

    /// Log level: trace|debug|info|warn|error (overrides TODO_LOG_LEVEL)
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files (overrides TODO_LOG_DIR)
    #[arg(long, value_name = "DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Show todos, optionally only those whose title contains TEXT
    List {
        #[arg(long, short = 'f', value_name = "TEXT")]
        filter: Option<String>,
    },
    /// Add a todo
    Add { title: String },
    /// Replace the title of a todo
    Edit {
        /// Todo id, as `3` or `todo-3`
        item: String,
        title: String,
    },
    /// Delete a todo
    Delete {
        /// Todo id, as `3` or `todo-3`
        item: String,
    },
    /// Delete every todo
    Clear,
    /// Print core version and storage location
    Info,
}
