//! `todo` command-line front end.
//!
//! # Responsibility
//! - Resolve configuration, start logging and open the durable store.
//! - Run exactly one intent per invocation and print the result.

mod cli;
mod commands;
mod terminal_view;

use clap::Parser;
use cli::{Cli, Command};
use log::{error, info};
use std::error::Error;
use std::io;
use std::process::ExitCode;
use todo_core::db::open_db;
use todo_core::{
    flush_logging, init_logging, AppConfig, KvTodoRepository, SqliteKeyValueStore,
    TodoController,
};
use terminal_view::TerminalView;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let code = match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_exit module=cli status=error error={err}");
            eprintln!("todo: {err}");
            ExitCode::FAILURE
        }
    };
    flush_logging();
    code
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = AppConfig::from_env()?.with_overrides(
        cli.db,
        cli.log_level.as_deref(),
        cli.log_dir,
    )?;
    if let Some(log_dir) = &config.log_dir {
        init_logging(config.log_level, log_dir)?;
    }

    if cli.command == Command::Info {
        println!("todo_core ping={}", todo_core::ping());
        println!("todo_core version={}", todo_core::core_version());
        println!("db_path={}", config.db_path.display());
        return Ok(());
    }

    let conn = open_db(&config.db_path)?;
    let repo = KvTodoRepository::new(SqliteKeyValueStore::new(&conn));
    let mut controller = TodoController::new(repo, TerminalView::new(io::stdout().lock()))?;
    info!(
        "event=cli_start module=cli status=ok count={}",
        controller.state().list().len()
    );

    let result = commands::execute(&mut controller, &cli.command);
    let (_, _, view) = controller.into_parts();
    drop(view.finish()?);
    result?;
    Ok(())
}
