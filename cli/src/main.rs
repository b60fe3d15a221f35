//! `todo` — command-line client for the remote task-list service.
//!
//! Thin binding: clap parses the command line, every command dispatches into
//! `todo_client::actions` with stdout as the sink, errors go to stderr with a
//! nonzero exit code.

use std::io;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use todo_client::actions;

#[derive(Parser, Debug)]
#[command(name = "todo", version, about = "A command-line todo API client")]
struct Cli {
    /// Base URL of the todo API
    #[arg(
        long = "api-root",
        env = "TODO_API_ROOT",
        default_value = "http://localhost:8080",
        global = true
    )]
    api_root: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all todo items
    List,
    /// View a specific todo item with details
    View { item_id: String },
    /// Add a new task
    Add {
        #[arg(required = true)]
        task: Vec<String>,
    },
    /// Mark a todo item as complete
    Complete { item_id: String },
    /// Delete a todo item
    Del { item_id: String },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let mut stdout = io::stdout().lock();
    let result = match &cli.command {
        Command::List => actions::list_action(&mut stdout, &cli.api_root),
        Command::View { item_id } => actions::view_action(&mut stdout, &cli.api_root, item_id),
        Command::Add { task } => actions::add_action(&mut stdout, &cli.api_root, task),
        Command::Complete { item_id } => {
            actions::complete_action(&mut stdout, &cli.api_root, item_id)
        }
        Command::Del { item_id } => actions::delete_action(&mut stdout, &cli.api_root, item_id),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
