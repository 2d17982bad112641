pub mod actions;
pub mod forms;
pub mod init;
pub mod menu;
pub mod migrations;
pub mod task;

use crate::libs::config::{Config, DatabaseConfig};
use crate::libs::messages::Message;
use crate::libs::task::TaskError;
use crate::{msg_error, msg_warning};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Open the interactive menu (default)")]
    Menu,
    #[command(about = "Add a task")]
    Add(task::AddArgs),
    #[command(about = "List tasks")]
    List(task::ListArgs),
    #[command(about = "Change a task's description and due date")]
    Edit(task::EditArgs),
    #[command(about = "Delete a task")]
    Delete(task::IdArgs),
    #[command(about = "Delete all tasks")]
    Clear(task::ClearArgs),
    #[command(about = "Mark a task as completed")]
    Complete(task::IdArgs),
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Inspect database migrations")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn menu() -> Result<ExitCode> {
        Self::parse().run()
    }

    pub fn run(self) -> Result<ExitCode> {
        let result = match self.command.unwrap_or(Commands::Menu) {
            Commands::Init(args) => return init::cmd(args).map(|_| ExitCode::SUCCESS),
            Commands::Menu => return menu::cmd(&database()?).map(|_| ExitCode::SUCCESS),
            Commands::Add(args) => task::add(args, &database()?),
            Commands::List(args) => task::list(args, &database()?),
            Commands::Edit(args) => task::edit(args, &database()?),
            Commands::Delete(args) => task::delete(args, &database()?),
            Commands::Clear(args) => task::clear(args, &database()?),
            Commands::Complete(args) => task::complete(args, &database()?),
            Commands::Migrations(args) => migrations::cmd(args, &database()?),
        };

        Ok(if report(result) { ExitCode::SUCCESS } else { ExitCode::FAILURE })
    }
}

/// Database settings from `config.json`. An unreadable file stops the program.
fn database() -> Result<DatabaseConfig> {
    Ok(Config::read()?.database_config())
}

/// Single place where a failed action is shown to the user.
///
/// Rejected input is a warning, anything from SQLite is a database error,
/// everything else is printed as is. Returns `true` if there was nothing to
/// report.
pub fn report(result: Result<()>) -> bool {
    let Err(error) = result else {
        return true;
    };

    if let Some(invalid) = error.downcast_ref::<TaskError>() {
        msg_warning!(invalid);
    } else if let Some(db_error) = error.downcast_ref::<rusqlite::Error>() {
        msg_error!(Message::DatabaseError(db_error.to_string()));
    } else {
        msg_error!(error);
    }

    false
}
