//! # todolist
//!
//! A single-user to-do list manager. Tasks live in one SQLite table and are
//! managed through an interactive terminal menu or plain subcommands.
//!
//! ## Features
//!
//! - **Add**: description and due date, new tasks start as Pending
//! - **View**: all, pending or completed tasks as a table (or JSON)
//! - **Edit**: replace a task's description and due date
//! - **Delete**: one task by id, or every task after confirmation
//! - **Complete**: mark a pending task as completed
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todolist::commands::Cli;
//!
//! fn main() -> anyhow::Result<std::process::ExitCode> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
