//! Persistence layer for the todolist application.
//!
//! Everything that talks SQL lives here: opening the SQLite database,
//! creating and versioning the schema, and the parameterized statements
//! behind every task operation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use todolist::db::tasks::Tasks;
//! use todolist::libs::config::DatabaseConfig;
//! use todolist::libs::task::{Task, TaskFilter};
//!
//! let mut tasks = Tasks::new(&DatabaseConfig::at_path("todo_list.db"))?;
//! let id = tasks.insert(&Task::new("Buy milk", NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()))?;
//! tasks.complete(id)?;
//! let done = tasks.fetch(TaskFilter::Completed)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection opening and schema bootstrap.
pub mod db;

/// Versioned schema changes and their history.
pub mod migrations;

/// CRUD operations on the `tasks` table.
pub mod tasks;
