//! Task record, status and filter types.
//!
//! A [`Task`] is the typed form of one row of the `tasks` table. Input
//! validation for descriptions and ids also lives here, since it is enforced
//! before anything reaches the database.

use crate::libs::messages::Message;
use chrono::NaiveDate;
use clap::ValueEnum;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Longest accepted description, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 255;

/// Completion state of a task. Only `Pending -> Completed` is ever applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    Pending,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(TaskStatus::Pending),
            "Completed" => Ok(TaskStatus::Completed),
            other => Err(format!("unknown task status '{}'", other)),
        }
    }
}

impl ToSql for TaskStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for TaskStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e: String| FromSqlError::Other(e.into()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Option<i64>,
    pub description: String,
    pub due_date: NaiveDate,
    pub status: TaskStatus,
}

impl Task {
    /// A not yet stored task. Status starts as `Pending`.
    pub fn new(description: &str, due_date: NaiveDate) -> Self {
        Task {
            id: None,
            description: description.to_string(),
            due_date,
            status: TaskStatus::default(),
        }
    }
}

/// Which rows the View action lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TaskFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl TaskFilter {
    pub const ALL: [TaskFilter; 3] = [TaskFilter::All, TaskFilter::Pending, TaskFilter::Completed];

    /// Status the filter restricts to, `None` for all rows.
    pub fn status(&self) -> Option<TaskStatus> {
        match self {
            TaskFilter::All => None,
            TaskFilter::Pending => Some(TaskStatus::Pending),
            TaskFilter::Completed => Some(TaskStatus::Completed),
        }
    }
}

impl fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status() {
            Some(status) => write!(f, "{}", status),
            None => f.write_str("All"),
        }
    }
}

/// Input rejected before it reaches the database. Shown as a warning.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("{}", Message::TaskDescriptionEmpty)]
    BlankDescription,
    #[error("{}", Message::TaskDescriptionTooLong(MAX_DESCRIPTION_LEN))]
    DescriptionTooLong,
    #[error("{}", Message::InvalidTaskId)]
    InvalidId,
    #[error("{}", Message::ClearNotConfirmed)]
    NotConfirmed,
}

/// Trims the description and checks it is non-blank and within the limit.
pub fn validate_description(description: &str) -> Result<&str, TaskError> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err(TaskError::BlankDescription);
    }
    if trimmed.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(TaskError::DescriptionTooLong);
    }
    Ok(trimmed)
}

/// Ids are assigned from 1 upwards.
pub fn validate_id(id: i64) -> Result<i64, TaskError> {
    if id < 1 {
        return Err(TaskError::InvalidId);
    }
    Ok(id)
}
