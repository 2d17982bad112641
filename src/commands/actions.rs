//! The five task actions, independent of how their input was collected.
//!
//! The interactive menu and the subcommands both gather input their own way
//! and then call into this module, so validation and the single database
//! call per action happen in one place. Each function returns an
//! [`Outcome`] for [`render`] to display.
//!
//! An id that matches no row is not an error here: the statement runs, nothing
//! changes, and the outcome is [`Outcome::NotFound`].

use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::{validate_description, validate_id, Task, TaskError, TaskFilter};
use crate::libs::view::View;
use crate::{msg_info, msg_success};
use anyhow::Result;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Added(i64),
    Listed(Vec<Task>),
    Updated,
    Removed,
    Cleared(usize),
    Completed,
    NotFound(i64),
}

pub fn add(tasks: &mut Tasks, description: &str, due_date: NaiveDate) -> Result<Outcome> {
    let description = validate_description(description)?;
    let id = tasks.insert(&Task::new(description, due_date))?;

    Ok(Outcome::Added(id))
}

pub fn view(tasks: &mut Tasks, filter: TaskFilter) -> Result<Outcome> {
    Ok(Outcome::Listed(tasks.fetch(filter)?))
}

pub fn edit(tasks: &mut Tasks, id: i64, description: &str, due_date: NaiveDate) -> Result<Outcome> {
    let id = validate_id(id)?;
    let description = validate_description(description)?;

    match tasks.update(id, description, due_date)? {
        0 => Ok(Outcome::NotFound(id)),
        _ => Ok(Outcome::Updated),
    }
}

pub fn delete(tasks: &mut Tasks, id: i64) -> Result<Outcome> {
    let id = validate_id(id)?;

    match tasks.delete(id)? {
        0 => Ok(Outcome::NotFound(id)),
        _ => Ok(Outcome::Removed),
    }
}

/// Empties the table, but only once the user has confirmed.
pub fn clear(tasks: &mut Tasks, confirmed: bool) -> Result<Outcome> {
    if !confirmed {
        return Err(TaskError::NotConfirmed.into());
    }

    Ok(Outcome::Cleared(tasks.delete_all()?))
}

pub fn complete(tasks: &mut Tasks, id: i64) -> Result<Outcome> {
    let id = validate_id(id)?;

    match tasks.complete(id)? {
        0 => Ok(Outcome::NotFound(id)),
        _ => Ok(Outcome::Completed),
    }
}

pub fn render(outcome: &Outcome) -> Result<()> {
    match outcome {
        Outcome::Added(id) => msg_success!(Message::TaskAdded(*id)),
        Outcome::Listed(list) if list.is_empty() => msg_info!(Message::NoTasksAvailable),
        Outcome::Listed(list) => View::tasks(list)?,
        Outcome::Updated => msg_success!(Message::TaskUpdated),
        Outcome::Removed => msg_success!(Message::TaskRemoved),
        Outcome::Cleared(count) => msg_success!(Message::TasksCleared(*count)),
        Outcome::Completed => msg_success!(Message::TaskMarkedCompleted),
        Outcome::NotFound(id) => msg_info!(Message::TaskNotFoundWithId(*id)),
    }

    Ok(())
}
