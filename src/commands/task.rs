//! Non-interactive task subcommands: `add`, `list`, `edit`, `delete`,
//! `clear` and `complete`.

use super::actions::{self, Outcome};
use super::forms;
use crate::db::tasks::Tasks;
use crate::libs::config::DatabaseConfig;
use crate::libs::messages::Message;
use crate::libs::task::TaskFilter;
use crate::libs::view::View;
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// What needs to be done
    #[arg(required = true)]
    description: String,
    /// Due date as YYYY-MM-DD, defaults to today
    #[arg(short, long)]
    due: Option<NaiveDate>,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Which tasks to show
    #[arg(short, long, value_enum, default_value = "all")]
    filter: TaskFilter,
    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    /// ID of the task to edit
    id: i64,
    /// New description
    description: String,
    /// New due date as YYYY-MM-DD, keeps the current one when omitted
    #[arg(short, long)]
    due: Option<NaiveDate>,
}

#[derive(Debug, Args)]
pub struct IdArgs {
    /// Task ID
    id: i64,
}

#[derive(Debug, Args)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn add(args: AddArgs, config: &DatabaseConfig) -> Result<()> {
    let mut tasks = Tasks::new(config)?;
    let due_date = args.due.unwrap_or_else(forms::today);

    actions::render(&actions::add(&mut tasks, &args.description, due_date)?)
}

pub fn list(args: ListArgs, config: &DatabaseConfig) -> Result<()> {
    let mut tasks = Tasks::new(config)?;
    let outcome = actions::view(&mut tasks, args.filter)?;

    match outcome {
        Outcome::Listed(list) if args.json => {
            println!("{}", View::tasks_json(&list)?);
            Ok(())
        }
        other => actions::render(&other),
    }
}

pub fn edit(args: EditArgs, config: &DatabaseConfig) -> Result<()> {
    let mut tasks = Tasks::new(config)?;
    let due_date = match args.due {
        Some(due) => due,
        None => current_due_date(&mut tasks, args.id)?,
    };

    actions::render(&actions::edit(&mut tasks, args.id, &args.description, due_date)?)
}

pub fn delete(args: IdArgs, config: &DatabaseConfig) -> Result<()> {
    let mut tasks = Tasks::new(config)?;

    actions::render(&actions::delete(&mut tasks, args.id)?)
}

pub fn clear(args: ClearArgs, config: &DatabaseConfig) -> Result<()> {
    let mut tasks = Tasks::new(config)?;
    let confirmed = args.yes || forms::confirm(Message::ConfirmClearAllTasks(tasks.count()?))?;

    actions::render(&actions::clear(&mut tasks, confirmed)?)
}

pub fn complete(args: IdArgs, config: &DatabaseConfig) -> Result<()> {
    let mut tasks = Tasks::new(config)?;

    actions::render(&actions::complete(&mut tasks, args.id)?)
}

fn current_due_date(tasks: &mut Tasks, id: i64) -> Result<NaiveDate> {
    Ok(tasks.get_by_id(id)?.map(|task| task.due_date).unwrap_or_else(forms::today))
}
