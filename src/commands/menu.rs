//! Interactive menu: pick an action, fill its form, see the result, repeat.
//!
//! Every action opens its own [`Tasks`] handle, so the connection is closed
//! when the action returns, whether it succeeded or not. Failures are
//! reported and the loop keeps going.

use super::actions;
use super::forms;
use super::report;
use crate::db::tasks::Tasks;
use crate::libs::config::DatabaseConfig;
use crate::libs::messages::Message;
use crate::libs::task::TaskFilter;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Select};

const MENU: [Message; 6] = [
    Message::MenuAddTask,
    Message::MenuViewTasks,
    Message::MenuEditTask,
    Message::MenuDeleteTask,
    Message::MenuCompleteTask,
    Message::MenuExit,
];

pub fn cmd(config: &DatabaseConfig) -> Result<()> {
    msg_print!(Message::AppTitle, true);

    loop {
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptMenu.to_string())
            .items(&MENU)
            .default(0)
            .interact_opt()?;

        let result = match selection {
            Some(0) => add_task(config),
            Some(1) => view_tasks(config),
            Some(2) => edit_task(config),
            Some(3) => delete_task(config),
            Some(4) => complete_task(config),
            _ => {
                msg_print!(Message::Goodbye);
                return Ok(());
            }
        };

        report(result);
    }
}

fn add_task(config: &DatabaseConfig) -> Result<()> {
    msg_print!(Message::AddTaskHeader, true);
    let description = forms::description(Message::PromptTaskDescription, None)?;
    let due_date = forms::due_date(Message::PromptDueDate, forms::today())?;

    let mut tasks = Tasks::new(config)?;
    actions::render(&actions::add(&mut tasks, &description, due_date)?)
}

fn view_tasks(config: &DatabaseConfig) -> Result<()> {
    msg_print!(Message::ViewTasksHeader, true);
    let filter = forms::filter()?;

    let mut tasks = Tasks::new(config)?;
    actions::render(&actions::view(&mut tasks, filter)?)
}

fn edit_task(config: &DatabaseConfig) -> Result<()> {
    msg_print!(Message::EditTaskHeader, true);
    let mut tasks = Tasks::new(config)?;
    let list = tasks.fetch(TaskFilter::All)?;
    if list.is_empty() {
        msg_info!(Message::NoTasksToEdit);
        return Ok(());
    }
    View::tasks(&list)?;

    let id = forms::task_id(Message::PromptTaskIdToEdit)?;
    // Prefill the form when the id is known; unknown ids still go through
    let current = list.iter().find(|task| task.id == Some(id));
    let description = forms::description(Message::PromptNewTaskDescription, current.map(|task| task.description.as_str()))?;
    let due_date = forms::due_date(Message::PromptNewDueDate, current.map(|task| task.due_date).unwrap_or_else(forms::today))?;

    actions::render(&actions::edit(&mut tasks, id, &description, due_date)?)
}

fn delete_task(config: &DatabaseConfig) -> Result<()> {
    msg_print!(Message::DeleteTaskHeader, true);
    let mut tasks = Tasks::new(config)?;
    let list = tasks.fetch(TaskFilter::All)?;
    if list.is_empty() {
        msg_info!(Message::NoTasksToDelete);
        return Ok(());
    }
    View::tasks(&list)?;

    let mode = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptDeleteMode.to_string())
        .items(&[Message::MenuDeleteOne, Message::MenuClearAll])
        .default(0)
        .interact()?;

    let outcome = match mode {
        0 => {
            let id = forms::task_id(Message::PromptTaskIdToRemove)?;
            actions::delete(&mut tasks, id)?
        }
        _ => {
            let confirmed = forms::confirm(Message::ConfirmClearAllTasks(list.len()))?;
            actions::clear(&mut tasks, confirmed)?
        }
    };

    actions::render(&outcome)
}

fn complete_task(config: &DatabaseConfig) -> Result<()> {
    msg_print!(Message::CompleteTaskHeader, true);
    let mut tasks = Tasks::new(config)?;
    let pending = tasks.fetch(TaskFilter::Pending)?;
    if pending.is_empty() {
        msg_info!(Message::AllTasksCompleted);
        return Ok(());
    }
    View::tasks(&pending)?;

    let id = forms::task_id(Message::PromptTaskIdToComplete)?;
    actions::render(&actions::complete(&mut tasks, id)?)
}
