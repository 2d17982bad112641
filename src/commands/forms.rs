//! Interactive form inputs built on dialoguer.

use crate::libs::messages::Message;
use crate::libs::task::TaskFilter;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(input: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| Message::InvalidDueDate(input.to_string()).to_string())
}

/// Free text; blank input is accepted here and rejected by validation, so the
/// user sees the same warning as everywhere else.
pub fn description(prompt: Message, default: Option<&str>) -> Result<String> {
    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme).with_prompt(prompt.to_string()).allow_empty(true);
    if let Some(default) = default {
        input = input.default(default.to_string());
    }

    Ok(input.interact_text()?)
}

pub fn due_date(prompt: Message, default: NaiveDate) -> Result<NaiveDate> {
    let raw = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(default.format(DATE_FORMAT).to_string())
        .validate_with(|input: &String| -> Result<(), String> { parse_date(input).map(|_| ()) })
        .interact_text()?;

    parse_date(&raw).map_err(anyhow::Error::msg)
}

pub fn task_id(prompt: Message) -> Result<i64> {
    let id_range_msg = Message::InvalidTaskId.to_string();
    let id = Input::<i64>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(1)
        .validate_with(|input: &i64| -> Result<(), &str> {
            if *input >= 1 {
                Ok(())
            } else {
                Err(&id_range_msg)
            }
        })
        .interact_text()?;

    Ok(id)
}

pub fn filter() -> Result<TaskFilter> {
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptFilterTasks.to_string())
        .items(&TaskFilter::ALL)
        .default(0)
        .interact()?;

    Ok(TaskFilter::ALL[selection])
}

/// The "confirm delete all" checkbox. Defaults to unchecked.
pub fn confirm(prompt: Message) -> Result<bool> {
    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(false)
        .interact()?;

    Ok(confirmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2025-02-28"), Ok(NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()));
        assert_eq!(parse_date(" 2025-02-28 "), Ok(NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()));
        assert!(parse_date("2025-02-30").is_err());
        assert!(parse_date("28.02.2025").is_err());
    }
}
