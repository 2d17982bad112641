use super::task::Task;
use anyhow::Result;
use prettytable::{format, row, Table};

pub struct View {}

impl View {
    /// Renders tasks as a table on stdout.
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        Self::tasks_table(tasks).printstd();

        Ok(())
    }

    pub fn tasks_table(tasks: &[Task]) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        table.set_titles(row!["ID", "DESCRIPTION", "DUE DATE", "STATUS"]);
        for task in tasks {
            table.add_row(row![
                task.id.unwrap_or(0),
                task.description,
                task.due_date.format("%Y-%m-%d"),
                task.status
            ]);
        }

        table
    }

    /// Pretty-printed JSON array, for `list --json`.
    pub fn tasks_json(tasks: &[Task]) -> Result<String> {
        Ok(serde_json::to_string_pretty(tasks)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::task::TaskStatus;
    use chrono::NaiveDate;

    fn sample() -> Vec<Task> {
        vec![Task {
            id: Some(3),
            description: "Buy milk".to_string(),
            due_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            status: TaskStatus::Pending,
        }]
    }

    #[test]
    fn test_tasks_table_rows() {
        let table = View::tasks_table(&sample());
        assert_eq!(table.len(), 1);
        let rendered = table.to_string();
        assert!(rendered.contains("Buy milk"));
        assert!(rendered.contains("2025-03-01"));
        assert!(rendered.contains("Pending"));
    }

    #[test]
    fn test_tasks_json() {
        let json = View::tasks_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["id"], 3);
        assert_eq!(value[0]["due_date"], "2025-03-01");
        assert_eq!(value[0]["status"], "Pending");
    }
}
