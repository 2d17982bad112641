use super::db::Db;
use crate::libs::config::DatabaseConfig;
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskFilter, TaskStatus};
use crate::msg_debug;
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};

const INSERT_TASK: &str = "INSERT INTO tasks (description, due_date) VALUES (?1, ?2)";
const SELECT_TASKS: &str = "SELECT id, description, due_date, status FROM tasks";
const WHERE_STATUS: &str = "WHERE status = ?1";
const ORDER_BY_ID: &str = "ORDER BY id";
const SELECT_TASK_BY_ID: &str = "SELECT id, description, due_date, status FROM tasks WHERE id = ?1";
const UPDATE_TASK: &str = "UPDATE tasks SET description = ?1, due_date = ?2 WHERE id = ?3";
const UPDATE_STATUS: &str = "UPDATE tasks SET status = ?1 WHERE id = ?2";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const DELETE_ALL_TASKS: &str = "DELETE FROM tasks";
const COUNT_TASKS: &str = "SELECT COUNT(*) FROM tasks";

/// Repository over the `tasks` table.
///
/// The connection lives exactly as long as this value. Mutations run in
/// SQLite autocommit mode, so each call is its own transaction. Operations
/// addressing a row by id report how many rows they touched; an unknown id
/// is `0`, never an error.
pub struct Tasks {
    pub conn: Connection,
}

impl Tasks {
    pub fn new(config: &DatabaseConfig) -> Result<Tasks> {
        let db = Db::new(config)?;

        Ok(Tasks { conn: db.conn })
    }

    /// Inserts with the default `Pending` status and returns the new id.
    pub fn insert(&mut self, task: &Task) -> Result<i64> {
        self.conn.execute(INSERT_TASK, params![task.description, task.due_date])?;
        let id = self.conn.last_insert_rowid();
        msg_debug!(Message::RowsAffected("insert", 1));

        Ok(id)
    }

    pub fn fetch(&mut self, filter: TaskFilter) -> Result<Vec<Task>> {
        let tasks = match filter.status() {
            Some(status) => {
                let mut stmt = self.conn.prepare(&format!("{} {} {}", SELECT_TASKS, WHERE_STATUS, ORDER_BY_ID))?;
                let rows = stmt.query_map(params![status], Self::row_to_task)?;
                rows.collect::<Result<Vec<_>, _>>()?
            }
            None => {
                let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_TASKS, ORDER_BY_ID))?;
                let rows = stmt.query_map([], Self::row_to_task)?;
                rows.collect::<Result<Vec<_>, _>>()?
            }
        };

        Ok(tasks)
    }

    pub fn get_by_id(&mut self, id: i64) -> Result<Option<Task>> {
        let mut stmt = self.conn.prepare(SELECT_TASK_BY_ID)?;
        let mut task_iter = stmt.query_map(params![id], Self::row_to_task)?;

        match task_iter.next() {
            Some(Ok(task)) => Ok(Some(task)),
            Some(Err(e)) => Err(e.into()),
            None => Ok(None),
        }
    }

    /// Rewrites description and due date; id and status are left alone.
    pub fn update(&mut self, id: i64, description: &str, due_date: NaiveDate) -> Result<usize> {
        let affected = self.conn.execute(UPDATE_TASK, params![description, due_date, id])?;
        msg_debug!(Message::RowsAffected("update", affected));

        Ok(affected)
    }

    /// Marks the task completed. Completing it again touches the row but
    /// leaves the status unchanged.
    pub fn complete(&mut self, id: i64) -> Result<usize> {
        let affected = self.conn.execute(UPDATE_STATUS, params![TaskStatus::Completed, id])?;
        msg_debug!(Message::RowsAffected("complete", affected));

        Ok(affected)
    }

    pub fn delete(&mut self, id: i64) -> Result<usize> {
        let affected = self.conn.execute(DELETE_TASK, params![id])?;
        msg_debug!(Message::RowsAffected("delete", affected));

        Ok(affected)
    }

    /// Unconditionally empties the table. Confirmation is the caller's job.
    pub fn delete_all(&mut self) -> Result<usize> {
        let affected = self.conn.execute(DELETE_ALL_TASKS, [])?;
        msg_debug!(Message::RowsAffected("delete all", affected));

        Ok(affected)
    }

    pub fn count(&mut self) -> Result<usize> {
        let count: i64 = self.conn.query_row(COUNT_TASKS, [], |row| row.get(0))?;

        Ok(count as usize)
    }

    fn row_to_task(row: &Row) -> rusqlite::Result<Task> {
        Ok(Task {
            id: row.get(0)?,
            description: row.get(1)?,
            due_date: row.get(2)?,
            status: row.get(3)?,
        })
    }
}
