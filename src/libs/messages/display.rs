//! Display implementation for todolist application messages.
//!
//! Every piece of user-facing text lives here, so menus, prompts, results and
//! errors read consistently across the interactive menu and the subcommands.
//!
//! ```rust
//! use todolist::libs::messages::Message;
//!
//! assert_eq!(Message::TaskAdded(7).to_string(), "Task #7 added successfully");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === APPLICATION ===
            Message::AppTitle => "📌 To-Do List Manager".to_string(),
            Message::Goodbye => "Bye!".to_string(),

            // === MENU ===
            Message::PromptMenu => "Menu".to_string(),
            Message::MenuAddTask => "➕ Add Task".to_string(),
            Message::MenuViewTasks => "📋 View Tasks".to_string(),
            Message::MenuEditTask => "✏  Edit Task".to_string(),
            Message::MenuDeleteTask => "❌ Delete Task".to_string(),
            Message::MenuCompleteTask => "✔  Complete Task".to_string(),
            Message::MenuExit => "🚪 Exit".to_string(),
            Message::MenuDeleteOne => "Delete one task".to_string(),
            Message::MenuClearAll => "Clear all tasks".to_string(),

            // === SECTION HEADERS ===
            Message::AddTaskHeader => "Add a New Task".to_string(),
            Message::ViewTasksHeader => "Your To-Do List".to_string(),
            Message::EditTaskHeader => "Edit Task Details".to_string(),
            Message::DeleteTaskHeader => "Remove Task".to_string(),
            Message::CompleteTaskHeader => "Mark Task as Completed".to_string(),

            // === TASK MESSAGES ===
            Message::TaskAdded(id) => format!("Task #{} added successfully", id),
            Message::TaskUpdated => "Task updated".to_string(),
            Message::TaskRemoved => "Task removed".to_string(),
            Message::TasksCleared(count) => format!("All tasks cleared ({} removed)", count),
            Message::TaskMarkedCompleted => "Task marked as completed".to_string(),
            Message::TaskNotFoundWithId(id) => format!("No task with ID {}, nothing changed.", id),
            Message::NoTasksAvailable => "🚀 No tasks available.".to_string(),
            Message::NoTasksToEdit => "No tasks found to edit.".to_string(),
            Message::NoTasksToDelete => "No tasks to delete.".to_string(),
            Message::AllTasksCompleted => "All tasks are already completed! 🎉".to_string(),

            // === VALIDATION MESSAGES ===
            Message::TaskDescriptionEmpty => "Task description cannot be empty.".to_string(),
            Message::TaskDescriptionTooLong(limit) => format!("Task description cannot be longer than {} characters.", limit),
            Message::InvalidTaskId => "Task ID must be a positive number.".to_string(),
            Message::InvalidDueDate(input) => format!("'{}' is not a valid date, expected YYYY-MM-DD.", input),
            Message::ClearNotConfirmed => "Clearing all tasks requires confirmation.".to_string(),

            // === PROMPTS ===
            Message::PromptTaskDescription => "Task description".to_string(),
            Message::PromptDueDate => "Due date (YYYY-MM-DD)".to_string(),
            Message::PromptNewTaskDescription => "New task description".to_string(),
            Message::PromptNewDueDate => "New due date (YYYY-MM-DD)".to_string(),
            Message::PromptTaskIdToEdit => "Enter task ID to edit".to_string(),
            Message::PromptTaskIdToRemove => "Enter task ID to remove".to_string(),
            Message::PromptTaskIdToComplete => "Enter task ID to mark as completed".to_string(),
            Message::PromptFilterTasks => "Filter tasks".to_string(),
            Message::PromptDeleteMode => "What would you like to remove?".to_string(),
            Message::ConfirmClearAllTasks(count) => format!("Confirm delete all {} tasks", count),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigNotFound => "No configuration file found".to_string(),
            Message::ConfigModuleDatabase => "Database settings".to_string(),
            Message::PromptDatabaseName => "Database name".to_string(),
            Message::PromptDatabasePath => "Database file path (leave empty for default location)".to_string(),

            // === DATABASE MESSAGES ===
            Message::DatabaseError(error) => format!("Database error: {}", error),
            Message::DatabaseOpened(path) => format!("Opened database at {}", path),
            Message::RowsAffected(operation, count) => format!("{}: {} row(s) affected", operation, count),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("✓ Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("✗ Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All database migrations completed successfully".to_string(),
            Message::DatabaseVersion(version) => format!("Current database version: {}", version),
            Message::DatabaseUpToDate => "Database schema is up to date".to_string(),
            Message::DatabaseNeedsUpdate => "Database schema needs to be updated".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),
        };

        write!(f, "{}", text)
    }
}
