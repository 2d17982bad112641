#[derive(Debug, Clone)]
pub enum Message {
    // === APPLICATION ===
    AppTitle,
    Goodbye,

    // === MENU ===
    PromptMenu,
    MenuAddTask,
    MenuViewTasks,
    MenuEditTask,
    MenuDeleteTask,
    MenuCompleteTask,
    MenuExit,
    MenuDeleteOne,
    MenuClearAll,

    // === SECTION HEADERS ===
    AddTaskHeader,
    ViewTasksHeader,
    EditTaskHeader,
    DeleteTaskHeader,
    CompleteTaskHeader,

    // === TASK MESSAGES ===
    TaskAdded(i64), // id
    TaskUpdated,
    TaskRemoved,
    TasksCleared(usize), // rows removed
    TaskMarkedCompleted,
    TaskNotFoundWithId(i64),
    NoTasksAvailable,
    NoTasksToEdit,
    NoTasksToDelete,
    AllTasksCompleted,

    // === VALIDATION MESSAGES ===
    TaskDescriptionEmpty,
    TaskDescriptionTooLong(usize), // limit
    InvalidTaskId,
    InvalidDueDate(String), // raw input
    ClearNotConfirmed,

    // === PROMPTS ===
    PromptTaskDescription,
    PromptDueDate,
    PromptNewTaskDescription,
    PromptNewDueDate,
    PromptTaskIdToEdit,
    PromptTaskIdToRemove,
    PromptTaskIdToComplete,
    PromptFilterTasks,
    PromptDeleteMode,
    ConfirmClearAllTasks(usize), // current row count

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigModuleDatabase,
    PromptDatabaseName,
    PromptDatabasePath,

    // === DATABASE MESSAGES ===
    DatabaseError(String),
    DatabaseOpened(String), // path
    RowsAffected(&'static str, usize),

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),        // count
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),       // version
    MigrationFailed(u32, String),  // version, error
    AllMigrationsCompleted,
    DatabaseVersion(u32),
    DatabaseUpToDate,
    DatabaseNeedsUpdate,
    MigrationHistory,
}
