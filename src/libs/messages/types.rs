/// Every piece of user-facing text the application produces.
///
/// Variants carry the data needed to render the text; the wording itself
/// lives in the `Display` implementation in `display.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(i64),
    TaskUpdated(i64),
    TaskDeleted(i64),
    TaskCompleted(i64),
    TaskStateChanged(i64, String), // id, new state label
    TaskNotFound(i64),
    TaskTitleEmpty,
    TaskDescriptionEmpty,
    InvalidTaskState(String),
    InvalidTaskView(String),
    TasksHeader(String), // view name
    TaskDetailsHeader(i64),
    NoTasksFound,
    NoChangesDetected,
    ConfirmDeleteTask(String, usize), // title, comment count

    // === COMMENT MESSAGES ===
    CommentAdded(i64, i64), // comment id, task id
    CommentDeleted(i64),
    CommentNotFound(i64),
    CommentTextEmpty,
    CommentsHeader(i64, usize), // task id, count
    NoCommentsForTask(i64),

    // === STATS MESSAGES ===
    StatsHeader,

    // === DATE MESSAGES ===
    InvalidDateInput(String),

    // === DATABASE MESSAGES ===
    DatabaseOpened(String),
    DatabaseClosed,
    DatabaseConnectionClosed,
    SchemaReady,
    DatabaseReady(String),
    DatabaseUpToDate,
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigReadFailed(String), // parse or I/O error
    ConfigModuleDatabase,
    ConfigModuleViews,

    // === PROMPTS ===
    PromptSelectModules,
    PromptDatabasePath,
    PromptUrgentDays,
    PromptWeekDays,
    PromptTaskTitle,
    PromptTaskDescription,
    PromptTaskState,
    PromptTaskDueDate,

    // === GENERAL MESSAGES ===
    OperationCancelled,
}
