//! Display implementation for tache application messages.
//!
//! All user-facing wording is kept in this one `match`, so a message's text
//! can be changed without touching the code that raises it. Messages with
//! parameters interpolate them here as well.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task #{} created successfully", id),
            Message::TaskUpdated(id) => format!("Task #{} updated successfully", id),
            Message::TaskDeleted(id) => format!("Task #{} deleted together with its comments", id),
            Message::TaskCompleted(id) => format!("Task #{} marked as done", id),
            Message::TaskStateChanged(id, state) => format!("Task #{} is now '{}'", id, state),
            Message::TaskNotFound(id) => format!("Task #{} not found", id),
            Message::TaskTitleEmpty => "The title cannot be empty".to_string(),
            Message::TaskDescriptionEmpty => "The description cannot be empty".to_string(),
            Message::InvalidTaskState(value) => {
                format!("Invalid state '{}'. Expected one of: To Do, In Progress, Done", value)
            }
            Message::InvalidTaskView(value) => {
                format!("Invalid view '{}'. Expected one of: today, week, month, urgent, all", value)
            }
            Message::TasksHeader(view) => format!("Tasks ({}):", view),
            Message::TaskDetailsHeader(id) => format!("Task #{}", id),
            Message::NoTasksFound => "No tasks found.".to_string(),
            Message::NoChangesDetected => "No changes detected.".to_string(),
            Message::ConfirmDeleteTask(title, 0) => format!("Delete task '{}'?", title),
            Message::ConfirmDeleteTask(title, comments) => {
                format!("Delete task '{}' and its {} comment(s)?", title, comments)
            }

            // === COMMENT MESSAGES ===
            Message::CommentAdded(id, task_id) => format!("Comment #{} added to task #{}", id, task_id),
            Message::CommentDeleted(id) => format!("Comment #{} deleted", id),
            Message::CommentNotFound(id) => format!("Comment #{} not found, nothing to delete", id),
            Message::CommentTextEmpty => "The comment cannot be empty".to_string(),
            Message::CommentsHeader(task_id, count) => format!("Comments for task #{} ({}):", task_id, count),
            Message::NoCommentsForTask(task_id) => format!("Task #{} has no comments.", task_id),

            // === STATS MESSAGES ===
            Message::StatsHeader => "Task statistics:".to_string(),

            // === DATE MESSAGES ===
            Message::InvalidDateInput(value) => format!(
                "Invalid date '{}'. Use YYYY-MM-DD, YYYY-MM-DD HH:MM or YYYY-MM-DDTHH:MM:SS",
                value
            ),

            // === DATABASE MESSAGES ===
            Message::DatabaseOpened(path) => format!("Database opened at {}", path),
            Message::DatabaseClosed => "Database connection closed".to_string(),
            Message::DatabaseConnectionClosed => "Database connection is closed".to_string(),
            Message::SchemaReady => "Tables created/verified".to_string(),
            Message::DatabaseReady(path) => format!("Database ready at {}", path),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed successfully".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigReadFailed(error) => {
                format!("Could not read the configuration file, starting from defaults: {}", error)
            }
            Message::ConfigModuleDatabase => "Database settings".to_string(),
            Message::ConfigModuleViews => "View settings".to_string(),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select the settings to configure".to_string(),
            Message::PromptDatabasePath => "Database file path".to_string(),
            Message::PromptUrgentDays => "Days ahead considered urgent".to_string(),
            Message::PromptWeekDays => "Days covered by the week view".to_string(),
            Message::PromptTaskTitle => "Title".to_string(),
            Message::PromptTaskDescription => "Description".to_string(),
            Message::PromptTaskState => "State".to_string(),
            Message::PromptTaskDueDate => "Due date (empty for none)".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled.".to_string(),
        };
        write!(f, "{}", text)
    }
}
