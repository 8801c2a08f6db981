use crate::controllers::{CommentController, TaskController};
use crate::libs::dates;
use crate::libs::error::Error;
use crate::libs::formatter::format_for_input;
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskState, TaskView};
use crate::libs::view::View;
use crate::{msg_info, msg_print, msg_success};
use anyhow::Result;
use chrono::NaiveDateTime;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: TaskCommand,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    /// Create a new task in the "To Do" state
    Add {
        /// Task title
        title: String,
        /// Task description
        #[arg(short, long)]
        description: String,
        /// Due date: YYYY-MM-DD, "YYYY-MM-DD HH:MM" or YYYY-MM-DDTHH:MM:SS
        #[arg(long, value_parser = dates::parse_input)]
        due: Option<NaiveDateTime>,
    },
    /// List tasks, most recently created first
    List {
        /// Time horizon: today, week, month, urgent or all
        #[arg(short, long)]
        view: Option<TaskView>,
        /// Only tasks in this state (todo, in-progress, done)
        #[arg(short, long, conflicts_with_all = ["view", "overdue"])]
        state: Option<TaskState>,
        /// Only overdue tasks
        #[arg(long, conflicts_with = "view")]
        overdue: bool,
        /// Print the tasks as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a task with its comments
    Show {
        /// Task ID
        id: i64,
    },
    /// Edit a task; prompts for every field when no option is given
    Edit {
        /// Task ID
        id: i64,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(short, long)]
        state: Option<TaskState>,
        #[arg(long, value_parser = dates::parse_input, conflicts_with = "clear_due")]
        due: Option<NaiveDateTime>,
        /// Remove the due date
        #[arg(long)]
        clear_due: bool,
    },
    /// Change the state of a task
    State {
        /// Task ID
        id: i64,
        /// New state (todo, in-progress, done)
        state: TaskState,
    },
    /// Mark a task as done
    Done {
        /// Task ID
        id: i64,
    },
    /// Delete a task and all of its comments
    Delete {
        /// Task ID
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Field values for `task edit`, each `None` keeping the stored value.
struct TaskChanges {
    title: Option<String>,
    description: Option<String>,
    state: Option<TaskState>,
    due: Option<NaiveDateTime>,
    clear_due: bool,
}

impl TaskChanges {
    fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.state.is_none() && self.due.is_none() && !self.clear_due
    }
}

pub fn cmd(args: TaskArgs, tasks: &TaskController, comments: &CommentController) -> Result<()> {
    match args.command {
        TaskCommand::Add { title, description, due } => {
            let task = tasks.create_task(&title, &description, due)?;
            msg_success!(Message::TaskCreated(task.id.unwrap_or_default()));
            Ok(())
        }
        TaskCommand::List {
            view,
            state,
            overdue,
            json,
        } => handle_list(tasks, view, state, overdue, json),
        TaskCommand::Show { id } => handle_show(tasks, comments, id),
        TaskCommand::Edit {
            id,
            title,
            description,
            state,
            due,
            clear_due,
        } => {
            let changes = TaskChanges {
                title,
                description,
                state,
                due,
                clear_due,
            };
            handle_edit(tasks, id, changes)
        }
        TaskCommand::State { id, state } => {
            let task = tasks.change_task_state(id, state)?;
            msg_success!(Message::TaskStateChanged(id, task.state.to_string()));
            Ok(())
        }
        TaskCommand::Done { id } => {
            tasks.complete_task(id)?;
            msg_success!(Message::TaskCompleted(id));
            Ok(())
        }
        TaskCommand::Delete { id, yes } => handle_delete(tasks, comments, id, yes),
    }
}

fn handle_list(tasks: &TaskController, view: Option<TaskView>, state: Option<TaskState>, overdue: bool, json: bool) -> Result<()> {
    let (label, list) = match (state, overdue) {
        (Some(state), _) => (state.to_string(), tasks.get_tasks_by_state(state)?),
        (None, true) => ("overdue".to_string(), tasks.get_overdue_tasks()?),
        (None, false) => {
            let view = view.unwrap_or_default();
            (view.to_string(), tasks.get_tasks_for_view(view)?)
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&list)?);
        return Ok(());
    }

    if list.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    msg_print!(Message::TasksHeader(label), true);
    View::tasks(&list, dates::now());
    Ok(())
}

fn handle_show(tasks: &TaskController, comments: &CommentController, id: i64) -> Result<()> {
    let task = find_task(tasks, id)?;

    msg_print!(Message::TaskDetailsHeader(id), true);
    View::task(&task, dates::now());

    let list = comments.get_comments_for_task(id)?;
    if list.is_empty() {
        msg_info!(Message::NoCommentsForTask(id), true);
    } else {
        msg_print!(Message::CommentsHeader(id, list.len()), true);
        View::comments(&list);
    }
    Ok(())
}

fn handle_edit(tasks: &TaskController, id: i64, changes: TaskChanges) -> Result<()> {
    let current = find_task(tasks, id)?;

    let changes = if changes.is_empty() { prompt_changes(&current)? } else { changes };

    let title = changes.title.unwrap_or_else(|| current.title.clone());
    let description = changes.description.unwrap_or_else(|| current.description.clone());
    let state = changes.state.unwrap_or(current.state);
    let due = if changes.clear_due { None } else { changes.due.or(current.due_date) };

    if title == current.title && description == current.description && state == current.state && due == current.due_date {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    tasks.update_task(id, &title, &description, state, due)?;
    msg_success!(Message::TaskUpdated(id));
    Ok(())
}

/// Asks for every field, offering the stored values as defaults.
fn prompt_changes(current: &Task) -> Result<TaskChanges> {
    let title: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskTitle.to_string())
        .default(current.title.clone())
        .interact_text()?;

    let description: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDescription.to_string())
        .default(current.description.clone())
        .interact_text()?;

    let labels: Vec<&str> = TaskState::ALL.iter().map(|state| state.label()).collect();
    let selected = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskState.to_string())
        .items(&labels)
        .default(TaskState::ALL.iter().position(|state| *state == current.state).unwrap_or(0))
        .interact()?;

    let due_input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDueDate.to_string())
        .default(current.due_date.as_ref().map(format_for_input).unwrap_or_default())
        .allow_empty(true)
        .validate_with(|input: &String| -> Result<(), String> {
            dates::parse_optional_input(input).map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()?;
    let due = dates::parse_optional_input(&due_input)?;

    Ok(TaskChanges {
        title: Some(title),
        description: Some(description),
        state: Some(TaskState::ALL[selected]),
        clear_due: due.is_none(),
        due,
    })
}

fn handle_delete(tasks: &TaskController, comments: &CommentController, id: i64, yes: bool) -> Result<()> {
    let task = find_task(tasks, id)?;

    if !yes {
        let comment_count = comments.count_comments_for_task(id)?;
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(task.title.clone(), comment_count).to_string())
            .default(false)
            .interact()?;

        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    tasks.delete_task(id)?;
    msg_success!(Message::TaskDeleted(id));
    Ok(())
}

fn find_task(tasks: &TaskController, id: i64) -> Result<Task> {
    tasks
        .get_task_by_id(id)?
        .ok_or_else(|| Error::NotFound(Message::TaskNotFound(id)).into())
}
