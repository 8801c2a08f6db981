//! Task business rules: input validation, the completion timestamp side
//! effects, overdue detection and aggregate statistics.
//!
//! Every operation is a direct, blocking call into the repository. Operations
//! that modify an existing task fetch it first and decide `completed_at` from
//! the stored row within the same call; nothing guards against another writer
//! changing the row in between, which is acceptable for a single-user store.

use crate::db::repository::Repository;
use crate::libs::config::ViewsConfig;
use crate::libs::dates;
use crate::libs::error::{Error, Result};
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskState, TaskStats, TaskView};
use crate::msg_debug;
use chrono::NaiveDateTime;

pub struct TaskController<'a> {
    repository: Repository<'a>,
    views: ViewsConfig,
}

impl<'a> TaskController<'a> {
    pub fn new(repository: Repository<'a>) -> Self {
        TaskController {
            repository,
            views: ViewsConfig::default(),
        }
    }

    /// Uses `views` for the `week` and `urgent` windows instead of the defaults.
    pub fn with_views(mut self, views: ViewsConfig) -> Self {
        self.views = views;
        self
    }

    /// Creates a task in the `To Do` state.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] when the title or description is blank.
    pub fn create_task(&self, title: &str, description: &str, due_date: Option<NaiveDateTime>) -> Result<Task> {
        let (title, description) = validate_fields(title, description)?;

        let mut task = Task::new(title, description, due_date, dates::now());
        let id = self.repository.create_task(&task)?;
        task.id = Some(id);

        msg_debug!(Message::TaskCreated(id));
        Ok(task)
    }

    pub fn get_all_tasks(&self) -> Result<Vec<Task>> {
        self.repository.get_all_tasks()
    }

    pub fn get_task_by_id(&self, id: i64) -> Result<Option<Task>> {
        self.repository.get_task_by_id(id)
    }

    /// Overwrites title, description, state and due date of an existing task.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when `id` is unknown, [`Error::Validation`] when the
    /// title or description is blank.
    pub fn update_task(
        &self,
        id: i64,
        title: &str,
        description: &str,
        state: TaskState,
        due_date: Option<NaiveDateTime>,
    ) -> Result<Task> {
        let mut task = self.find_task(id)?;
        let (title, description) = validate_fields(title, description)?;

        task.title = title.to_string();
        task.description = description.to_string();
        task.due_date = due_date;
        task.apply_state(state, dates::now());

        self.repository.update_task(&task)?;
        msg_debug!(Message::TaskUpdated(id));
        Ok(task)
    }

    /// Deletes a task and, through the cascade, all of its comments.
    pub fn delete_task(&self, id: i64) -> Result<()> {
        self.find_task(id)?;
        self.repository.delete_task(id)?;

        msg_debug!(Message::TaskDeleted(id));
        Ok(())
    }

    /// Changes only the state, with the same `completed_at` rules as [`update_task`](Self::update_task).
    pub fn change_task_state(&self, id: i64, new_state: TaskState) -> Result<Task> {
        let mut task = self.find_task(id)?;
        task.apply_state(new_state, dates::now());

        self.repository.update_task(&task)?;
        msg_debug!(Message::TaskStateChanged(id, new_state.to_string()));
        Ok(task)
    }

    /// Closes a task: shorthand for moving it to `Done`.
    pub fn complete_task(&self, id: i64) -> Result<Task> {
        self.change_task_state(id, TaskState::Done)
    }

    pub fn get_tasks_by_state(&self, state: TaskState) -> Result<Vec<Task>> {
        let tasks = self.repository.get_all_tasks()?;
        Ok(tasks.into_iter().filter(|task| task.state == state).collect())
    }

    pub fn get_overdue_tasks(&self) -> Result<Vec<Task>> {
        let now = dates::now();
        let tasks = self.repository.get_all_tasks()?;
        Ok(tasks.into_iter().filter(|task| task.is_overdue_at(now)).collect())
    }

    /// Tasks visible in `view`, in repository order.
    pub fn get_tasks_for_view(&self, view: TaskView) -> Result<Vec<Task>> {
        let now = dates::now();
        let tasks = self.repository.get_all_tasks()?;
        Ok(tasks
            .into_iter()
            .filter(|task| view.matches(task, now, &self.views))
            .collect())
    }

    /// Counts per state plus overdue, all from one snapshot of the task list.
    pub fn get_stats(&self) -> Result<TaskStats> {
        let tasks = self.repository.get_all_tasks()?;
        Ok(TaskStats::from_tasks(&tasks, dates::now()))
    }

    fn find_task(&self, id: i64) -> Result<Task> {
        self.repository
            .get_task_by_id(id)?
            .ok_or(Error::NotFound(Message::TaskNotFound(id)))
    }
}

/// Trims both fields and rejects blank ones.
fn validate_fields<'s>(title: &'s str, description: &'s str) -> Result<(&'s str, &'s str)> {
    let title = title.trim();
    if title.is_empty() {
        return Err(Error::Validation(Message::TaskTitleEmpty));
    }

    let description = description.trim();
    if description.is_empty() {
        return Err(Error::Validation(Message::TaskDescriptionEmpty));
    }

    Ok((title, description))
}
