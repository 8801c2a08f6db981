//! Task entity, lifecycle states, time-horizon views and aggregate counts.
//!
//! A task moves freely between its three states; the only rules are the
//! completion timestamp side effects applied by [`Task::apply_state`].

use super::config::ViewsConfig;
use super::error::{Error, Result};
use super::messages::Message;
use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of a task. Stored as its label in the `etat` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskState {
    #[serde(rename = "To Do")]
    ToDo,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Done")]
    Done,
}

impl TaskState {
    pub const ALL: [TaskState; 3] = [TaskState::ToDo, TaskState::InProgress, TaskState::Done];

    pub fn label(&self) -> &'static str {
        match self {
            TaskState::ToDo => "To Do",
            TaskState::InProgress => "In Progress",
            TaskState::Done => "Done",
        }
    }

    /// Exact label match, as written by [`TaskState::label`].
    pub fn from_label(label: &str) -> Option<Self> {
        TaskState::ALL.into_iter().find(|state| state.label() == label)
    }
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// User input parsing: labels in any case plus short aliases (`todo`, `in-progress`, `done`, ...).
impl FromStr for TaskState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "to do" | "todo" | "to-do" => Ok(TaskState::ToDo),
            "in progress" | "in-progress" | "inprogress" | "doing" => Ok(TaskState::InProgress),
            "done" => Ok(TaskState::Done),
            _ => Err(Error::Validation(Message::InvalidTaskState(s.to_string()))),
        }
    }
}

impl ToSql for TaskState {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.label()))
    }
}

impl FromSql for TaskState {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let label = value.as_str()?;
        TaskState::from_label(label).ok_or_else(|| FromSqlError::Other(format!("unknown task state '{}'", label).into()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Assigned by the store; `None` until persisted.
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub state: TaskState,
    pub created_at: NaiveDateTime,
    pub due_date: Option<NaiveDateTime>,
    /// Set while the task is `Done`, cleared as soon as it leaves that state.
    pub completed_at: Option<NaiveDateTime>,
}

impl Task {
    pub fn new(title: &str, description: &str, due_date: Option<NaiveDateTime>, now: NaiveDateTime) -> Self {
        Task {
            id: None,
            title: title.to_string(),
            description: description.to_string(),
            state: TaskState::ToDo,
            created_at: now,
            due_date,
            completed_at: None,
        }
    }

    /// Moves the task to `new_state`.
    ///
    /// Entering `Done` stamps `completed_at` with `now` unless it is already set;
    /// any other state clears it.
    pub fn apply_state(&mut self, new_state: TaskState, now: NaiveDateTime) {
        self.state = new_state;
        match new_state {
            TaskState::Done => {
                if self.completed_at.is_none() {
                    self.completed_at = Some(now);
                }
            }
            TaskState::ToDo | TaskState::InProgress => self.completed_at = None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.state == TaskState::Done
    }

    /// Due strictly before `now` and not done. Tasks without a due date are never overdue.
    pub fn is_overdue_at(&self, now: NaiveDateTime) -> bool {
        !self.is_completed() && self.due_date.is_some_and(|due| due < now)
    }

    pub fn is_overdue(&self) -> bool {
        self.is_overdue_at(super::dates::now())
    }
}

/// Time-horizon filters over the task list.
///
/// Every view except `All` only considers tasks that have a due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskView {
    /// Due today.
    Today,
    /// Due between today and `week_days` ahead, inclusive.
    Week,
    /// Due in the current calendar month.
    Month,
    /// Not done and due within `urgent_days`, including anything overdue.
    Urgent,
    #[default]
    All,
}

impl TaskView {
    pub const ALL_VIEWS: [TaskView; 5] = [TaskView::Today, TaskView::Week, TaskView::Month, TaskView::Urgent, TaskView::All];

    pub fn name(&self) -> &'static str {
        match self {
            TaskView::Today => "today",
            TaskView::Week => "week",
            TaskView::Month => "month",
            TaskView::Urgent => "urgent",
            TaskView::All => "all",
        }
    }

    pub fn matches(&self, task: &Task, now: NaiveDateTime, views: &ViewsConfig) -> bool {
        if *self == TaskView::All {
            return true;
        }
        let Some(due) = task.due_date else {
            return false;
        };

        let today = now.date();
        let due_day = due.date();
        match self {
            TaskView::Today => due_day == today,
            TaskView::Week => today <= due_day && within_days(due_day, today, views.week_days),
            TaskView::Month => due_day.year() == today.year() && due_day.month() == today.month(),
            TaskView::Urgent => !task.is_completed() && within_days(due_day, today, views.urgent_days),
            TaskView::All => true,
        }
    }
}

/// `day` falls no later than `days` after `today`. A window reaching past the
/// last representable date has no upper bound.
fn within_days(day: NaiveDate, today: NaiveDate, days: u32) -> bool {
    today
        .checked_add_days(Days::new(u64::from(days)))
        .map_or(true, |limit| day <= limit)
}

impl fmt::Display for TaskView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TaskView {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase();
        TaskView::ALL_VIEWS
            .into_iter()
            .find(|view| view.name() == normalized)
            .ok_or_else(|| Error::Validation(Message::InvalidTaskView(s.to_string())))
    }
}

/// Aggregate counts over one snapshot of the task list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStats {
    pub total: usize,
    pub to_do: usize,
    pub in_progress: usize,
    pub done: usize,
    pub overdue: usize,
}

impl TaskStats {
    pub fn from_tasks(tasks: &[Task], now: NaiveDateTime) -> Self {
        tasks.iter().fold(TaskStats::default(), |mut stats, task| {
            stats.total += 1;
            match task.state {
                TaskState::ToDo => stats.to_do += 1,
                TaskState::InProgress => stats.in_progress += 1,
                TaskState::Done => stats.done += 1,
            }
            if task.is_overdue_at(now) {
                stats.overdue += 1;
            }
            stats
        })
    }
}
