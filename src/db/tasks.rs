use super::repository::{task_from_row, Repository};
use crate::libs::dates::to_iso;
use crate::libs::error::Result;
use crate::libs::task::{Task, TaskState};
use rusqlite::{params, OptionalExtension};

const INSERT_TASK: &str = "INSERT INTO tasks (titre, description, etat, date_echeance, date_fin, date_creation)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_TASKS: &str = "SELECT id, titre, description, etat, date_echeance, date_fin, date_creation FROM tasks";
const ORDER_RECENT_FIRST: &str = "ORDER BY date_creation DESC, id DESC";
const UPDATE_TASK: &str = "UPDATE tasks
    SET titre = ?2, description = ?3, etat = ?4, date_echeance = ?5, date_fin = ?6
    WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";

impl Repository<'_> {
    /// Inserts `task` and returns the id assigned by the store.
    pub fn create_task(&self, task: &Task) -> Result<i64> {
        let conn = self.conn()?;
        conn.execute(
            INSERT_TASK,
            params![
                task.title,
                task.description,
                task.state,
                task.due_date.as_ref().map(to_iso),
                task.completed_at.as_ref().map(to_iso),
                to_iso(&task.created_at),
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// All tasks, most recently created first.
    pub fn get_all_tasks(&self) -> Result<Vec<Task>> {
        let mut stmt = self.conn()?.prepare(&format!("{} {}", SELECT_TASKS, ORDER_RECENT_FIRST))?;
        let task_iter = stmt.query_map([], task_from_row)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    pub fn get_task_by_id(&self, id: i64) -> Result<Option<Task>> {
        self.conn()?
            .query_row(&format!("{} WHERE id = ?1", SELECT_TASKS), params![id], task_from_row)
            .optional()
            .map_err(Into::into)
    }

    /// Overwrites every mutable column of the row identified by `task.id`.
    ///
    /// Returns the number of rows affected: 0 when the id is unset or unknown.
    pub fn update_task(&self, task: &Task) -> Result<usize> {
        let Some(id) = task.id else {
            return Ok(0);
        };
        let affected = self.conn()?.execute(
            UPDATE_TASK,
            params![
                id,
                task.title,
                task.description,
                task.state,
                task.due_date.as_ref().map(to_iso),
                task.completed_at.as_ref().map(to_iso),
            ],
        )?;
        Ok(affected)
    }

    /// Deletes the task; its comments go with it through the foreign key cascade.
    pub fn delete_task(&self, id: i64) -> Result<bool> {
        let affected = self.conn()?.execute(DELETE_TASK, params![id])?;
        Ok(affected > 0)
    }

    /// Tasks in `state`, most recently created first.
    pub fn get_tasks_by_status(&self, state: TaskState) -> Result<Vec<Task>> {
        let mut stmt = self
            .conn()?
            .prepare(&format!("{} WHERE etat = ?1 {}", SELECT_TASKS, ORDER_RECENT_FIRST))?;
        let task_iter = stmt.query_map(params![state], task_from_row)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        Ok(tasks)
    }
}
