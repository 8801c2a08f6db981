use super::db::Db;
use crate::libs::comment::Comment;
use crate::libs::error::Result;
use crate::libs::task::Task;
use rusqlite::{Connection, Row};

/// Data-access façade over the gateway's connection.
///
/// Holds no state beyond the borrowed [`Db`]; each operation issues exactly one
/// parameterized statement. Statements for each table live next to their
/// operations in `tasks.rs` and `comments.rs`.
#[derive(Clone, Copy)]
pub struct Repository<'a> {
    db: &'a Db,
}

impl<'a> Repository<'a> {
    pub fn new(db: &'a Db) -> Self {
        Repository { db }
    }

    pub(super) fn conn(&self) -> Result<&'a Connection> {
        self.db.connection()
    }
}

/// Maps a row selected with the column order `id, titre, description, etat,
/// date_echeance, date_fin, date_creation`.
pub(super) fn task_from_row(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        state: row.get(3)?,
        due_date: row.get(4)?,
        completed_at: row.get(5)?,
        created_at: row.get(6)?,
    })
}

/// Maps a row selected with the column order `id, task_id, texte, date_creation`.
pub(super) fn comment_from_row(row: &Row<'_>) -> rusqlite::Result<Comment> {
    Ok(Comment {
        id: row.get(0)?,
        task_id: row.get(1)?,
        text: row.get(2)?,
        created_at: row.get(3)?,
    })
}
