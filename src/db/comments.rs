use super::repository::{comment_from_row, Repository};
use crate::libs::comment::Comment;
use crate::libs::dates::to_iso;
use crate::libs::error::Result;
use rusqlite::params;

const INSERT_COMMENT: &str = "INSERT INTO comments (task_id, texte, date_creation) VALUES (?1, ?2, ?3)";
const SELECT_COMMENTS_BY_TASK: &str = "SELECT id, task_id, texte, date_creation FROM comments
    WHERE task_id = ?1
    ORDER BY date_creation DESC, id DESC";
const DELETE_COMMENT: &str = "DELETE FROM comments WHERE id = ?1";

impl Repository<'_> {
    /// Inserts `comment` and returns the id assigned by the store.
    ///
    /// Fails with a constraint violation when `comment.task_id` does not exist.
    pub fn create_comment(&self, comment: &Comment) -> Result<i64> {
        let conn = self.conn()?;
        conn.execute(
            INSERT_COMMENT,
            params![comment.task_id, comment.text, to_iso(&comment.created_at)],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Comments of a task, most recent first. Empty for an unknown task.
    pub fn get_comments_by_task(&self, task_id: i64) -> Result<Vec<Comment>> {
        let mut stmt = self.conn()?.prepare(SELECT_COMMENTS_BY_TASK)?;
        let comment_iter = stmt.query_map(params![task_id], comment_from_row)?;

        let mut comments = Vec::new();
        for comment in comment_iter {
            comments.push(comment?);
        }
        Ok(comments)
    }

    pub fn delete_comment(&self, id: i64) -> Result<bool> {
        let affected = self.conn()?.execute(DELETE_COMMENT, params![id])?;
        Ok(affected > 0)
    }
}
