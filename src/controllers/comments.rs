use crate::db::repository::Repository;
use crate::libs::comment::Comment;
use crate::libs::dates;
use crate::libs::error::{Error, Result};
use crate::libs::messages::Message;
use crate::msg_debug;

pub struct CommentController<'a> {
    repository: Repository<'a>,
}

impl<'a> CommentController<'a> {
    pub fn new(repository: Repository<'a>) -> Self {
        CommentController { repository }
    }

    /// Attaches a comment to an existing task.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] for blank text (checked first), [`Error::NotFound`]
    /// when `task_id` is unknown. Nothing is written in either case.
    pub fn add_comment(&self, task_id: i64, text: &str) -> Result<Comment> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::Validation(Message::CommentTextEmpty));
        }

        if self.repository.get_task_by_id(task_id)?.is_none() {
            return Err(Error::NotFound(Message::TaskNotFound(task_id)));
        }

        let mut comment = Comment::new(task_id, text, dates::now());
        let id = self.repository.create_comment(&comment)?;
        comment.id = Some(id);

        msg_debug!(Message::CommentAdded(id, task_id));
        Ok(comment)
    }

    /// Comments of a task, most recent first. An unknown task simply has none.
    pub fn get_comments_for_task(&self, task_id: i64) -> Result<Vec<Comment>> {
        self.repository.get_comments_by_task(task_id)
    }

    /// Deletes a comment; an unknown id is not an error.
    ///
    /// Returns whether a row was removed.
    pub fn delete_comment(&self, id: i64) -> Result<bool> {
        let deleted = self.repository.delete_comment(id)?;
        if deleted {
            msg_debug!(Message::CommentDeleted(id));
        } else {
            msg_debug!(Message::CommentNotFound(id));
        }
        Ok(deleted)
    }

    pub fn count_comments_for_task(&self, task_id: i64) -> Result<usize> {
        Ok(self.get_comments_for_task(task_id)?.len())
    }
}
