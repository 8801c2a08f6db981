use crate::controllers::CommentController;
use crate::libs::{messages::Message, view::View};
use crate::{msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct CommentArgs {
    #[command(subcommand)]
    command: CommentCommand,
}

#[derive(Debug, Subcommand)]
enum CommentCommand {
    /// Add a comment to a task
    Add {
        /// Task ID
        task_id: i64,
        /// Comment text
        text: String,
    },
    /// List the comments of a task, most recent first
    List {
        /// Task ID
        task_id: i64,
    },
    /// Delete a comment
    Delete {
        /// Comment ID
        id: i64,
    },
}

pub fn cmd(args: CommentArgs, comments: &CommentController) -> Result<()> {
    match args.command {
        CommentCommand::Add { task_id, text } => {
            let comment = comments.add_comment(task_id, &text)?;
            msg_success!(Message::CommentAdded(comment.id.unwrap_or_default(), task_id));
            Ok(())
        }
        CommentCommand::List { task_id } => handle_list(comments, task_id),
        CommentCommand::Delete { id } => {
            if comments.delete_comment(id)? {
                msg_success!(Message::CommentDeleted(id));
            } else {
                msg_info!(Message::CommentNotFound(id));
            }
            Ok(())
        }
    }
}

fn handle_list(comments: &CommentController, task_id: i64) -> Result<()> {
    let list = comments.get_comments_for_task(task_id)?;

    if list.is_empty() {
        msg_info!(Message::NoCommentsForTask(task_id));
        return Ok(());
    }

    msg_print!(Message::CommentsHeader(task_id, list.len()), true);
    View::comments(&list);
    Ok(())
}
