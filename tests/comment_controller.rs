#[cfg(test)]
mod tests {
    use tache::controllers::{CommentController, TaskController};
    use tache::db::{db::Db, repository::Repository};
    use tache::libs::error::Error;
    use tache::libs::messages::Message;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct CommentTestContext {
        _temp_dir: TempDir,
        db: Db,
        task_id: i64,
    }

    impl TestContext for CommentTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let mut db = Db::open(temp_dir.path().join("tasks.db")).unwrap();
            db.init_schema().unwrap();

            let task_id = TaskController::new(Repository::new(&db))
                .create_task("Commented task", "Collects notes", None)
                .unwrap()
                .id
                .unwrap();

            CommentTestContext {
                _temp_dir: temp_dir,
                db,
                task_id,
            }
        }
    }

    fn comment_rows(db: &Db) -> i64 {
        db.connection()
            .unwrap()
            .query_row("SELECT COUNT(*) FROM comments", [], |row| row.get(0))
            .unwrap()
    }

    #[test_context(CommentTestContext)]
    #[test]
    fn test_add_comment(ctx: &mut CommentTestContext) {
        let controller = CommentController::new(Repository::new(&ctx.db));

        let comment = controller.add_comment(ctx.task_id, "  Waiting on finance  ").unwrap();

        assert!(comment.id.is_some());
        assert_eq!(comment.task_id, ctx.task_id);
        assert_eq!(comment.text, "Waiting on finance");

        let stored = controller.get_comments_for_task(ctx.task_id).unwrap();
        assert_eq!(stored, vec![comment]);
    }

    #[test_context(CommentTestContext)]
    #[test]
    fn test_add_comment_rejects_blank_text(ctx: &mut CommentTestContext) {
        let controller = CommentController::new(Repository::new(&ctx.db));

        for text in ["", "   ", "\n\t"] {
            let err = controller.add_comment(ctx.task_id, text).unwrap_err();
            assert!(matches!(err, Error::Validation(Message::CommentTextEmpty)));
        }

        // Text is checked before the task
        let err = controller.add_comment(9999, " ").unwrap_err();
        assert!(err.is_validation());

        assert_eq!(comment_rows(&ctx.db), 0);
    }

    #[test_context(CommentTestContext)]
    #[test]
    fn test_add_comment_to_unknown_task(ctx: &mut CommentTestContext) {
        let controller = CommentController::new(Repository::new(&ctx.db));

        let err = controller.add_comment(9999, "Orphan").unwrap_err();
        assert!(matches!(err, Error::NotFound(Message::TaskNotFound(9999))));
        assert_eq!(comment_rows(&ctx.db), 0);
    }

    #[test_context(CommentTestContext)]
    #[test]
    fn test_comments_most_recent_first(ctx: &mut CommentTestContext) {
        let controller = CommentController::new(Repository::new(&ctx.db));

        let first = controller.add_comment(ctx.task_id, "first").unwrap();
        let second = controller.add_comment(ctx.task_id, "second").unwrap();
        let third = controller.add_comment(ctx.task_id, "third").unwrap();

        let texts: Vec<String> = controller
            .get_comments_for_task(ctx.task_id)
            .unwrap()
            .into_iter()
            .map(|c| c.text)
            .collect();
        assert_eq!(texts, vec!["third", "second", "first"]);
        assert!(first.created_at <= second.created_at && second.created_at <= third.created_at);
    }

    #[test_context(CommentTestContext)]
    #[test]
    fn test_comments_are_scoped_to_their_task(ctx: &mut CommentTestContext) {
        let repository = Repository::new(&ctx.db);
        let controller = CommentController::new(repository);
        let other = TaskController::new(repository)
            .create_task("Other", "Another task", None)
            .unwrap()
            .id
            .unwrap();

        controller.add_comment(ctx.task_id, "mine").unwrap();
        controller.add_comment(other, "theirs").unwrap();

        let mine = controller.get_comments_for_task(ctx.task_id).unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].text, "mine");
        assert!(controller.get_comments_for_task(9999).unwrap().is_empty());
    }

    #[test_context(CommentTestContext)]
    #[test]
    fn test_delete_comment(ctx: &mut CommentTestContext) {
        let controller = CommentController::new(Repository::new(&ctx.db));

        let keep = controller.add_comment(ctx.task_id, "keep").unwrap();
        let removed = controller.add_comment(ctx.task_id, "drop").unwrap();

        assert!(controller.delete_comment(removed.id.unwrap()).unwrap());
        assert_eq!(controller.get_comments_for_task(ctx.task_id).unwrap(), vec![keep]);

        // Unknown ids are not an error, but nothing is reported as deleted
        assert!(!controller.delete_comment(removed.id.unwrap()).unwrap());
        assert!(!controller.delete_comment(9999).unwrap());
        assert_eq!(comment_rows(&ctx.db), 1);
    }

    #[test_context(CommentTestContext)]
    #[test]
    fn test_count_comments(ctx: &mut CommentTestContext) {
        let controller = CommentController::new(Repository::new(&ctx.db));

        assert_eq!(controller.count_comments_for_task(ctx.task_id).unwrap(), 0);
        controller.add_comment(ctx.task_id, "one").unwrap();
        controller.add_comment(ctx.task_id, "two").unwrap();
        assert_eq!(controller.count_comments_for_task(ctx.task_id).unwrap(), 2);
    }
}
