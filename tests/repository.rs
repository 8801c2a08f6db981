#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use tache::db::{db::Db, repository::Repository};
    use tache::libs::comment::Comment;
    use tache::libs::error::Error;
    use tache::libs::task::{Task, TaskState};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct RepositoryTestContext {
        _temp_dir: TempDir,
        db: Db,
    }

    impl TestContext for RepositoryTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let mut db = Db::open(temp_dir.path().join("tasks.db")).unwrap();
            db.init_schema().unwrap();
            RepositoryTestContext { _temp_dir: temp_dir, db }
        }
    }

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap().and_hms_opt(hour, 0, 0).unwrap()
    }

    #[test_context(RepositoryTestContext)]
    #[test]
    fn test_task_round_trip(ctx: &mut RepositoryTestContext) {
        let repository = Repository::new(&ctx.db);

        let mut task = Task::new("Write report", "Quarterly numbers", Some(at(20, 18)), at(15, 9));
        let id = repository.create_task(&task).unwrap();
        assert!(id > 0);
        task.id = Some(id);

        let fetched = repository.get_task_by_id(id).unwrap().unwrap();
        assert_eq!(fetched, task);
        assert_eq!(fetched.state, TaskState::ToDo);
        assert_eq!(fetched.completed_at, None);
    }

    #[test_context(RepositoryTestContext)]
    #[test]
    fn test_dates_stored_as_iso_text(ctx: &mut RepositoryTestContext) {
        let repository = Repository::new(&ctx.db);

        let task = Task::new("Plan", "Sprint planning", None, at(15, 9));
        let id = repository.create_task(&task).unwrap();

        let (created, due, done): (String, Option<String>, Option<String>) = ctx
            .db
            .connection()
            .unwrap()
            .query_row(
                "SELECT date_creation, date_echeance, date_fin FROM tasks WHERE id = ?1",
                [id],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .unwrap();
        assert_eq!(created, "2025-01-15T09:00:00.000000");
        assert_eq!(due, None);
        assert_eq!(done, None);
    }

    #[test_context(RepositoryTestContext)]
    #[test]
    fn test_get_task_by_id_missing(ctx: &mut RepositoryTestContext) {
        let repository = Repository::new(&ctx.db);
        assert!(repository.get_task_by_id(9999).unwrap().is_none());
    }

    #[test_context(RepositoryTestContext)]
    #[test]
    fn test_get_all_tasks_most_recent_first(ctx: &mut RepositoryTestContext) {
        let repository = Repository::new(&ctx.db);

        // Inserted out of chronological order
        repository.create_task(&Task::new("Middle", "b", None, at(12, 9))).unwrap();
        repository.create_task(&Task::new("Oldest", "a", None, at(10, 9))).unwrap();
        repository.create_task(&Task::new("Newest", "c", None, at(14, 9))).unwrap();

        let titles: Vec<String> = repository.get_all_tasks().unwrap().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["Newest", "Middle", "Oldest"]);
    }

    #[test_context(RepositoryTestContext)]
    #[test]
    fn test_same_creation_time_newest_id_first(ctx: &mut RepositoryTestContext) {
        let repository = Repository::new(&ctx.db);

        let first = repository.create_task(&Task::new("First", "a", None, at(10, 9))).unwrap();
        let second = repository.create_task(&Task::new("Second", "b", None, at(10, 9))).unwrap();

        let ids: Vec<i64> = repository.get_all_tasks().unwrap().into_iter().filter_map(|t| t.id).collect();
        assert_eq!(ids, vec![second, first]);
    }

    #[test_context(RepositoryTestContext)]
    #[test]
    fn test_update_task(ctx: &mut RepositoryTestContext) {
        let repository = Repository::new(&ctx.db);

        let id = repository.create_task(&Task::new("Original", "Original description", None, at(10, 9))).unwrap();
        let mut task = repository.get_task_by_id(id).unwrap().unwrap();

        task.title = "Updated".to_string();
        task.description = "Updated description".to_string();
        task.state = TaskState::Done;
        task.due_date = Some(at(20, 12));
        task.completed_at = Some(at(11, 16));
        task.created_at = at(1, 0); // not part of the overwrite
        assert_eq!(repository.update_task(&task).unwrap(), 1);

        let updated = repository.get_task_by_id(id).unwrap().unwrap();
        assert_eq!(updated.title, "Updated");
        assert_eq!(updated.description, "Updated description");
        assert_eq!(updated.state, TaskState::Done);
        assert_eq!(updated.due_date, Some(at(20, 12)));
        assert_eq!(updated.completed_at, Some(at(11, 16)));
        assert_eq!(updated.created_at, at(10, 9));
    }

    #[test_context(RepositoryTestContext)]
    #[test]
    fn test_update_without_id_or_unknown_id(ctx: &mut RepositoryTestContext) {
        let repository = Repository::new(&ctx.db);

        let mut task = Task::new("Ghost", "Never stored", None, at(10, 9));
        assert_eq!(repository.update_task(&task).unwrap(), 0);

        task.id = Some(9999);
        assert_eq!(repository.update_task(&task).unwrap(), 0);
        assert!(repository.get_all_tasks().unwrap().is_empty());
    }

    #[test_context(RepositoryTestContext)]
    #[test]
    fn test_delete_task_reports_removal(ctx: &mut RepositoryTestContext) {
        let repository = Repository::new(&ctx.db);

        let id = repository.create_task(&Task::new("Temp", "To delete", None, at(10, 9))).unwrap();

        assert!(repository.delete_task(id).unwrap());
        assert!(!repository.delete_task(id).unwrap());
        assert!(repository.get_task_by_id(id).unwrap().is_none());
    }

    #[test_context(RepositoryTestContext)]
    #[test]
    fn test_delete_task_cascades_to_comments(ctx: &mut RepositoryTestContext) {
        let repository = Repository::new(&ctx.db);

        let task_id = repository.create_task(&Task::new("Parent", "Has comments", None, at(10, 9))).unwrap();
        let other_id = repository.create_task(&Task::new("Other", "Keeps comments", None, at(10, 10))).unwrap();
        repository.create_comment(&Comment::new(task_id, "first", at(10, 11))).unwrap();
        repository.create_comment(&Comment::new(task_id, "second", at(10, 12))).unwrap();
        repository.create_comment(&Comment::new(other_id, "unrelated", at(10, 13))).unwrap();

        repository.delete_task(task_id).unwrap();

        assert!(repository.get_comments_by_task(task_id).unwrap().is_empty());
        assert_eq!(repository.get_comments_by_task(other_id).unwrap().len(), 1);
    }

    #[test_context(RepositoryTestContext)]
    #[test]
    fn test_get_tasks_by_status(ctx: &mut RepositoryTestContext) {
        let repository = Repository::new(&ctx.db);

        let mut done = Task::new("Done one", "x", None, at(10, 9));
        done.apply_state(TaskState::Done, at(11, 9));
        repository.create_task(&done).unwrap();
        repository.create_task(&Task::new("Todo old", "x", None, at(11, 9))).unwrap();
        repository.create_task(&Task::new("Todo new", "x", None, at(12, 9))).unwrap();

        let todo: Vec<String> = repository
            .get_tasks_by_status(TaskState::ToDo)
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(todo, vec!["Todo new", "Todo old"]);

        let done = repository.get_tasks_by_status(TaskState::Done).unwrap();
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].completed_at, Some(at(11, 9)));

        assert!(repository.get_tasks_by_status(TaskState::InProgress).unwrap().is_empty());
    }

    #[test_context(RepositoryTestContext)]
    #[test]
    fn test_unknown_stored_state_is_an_error(ctx: &mut RepositoryTestContext) {
        ctx.db
            .connection()
            .unwrap()
            .execute(
                "INSERT INTO tasks (titre, description, etat, date_creation) VALUES ('x', 'y', 'Blocked', '2025-01-10T09:00:00.000000')",
                [],
            )
            .unwrap();

        let repository = Repository::new(&ctx.db);
        assert!(matches!(repository.get_all_tasks(), Err(Error::Database(_))));
    }

    #[test_context(RepositoryTestContext)]
    #[test]
    fn test_comment_crud(ctx: &mut RepositoryTestContext) {
        let repository = Repository::new(&ctx.db);
        let task_id = repository.create_task(&Task::new("Task", "With comments", None, at(10, 9))).unwrap();

        let older = repository.create_comment(&Comment::new(task_id, "older", at(10, 10))).unwrap();
        let newer = repository.create_comment(&Comment::new(task_id, "newer", at(10, 11))).unwrap();
        assert!(older > 0 && newer > older);

        let comments = repository.get_comments_by_task(task_id).unwrap();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].text, "newer");
        assert_eq!(comments[0].id, Some(newer));
        assert_eq!(comments[0].created_at, at(10, 11));
        assert_eq!(comments[1].text, "older");

        assert!(repository.delete_comment(older).unwrap());
        assert!(!repository.delete_comment(older).unwrap());
        assert_eq!(repository.get_comments_by_task(task_id).unwrap().len(), 1);
    }

    #[test_context(RepositoryTestContext)]
    #[test]
    fn test_comment_for_unknown_task_rejected_by_store(ctx: &mut RepositoryTestContext) {
        let repository = Repository::new(&ctx.db);

        let result = repository.create_comment(&Comment::new(9999, "orphan", at(10, 9)));
        assert!(matches!(result, Err(Error::Database(_))));
        assert!(repository.get_comments_by_task(9999).unwrap().is_empty());
    }

    #[test]
    fn test_repository_after_close() {
        let mut db = Db::open_in_memory().unwrap();
        db.init_schema().unwrap();
        db.close().unwrap();

        let repository = Repository::new(&db);
        assert!(matches!(repository.get_all_tasks(), Err(Error::ConnectionClosed)));
    }
}
