use super::comment::Comment;
use super::formatter::{format_datetime, format_optional_datetime, truncate};
use super::task::{Task, TaskStats};
use chrono::NaiveDateTime;
use prettytable::{row, Table};

const TITLE_WIDTH: usize = 40;

/// Terminal tables for tasks, comments and statistics.
pub struct View {}

impl View {
    /// Task list; overdue tasks are flagged in the last column.
    pub fn tasks(tasks: &[Task], now: NaiveDateTime) {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "STATE", "DUE", "DONE AT", "CREATED", ""]);
        for task in tasks {
            let flag = if task.is_overdue_at(now) { "⚠ overdue" } else { "" };
            table.add_row(row![
                task.id.unwrap_or(0),
                truncate(&task.title, TITLE_WIDTH),
                task.state,
                format_optional_datetime(task.due_date.as_ref()),
                format_optional_datetime(task.completed_at.as_ref()),
                format_datetime(&task.created_at),
                flag
            ]);
        }
        table.printstd();
    }

    pub fn task(task: &Task, now: NaiveDateTime) {
        let overdue = if task.is_overdue_at(now) { "yes" } else { "no" };
        let mut table = Table::new();

        table.add_row(row!["Title", task.title]);
        table.add_row(row!["Description", task.description]);
        table.add_row(row!["State", task.state]);
        table.add_row(row!["Due", format_optional_datetime(task.due_date.as_ref())]);
        table.add_row(row!["Done at", format_optional_datetime(task.completed_at.as_ref())]);
        table.add_row(row!["Created", format_datetime(&task.created_at)]);
        table.add_row(row!["Overdue", overdue]);
        table.printstd();
    }

    pub fn comments(comments: &[Comment]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "DATE", "COMMENT"]);
        for comment in comments {
            table.add_row(row![comment.id.unwrap_or(0), format_datetime(&comment.created_at), comment.text]);
        }
        table.printstd();
    }

    pub fn stats(stats: &TaskStats) {
        let mut table = Table::new();

        table.add_row(row!["Total", stats.total]);
        table.add_row(row!["To Do", stats.to_do]);
        table.add_row(row!["In Progress", stats.in_progress]);
        table.add_row(row!["Done", stats.done]);
        table.add_row(row!["Overdue", stats.overdue]);
        table.printstd();
    }
}
