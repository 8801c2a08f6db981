//! # Tache - personal task tracker
//!
//! Tasks with a title, description, three-state lifecycle and optional due
//! date, free-text comments, time-horizon views and aggregate counts, kept in
//! a local SQLite file.
//!
//! ## Layers
//!
//! - **`db`**: storage gateway, schema migrations and the repository
//! - **`controllers`**: validation, lifecycle rules, overdue and statistics
//! - **`commands`**: the command-line front end
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tache::controllers::{CommentController, TaskController};
//! use tache::db::{db::Db, repository::Repository};
//!
//! let mut db = Db::open("tasks.db")?;
//! db.init_schema()?;
//! {
//!     let repository = Repository::new(&db);
//!     let tasks = TaskController::new(repository);
//!     let comments = CommentController::new(repository);
//!
//!     let task = tasks.create_task("Review code", "Check PR #123", None)?;
//!     comments.add_comment(task.id.unwrap(), "Waiting for CI")?;
//! }
//! db.close()?;
//! # Ok::<(), tache::libs::error::Error>(())
//! ```

pub mod commands;
pub mod controllers;
pub mod db;
pub mod libs;
