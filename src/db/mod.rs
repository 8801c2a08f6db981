//! Database layer for the tache application.
//!
//! Built on SQLite through `rusqlite`. One [`db::Db`] owns the connection for
//! the lifetime of the process; a [`repository::Repository`] borrows it and
//! maps rows to [`Task`](crate::libs::task::Task) and
//! [`Comment`](crate::libs::comment::Comment) values.
//!
//! ## Schema
//!
//! - `tasks(id, titre, description, etat, date_echeance, date_fin, date_creation)`
//! - `comments(id, task_id → tasks.id ON DELETE CASCADE, texte, date_creation)`
//!
//! Dates are ISO-8601 text; absent dates are NULL.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tache::db::{db::Db, repository::Repository};
//!
//! let mut db = Db::open("tasks.db")?;
//! db.init_schema()?;
//! let repository = Repository::new(&db);
//! let tasks = repository.get_all_tasks()?;
//! println!("{} task(s)", tasks.len());
//! db.close()?;
//! # Ok::<(), tache::libs::error::Error>(())
//! ```

/// Storage gateway: opens, configures and closes the single connection.
pub mod db;

/// Versioned schema creation.
pub mod migrations;

/// Stateless row-level access shared by the controllers.
pub mod repository;

/// Comment statements.
pub mod comments;

/// Task statements.
pub mod tasks;
