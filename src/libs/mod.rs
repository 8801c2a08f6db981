//! Core library modules for the tache application.
//!
//! ## Contents
//!
//! - **Domain**: tasks, lifecycle states, views and statistics (`task`), comments (`comment`)
//! - **Infrastructure**: configuration, data directory, errors, date helpers
//! - **Presentation helpers**: messages, formatting, terminal tables
//!
//! ```rust
//! use tache::libs::dates;
//! use tache::libs::task::{Task, TaskState};
//!
//! let mut task = Task::new("Write report", "Quarterly numbers", None, dates::now());
//! task.apply_state(TaskState::Done, dates::now());
//! assert!(task.completed_at.is_some());
//! ```

pub mod comment;
pub mod config;
pub mod data_storage;
pub mod dates;
pub mod error;
pub mod formatter;
pub mod messages;
pub mod task;
pub mod view;
