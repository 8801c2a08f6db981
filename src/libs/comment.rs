use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A timestamped note attached to exactly one task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Option<i64>,
    pub task_id: i64,
    pub text: String,
    pub created_at: NaiveDateTime,
}

impl Comment {
    pub fn new(task_id: i64, text: &str, now: NaiveDateTime) -> Self {
        Comment {
            id: None,
            task_id,
            text: text.to_string(),
            created_at: now,
        }
    }
}
