//! Error types for the tache library.
//!
//! Controllers raise `Validation` and `NotFound` with a `Message` describing
//! the problem. The repository never raises domain errors: absence is an
//! `Option` or an empty list, and only the store itself produces `Database`.

use super::messages::Message;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input rejected by a controller (blank field, unknown state, bad date).
    #[error("{0}")]
    Validation(Message),

    /// A referenced task does not exist where existence is checked.
    #[error("{0}")]
    NotFound(Message),

    /// The store rejected or failed a statement.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// The gateway was used after `close()`.
    #[error("{}", Message::DatabaseConnectionClosed)]
    ConnectionClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl Error {
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
