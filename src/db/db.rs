use super::migrations;
use crate::libs::config::Config;
use crate::libs::error::{Error, Result};
use crate::libs::messages::Message;
use crate::msg_debug;
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};

/// Owner of the single SQLite connection.
///
/// Opened explicitly at startup by whoever wires the application together and
/// lent to the [`Repository`](super::repository::Repository) by reference.
/// After [`Db::close`] every access reports [`Error::ConnectionClosed`].
pub struct Db {
    path: Option<PathBuf>,
    conn: Option<Connection>,
}

impl Db {
    /// Opens (creating if needed) the database file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Db> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        Self::configure(&conn)?;
        msg_debug!(Message::DatabaseOpened(path.display().to_string()));

        Ok(Db {
            path: Some(path.to_path_buf()),
            conn: Some(conn),
        })
    }

    /// Opens the database at the location resolved by [`Config::database_path`].
    pub fn open_default(config: &Config) -> Result<Db> {
        Self::open(config.database_path()?)
    }

    pub fn open_in_memory() -> Result<Db> {
        let conn = Connection::open_in_memory()?;
        Self::configure(&conn)?;
        msg_debug!(Message::DatabaseOpened(":memory:".to_string()));

        Ok(Db { path: None, conn: Some(conn) })
    }

    // Cascading deletes from tasks to comments rely on this pragma.
    fn configure(conn: &Connection) -> Result<()> {
        conn.pragma_update(None, "foreign_keys", "ON")?;
        Ok(())
    }

    /// The live connection, or [`Error::ConnectionClosed`] after [`Db::close`].
    pub fn connection(&self) -> Result<&Connection> {
        self.conn.as_ref().ok_or(Error::ConnectionClosed)
    }

    /// Creates the tables if absent. Safe to call any number of times.
    pub fn init_schema(&mut self) -> Result<()> {
        let conn = self.conn.as_mut().ok_or(Error::ConnectionClosed)?;
        migrations::init_with_migrations(conn)?;
        msg_debug!(Message::SchemaReady);
        Ok(())
    }

    /// Releases the connection. A no-op when already closed.
    pub fn close(&mut self) -> Result<()> {
        if let Some(conn) = self.conn.take() {
            conn.close().map_err(|(_, e)| Error::Database(e))?;
            msg_debug!(Message::DatabaseClosed);
        }
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    /// File backing this database; `None` for in-memory databases.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
