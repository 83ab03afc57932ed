//! SQLite access.
//!
//! Every operation opens its own short-lived connection, the same way the
//! rest of the stack treats the database as a plain file. SQLite's own
//! locking serialises writes to the same row; no in-process locking is
//! layered on top.

pub mod init;

use std::path::PathBuf;

use rusqlite::Connection;

/// Handle to the application database.
#[derive(Debug, Clone)]
pub struct Db {
    path: PathBuf,
}

impl Db {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Db { path: path.into() }
    }

    /// Open a connection for a single operation.
    pub fn open(&self) -> Result<Connection, rusqlite::Error> {
        Connection::open(&self.path)
    }
}
