//! SQLite connection wrapper implementing the local store.

use crate::{migrations, queries, DatabaseResult, ReminderDao, ReminderDto};
use parking_lot::Mutex;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Database wrapper owning the single SQLite connection.
///
/// The connection sits behind a mutex so one `Database` can be shared across
/// worker threads; SQLite sees one statement at a time.
pub struct Database {
    conn: Mutex<Connection>,
    path: Option<PathBuf>,
}

impl Database {
    /// Open a database at the given path, running migrations if needed.
    pub fn open(path: &Path) -> DatabaseResult<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        info!(path = %path.display(), "Opening database");

        let conn = Connection::open(path)?;

        // FULL sync: a write is on disk before the call returns.
        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = FULL;
            PRAGMA busy_timeout = 5000;
        ",
        )?;

        migrations::run_migrations(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
            path: Some(path.to_path_buf()),
        })
    }

    /// Open an in-memory database for testing.
    pub fn open_in_memory() -> DatabaseResult<Self> {
        let conn = Connection::open_in_memory()?;
        migrations::run_migrations(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
            path: None,
        })
    }

    /// Database file path, `None` for in-memory databases.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Check that the connection answers a trivial query.
    pub fn health_check(&self) -> DatabaseResult<()> {
        self.conn.lock().execute_batch("SELECT 1")?;
        debug!("Database health check passed");
        Ok(())
    }
}

impl ReminderDao for Database {
    fn insert_or_replace(&self, reminder: &ReminderDto) -> DatabaseResult<()> {
        queries::upsert_reminder(&self.conn.lock(), reminder)
    }

    fn fetch_all(&self) -> DatabaseResult<Vec<ReminderDto>> {
        queries::list_reminders(&self.conn.lock())
    }

    fn fetch_by_id(&self, id: &str) -> DatabaseResult<Option<ReminderDto>> {
        queries::get_reminder(&self.conn.lock(), id)
    }

    fn delete_all(&self) -> DatabaseResult<()> {
        queries::delete_all_reminders(&self.conn.lock())?;
        Ok(())
    }
}
