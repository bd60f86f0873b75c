//! Schema versioning.
//!
//! Applied versions are tracked in the `migrations` table. Running the
//! migrations again is a no-op.

use crate::{DatabaseError, DatabaseResult};
use rusqlite::Connection;
use tracing::{debug, info};

/// Current schema version.
pub const CURRENT_VERSION: i32 = 1;

/// Run all pending migrations.
pub fn run_migrations(conn: &Connection) -> DatabaseResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS migrations (
            version INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        )",
        [],
    )?;

    let current_version: i32 = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM migrations",
        [],
        |row| row.get(0),
    )?;

    debug!(current_version, target_version = CURRENT_VERSION, "Running migrations");

    if current_version > CURRENT_VERSION {
        return Err(DatabaseError::Migration(format!(
            "schema version {current_version} is newer than supported version {CURRENT_VERSION}"
        )));
    }

    if current_version < 1 {
        migrate_v1_reminders(conn)?;
    }

    Ok(())
}

fn record_migration(conn: &Connection, version: i32, name: &str) -> DatabaseResult<()> {
    conn.execute(
        "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
        rusqlite::params![version, name],
    )?;
    debug!(version, name, "Migration applied");
    Ok(())
}

/// V1: the reminders table. Keyed by id, no secondary indexes.
fn migrate_v1_reminders(conn: &Connection) -> DatabaseResult<()> {
    info!("Applying migration v1: reminders");

    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS reminders (
            id TEXT PRIMARY KEY NOT NULL,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            location TEXT NOT NULL,
            latitude REAL NOT NULL,
            longitude REAL NOT NULL
        );
        ",
    )?;

    record_migration(conn, 1, "reminders")?;
    Ok(())
}
