//! Standalone query functions that work with any Connection.
//!
//! Each function takes a `&Connection` as its first parameter and performs
//! exactly one statement.

use crate::{DatabaseResult, ReminderDto};
use rusqlite::{params, Connection, Row};
use tracing::debug;

const SELECT_COLUMNS: &str =
    "SELECT id, title, description, location, latitude, longitude FROM reminders";

fn reminder_from_row(row: &Row<'_>) -> rusqlite::Result<ReminderDto> {
    Ok(ReminderDto {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        location: row.get(3)?,
        latitude: row.get(4)?,
        longitude: row.get(5)?,
    })
}

/// Insert a reminder, replacing any existing row with the same id.
pub fn upsert_reminder(conn: &Connection, reminder: &ReminderDto) -> DatabaseResult<()> {
    conn.execute(
        "INSERT OR REPLACE INTO reminders (id, title, description, location, latitude, longitude)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            reminder.id,
            reminder.title,
            reminder.description,
            reminder.location,
            reminder.latitude,
            reminder.longitude,
        ],
    )?;
    debug!(id = %reminder.id, "Reminder upserted");
    Ok(())
}

/// List every stored reminder. Row order is not meaningful.
pub fn list_reminders(conn: &Connection) -> DatabaseResult<Vec<ReminderDto>> {
    let mut stmt = conn.prepare_cached(SELECT_COLUMNS)?;
    let reminders = stmt
        .query_map([], reminder_from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(reminders)
}

/// Get a reminder by ID.
pub fn get_reminder(conn: &Connection, id: &str) -> DatabaseResult<Option<ReminderDto>> {
    let mut stmt = conn.prepare_cached(&format!("{SELECT_COLUMNS} WHERE id = ?1"))?;

    match stmt.query_row(params![id], reminder_from_row) {
        Ok(reminder) => Ok(Some(reminder)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Delete every reminder. Returns the number of rows removed.
pub fn delete_all_reminders(conn: &Connection) -> DatabaseResult<usize> {
    let count = conn.execute("DELETE FROM reminders", [])?;
    debug!(count, "Reminders cleared");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::run_migrations;

    fn conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        conn
    }

    fn reminder(id: &str, title: &str) -> ReminderDto {
        ReminderDto::new(title, "Hello World!", "World", 55.05, -5.55).with_id(id)
    }

    #[test]
    fn test_upsert_and_get() {
        let conn = conn();
        let r = reminder("1234", "Hello");

        upsert_reminder(&conn, &r).unwrap();

        assert_eq!(get_reminder(&conn, "1234").unwrap(), Some(r));
    }

    #[test]
    fn test_get_missing_is_none() {
        let conn = conn();
        assert_eq!(get_reminder(&conn, "nope").unwrap(), None);
    }

    #[test]
    fn test_upsert_replaces_same_id() {
        let conn = conn();
        upsert_reminder(&conn, &reminder("1", "first")).unwrap();
        upsert_reminder(&conn, &reminder("1", "second")).unwrap();

        assert_eq!(list_reminders(&conn).unwrap().len(), 1);
        assert_eq!(get_reminder(&conn, "1").unwrap().unwrap().title, "second");
    }

    #[test]
    fn test_list_and_delete_all() {
        let conn = conn();
        assert!(list_reminders(&conn).unwrap().is_empty());

        upsert_reminder(&conn, &reminder("1", "a")).unwrap();
        upsert_reminder(&conn, &reminder("2", "b")).unwrap();

        let mut ids: Vec<String> = list_reminders(&conn)
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        ids.sort();
        assert_eq!(ids, vec!["1", "2"]);

        assert_eq!(delete_all_reminders(&conn).unwrap(), 2);
        assert!(list_reminders(&conn).unwrap().is_empty());
        assert_eq!(delete_all_reminders(&conn).unwrap(), 0);
    }
}
