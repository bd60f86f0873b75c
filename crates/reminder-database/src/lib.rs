//! SQLite local store for reminder records.
//!
//! This crate provides:
//! - The persisted [`ReminderDto`] entity
//! - Schema versioning for the single `reminders` table
//! - Standalone query functions over any `rusqlite::Connection`
//! - The [`ReminderDao`] trait and its SQLite implementation, [`Database`]
//!
//! All operations block on disk I/O. Callers that must not block (the
//! repository) move them onto a background context first.
//!
//! ```ignore
//! let db = Database::open(&paths.database_file())?;
//! db.insert_or_replace(&ReminderDto::new("Milk", "Buy milk", "Shop", 55.0, -5.0))?;
//! let all = db.fetch_all()?;
//! ```

mod dao;
mod db;
mod error;
mod migrations;
mod models;
pub mod queries;

pub use dao::ReminderDao;
pub use db::Database;
pub use error::{DatabaseError, DatabaseResult};
pub use migrations::{run_migrations, CURRENT_VERSION};
pub use models::ReminderDto;
