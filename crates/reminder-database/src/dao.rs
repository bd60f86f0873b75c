//! The local store contract.

use crate::{DatabaseResult, ReminderDto};

/// Durable storage operations for reminder records.
///
/// Every method blocks on disk I/O and is durable once it returns `Ok`.
/// An absent record is not an error here; turning "not found" into a
/// user-facing failure is the repository's job.
pub trait ReminderDao: Send + Sync {
    /// Insert the reminder, replacing any record with the same id.
    fn insert_or_replace(&self, reminder: &ReminderDto) -> DatabaseResult<()>;

    /// All stored reminders, in storage-defined order.
    fn fetch_all(&self) -> DatabaseResult<Vec<ReminderDto>>;

    fn fetch_by_id(&self, id: &str) -> DatabaseResult<Option<ReminderDto>>;

    /// Remove every reminder.
    fn delete_all(&self) -> DatabaseResult<()>;
}
