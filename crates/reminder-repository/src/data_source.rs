//! The repository contract consumed by view-level code.

use crate::ReminderResult;
use async_trait::async_trait;
use reminder_database::ReminderDto;

/// Main entry point for accessing reminders data.
///
/// Implementations never fail by panicking or returning a Rust error:
/// reads report failures through [`ReminderResult::Error`], writes log them.
#[async_trait]
pub trait ReminderDataSource: Send + Sync {
    /// All reminders. An empty store is a success with an empty vec.
    async fn get_reminders(&self) -> ReminderResult<Vec<ReminderDto>>;

    /// Insert or replace a reminder. Completes before returning.
    async fn save_reminder(&self, reminder: ReminderDto);

    /// A single reminder, or `Error("Reminder not found!")`.
    async fn get_reminder(&self, id: &str) -> ReminderResult<ReminderDto>;

    async fn delete_all_reminders(&self);
}
