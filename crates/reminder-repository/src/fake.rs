//! In-memory data source for exercising view-level code without a database.

use crate::{ReminderDataSource, ReminderResult, REMINDER_NOT_FOUND};
use async_trait::async_trait;
use parking_lot::Mutex;
use reminder_database::ReminderDto;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

/// Message every read returns while the fake is switched to error mode.
pub const FAKE_ERROR_MESSAGE: &str = "Test exception";

/// [`ReminderDataSource`] holding reminders in a map.
#[derive(Default)]
pub struct FakeDataSource {
    reminders: Mutex<HashMap<String, ReminderDto>>,
    return_error: AtomicBool,
}

impl FakeDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the fake with reminders.
    pub fn with_reminders(reminders: impl IntoIterator<Item = ReminderDto>) -> Self {
        let fake = Self::default();
        fake.reminders
            .lock()
            .extend(reminders.into_iter().map(|r| (r.id.clone(), r)));
        fake
    }

    /// Make every read return [`FAKE_ERROR_MESSAGE`].
    pub fn set_return_error(&self, value: bool) {
        self.return_error.store(value, Ordering::SeqCst);
    }

    fn failing(&self) -> bool {
        self.return_error.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReminderDataSource for FakeDataSource {
    async fn get_reminders(&self) -> ReminderResult<Vec<ReminderDto>> {
        if self.failing() {
            return ReminderResult::error(FAKE_ERROR_MESSAGE);
        }
        ReminderResult::Success(self.reminders.lock().values().cloned().collect())
    }

    async fn save_reminder(&self, reminder: ReminderDto) {
        self.reminders.lock().insert(reminder.id.clone(), reminder);
    }

    async fn get_reminder(&self, id: &str) -> ReminderResult<ReminderDto> {
        if self.failing() {
            return ReminderResult::error(FAKE_ERROR_MESSAGE);
        }
        match self.reminders.lock().get(id) {
            Some(reminder) => ReminderResult::Success(reminder.clone()),
            None => ReminderResult::error(REMINDER_NOT_FOUND),
        }
    }

    async fn delete_all_reminders(&self) {
        self.reminders.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hello() -> ReminderDto {
        ReminderDto::new("Hello", "Hello World!", "World", 55.05, -5.55).with_id("1234")
    }

    #[tokio::test]
    async fn test_fake_behaves_like_repository() {
        let fake = FakeDataSource::new();

        fake.save_reminder(hello()).await;
        assert_eq!(fake.get_reminder("1234").await, ReminderResult::Success(hello()));
        assert_eq!(
            fake.get_reminder("missing").await.error_message(),
            Some(REMINDER_NOT_FOUND)
        );

        fake.delete_all_reminders().await;
        assert_eq!(fake.get_reminders().await, ReminderResult::Success(vec![]));
    }

    #[tokio::test]
    async fn test_error_mode() {
        let fake = FakeDataSource::with_reminders([hello()]);
        fake.set_return_error(true);

        assert_eq!(
            fake.get_reminders().await,
            ReminderResult::error(FAKE_ERROR_MESSAGE)
        );
        assert_eq!(
            fake.get_reminder("1234").await.error_message(),
            Some(FAKE_ERROR_MESSAGE)
        );

        fake.set_return_error(false);
        assert_eq!(fake.get_reminders().await.into_data().unwrap().len(), 1);
    }
}
