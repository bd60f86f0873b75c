//! Repository backed by the local SQLite store.

use crate::{IoDispatcher, ReminderDataSource, ReminderResult};
use async_trait::async_trait;
use reminder_database::{ReminderDao, ReminderDto};
use std::sync::Arc;
use tracing::{debug, error};

/// Message returned when a requested id is not stored.
pub const REMINDER_NOT_FOUND: &str = "Reminder not found!";

/// Concrete repository over a [`ReminderDao`].
///
/// Stateless apart from its collaborators: no cache, no locks. Conflicting
/// writes to one id are serialized by the store (last write wins).
pub struct RemindersLocalRepository<D> {
    dao: Arc<D>,
    dispatcher: IoDispatcher,
}

impl<D> Clone for RemindersLocalRepository<D> {
    fn clone(&self) -> Self {
        Self {
            dao: Arc::clone(&self.dao),
            dispatcher: self.dispatcher,
        }
    }
}

impl<D: ReminderDao + 'static> RemindersLocalRepository<D> {
    pub fn new(dao: Arc<D>, dispatcher: IoDispatcher) -> Self {
        Self { dao, dispatcher }
    }
}

#[async_trait]
impl<D: ReminderDao + 'static> ReminderDataSource for RemindersLocalRepository<D> {
    async fn get_reminders(&self) -> ReminderResult<Vec<ReminderDto>> {
        let dao = Arc::clone(&self.dao);
        let result = self.dispatcher.run(move || dao.fetch_all()).await;

        match result {
            Ok(reminders) => {
                debug!(count = reminders.len(), "Loaded reminders");
                ReminderResult::Success(reminders)
            }
            Err(e) => {
                error!(error = %e, "Failed to load reminders");
                ReminderResult::error(e.to_string())
            }
        }
    }

    async fn save_reminder(&self, reminder: ReminderDto) {
        let dao = Arc::clone(&self.dao);
        let id = reminder.id.clone();

        match self
            .dispatcher
            .run(move || dao.insert_or_replace(&reminder))
            .await
        {
            Ok(()) => debug!(id = %id, "Reminder saved"),
            Err(e) => error!(id = %id, error = %e, "Failed to save reminder"),
        }
    }

    async fn get_reminder(&self, id: &str) -> ReminderResult<ReminderDto> {
        let dao = Arc::clone(&self.dao);
        let lookup_id = id.to_string();
        let result = self.dispatcher.run(move || dao.fetch_by_id(&lookup_id)).await;

        match result {
            Ok(Some(reminder)) => ReminderResult::Success(reminder),
            Ok(None) => {
                debug!(id = %id, "Reminder not found");
                ReminderResult::error(REMINDER_NOT_FOUND)
            }
            Err(e) => {
                error!(id = %id, error = %e, "Failed to load reminder");
                ReminderResult::error(e.to_string())
            }
        }
    }

    async fn delete_all_reminders(&self) {
        let dao = Arc::clone(&self.dao);

        match self.dispatcher.run(move || dao.delete_all()).await {
            Ok(()) => debug!("All reminders deleted"),
            Err(e) => error!(error = %e, "Failed to delete reminders"),
        }
    }
}
