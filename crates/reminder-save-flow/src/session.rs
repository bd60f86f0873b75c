//! Form state for one save-reminder screen visit.
//!
//! The save screen and the select-location screen share a single session
//! that is passed between them. Calling [`SaveReminderSession::on_clear`]
//! after a save, or when the screen goes away, starts a fresh reminder.

use crate::{validate, ReminderDataItem, SelectedLocation, ValidationError};
use reminder_repository::ReminderDataSource;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct SaveReminderSession {
    pub title: Option<String>,
    pub description: Option<String>,
    selected_location: Option<SelectedLocation>,
    reminder_id: String,
}

impl Default for SaveReminderSession {
    fn default() -> Self {
        Self {
            title: None,
            description: None,
            selected_location: None,
            reminder_id: Uuid::new_v4().to_string(),
        }
    }
}

impl SaveReminderSession {
    /// Empty form with a fresh reminder id.
    pub fn new() -> Self {
        Self::default()
    }

    /// Edit an existing reminder: the save overwrites the record with this id.
    pub fn with_reminder_id(mut self, id: impl Into<String>) -> Self {
        self.reminder_id = id.into();
        self
    }

    /// Id the next save will be stored under.
    pub fn reminder_id(&self) -> &str {
        &self.reminder_id
    }

    /// Set the title field.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Set the description field.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    /// Record the location picked on the map, replacing any earlier pick.
    pub fn select_location(&mut self, location: SelectedLocation) {
        debug!(label = %location.label(), "Location selected");
        self.selected_location = Some(location);
    }

    /// The current pick, if any.
    pub fn selected_location(&self) -> Option<&SelectedLocation> {
        self.selected_location.as_ref()
    }

    /// Snapshot of the form as a reminder item.
    pub fn reminder_item(&self) -> ReminderDataItem {
        let location = self.selected_location.as_ref();
        ReminderDataItem {
            title: self.title.clone(),
            description: self.description.clone(),
            location: location.map(|l| l.label().to_string()),
            latitude: location.map(SelectedLocation::latitude),
            longitude: location.map(SelectedLocation::longitude),
            id: self.reminder_id.clone(),
        }
    }

    /// Reset every field and pick a new id for the next reminder.
    pub fn on_clear(&mut self) {
        *self = Self::default();
    }

    /// Validate the form and, only if it passes, save it.
    ///
    /// Returns the item handed to the data source so the caller can build
    /// its geofence. Storage faults are reported by the data source itself
    /// and do not surface here; callers that must know read the record back.
    pub async fn validate_and_save<D>(
        &self,
        data_source: &D,
    ) -> Result<ReminderDataItem, ValidationError>
    where
        D: ReminderDataSource + ?Sized,
    {
        let item = self.reminder_item();
        validate(&item)?;
        let dto = item.to_dto()?;

        data_source.save_reminder(dto).await;
        debug!(id = %item.id, "Reminder handed to data source");
        Ok(item)
    }
}
