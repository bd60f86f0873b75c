//! View-side reminder shapes.

use crate::ValidationError;
use reminder_repository::ReminderDto;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Label stored for a location dropped anywhere on the map.
pub const CUSTOM_LOCATION_LABEL: &str = "Custom location";

/// A reminder as the screens see it. Every field except the id may still be
/// missing while the user fills in the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderDataItem {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub id: String,
}

impl ReminderDataItem {
    /// Build an item with a fresh UUID v4 id.
    pub fn new(
        title: Option<String>,
        description: Option<String>,
        location: Option<String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Self {
        Self {
            title,
            description,
            location,
            latitude,
            longitude,
            id: Uuid::new_v4().to_string(),
        }
    }

    /// Replace the generated id, e.g. to overwrite an existing reminder.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// `(latitude, longitude)` when both are set.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }

    /// Convert a validated item into the persisted record.
    ///
    /// A location name without coordinates cannot be stored, so it is
    /// rejected as [`ValidationError::MissingLocation`]. Coordinates without a
    /// name are stored under [`CUSTOM_LOCATION_LABEL`].
    pub fn to_dto(&self) -> Result<ReminderDto, ValidationError> {
        let title = non_empty(&self.title).ok_or(ValidationError::MissingTitle)?;
        let description =
            non_empty(&self.description).ok_or(ValidationError::MissingDescription)?;
        let (latitude, longitude) = self.coordinates().ok_or(ValidationError::MissingLocation)?;
        let location = non_empty(&self.location).unwrap_or(CUSTOM_LOCATION_LABEL);

        Ok(ReminderDto {
            id: self.id.clone(),
            title: title.to_string(),
            description: description.to_string(),
            location: location.to_string(),
            latitude,
            longitude,
        })
    }
}

impl From<ReminderDto> for ReminderDataItem {
    fn from(dto: ReminderDto) -> Self {
        Self {
            title: Some(dto.title),
            description: Some(dto.description),
            location: Some(dto.location),
            latitude: Some(dto.latitude),
            longitude: Some(dto.longitude),
            id: dto.id,
        }
    }
}

pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Where the user pinned the reminder on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SelectedLocation {
    PointOfInterest {
        name: String,
        latitude: f64,
        longitude: f64,
    },
    Custom {
        latitude: f64,
        longitude: f64,
    },
}

impl SelectedLocation {
    /// Name stored as the reminder's location.
    pub fn label(&self) -> &str {
        match self {
            Self::PointOfInterest { name, .. } => name,
            Self::Custom { .. } => CUSTOM_LOCATION_LABEL,
        }
    }

    pub fn latitude(&self) -> f64 {
        match self {
            Self::PointOfInterest { latitude, .. } | Self::Custom { latitude, .. } => *latitude,
        }
    }

    pub fn longitude(&self) -> f64 {
        match self {
            Self::PointOfInterest { longitude, .. } | Self::Custom { longitude, .. } => *longitude,
        }
    }
}
