//! Database model types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A reminder as persisted in the `reminders` table.
///
/// Every field is required at this layer. Partially filled reminders belong
/// to the save flow and must be completed before they reach storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderDto {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Human-readable label of the selected point.
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl ReminderDto {
    /// Create a reminder with a freshly generated id.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        location: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: description.into(),
            location: location.into(),
            latitude,
            longitude,
        }
    }

    /// Replace the generated id with a caller-supplied one.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        let a = ReminderDto::new("a", "b", "c", 1.0, 2.0);
        let b = ReminderDto::new("a", "b", "c", 1.0, 2.0);

        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
    }

    #[test]
    fn test_with_id_overrides_generated_id() {
        let reminder =
            ReminderDto::new("Hello", "Hello World!", "World", 55.05, -5.55).with_id("1234");

        assert_eq!(reminder.id, "1234");
        assert_eq!(reminder.title, "Hello");
        assert_eq!(reminder.longitude, -5.55);
    }

    #[test]
    fn test_serde_field_names() {
        let reminder = ReminderDto::new("t", "d", "l", 1.5, -2.5).with_id("x");
        let json = serde_json::to_value(&reminder).unwrap();

        assert_eq!(json["id"], "x");
        assert_eq!(json["location"], "l");
        assert_eq!(json["latitude"], 1.5);
    }
}
