//! Geofence description for a saved reminder.
//!
//! Only the request is built here. Handing it to a platform location
//! service, and the permission prompts that go with it, happen elsewhere.

use crate::{GeofenceError, ReminderDataItem};
use reminder_config_and_utils::{
    DEFAULT_GEOFENCE_EXPIRATION_SECS, DEFAULT_GEOFENCE_RADIUS_METERS,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeofenceTransition {
    Enter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitialTrigger {
    Enter,
}

/// A circular region that fires once the device enters it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeofenceRequest {
    /// Same as the reminder id, so a triggered fence maps back to its reminder.
    pub request_id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub radius_meters: f32,
    #[serde(rename = "expiration_secs", with = "duration_secs")]
    pub expiration: Duration,
    pub transition: GeofenceTransition,
    pub initial_trigger: InitialTrigger,
}

impl GeofenceRequest {
    pub fn for_reminder(item: &ReminderDataItem) -> Result<Self, GeofenceError> {
        let (latitude, longitude) = item
            .coordinates()
            .ok_or_else(|| GeofenceError::MissingCoordinates(item.id.clone()))?;

        Ok(Self {
            request_id: item.id.clone(),
            latitude,
            longitude,
            radius_meters: DEFAULT_GEOFENCE_RADIUS_METERS,
            expiration: Duration::from_secs(DEFAULT_GEOFENCE_EXPIRATION_SECS),
            transition: GeofenceTransition::Enter,
            initial_trigger: InitialTrigger::Enter,
        })
    }

    pub fn with_radius_meters(mut self, radius_meters: f32) -> Self {
        self.radius_meters = radius_meters;
        self
    }

    pub fn with_expiration(mut self, expiration: Duration) -> Self {
        self.expiration = expiration;
        self
    }
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saved() -> ReminderDataItem {
        ReminderDataItem::new(
            Some("Hello".into()),
            Some("Hello World!".into()),
            Some("World".into()),
            Some(55.05),
            Some(-5.55),
        )
        .with_id("1234")
    }

    #[test]
    fn test_defaults_for_reminder() {
        let request = GeofenceRequest::for_reminder(&saved()).unwrap();
        assert_eq!(request.request_id, "1234");
        assert_eq!((request.latitude, request.longitude), (55.05, -5.55));
        assert_eq!(request.radius_meters, 200.0);
        assert_eq!(request.expiration, Duration::from_secs(60 * 60));
        assert_eq!(request.transition, GeofenceTransition::Enter);
        assert_eq!(request.initial_trigger, InitialTrigger::Enter);
    }

    #[test]
    fn test_missing_coordinates() {
        let mut item = saved();
        item.latitude = None;
        assert_eq!(
            GeofenceRequest::for_reminder(&item),
            Err(GeofenceError::MissingCoordinates("1234".into()))
        );
    }

    #[test]
    fn test_overrides() {
        let request = GeofenceRequest::for_reminder(&saved())
            .unwrap()
            .with_radius_meters(50.0)
            .with_expiration(Duration::from_secs(120));
        assert_eq!(request.radius_meters, 50.0);
        assert_eq!(request.expiration.as_secs(), 120);
    }

    #[test]
    fn test_serializes_expiration_as_seconds() {
        let request = GeofenceRequest::for_reminder(&saved()).unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["expiration_secs"], 3600);
        assert_eq!(json["transition"], "enter");
        assert_eq!(json["request_id"], "1234");
    }
}
