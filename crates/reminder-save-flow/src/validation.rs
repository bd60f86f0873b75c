use crate::item::non_empty;
use crate::{ReminderDataItem, ValidationError};

/// Check a reminder form before it is saved.
///
/// Title, then description, then location; the first missing field wins. A
/// location counts as selected when it has a name or both coordinates.
pub fn validate(item: &ReminderDataItem) -> Result<(), ValidationError> {
    if non_empty(&item.title).is_none() {
        return Err(ValidationError::MissingTitle);
    }
    if non_empty(&item.description).is_none() {
        return Err(ValidationError::MissingDescription);
    }
    if non_empty(&item.location).is_none() && item.coordinates().is_none() {
        return Err(ValidationError::MissingLocation);
    }
    Ok(())
}
