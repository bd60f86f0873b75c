//! Everything between the reminder screens and the repository.
//!
//! A [`SaveReminderSession`] collects what the user typed and the location
//! they picked, [`validate`] checks it, and the session hands the finished
//! record to a [`ReminderDataSource`](reminder_repository::ReminderDataSource).
//! The saved item then describes its own [`GeofenceRequest`]. Reading goes the
//! other way through [`RemindersListState`].

mod error;
mod geofence;
mod item;
mod list;
mod session;
mod validation;

pub use error::{GeofenceError, ValidationError};
pub use geofence::{GeofenceRequest, GeofenceTransition, InitialTrigger};
pub use item::{ReminderDataItem, SelectedLocation, CUSTOM_LOCATION_LABEL};
pub use list::{RemindersListState, NO_DATA_MESSAGE};
pub use session::SaveReminderSession;
pub use validation::validate;
