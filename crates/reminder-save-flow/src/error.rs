use thiserror::Error;

/// Why a reminder form cannot be saved. The display text is shown to the
/// user as-is.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter title")]
    MissingTitle,

    #[error("Please enter description")]
    MissingDescription,

    #[error("Please select location")]
    MissingLocation,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeofenceError {
    #[error("Reminder {0} has no coordinates")]
    MissingCoordinates(String),
}
