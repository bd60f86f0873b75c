//! Configuration, filesystem paths, and logging setup shared by the
//! location reminders crates.

mod config;
mod error;
mod logging;
mod paths;

pub use config::{
    Config, DEFAULT_GEOFENCE_EXPIRATION_SECS, DEFAULT_GEOFENCE_RADIUS_METERS, DEFAULT_LOG_LEVEL,
};
pub use error::{CoreError, CoreResult};
pub use logging::init_logging;
pub use paths::Paths;
