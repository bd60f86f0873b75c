//! Application configuration.

use crate::{CoreError, CoreResult, Paths};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Radius of the circular region registered for each reminder.
pub const DEFAULT_GEOFENCE_RADIUS_METERS: f32 = 200.0;

/// How long a registered geofence stays active (one hour).
pub const DEFAULT_GEOFENCE_EXPIRATION_SECS: u64 = 60 * 60;

/// Main application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Geofence radius in meters.
    #[serde(default = "default_geofence_radius_meters")]
    pub geofence_radius_meters: f32,
    /// Geofence expiration in seconds.
    #[serde(default = "default_geofence_expiration_secs")]
    pub geofence_expiration_secs: u64,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_geofence_radius_meters() -> f32 {
    DEFAULT_GEOFENCE_RADIUS_METERS
}

fn default_geofence_expiration_secs() -> u64 {
    DEFAULT_GEOFENCE_EXPIRATION_SECS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            geofence_radius_meters: DEFAULT_GEOFENCE_RADIUS_METERS,
            geofence_expiration_secs: DEFAULT_GEOFENCE_EXPIRATION_SECS,
        }
    }
}

impl Config {
    /// Load configuration from the config file, falling back to defaults.
    pub fn load(paths: &Paths) -> CoreResult<Self> {
        let config_path = paths.config_file();

        let mut config = if config_path.exists() {
            Self::load_from_file(&config_path)?
        } else {
            debug!(path = %config_path.display(), "No config file, using defaults");
            Self::default()
        };

        config.load_from_env();
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file.
    pub fn save(&self, paths: &Paths) -> CoreResult<()> {
        paths.ensure_dirs()?;
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(paths.config_file(), content)?;
        Ok(())
    }

    /// Reject values that would produce an unusable geofence.
    pub fn validate(&self) -> CoreResult<()> {
        if !(self.geofence_radius_meters.is_finite() && self.geofence_radius_meters > 0.0) {
            return Err(CoreError::Config(format!(
                "geofence_radius_meters must be positive, got {}",
                self.geofence_radius_meters
            )));
        }
        if self.geofence_expiration_secs == 0 {
            return Err(CoreError::Config(
                "geofence_expiration_secs must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Only the log level can be overridden at runtime.
    fn load_from_env(&mut self) {
        if let Ok(log_level) = std::env::var("REMINDERS_LOG_LEVEL") {
            self.log_level = log_level;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(config.geofence_radius_meters, 200.0);
        assert_eq!(config.geofence_expiration_secs, 3600);
    }

    #[test]
    fn test_config_load_from_file_fills_missing_fields() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.json");

        std::fs::write(&config_path, r#"{ "log_level": "debug" }"#).unwrap();

        let config = Config::load_from_file(&config_path).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.geofence_radius_meters, DEFAULT_GEOFENCE_RADIUS_METERS);
        assert_eq!(
            config.geofence_expiration_secs,
            DEFAULT_GEOFENCE_EXPIRATION_SECS
        );
    }

    #[test]
    fn test_config_save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let paths = Paths::with_base_dir(dir.path().to_path_buf());

        let config = Config {
            geofence_radius_meters: 150.0,
            ..Config::default()
        };
        config.save(&paths).unwrap();

        let loaded = Config::load(&paths).unwrap();
        assert_eq!(loaded.geofence_radius_meters, 150.0);
    }

    #[test]
    fn test_config_load_nonexistent_uses_defaults() {
        let dir = tempdir().unwrap();
        let paths = Paths::with_base_dir(dir.path().to_path_buf());

        let config = Config::load(&paths).unwrap();
        assert_eq!(config.geofence_radius_meters, DEFAULT_GEOFENCE_RADIUS_METERS);
    }

    #[test]
    fn test_config_invalid_json() {
        let dir = tempdir().unwrap();
        let paths = Paths::with_base_dir(dir.path().to_path_buf());
        std::fs::write(paths.config_file(), "not json").unwrap();

        assert!(matches!(Config::load(&paths), Err(CoreError::Json(_))));
    }

    #[test]
    fn test_config_rejects_non_positive_radius() {
        let config = Config {
            geofence_radius_meters: 0.0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn test_config_rejects_zero_expiration() {
        let config = Config {
            geofence_expiration_secs: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
