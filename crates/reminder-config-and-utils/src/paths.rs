//! Where the reminders app keeps its files.
//!
//! ```text
//! <base>/config.json
//! <base>/reminders.sqlite
//! <base>/logs/reminders.jsonl
//! ```

use crate::{CoreError, CoreResult};
use std::path::PathBuf;

const BASE_DIR_NAME: &str = ".location-reminders";
const CONFIG_FILE_NAME: &str = "config.json";
const DATABASE_FILE_NAME: &str = "reminders.sqlite";
const LOGS_DIR_NAME: &str = "logs";
const LOG_FILE_NAME: &str = "reminders.jsonl";

#[derive(Debug, Clone)]
pub struct Paths {
    base_dir: PathBuf,
}

impl Paths {
    /// Rooted at `~/.location-reminders`.
    pub fn new() -> CoreResult<Self> {
        dirs::home_dir()
            .map(|home| Self::with_base_dir(home.join(BASE_DIR_NAME)))
            .ok_or_else(|| CoreError::Path("Could not determine home directory".to_string()))
    }

    /// Rooted somewhere else, e.g. a temp dir in tests or `--base-dir`.
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Root directory holding everything below.
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// `<base>/config.json`.
    pub fn config_file(&self) -> PathBuf {
        self.base_dir.join(CONFIG_FILE_NAME)
    }

    /// `<base>/reminders.sqlite`.
    pub fn database_file(&self) -> PathBuf {
        self.base_dir.join(DATABASE_FILE_NAME)
    }

    /// `<base>/logs`.
    pub fn logs_dir(&self) -> PathBuf {
        self.base_dir.join(LOGS_DIR_NAME)
    }

    /// `<base>/logs/reminders.jsonl`, used with `--log-to-file`.
    pub fn log_file(&self) -> PathBuf {
        self.logs_dir().join(LOG_FILE_NAME)
    }

    /// Create the base and logs directories. Safe to call repeatedly.
    pub fn ensure_dirs(&self) -> CoreResult<()> {
        std::fs::create_dir_all(self.logs_dir())?;
        Ok(())
    }
}
