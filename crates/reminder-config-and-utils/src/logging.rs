//! Logging initialization.
//!
//! Thin wrapper over the observability crate so every entry point sets up
//! tracing the same way.

use observability::LogConfig;
use std::path::PathBuf;

/// Service name written into every JSONL line.
const SERVICE_NAME: &str = "reminders";

/// Initialize the logging system.
///
/// Logs go to stderr unless `log_file` is given, in which case structured
/// JSONL is appended there and stderr keeps a compact copy.
/// `RUST_LOG` overrides `level`.
pub fn init_logging(level: &str, log_file: Option<PathBuf>) {
    observability::init_with_config(LogConfig {
        service_name: SERVICE_NAME.into(),
        default_level: level.into(),
        also_stderr: log_file.is_some(),
        log_path: log_file,
    });
}
