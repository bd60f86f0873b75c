//! # Observability
//!
//! Centralized logging setup for the location reminders workspace.
//!
//! Crates are **log producers**. They use the standard `tracing` macros and
//! never decide where lines go. The binary calls [`init_with_config`] once at
//! startup, which installs one of two subscribers:
//!
//! - compact, human-readable output on stderr (default)
//! - structured JSONL appended to a central file, when a `log_path` is given
//!   or the crate is built with the `dev` feature
//!
//! ```rust,ignore
//! fn main() {
//!     observability::init_with_config(observability::LogConfig {
//!         service_name: "reminders".into(),
//!         default_level: "debug".into(),
//!         ..Default::default()
//!     });
//!     tracing::info!("ready");
//! }
//! ```

mod dev;
mod json_layer;

use std::path::PathBuf;

use dev::default_log_path;

/// Configuration for the logging system.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Name of the service, included in every JSONL line.
    pub service_name: String,

    /// Default log level filter (e.g., "debug", "info", "warn").
    /// Can be overridden by `RUST_LOG` environment variable.
    pub default_level: String,

    /// Central JSONL log file. When unset, the `dev` feature falls back to
    /// `~/.location-reminders/logs/dev.jsonl`; otherwise logs go to stderr only.
    pub log_path: Option<PathBuf>,

    /// Also emit compact logs to stderr while writing JSONL.
    pub also_stderr: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            service_name: "unknown".into(),
            default_level: "info".into(),
            log_path: None,
            also_stderr: false,
        }
    }
}

/// Initialize logging with custom configuration.
///
/// Calling this more than once is harmless: later calls leave the first
/// subscriber installed.
pub fn init_with_config(config: LogConfig) {
    let log_path = match (&config.log_path, cfg!(feature = "dev")) {
        (Some(path), _) => Some(path.clone()),
        (None, true) => default_log_path(),
        (None, false) => None,
    };

    match log_path {
        Some(path) => dev::init_dev_subscriber(&config, path),
        None => {
            use tracing_subscriber::util::SubscriberInitExt;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter(&config.default_level))
                .with_target(true)
                .with_writer(std::io::stderr)
                .compact()
                .finish()
                .try_init();
        }
    }
}

/// `RUST_LOG` wins over the configured level.
pub(crate) fn env_filter(default_level: &str) -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level))
}
