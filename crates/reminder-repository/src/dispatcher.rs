//! Execution context for blocking store calls.

use reminder_database::{DatabaseError, DatabaseResult};

/// Where the repository runs local store calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IoDispatcher {
    /// Tokio's blocking thread pool. The awaiting task is parked, not
    /// blocked, and the call keeps running if the caller stops waiting.
    /// Requires a Tokio runtime.
    #[default]
    BlockingPool,
    /// Run inline on the calling task. For tests only.
    Immediate,
}

impl IoDispatcher {
    /// Run `f` on this context and wait for its outcome.
    ///
    /// A panicking or cancelled worker is reported as
    /// [`DatabaseError::Connection`].
    pub async fn run<F, T>(self, f: F) -> DatabaseResult<T>
    where
        F: FnOnce() -> DatabaseResult<T> + Send + 'static,
        T: Send + 'static,
    {
        match self {
            Self::BlockingPool => match tokio::task::spawn_blocking(f).await {
                Ok(result) => result,
                Err(e) => Err(DatabaseError::Connection(format!(
                    "Storage task failed: {e}"
                ))),
            },
            Self::Immediate => f(),
        }
    }
}
