//! The single data interface the application depends on for reminders.
//!
//! [`RemindersLocalRepository`] moves every local store call onto an
//! [`IoDispatcher`] and hands the outcome back as a [`ReminderResult`].
//! Nothing here panics or returns a Rust error to the caller: storage
//! faults and missing records both arrive as [`ReminderResult::Error`].
//!
//! ```ignore
//! let db = Arc::new(Database::open(&paths.database_file())?);
//! let repository = RemindersLocalRepository::new(db, IoDispatcher::BlockingPool);
//!
//! repository.save_reminder(reminder).await;
//! match repository.get_reminder("1234").await {
//!     ReminderResult::Success(reminder) => show(reminder),
//!     ReminderResult::Error { message, .. } => toast(message),
//! }
//! ```

mod data_source;
mod dispatcher;
mod fake;
mod local;
mod result;

pub use data_source::ReminderDataSource;
pub use dispatcher::IoDispatcher;
pub use fake::{FakeDataSource, FAKE_ERROR_MESSAGE};
pub use local::{RemindersLocalRepository, REMINDER_NOT_FOUND};
pub use result::ReminderResult;

pub use reminder_database::ReminderDto;
