//! Outcome wrapper used at the data access boundary.

use reminder_database::DatabaseResult;
use serde::Serialize;

/// Success or error outcome of a repository operation.
///
/// There is no loading variant: in-flight state belongs to whoever is
/// awaiting the operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum ReminderResult<T> {
    Success(T),
    Error {
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        code: Option<i32>,
    },
}

impl<T> ReminderResult<T> {
    pub fn success(data: T) -> Self {
        Self::Success(data)
    }

    /// An error without a code.
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
            code: None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// The payload, if this is a success.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Error { .. } => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Error { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Error { message, .. } => Some(message),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ReminderResult<U> {
        match self {
            Self::Success(data) => ReminderResult::Success(f(data)),
            Self::Error { message, code } => ReminderResult::Error { message, code },
        }
    }
}

/// Storage faults become errors carrying the fault's display text.
impl<T> From<DatabaseResult<T>> for ReminderResult<T> {
    fn from(result: DatabaseResult<T>) -> Self {
        match result {
            Ok(data) => Self::Success(data),
            Err(e) => Self::error(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reminder_database::DatabaseError;

    #[test]
    fn test_accessors() {
        let ok: ReminderResult<u32> = ReminderResult::success(3);
        assert!(ok.is_success());
        assert_eq!(ok.data(), Some(&3));
        assert_eq!(ok.error_message(), None);

        let err: ReminderResult<u32> = ReminderResult::Error {
            message: "boom".to_string(),
            code: Some(7),
        };
        assert!(err.is_error());
        assert_eq!(err.data(), None);
        assert_eq!(err.error_message(), Some("boom"));
        assert_eq!(
            err,
            ReminderResult::Error {
                message: "boom".to_string(),
                code: Some(7)
            }
        );
    }

    #[test]
    fn test_map_keeps_error() {
        let err: ReminderResult<u32> = ReminderResult::error("nope");
        assert_eq!(err.map(|n| n * 2), ReminderResult::error("nope"));

        let ok: ReminderResult<u32> = ReminderResult::success(2);
        assert_eq!(ok.map(|n| n * 2).into_data(), Some(4));
    }

    #[test]
    fn test_from_database_result() {
        let fault: DatabaseResult<()> = Err(DatabaseError::Connection("disk gone".to_string()));
        let result: ReminderResult<()> = fault.into();
        assert_eq!(result.error_message(), Some("Connection error: disk gone"));

        let ok: DatabaseResult<i32> = Ok(1);
        let ok: ReminderResult<i32> = ok.into();
        assert_eq!(ok, ReminderResult::Success(1));
    }

    #[test]
    fn test_serialization_shape() {
        let err: ReminderResult<()> = ReminderResult::error("Reminder not found!");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["data"]["message"], "Reminder not found!");
        assert!(json["data"].get("code").is_none());

        let ok: ReminderResult<Vec<u8>> = ReminderResult::success(vec![1, 2]);
        let json = serde_json::to_value(&ok).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["data"], serde_json::json!([1, 2]));
    }
}
