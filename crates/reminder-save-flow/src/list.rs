use crate::ReminderDataItem;
use reminder_repository::{ReminderDto, ReminderResult};

/// Placeholder shown when there are no reminders.
pub const NO_DATA_MESSAGE: &str = "No Data";

/// What the reminders list renders after a load.
#[derive(Debug, Clone, PartialEq)]
pub enum RemindersListState {
    Empty,
    Loaded(Vec<ReminderDataItem>),
    Failed(String),
}

impl RemindersListState {
    pub fn from_result(result: ReminderResult<Vec<ReminderDto>>) -> Self {
        match result {
            ReminderResult::Success(reminders) if reminders.is_empty() => Self::Empty,
            ReminderResult::Success(reminders) => {
                Self::Loaded(reminders.into_iter().map(ReminderDataItem::from).collect())
            }
            ReminderResult::Error { message, .. } => Self::Failed(message),
        }
    }

    /// True when the "No Data" placeholder should be visible. A failed load
    /// also shows it, behind the error message.
    pub fn show_no_data(&self) -> bool {
        !matches!(self, Self::Loaded(_))
    }

    pub fn items(&self) -> &[ReminderDataItem] {
        match self {
            Self::Loaded(items) => items,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_success_shows_no_data() {
        let state = RemindersListState::from_result(ReminderResult::success(vec![]));
        assert_eq!(state, RemindersListState::Empty);
        assert!(state.show_no_data());
        assert!(state.items().is_empty());
    }

    #[test]
    fn test_loaded_maps_records_to_items() {
        let dto = ReminderDto::new("t", "d", "l", 1.0, 2.0);
        let state = RemindersListState::from_result(ReminderResult::success(vec![dto.clone()]));
        assert!(!state.show_no_data());
        assert_eq!(state.items(), &[ReminderDataItem::from(dto)]);
    }

    #[test]
    fn test_error_keeps_message() {
        let state = RemindersListState::from_result(ReminderResult::error("Test exception"));
        assert_eq!(state, RemindersListState::Failed("Test exception".into()));
        assert!(state.show_no_data());
    }
}
