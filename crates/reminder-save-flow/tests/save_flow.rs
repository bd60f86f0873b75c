//! Save screen to list screen, over the real repository and the fake.

use reminder_database::Database;
use reminder_repository::{
    FakeDataSource, IoDispatcher, ReminderDataSource, RemindersLocalRepository,
};
use reminder_save_flow::{
    GeofenceRequest, RemindersListState, SaveReminderSession, SelectedLocation, ValidationError,
};
use std::sync::Arc;

fn repository() -> RemindersLocalRepository<Database> {
    let db = Database::open_in_memory().unwrap();
    RemindersLocalRepository::new(Arc::new(db), IoDispatcher::Immediate)
}

#[tokio::test]
async fn test_saved_reminder_appears_in_list_with_geofence() {
    let repository = repository();
    let mut session = SaveReminderSession::new();
    session.set_title("Groceries");
    session.set_description("Milk and bread");
    session.select_location(SelectedLocation::Custom {
        latitude: 51.5,
        longitude: -0.12,
    });

    let saved = session.validate_and_save(&repository).await.unwrap();
    let geofence = GeofenceRequest::for_reminder(&saved).unwrap();
    assert_eq!(geofence.request_id, saved.id);
    session.on_clear();

    let state = RemindersListState::from_result(repository.get_reminders().await);
    assert_eq!(state.items().len(), 1);
    assert_eq!(state.items()[0].location.as_deref(), Some("Custom location"));
    assert_eq!(state.items()[0].id, saved.id);
}

#[tokio::test]
async fn test_validation_order_stops_before_repository() {
    let repository = repository();
    let mut session = SaveReminderSession::new();

    assert_eq!(
        session.validate_and_save(&repository).await,
        Err(ValidationError::MissingTitle)
    );

    session.set_title("Title");
    assert_eq!(
        session.validate_and_save(&repository).await,
        Err(ValidationError::MissingDescription)
    );

    session.set_description("Description");
    assert_eq!(
        session.validate_and_save(&repository).await,
        Err(ValidationError::MissingLocation)
    );

    let state = RemindersListState::from_result(repository.get_reminders().await);
    assert_eq!(state, RemindersListState::Empty);
}

#[tokio::test]
async fn test_list_shows_source_error() {
    let source = FakeDataSource::new();
    source.set_return_error(true);

    let state = RemindersListState::from_result(source.get_reminders().await);
    assert_eq!(state, RemindersListState::Failed("Test exception".into()));
}

#[tokio::test]
async fn test_editing_overwrites_existing_reminder() {
    let repository = repository();

    for title in ["First", "Second"] {
        let mut session = SaveReminderSession::new().with_reminder_id("1234");
        session.set_title(title);
        session.set_description("d");
        session.select_location(SelectedLocation::PointOfInterest {
            name: "Park".into(),
            latitude: 1.0,
            longitude: 2.0,
        });
        session.validate_and_save(&repository).await.unwrap();
    }

    let state = RemindersListState::from_result(repository.get_reminders().await);
    assert_eq!(state.items().len(), 1);
    assert_eq!(state.items()[0].title.as_deref(), Some("Second"));
}
