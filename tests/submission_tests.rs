mod common;
use common::setup_events_file;
use flinta_space::core::add::AddLogic;
use flinta_space::errors::AppError;
use flinta_space::models::{EventSource, EventSubmission};
use flinta_space::store::EventStore;

fn full_form() -> EventSubmission {
    EventSubmission {
        title: Some("Open Mic".into()),
        date: Some("2025-07-02".into()),
        address: Some("Schanze 12".into()),
        description: Some("Poetry and music".into()),
    }
}

#[test]
fn test_valid_submission_becomes_user_record() {
    let record = full_form().validate(EventSource::User).expect("valid form");

    assert_eq!(record.title, "Open Mic");
    assert_eq!(record.date_str(), "2025-07-02");
    assert_eq!(record.source, EventSource::User);
}

#[test]
fn test_empty_address_is_rejected_without_write() {
    let path = setup_events_file("submission_empty_address");
    let store = EventStore::open(&path);

    let form = EventSubmission {
        address: Some(String::new()),
        ..full_form()
    };

    let err = AddLogic::apply(&store, &form, EventSource::User).unwrap_err();

    match err {
        AppError::MissingFields(fields) => assert_eq!(fields, ["address"]),
        other => panic!("unexpected error: {other}"),
    }
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_all_missing_fields_are_reported_in_form_order() {
    let form = EventSubmission {
        title: Some("   ".into()),
        date: None,
        address: Some("Schanze 12".into()),
        description: None,
    };

    let err = form.validate(EventSource::User).unwrap_err();

    assert!(matches!(
        &err,
        AppError::MissingFields(f) if f == &["title", "date", "description"]
    ));
    assert_eq!(
        err.to_string(),
        "Please fill out all fields (missing: title, date, description)"
    );
}

#[test]
fn test_unparsable_date_is_rejected() {
    let form = EventSubmission {
        date: Some("02/07/2025".into()),
        ..full_form()
    };

    assert!(matches!(
        form.validate(EventSource::User),
        Err(AppError::InvalidDate(_))
    ));
}

#[test]
fn test_apply_appends_and_counts() {
    let path = setup_events_file("submission_apply");
    let store = EventStore::open(&path);

    let (_, first) = AddLogic::apply(&store, &full_form(), EventSource::Official).unwrap();
    let (_, second) = AddLogic::apply(&store, &full_form(), EventSource::User).unwrap();

    assert_eq!((first, second), (1, 2));
    let sources: Vec<EventSource> = store.load().unwrap().iter().map(|e| e.source).collect();
    assert_eq!(sources, [EventSource::Official, EventSource::User]);
}
