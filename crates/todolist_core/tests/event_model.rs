use todolist_core::{Date, Event, EventValidationError};
use uuid::Uuid;

fn date(month: i32, day: i32, year: i32) -> Date {
    Date::new(month, day, year).unwrap()
}

fn today() -> Date {
    date(6, 15, 2024)
}

#[test]
fn new_event_starts_unfinished() {
    let event = Event::new(date(6, 1, 2024), date(6, 10, 2024), "write report").unwrap();

    assert!(!event.id().is_nil());
    assert_eq!(event.title(), "write report");
    assert_eq!(event.finished_date(), None);
    assert!(!event.is_finished());
}

#[test]
fn begin_after_end_is_rejected() {
    let err = Event::new(date(6, 20, 2024), date(6, 10, 2024), "x").unwrap_err();
    assert_eq!(
        err,
        EventValidationError::InvalidRange {
            begin: date(6, 20, 2024),
            end: date(6, 10, 2024),
        }
    );
    assert_eq!(
        err.to_string(),
        "begin date (6/20/2024) must not be after end date (6/10/2024)"
    );
}

#[test]
fn single_day_event_is_allowed() {
    assert!(Event::new(today(), today(), "same day").is_ok());
}

#[test]
fn with_id_rejects_nil_uuid() {
    let err = Event::with_id(Uuid::nil(), today(), today(), "invalid").unwrap_err();
    assert_eq!(err, EventValidationError::NilId);
}

#[test]
fn unfinished_event_past_end_is_overdue() {
    let event = Event::new(date(6, 1, 2024), date(6, 10, 2024), "late").unwrap();
    assert!(event.is_overdue(today()));
}

#[test]
fn finished_event_is_never_overdue() {
    let mut event = Event::new(date(6, 1, 2024), date(6, 10, 2024), "late").unwrap();
    event.mark_finished(date(6, 9, 2024));
    assert!(!event.is_overdue(today()));

    event.mark_unfinished();
    assert!(event.is_overdue(today()));
}

#[test]
fn event_before_end_is_not_overdue() {
    let mut event = Event::new(date(6, 1, 2024), date(6, 20, 2024), "ongoing").unwrap();
    assert!(!event.is_overdue(today()));
    event.mark_finished(date(6, 12, 2024));
    assert!(!event.is_overdue(today()));
    assert!(!event.is_overdue(date(6, 20, 2024)));
}

#[test]
fn completion_outside_window_is_accepted() {
    let mut event = Event::new(date(6, 1, 2024), date(6, 10, 2024), "early").unwrap();
    event.mark_finished(date(5, 1, 2024));
    assert_eq!(event.finished_date(), Some(date(5, 1, 2024)));
}

#[test]
fn unfinished_event_shows_through_end_date() {
    let event = Event::new(date(6, 1, 2024), date(6, 10, 2024), "span").unwrap();

    assert!(!event.is_visible_on(date(5, 31, 2024)));
    assert!(event.is_visible_on(date(6, 1, 2024)));
    assert!(event.is_visible_on(date(6, 10, 2024)));
    assert!(!event.is_visible_on(date(6, 11, 2024)));
    assert_eq!(event.latest_showing_date(), date(6, 10, 2024));
}

#[test]
fn early_finish_hides_event_after_finish_date() {
    let mut event = Event::new(date(6, 1, 2024), date(6, 10, 2024), "span").unwrap();
    event.mark_finished(date(6, 5, 2024));

    assert_eq!(event.latest_showing_date(), date(6, 5, 2024));
    assert!(event.is_visible_on(date(6, 5, 2024)));
    assert!(!event.is_visible_on(date(6, 6, 2024)));
}

#[test]
fn late_finish_keeps_end_date_as_limit() {
    let mut event = Event::new(date(6, 1, 2024), date(6, 10, 2024), "span").unwrap();
    event.mark_finished(date(6, 14, 2024));

    assert_eq!(event.latest_showing_date(), date(6, 10, 2024));
    assert!(!event.is_visible_on(date(6, 12, 2024)));
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let mut event = Event::with_id(id, date(6, 1, 2024), date(6, 10, 2024), "ship").unwrap();
    event.mark_finished(date(6, 9, 2024));

    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["title"], "ship");
    assert_eq!(
        json["begin_date"],
        serde_json::json!({ "month": 6, "day": 1, "year": 2024 })
    );
    assert_eq!(json["finished_date"]["day"], 9);

    let decoded: Event = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, event);
}

#[test]
fn deserialize_rejects_reversed_window() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "title": "bad",
        "begin_date": { "month": 6, "day": 20, "year": 2024 },
        "end_date": { "month": 6, "day": 10, "year": 2024 },
        "finished_date": null
    });

    let err = serde_json::from_value::<Event>(value).unwrap_err();
    assert!(
        err.to_string().contains("must not be after end date"),
        "unexpected error: {err}"
    );
}

#[test]
fn deserialize_rejects_invalid_date() {
    let value = serde_json::json!({ "month": 2, "day": 30, "year": 2000 });
    let err = serde_json::from_value::<Date>(value).unwrap_err();
    assert!(err.to_string().contains("invalid date"), "unexpected error: {err}");
}
