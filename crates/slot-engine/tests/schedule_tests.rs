//! Tests for the per-day schedule over raw service records.

use chrono::NaiveDate;
use slot_engine::schedule::{resolve_records, EMPTY_DAY};
use slot_engine::{day_status, reservations_on_day, DaySchedule, DayStatus, DayWindow, Floating, ReservationRecord, Zoned};

fn record(id: &str, start: &str, end: &str, owner: Option<&str>) -> ReservationRecord {
    ReservationRecord {
        id: id.to_string(),
        start: start.to_string(),
        end: end.to_string(),
        building: "One Three North".to_string(),
        owner_name: owner.map(str::to_string),
        user_name: Some("booker".to_string()),
        user_id: None,
    }
}

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

#[test]
fn rows_are_sorted_and_labelled() {
    let records = vec![
        record("b", "2024-06-01T14:00:00", "2024-06-01T17:00:00", Some("Bea")),
        record("a", "2024-06-01T09:00:00", "2024-06-01T10:30:00", None),
        record("x", "2024-06-02T09:00:00", "2024-06-02T10:00:00", Some("Xi")),
    ];

    let schedule = DaySchedule::build(&records, day(), &Floating, &DayWindow::STANDARD);

    assert_eq!(schedule.rows.len(), 2);
    assert_eq!(schedule.rows[0].id, "a");
    assert_eq!(schedule.rows[0].owner, "booker");
    assert_eq!(schedule.rows[0].time, "9:00 AM - 10:30 AM");
    assert_eq!(schedule.rows[1].owner, "Bea");
    assert_eq!(schedule.rows[1].time, "2:00 PM - 5:00 PM");
    assert_eq!(schedule.status, DayStatus::Partial);
    assert!(schedule.empty_label().is_none());
}

#[test]
fn empty_day_renders_empty_state() {
    let schedule = DaySchedule::build(&[], day(), &Floating, &DayWindow::STANDARD);

    assert!(schedule.is_empty());
    assert_eq!(schedule.empty_label(), Some(EMPTY_DAY));
    assert_eq!(schedule.status, DayStatus::Free);
    assert_eq!(schedule.free.len(), 1);
}

#[test]
fn malformed_records_are_skipped_not_fatal() {
    let records = vec![
        record("ok", "2024-06-01T08:00:00", "2024-06-01T23:00:00", Some("Ana")),
        record("bad", "yesterday-ish", "2024-06-01T10:00:00", Some("Bo")),
    ];

    let schedule = DaySchedule::build(&records, day(), &Floating, &DayWindow::STANDARD);

    assert_eq!(schedule.skipped, 1);
    assert_eq!(schedule.rows.len(), 1);
    assert_eq!(schedule.rows[0].time, "All Day");
    assert!(schedule.fully_booked());
}

#[test]
fn offset_timestamps_land_on_local_day() {
    // 2024-06-01T12:00Z..2024-06-02T03:00Z is 08:00-23:00 in Toronto (UTC-4).
    let records = vec![record("a", "2024-06-01T12:00:00Z", "2024-06-02T03:00:00Z", Some("Ana"))];
    let toronto = Zoned::from_name("America/Toronto").unwrap();

    let schedule = DaySchedule::build(&records, day(), &toronto, &DayWindow::STANDARD);

    assert_eq!(schedule.rows.len(), 1);
    assert_eq!(schedule.rows[0].time, "All Day");
    assert!(schedule.fully_booked());
}

#[test]
fn schedule_agrees_with_day_filter_under_zone() {
    let records = vec![
        record("late", "2024-06-02T01:00:00Z", "2024-06-02T02:00:00Z", Some("Ana")),
        record("next", "2024-06-02T13:00:00Z", "2024-06-02T14:00:00Z", Some("Bea")),
    ];
    let toronto = Zoned::from_name("America/Toronto").unwrap();
    let (resolved, _) = resolve_records(&records, &toronto);

    let schedule = DaySchedule::build(&records, day(), &toronto, &DayWindow::STANDARD);
    let on_day = reservations_on_day(&resolved, day());

    // 01:00Z on June 2 is 21:00 on June 1 in Toronto.
    let ids: Vec<&str> = schedule.rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["late"]);
    assert_eq!(on_day.len(), 1);
    assert_eq!(schedule.status, day_status(&resolved, day(), &DayWindow::STANDARD));
    assert_eq!(schedule.status, DayStatus::Partial);
}
