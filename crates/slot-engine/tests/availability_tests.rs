//! Tests for day filtering and full-coverage detection.

use chrono::{NaiveDate, NaiveDateTime};
use slot_engine::{day_status, is_fully_booked, reservations_on_day, DayStatus, DayWindow, Reservation};

/// Helper to create a reservation from hour ranges on a given day.
fn slot(id: &str, day: NaiveDate, start_hour: u32, start_min: u32, end_hour: u32, end_min: u32) -> Reservation {
    Reservation::new(id, at(day, start_hour, start_min), at(day, end_hour, end_min))
}

fn at(day: NaiveDate, hour: u32, min: u32) -> NaiveDateTime {
    day.and_hms_opt(hour, min, 0).unwrap()
}

fn june_first() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

// ── reservations_on_day ────────────────────────────────────────────────────

#[test]
fn filters_to_day_and_sorts_by_start() {
    let day = june_first();
    let next = day.succ_opt().unwrap();
    let all = vec![
        slot("late", day, 18, 0, 20, 0),
        slot("other-day", next, 9, 0, 10, 0),
        slot("early", day, 9, 0, 10, 0),
        slot("mid", day, 12, 0, 13, 0),
    ];

    let on_day = reservations_on_day(&all, day);

    let ids: Vec<&str> = on_day.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["early", "mid", "late"]);
}

#[test]
fn no_reservations_on_day_is_empty() {
    let day = june_first();
    let other = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
    let all = vec![slot("a", other, 9, 0, 10, 0)];

    assert!(reservations_on_day(&all, day).is_empty());
    assert!(reservations_on_day(&[], day).is_empty());
}

#[test]
fn day_is_decided_by_start_date() {
    // A slot starting late on May 31st and ending on June 1st belongs to May 31st.
    let day = june_first();
    let prev = NaiveDate::from_ymd_opt(2024, 5, 31).unwrap();
    let overnight = Reservation::new("overnight", at(prev, 22, 0), at(day, 1, 0));

    assert!(reservations_on_day(&[overnight.clone()], day).is_empty());
    assert_eq!(reservations_on_day(&[overnight], prev).len(), 1);
}

#[test]
fn equal_starts_keep_input_order() {
    let day = june_first();
    let all = vec![slot("b", day, 9, 0, 10, 0), slot("a", day, 9, 0, 11, 0)];

    let ids: Vec<String> = reservations_on_day(&all, day).into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec!["b", "a"]);
}

// ── is_fully_booked ────────────────────────────────────────────────────────

#[test]
fn empty_day_is_not_fully_booked() {
    assert!(!is_fully_booked(&[], june_first(), &DayWindow::STANDARD));
}

#[test]
fn three_contiguous_slots_cover_the_day() {
    // 08:00-12:00, 12:00-18:00, 18:00-23:00 on 2024-06-01.
    let day = june_first();
    let all = vec![
        slot("a", day, 8, 0, 12, 0),
        slot("b", day, 12, 0, 18, 0),
        slot("c", day, 18, 0, 23, 0),
    ];
    let on_day = reservations_on_day(&all, day);

    assert!(is_fully_booked(&on_day, day, &DayWindow::STANDARD));
}

#[test]
fn removing_the_middle_slot_leaves_a_gap() {
    let day = june_first();
    let all = vec![slot("a", day, 8, 0, 12, 0), slot("c", day, 18, 0, 23, 0)];
    let on_day = reservations_on_day(&all, day);

    assert!(!is_fully_booked(&on_day, day, &DayWindow::STANDARD));
}

#[test]
fn single_all_day_slot_covers_the_day() {
    let day = june_first();
    let all = vec![slot("all", day, 8, 0, 23, 0)];

    assert!(is_fully_booked(&all, day, &DayWindow::STANDARD));
}

#[test]
fn late_start_is_not_fully_booked() {
    let day = june_first();
    let all = vec![slot("a", day, 9, 0, 23, 0)];

    assert!(!is_fully_booked(&all, day, &DayWindow::STANDARD));
}

#[test]
fn early_end_is_not_fully_booked() {
    let day = june_first();
    let all = vec![slot("a", day, 8, 0, 22, 30)];

    assert!(!is_fully_booked(&all, day, &DayWindow::STANDARD));
}

#[test]
fn one_minute_gap_is_not_fully_booked() {
    let day = june_first();
    let all = vec![slot("a", day, 8, 0, 12, 0), slot("b", day, 12, 1, 23, 0)];

    assert!(!is_fully_booked(&all, day, &DayWindow::STANDARD));
}

#[test]
fn overlapping_slots_are_not_treated_as_coverage() {
    // Overlap is a data anomaly; adjacency must be exact.
    let day = june_first();
    let all = vec![slot("a", day, 8, 0, 13, 0), slot("b", day, 12, 0, 23, 0)];

    assert!(!is_fully_booked(&all, day, &DayWindow::STANDARD));
}

#[test]
fn seconds_count_for_exact_equality() {
    let day = june_first();
    let a = Reservation::new("a", at(day, 8, 0), day.and_hms_opt(23, 0, 1).unwrap());

    assert!(!is_fully_booked(&[a], day, &DayWindow::STANDARD));
}

#[test]
fn unsorted_input_is_evaluated_in_start_order() {
    let day = june_first();
    let all = vec![slot("c", day, 18, 0, 23, 0), slot("a", day, 8, 0, 18, 0)];

    assert!(is_fully_booked(&all, day, &DayWindow::STANDARD));
}

#[test]
fn legacy_window_needs_midnight_to_2359() {
    let day = june_first();
    let standard_day = vec![slot("a", day, 8, 0, 23, 0)];
    let legacy_day = vec![slot("a", day, 0, 0, 23, 59)];

    assert!(!is_fully_booked(&standard_day, day, &DayWindow::LEGACY));
    assert!(is_fully_booked(&legacy_day, day, &DayWindow::LEGACY));
    assert!(!is_fully_booked(&legacy_day, day, &DayWindow::STANDARD));
}

// ── day_status ─────────────────────────────────────────────────────────────

#[test]
fn day_status_classifies_days() {
    let day = june_first();
    let next = day.succ_opt().unwrap();
    let third = next.succ_opt().unwrap();
    let all = vec![
        slot("full", day, 8, 0, 23, 0),
        slot("part", next, 9, 0, 10, 0),
    ];
    let w = DayWindow::STANDARD;

    assert_eq!(day_status(&all, day, &w), DayStatus::FullyBooked);
    assert_eq!(day_status(&all, next, &w), DayStatus::Partial);
    assert_eq!(day_status(&all, third, &w), DayStatus::Free);
}

#[test]
fn tile_classes_and_add_button() {
    assert_eq!(DayStatus::Free.tile_class(), None);
    assert_eq!(DayStatus::Partial.tile_class(), Some("has-reservations"));
    assert_eq!(DayStatus::FullyBooked.tile_class(), Some("fully-booked"));

    assert!(DayStatus::Free.can_add_reservation());
    assert!(DayStatus::Partial.can_add_reservation());
    assert!(!DayStatus::FullyBooked.can_add_reservation());
}
