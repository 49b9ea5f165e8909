//! Free gaps left inside the bookable window of a day.
//!
//! Sorts reservations by start, merges overlapping or touching busy periods
//! clipped to the window, then reports what is left between them.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::reservation::Reservation;
use crate::window::DayWindow;

/// An unbooked stretch of the window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Gap {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub duration_minutes: i64,
}

impl Gap {
    fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            start,
            end,
            duration_minutes: (end - start).num_minutes(),
        }
    }
}

/// Merge overlapping or adjacent busy periods, clipped to `[from, to]`.
fn merge_busy_periods(
    reservations: &[Reservation],
    from: NaiveDateTime,
    to: NaiveDateTime,
) -> Vec<(NaiveDateTime, NaiveDateTime)> {
    let mut intervals: Vec<(NaiveDateTime, NaiveDateTime)> = reservations
        .iter()
        .filter(|r| r.start < to && r.end > from)
        .map(|r| (r.start.max(from), r.end.min(to)))
        .collect();
    intervals.sort_by_key(|&(start, end)| (start, end));

    let mut merged: Vec<(NaiveDateTime, NaiveDateTime)> = Vec::new();
    for (start, end) in intervals {
        if let Some(last) = merged.last_mut() {
            if start <= last.1 {
                last.1 = last.1.max(end);
                continue;
            }
        }
        merged.push((start, end));
    }
    merged
}

/// Gaps between reservations inside `day`'s window, sorted by start.
///
/// Unlike [`crate::is_fully_booked`], overlapping reservations are merged
/// first, so this answers "what can still be booked" on messy data too.
pub fn free_gaps(day_reservations: &[Reservation], day: NaiveDate, window: &DayWindow) -> Vec<Gap> {
    let from = window.start_on(day);
    let to = window.end_on(day);

    let mut gaps = Vec::new();
    let mut cursor = from;
    for (busy_start, busy_end) in merge_busy_periods(day_reservations, from, to) {
        if cursor < busy_start {
            gaps.push(Gap::new(cursor, busy_start));
        }
        cursor = cursor.max(busy_end);
    }
    if cursor < to {
        gaps.push(Gap::new(cursor, to));
    }
    gaps
}
