//! Day availability -- which reservations fall on a day and whether they
//! cover the whole bookable window.
//!
//! Coverage is checked with exact timestamp equality. Reservations are
//! created aligned to picker steps, so a slot ending at 12:00 and the next
//! starting at 12:00 touch; anything else is a gap. Overlapping slots are a
//! data anomaly and are not repaired here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::reservation::Reservation;
use crate::window::DayWindow;

/// Reservations whose local start date is `day`, sorted ascending by start.
///
/// Reservations must already be resolved through a [`CalendarZone`], so the
/// start's date is the local calendar day.
///
/// [`CalendarZone`]: crate::zone::CalendarZone
///
/// The sort is stable, so reservations sharing a start keep their input order.
pub fn reservations_on_day(reservations: &[Reservation], day: NaiveDate) -> Vec<Reservation> {
    let mut on_day: Vec<Reservation> = reservations
        .iter()
        .filter(|r| r.start.date() == day)
        .cloned()
        .collect();
    on_day.sort_by_key(|r| r.start);
    on_day
}

/// Whether `day_reservations` cover `[day@window.start, day@window.end]`
/// end-to-end.
///
/// True iff the list is non-empty, the earliest slot starts exactly at the
/// window start, the latest slot ends exactly at the window end, and every
/// slot ends exactly where the next one begins.
pub fn is_fully_booked(day_reservations: &[Reservation], day: NaiveDate, window: &DayWindow) -> bool {
    let mut sorted: Vec<&Reservation> = day_reservations.iter().collect();
    sorted.sort_by_key(|r| r.start);

    let (Some(first), Some(last)) = (sorted.first(), sorted.last()) else {
        return false;
    };

    let covered = first.start == window.start_on(day)
        && last.end == window.end_on(day)
        && sorted.windows(2).all(|pair| pair[0].end == pair[1].start);

    debug!(%day, slots = sorted.len(), covered, "evaluated day coverage");
    covered
}

/// Booking state of a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    Free,
    Partial,
    FullyBooked,
}

impl DayStatus {
    /// CSS class for the day's calendar tile, if any.
    pub fn tile_class(&self) -> Option<&'static str> {
        match self {
            DayStatus::Free => None,
            DayStatus::Partial => Some("has-reservations"),
            DayStatus::FullyBooked => Some("fully-booked"),
        }
    }

    /// New reservations can only be added on days that are not fully booked.
    pub fn can_add_reservation(&self) -> bool {
        *self != DayStatus::FullyBooked
    }
}

/// Classify `day` against the full reservation snapshot.
pub fn day_status(reservations: &[Reservation], day: NaiveDate, window: &DayWindow) -> DayStatus {
    let on_day = reservations_on_day(reservations, day);
    if on_day.is_empty() {
        DayStatus::Free
    } else if is_fully_booked(&on_day, day, window) {
        DayStatus::FullyBooked
    } else {
        DayStatus::Partial
    }
}
