//! Per-day schedule view built from a raw reservation snapshot.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::warn;

use crate::availability::{day_status, reservations_on_day, DayStatus};
use crate::display::format_time_range;
use crate::freebusy::{free_gaps, Gap};
use crate::reservation::{Reservation, ReservationRecord};
use crate::window::DayWindow;
use crate::zone::CalendarZone;

/// Empty-state label for a day without reservations.
pub const EMPTY_DAY: &str = "No reservations for this day";

/// One line of the day table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleRow {
    pub id: String,
    pub owner: String,
    pub time: String,
}

/// Everything the day view needs for one date.
#[derive(Debug, Clone, Serialize)]
pub struct DaySchedule {
    pub day: NaiveDate,
    pub rows: Vec<ScheduleRow>,
    pub status: DayStatus,
    pub free: Vec<Gap>,
    /// Records dropped because their timestamps did not parse.
    pub skipped: usize,
}

/// Resolve every record, dropping malformed ones.
///
/// Returns the resolved reservations and how many records were skipped.
pub fn resolve_records(records: &[ReservationRecord], zone: &dyn CalendarZone) -> (Vec<Reservation>, usize) {
    let mut skipped = 0;
    let resolved = records
        .iter()
        .filter_map(|record| match record.resolve(zone) {
            Ok(r) => Some(r),
            Err(e) => {
                warn!(id = %record.id, error = %e, "skipping malformed reservation");
                skipped += 1;
                None
            }
        })
        .collect();
    (resolved, skipped)
}

impl DaySchedule {
    /// Build the schedule of `day` from a snapshot of service records.
    pub fn build(
        records: &[ReservationRecord],
        day: NaiveDate,
        zone: &dyn CalendarZone,
        window: &DayWindow,
    ) -> Self {
        let (resolved, skipped) = resolve_records(records, zone);

        let on_day = reservations_on_day(&resolved, day);
        let status = day_status(&on_day, day, window);

        let rows = on_day
            .iter()
            .map(|r| ScheduleRow {
                id: r.id.clone(),
                owner: r.display_owner().to_string(),
                time: format_time_range(r, window),
            })
            .collect();

        Self {
            day,
            rows,
            status,
            free: free_gaps(&on_day, day, window),
            skipped,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn fully_booked(&self) -> bool {
        self.status == DayStatus::FullyBooked
    }

    /// The empty-state label, when there is nothing to list.
    pub fn empty_label(&self) -> Option<&'static str> {
        self.is_empty().then_some(EMPTY_DAY)
    }
}
