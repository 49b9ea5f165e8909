//! Yearly export data: one day-by-month grid per building plus the history
//! rows of that year. Producing an actual spreadsheet is left to the caller.

use chrono::Datelike;
use serde::Serialize;

use crate::display::format_span;
use crate::history::{BuildingFilter, HistoryEntry, HistoryRow};
use crate::reservation::Reservation;
use crate::window::DayWindow;
use crate::zone::CalendarZone;

/// Column headers of a building grid, after the day column.
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Reservations of one building for one year, laid out day (row) by month
/// (column).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearGrid {
    pub building: String,
    pub year: i32,
    /// `cells[day - 1][month - 1]`; 31 rows of 12 columns.
    pub cells: Vec<Vec<String>>,
}

impl YearGrid {
    /// Build the grid from reservations starting in `year`.
    ///
    /// Several reservations on the same day are joined with `", "` in start
    /// order. Cells always show the explicit time range, never "All Day".
    pub fn build(reservations: &[Reservation], year: i32, building: &str) -> Self {
        let mut cells = vec![vec![String::new(); 12]; 31];

        let mut in_year: Vec<&Reservation> =
            reservations.iter().filter(|r| r.start.year() == year).collect();
        in_year.sort_by_key(|r| r.start);

        for r in in_year {
            let cell = &mut cells[r.start.day0() as usize][r.start.month0() as usize];
            if !cell.is_empty() {
                cell.push_str(", ");
            }
            cell.push_str(&format_span(r.start, r.end));
        }

        Self {
            building: building.to_string(),
            year,
            cells,
        }
    }

    /// Cell for a 1-based day and month; empty outside the grid.
    pub fn cell(&self, day: u32, month: u32) -> &str {
        day.checked_sub(1)
            .zip(month.checked_sub(1))
            .and_then(|(d, m)| self.cells.get(d as usize)?.get(m as usize))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn title(&self) -> String {
        format!("{} Reservations", self.building)
    }
}

/// History rows whose reservation (or, failing that, the entry itself) falls
/// in `year`. Entries with no parseable time are left out.
pub fn history_rows_for_year(
    entries: &[HistoryEntry],
    year: i32,
    zone: &dyn CalendarZone,
    window: &DayWindow,
) -> Vec<HistoryRow> {
    entries
        .iter()
        .filter(|entry| entry.reference_time(zone).is_some_and(|t| t.year() == year))
        .map(|entry| HistoryRow::from_entry(entry, zone, window))
        .collect()
}

/// A whole yearly export: one grid per building plus the history rows of the
/// year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearExport {
    pub year: i32,
    pub grids: Vec<YearGrid>,
    pub history: Vec<HistoryRow>,
}

impl YearExport {
    /// One grid per entry of `buildings`, each holding only that building's
    /// reservations. History starts empty; see [`YearExport::with_history`].
    pub fn build(reservations: &[Reservation], year: i32, buildings: &[String]) -> Self {
        let grids = buildings
            .iter()
            .map(|building| {
                let own: Vec<Reservation> = reservations
                    .iter()
                    .filter(|r| &r.building == building)
                    .cloned()
                    .collect();
                YearGrid::build(&own, year, building)
            })
            .collect();

        Self {
            year,
            grids,
            history: Vec::new(),
        }
    }

    /// Attach the year's history rows for the buildings `filter` selects.
    pub fn with_history(
        mut self,
        entries: &[HistoryEntry],
        filter: &BuildingFilter,
        zone: &dyn CalendarZone,
        window: &DayWindow,
    ) -> Self {
        let selected: Vec<HistoryEntry> = entries
            .iter()
            .filter(|entry| filter.matches(entry.details().building.as_deref().unwrap_or_default()))
            .cloned()
            .collect();
        self.history = history_rows_for_year(&selected, self.year, zone, window);
        self
    }

    /// Grid of one building, if it was exported.
    pub fn grid(&self, building: &str) -> Option<&YearGrid> {
        self.grids.iter().find(|g| g.building == building)
    }
}
