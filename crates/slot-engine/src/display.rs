//! Display labels for reservations and the time picker.

use chrono::{NaiveDateTime, NaiveTime, Timelike};

use crate::reservation::Reservation;
use crate::window::DayWindow;
use crate::zone::{parse_timestamp, CalendarZone};

/// Label for a reservation spanning the whole window.
pub const ALL_DAY: &str = "All Day";

/// Sentinel shown when a reservation's timestamps cannot be parsed.
pub const INVALID_TIME: &str = "Invalid Time";

/// Format a time of day as `h:mm AM` (no leading zero on the hour).
pub fn format_clock(time: NaiveTime) -> String {
    let (is_pm, hour) = time.hour12();
    format!("{}:{:02} {}", hour, time.minute(), if is_pm { "PM" } else { "AM" })
}

/// True iff the reservation starts exactly at `window.start` and ends exactly
/// at `window.end` (time of day only, seconds included).
pub fn is_all_day(reservation: &Reservation, window: &DayWindow) -> bool {
    reservation.start.time() == window.start && reservation.end.time() == window.end
}

/// `"All Day"` for all-day reservations, otherwise `"2:00 PM - 5:00 PM"`.
pub fn format_time_range(reservation: &Reservation, window: &DayWindow) -> String {
    if is_all_day(reservation, window) {
        ALL_DAY.to_string()
    } else {
        format_span(reservation.start, reservation.end)
    }
}

/// `"h:mm AM - h:mm PM"` without the all-day shortcut.
pub fn format_span(start: NaiveDateTime, end: NaiveDateTime) -> String {
    format!("{} - {}", format_clock(start.time()), format_clock(end.time()))
}

/// Format raw service timestamps, falling back to [`INVALID_TIME`] when
/// either bound does not parse.
pub fn format_raw_range(start: &str, end: &str, zone: &dyn CalendarZone, window: &DayWindow) -> String {
    match (parse_timestamp(start, zone), parse_timestamp(end, zone)) {
        (Ok(start), Ok(end)) => {
            let reservation = Reservation::new("", start, end);
            format_time_range(&reservation, window)
        }
        _ => INVALID_TIME.to_string(),
    }
}

/// Picker labels from `window.start` to `window.end` inclusive, every
/// `step_minutes`. A zero step yields no options.
pub fn time_options(window: &DayWindow, step_minutes: u32) -> Vec<String> {
    if step_minutes == 0 {
        return Vec::new();
    }
    let first = window.start.num_seconds_from_midnight() / 60;
    let last = window.end.num_seconds_from_midnight() / 60;

    (first..=last)
        .step_by(step_minutes as usize)
        .filter_map(|minute| NaiveTime::from_num_seconds_from_midnight_opt(minute * 60, 0))
        .map(format_clock)
        .collect()
}
