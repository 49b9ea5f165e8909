//! Validation of a user-entered slot before anything is written.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use tracing::debug;

use crate::error::ValidationError;
use crate::window::DayWindow;

/// A slot that passed validation, anchored to the selected day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotRequest {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub all_day: bool,
}

/// Parse a picker label (`"h:mm AM"` / `"h:mm PM"`) into a 24-hour time.
///
/// The period is case-insensitive and the space before it optional.
pub fn parse_time_label(label: &str) -> Result<NaiveTime, ValidationError> {
    let invalid = || ValidationError::UnparseableTime(label.to_string());

    let upper = label.trim().to_ascii_uppercase();
    let (clock, is_pm) = if let Some(rest) = upper.strip_suffix("PM") {
        (rest.trim_end(), true)
    } else if let Some(rest) = upper.strip_suffix("AM") {
        (rest.trim_end(), false)
    } else {
        return Err(invalid());
    };

    let (hour, minute) = clock.split_once(':').ok_or_else(invalid)?;
    let digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !(1..=2).contains(&hour.len()) || minute.len() != 2 || !digits(hour) || !digits(minute) {
        return Err(invalid());
    }
    let hour: u32 = hour.parse().map_err(|_| invalid())?;
    let minute: u32 = minute.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&hour) {
        return Err(invalid());
    }

    let hour24 = match (hour, is_pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, false) => h,
        (h, true) => h + 12,
    };
    NaiveTime::from_hms_opt(hour24, minute, 0).ok_or_else(invalid)
}

/// Validate a new or edited slot on `day`.
///
/// All-day slots take the window bounds and are always valid. Timed slots
/// must start no earlier than `window.start`, end no later than `window.end`,
/// and end strictly after they start.
pub fn validate_new_slot(
    day: NaiveDate,
    start_label: &str,
    end_label: &str,
    all_day: bool,
    window: &DayWindow,
) -> Result<SlotRequest, ValidationError> {
    if all_day {
        return Ok(SlotRequest {
            start: window.start_on(day),
            end: window.end_on(day),
            all_day: true,
        });
    }

    let start = parse_time_label(start_label)?;
    let end = parse_time_label(end_label)?;

    if start < window.start || end > window.end {
        debug!(%day, %start, %end, "slot rejected: outside allowed window");
        return Err(ValidationError::OutsideWindow { window: *window });
    }
    if end <= start {
        debug!(%day, %start, %end, "slot rejected: end not after start");
        return Err(ValidationError::EndNotAfterStart);
    }

    Ok(SlotRequest {
        start: day.and_time(start),
        end: day.and_time(end),
        all_day: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn parses_picker_labels() {
        assert_eq!(parse_time_label("9:00 AM").unwrap(), t(9, 0));
        assert_eq!(parse_time_label("12:00 AM").unwrap(), t(0, 0));
        assert_eq!(parse_time_label("12:30 PM").unwrap(), t(12, 30));
        assert_eq!(parse_time_label(" 11:00 pm ").unwrap(), t(23, 0));
        assert_eq!(parse_time_label("2:15PM").unwrap(), t(14, 15));
    }

    #[test]
    fn rejects_malformed_labels() {
        for bad in [
            "", "9:00", "13:00 PM", "0:30 AM", "9:0 AM", "9:60 AM", "nine AM", "9-00 AM", "9:+5 AM", "+9:00 AM",
            "009:00 AM",
        ] {
            assert!(
                matches!(parse_time_label(bad), Err(ValidationError::UnparseableTime(_))),
                "expected {:?} to be rejected",
                bad
            );
        }
    }
}
