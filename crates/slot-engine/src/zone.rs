//! Calendar zone abstraction -- how timestamps map onto local calendar days.
//!
//! The reservation service hands out ISO 8601 strings. Naive strings are
//! wall-clock readings and are used as-is. Strings carrying an offset are
//! converted into the zone injected by the caller, never into the process's
//! ambient locale.

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use chrono_tz::Tz;

use crate::error::{Result, SlotError};

/// Naive formats accepted for wall-clock timestamps, tried in order.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Maps instants onto local wall-clock time and calendar days.
pub trait CalendarZone {
    /// Local wall-clock reading of an offset-qualified instant.
    fn to_local(&self, instant: DateTime<FixedOffset>) -> NaiveDateTime;
}

/// Keeps every timestamp's own wall-clock reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Floating;

impl CalendarZone for Floating {
    fn to_local(&self, instant: DateTime<FixedOffset>) -> NaiveDateTime {
        instant.naive_local()
    }
}

/// Converts offset-qualified timestamps into an IANA timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zoned(pub Tz);

impl Zoned {
    /// Build from an IANA name such as `"America/Toronto"`.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidTimezone` for unknown names.
    pub fn from_name(name: &str) -> Result<Self> {
        name.parse::<Tz>()
            .map(Zoned)
            .map_err(|_| SlotError::InvalidTimezone(name.to_string()))
    }
}

impl CalendarZone for Zoned {
    fn to_local(&self, instant: DateTime<FixedOffset>) -> NaiveDateTime {
        instant.with_timezone(&self.0).naive_local()
    }
}

/// Parse an ISO 8601 timestamp into local wall-clock time.
///
/// RFC 3339 strings (with `Z` or an offset) go through `zone`; naive strings
/// are taken verbatim.
///
/// # Errors
/// Returns `SlotError::InvalidTimestamp` when no accepted format matches.
pub fn parse_timestamp(raw: &str, zone: &dyn CalendarZone) -> Result<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Ok(zone.to_local(instant));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .ok_or_else(|| SlotError::InvalidTimestamp(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn naive_timestamps_keep_wall_clock() {
        let local = parse_timestamp("2024-06-01T08:00:00", &Floating).unwrap();
        assert_eq!(local.hour(), 8);

        let zoned = Zoned::from_name("Asia/Tokyo").unwrap();
        let local = parse_timestamp("2024-06-01T08:00", &zoned).unwrap();
        assert_eq!(local.hour(), 8);
    }

    #[test]
    fn offset_timestamps_convert_into_zone() {
        let zoned = Zoned::from_name("America/Toronto").unwrap();
        // 03:30 UTC is still the previous evening in Toronto (UTC-4 in June).
        let local = parse_timestamp("2024-06-02T03:30:00Z", &zoned).unwrap();
        assert_eq!(local.date(), NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(local.hour(), 23);
        assert_eq!(local.minute(), 30);
    }

    #[test]
    fn floating_zone_keeps_offset_reading() {
        let local = parse_timestamp("2024-06-01T14:00:00+02:00", &Floating).unwrap();
        assert_eq!(local.hour(), 14);
    }

    #[test]
    fn malformed_timestamp_is_an_error() {
        let err = parse_timestamp("not a date", &Floating).unwrap_err();
        assert!(matches!(err, SlotError::InvalidTimestamp(_)));
    }

    #[test]
    fn unknown_timezone_is_an_error() {
        let err = Zoned::from_name("Mars/Olympus").unwrap_err();
        assert!(matches!(err, SlotError::InvalidTimezone(_)));
    }
}
