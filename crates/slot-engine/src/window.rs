//! The bookable window of a day.
//!
//! Two policies have been used for "the whole day": 08:00–23:00 (current)
//! and 00:00–23:59 (older). Neither is hardcoded in the evaluator; callers
//! pass a [`DayWindow`] so the policy is always explicit.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::display::format_clock;

const fn hm(hour: u32, minute: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(hour, minute, 0) {
        Some(t) => t,
        None => panic!("invalid window bound"),
    }
}

/// Allowed booking window within one calendar day. Both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayWindow {
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
}

impl DayWindow {
    /// 08:00 to 23:00.
    pub const STANDARD: DayWindow = DayWindow {
        start: hm(8, 0),
        end: hm(23, 0),
    };

    /// 00:00 to 23:59.
    pub const LEGACY: DayWindow = DayWindow {
        start: hm(0, 0),
        end: hm(23, 59),
    };

    /// The window's opening instant on `day`.
    pub fn start_on(&self, day: NaiveDate) -> NaiveDateTime {
        day.and_time(self.start)
    }

    /// The window's closing instant on `day`.
    pub fn end_on(&self, day: NaiveDate) -> NaiveDateTime {
        day.and_time(self.end)
    }

    /// Whether a time-of-day lies inside the window, bounds included.
    pub fn contains(&self, time: NaiveTime) -> bool {
        self.start <= time && time <= self.end
    }

    /// Length of the window in minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    pub fn is_valid(&self) -> bool {
        self.start < self.end
    }
}

impl Default for DayWindow {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl fmt::Display for DayWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", format_clock(self.start), format_clock(self.end))
    }
}

/// `HH:MM` (seconds optional) serde representation for window bounds.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M:%S"))
            .map_err(|e| de::Error::custom(format!("invalid time '{}': {}", raw, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_window_bounds() {
        let w = DayWindow::STANDARD;
        assert_eq!(w.start, NaiveTime::from_hms_opt(8, 0, 0).unwrap());
        assert_eq!(w.end, NaiveTime::from_hms_opt(23, 0, 0).unwrap());
        assert_eq!(w.duration_minutes(), 15 * 60);
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let w = DayWindow::STANDARD;
        assert!(w.contains(w.start));
        assert!(w.contains(w.end));
        assert!(!w.contains(NaiveTime::from_hms_opt(23, 0, 1).unwrap()));
        assert!(!w.contains(NaiveTime::from_hms_opt(7, 59, 0).unwrap()));
    }

    #[test]
    fn display_uses_twelve_hour_labels() {
        assert_eq!(DayWindow::STANDARD.to_string(), "8:00 AM - 11:00 PM");
        assert_eq!(DayWindow::LEGACY.to_string(), "12:00 AM - 11:59 PM");
    }

    #[test]
    fn deserializes_from_hh_mm() {
        let w: DayWindow = serde_json::from_str(r#"{"start":"00:00","end":"23:59"}"#).unwrap();
        assert_eq!(w, DayWindow::LEGACY);
    }
}
