//! Reservation models.
//!
//! [`ReservationRecord`] mirrors the payload of the reservation service (raw
//! timestamp strings, camelCase keys). [`Reservation`] is the resolved form the
//! evaluator works on, with wall-clock timestamps in the caller's zone.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::session::Session;
use crate::slot::SlotRequest;
use crate::zone::{parse_timestamp, CalendarZone};

/// Wire format used when writing timestamps back to the service.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A reservation exactly as the reservation service returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRecord {
    pub id: String,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub building: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl ReservationRecord {
    /// Resolve both timestamps into local wall-clock time.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidTimestamp` if `start` or `end` is malformed.
    pub fn resolve(&self, zone: &dyn CalendarZone) -> Result<Reservation> {
        Ok(Reservation {
            id: self.id.clone(),
            start: parse_timestamp(&self.start, zone)?,
            end: parse_timestamp(&self.end, zone)?,
            building: self.building.clone(),
            owner_name: self.owner_name.clone(),
            user_name: self.user_name.clone(),
        })
    }
}

/// A reservation with resolved wall-clock bounds. `start < end` is assumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub id: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub building: String,
    pub owner_name: Option<String>,
    pub user_name: Option<String>,
}

impl Reservation {
    /// A bare reservation with no building or attribution.
    pub fn new(id: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            id: id.into(),
            start,
            end,
            building: String::new(),
            owner_name: None,
            user_name: None,
        }
    }

    /// Name shown in the owner column: owner, then the booking user, then "N/A".
    pub fn display_owner(&self) -> &str {
        non_blank(self.owner_name.as_deref())
            .or_else(|| non_blank(self.user_name.as_deref()))
            .unwrap_or("N/A")
    }
}

/// Payload for creating or updating a reservation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReservation {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub building: String,
    pub owner_name: String,
    pub user_id: String,
    pub user_name: String,
}

impl NewReservation {
    /// Build a write payload from a validated slot.
    ///
    /// A blank `owner` falls back to the signed-in user's name.
    pub fn from_slot(slot: &SlotRequest, building: &str, owner: &str, session: &Session) -> Self {
        let owner = owner.trim();
        Self {
            start: slot.start,
            end: slot.end,
            building: building.to_string(),
            owner_name: if owner.is_empty() {
                session.default_owner().to_string()
            } else {
                owner.to_string()
            },
            user_id: session.user_id.clone(),
            user_name: session.user_name.clone(),
        }
    }

    /// Service record for this payload under the given id.
    pub fn into_record(self, id: impl Into<String>) -> ReservationRecord {
        ReservationRecord {
            id: id.into(),
            start: self.start.format(TIMESTAMP_FORMAT).to_string(),
            end: self.end.format(TIMESTAMP_FORMAT).to_string(),
            building: self.building,
            owner_name: Some(self.owner_name),
            user_name: Some(self.user_name),
            user_id: Some(self.user_id),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}
