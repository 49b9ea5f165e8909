//! Detect existing reservations that a candidate slot would overlap.
//!
//! Touching slots (one ends exactly when the other starts) are NOT conflicts.

use serde::Serialize;

use crate::reservation::Reservation;
use crate::slot::SlotRequest;

/// An existing reservation overlapping the candidate slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conflict {
    pub reservation_id: String,
    pub overlap_minutes: i64,
}

/// Find reservations in `existing` that overlap `candidate`.
///
/// `editing_id` names the reservation being edited, which never conflicts
/// with its own new bounds.
pub fn find_conflicts(
    existing: &[Reservation],
    candidate: &SlotRequest,
    editing_id: Option<&str>,
) -> Vec<Conflict> {
    existing
        .iter()
        .filter(|r| editing_id != Some(r.id.as_str()))
        // Two intervals overlap iff a.start < b.end AND b.start < a.end.
        .filter(|r| r.start < candidate.end && candidate.start < r.end)
        .map(|r| Conflict {
            reservation_id: r.id.clone(),
            overlap_minutes: (r.end.min(candidate.end) - r.start.max(candidate.start)).num_minutes(),
        })
        .collect()
}
