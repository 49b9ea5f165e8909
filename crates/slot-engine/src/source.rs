//! The reservation source -- the service that owns reservations.
//!
//! The evaluator only ever reads a snapshot from it. Writes go straight to
//! the source; the caller re-reads and re-evaluates afterwards.

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::error::{Result, SlotError};
use crate::history::{BuildingFilter, HistoryAction, HistoryEntry};
use crate::reservation::{NewReservation, ReservationRecord};
use crate::session::Session;

/// Read/write contract of the reservation service, keyed by reservation id.
pub trait ReservationSource {
    /// Snapshot of every reservation in `building`.
    fn list(&self, building: &str) -> Result<Vec<ReservationRecord>>;

    /// Store a new reservation and return its id.
    fn create(&mut self, reservation: NewReservation) -> Result<String>;

    /// Replace the reservation stored under `id`.
    fn update(&mut self, id: &str, reservation: NewReservation) -> Result<()>;

    /// Remove the reservation stored under `id` on behalf of `session`.
    fn delete(&mut self, id: &str, session: &Session) -> Result<()>;

    /// Audit trail, oldest first.
    fn history(&self, filter: &BuildingFilter) -> Result<Vec<HistoryEntry>>;
}

/// In-process source keeping reservations and their history in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    records: Vec<ReservationRecord>,
    history: Vec<HistoryEntry>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with existing records. Seeding does not write history.
    pub fn with_records(records: Vec<ReservationRecord>) -> Self {
        Self {
            records,
            history: Vec::new(),
        }
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| SlotError::NotFound(id.to_string()))
    }

    fn record_history(&mut self, action: HistoryAction, record: &ReservationRecord, user_name: &str) {
        self.history.push(HistoryEntry {
            event_id: record.id.clone(),
            action,
            timestamp: Utc::now().to_rfc3339(),
            user_name: Some(user_name.to_string()),
            event_details: serde_json::to_string(record).ok(),
        });
    }
}

impl ReservationSource for MemorySource {
    fn list(&self, building: &str) -> Result<Vec<ReservationRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.building == building)
            .cloned()
            .collect())
    }

    fn create(&mut self, reservation: NewReservation) -> Result<String> {
        let id = Uuid::new_v4().to_string();
        let user_name = reservation.user_name.clone();
        let record = reservation.into_record(id.clone());
        info!(%id, building = %record.building, "reservation created");
        self.record_history(HistoryAction::Create, &record, &user_name);
        self.records.push(record);
        Ok(id)
    }

    fn update(&mut self, id: &str, reservation: NewReservation) -> Result<()> {
        let index = self.position(id)?;
        let user_name = reservation.user_name.clone();
        let record = reservation.into_record(id);
        info!(%id, "reservation updated");
        self.record_history(HistoryAction::Update, &record, &user_name);
        self.records[index] = record;
        Ok(())
    }

    fn delete(&mut self, id: &str, session: &Session) -> Result<()> {
        let index = self.position(id)?;
        let record = self.records.remove(index);
        info!(%id, "reservation deleted");
        self.record_history(HistoryAction::Delete, &record, &session.user_name);
        Ok(())
    }

    fn history(&self, filter: &BuildingFilter) -> Result<Vec<HistoryEntry>> {
        Ok(self
            .history
            .iter()
            .filter(|entry| filter.matches(entry.details().building.as_deref().unwrap_or_default()))
            .cloned()
            .collect())
    }
}
