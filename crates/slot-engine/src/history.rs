//! Reservation history: the audit trail of creates, updates and deletes.
//!
//! The service stores each entry's reservation snapshot as a JSON string in
//! `eventDetails`. Entries are display data, so nothing here fails: missing
//! fields read as "N/A" and undecodable details behave like `{}`.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::display::{format_clock, format_raw_range, INVALID_TIME};
use crate::window::DayWindow;
use crate::zone::{parse_timestamp, CalendarZone};

const NOT_AVAILABLE: &str = "N/A";

/// Shown in the date column when the stored start does not parse.
pub const INVALID_DATE: &str = "Invalid Date";

/// What happened to a reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HistoryAction {
    Create,
    Update,
    Delete,
    Other(String),
}

impl HistoryAction {
    /// Past-tense label for the status column.
    pub fn label(&self) -> &str {
        match self {
            HistoryAction::Create => "Created",
            HistoryAction::Update => "Updated",
            HistoryAction::Delete => "Deleted",
            HistoryAction::Other(raw) => raw,
        }
    }
}

impl From<String> for HistoryAction {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "create" => HistoryAction::Create,
            "update" => HistoryAction::Update,
            "delete" => HistoryAction::Delete,
            _ => HistoryAction::Other(raw),
        }
    }
}

impl From<HistoryAction> for String {
    fn from(action: HistoryAction) -> Self {
        match action {
            HistoryAction::Create => "create".to_string(),
            HistoryAction::Update => "update".to_string(),
            HistoryAction::Delete => "delete".to_string(),
            HistoryAction::Other(raw) => raw,
        }
    }
}

impl fmt::Display for HistoryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One audit-trail entry as the service returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub event_id: String,
    pub action: HistoryAction,
    pub timestamp: String,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub event_details: Option<String>,
}

/// Reservation snapshot embedded in a history entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetails {
    #[serde(default)]
    pub building: Option<String>,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub owner_name: Option<String>,
}

impl HistoryEntry {
    /// Decode `eventDetails`; absent or undecodable details are empty.
    pub fn details(&self) -> EventDetails {
        self.event_details
            .as_deref()
            .and_then(|raw| serde_json::from_str(raw).ok())
            .unwrap_or_default()
    }

    /// Local time the entry refers to: the reservation start if present,
    /// else the entry's own timestamp.
    pub fn reference_time(&self, zone: &dyn CalendarZone) -> Option<NaiveDateTime> {
        let details = self.details();
        let raw = details.start.as_deref().unwrap_or(&self.timestamp);
        parse_timestamp(raw, zone).ok()
    }
}

/// Which building's entries to show.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BuildingFilter {
    #[default]
    All,
    Only(String),
}

impl BuildingFilter {
    /// `"All"` (or blank) selects everything, anything else one building.
    pub fn from_param(param: &str) -> Self {
        let param = param.trim();
        if param.is_empty() || param.eq_ignore_ascii_case("all") {
            BuildingFilter::All
        } else {
            BuildingFilter::Only(param.to_string())
        }
    }

    pub fn matches(&self, building: &str) -> bool {
        match self {
            BuildingFilter::All => true,
            BuildingFilter::Only(name) => name == building,
        }
    }
}

/// Display row of the history table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryRow {
    pub event_id: String,
    pub building: String,
    pub owner: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    /// Combined range, "All Day" aware.
    pub time: String,
    pub user_name: String,
    pub status: String,
}

impl HistoryRow {
    pub fn from_entry(entry: &HistoryEntry, zone: &dyn CalendarZone, window: &DayWindow) -> Self {
        let details = entry.details();
        let start = details.start.as_deref().map(|raw| parse_timestamp(raw, zone));
        let end = details.end.as_deref().map(|raw| parse_timestamp(raw, zone));

        let date = match &start {
            None => NOT_AVAILABLE.to_string(),
            Some(Ok(dt)) => dt.date().format("%Y-%m-%d").to_string(),
            Some(Err(_)) => INVALID_DATE.to_string(),
        };
        let clock = |parsed: &Option<crate::error::Result<NaiveDateTime>>| match parsed {
            None => NOT_AVAILABLE.to_string(),
            Some(Ok(dt)) => format_clock(dt.time()),
            Some(Err(_)) => INVALID_TIME.to_string(),
        };
        let time = match (details.start.as_deref(), details.end.as_deref()) {
            (Some(s), Some(e)) => format_raw_range(s, e, zone, window),
            _ => NOT_AVAILABLE.to_string(),
        };

        Self {
            event_id: entry.event_id.clone(),
            building: details.building.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            owner: details.owner_name.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            date,
            start_time: clock(&start),
            end_time: clock(&end),
            time,
            user_name: entry.user_name.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            status: entry.action.label().to_string(),
        }
    }
}

/// Rows for every entry matching `filter`, in input order.
pub fn history_rows(
    entries: &[HistoryEntry],
    filter: &BuildingFilter,
    zone: &dyn CalendarZone,
    window: &DayWindow,
) -> Vec<HistoryRow> {
    entries
        .iter()
        .filter(|entry| filter.matches(entry.details().building.as_deref().unwrap_or_default()))
        .map(|entry| HistoryRow::from_entry(entry, zone, window))
        .collect()
}
