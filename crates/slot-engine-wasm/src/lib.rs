//! WASM bindings for slot-engine.
//!
//! Exposes day filtering, full-coverage detection, labels and slot validation
//! to the browser UI via `wasm-bindgen`. Reservation snapshots cross the
//! boundary as JSON strings in the reservation service's own format.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/slot_engine_wasm.wasm
//! ```
//!
//! `legacy` selects the 00:00–23:59 window instead of 08:00–23:00.

use chrono::NaiveDate;
use serde::Serialize;
use slot_engine::display::format_raw_range;
use slot_engine::zone::parse_timestamp;
use slot_engine::{
    is_all_day, time_options, validate_new_slot, CalendarZone, DayStatus, DayWindow, Floating, Reservation,
    ReservationRecord, Zoned,
};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

/// Outcome of `validateNewSlot`. Failures are values, never exceptions.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SlotOutcomeDto {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    all_day: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DayStatusDto {
    status: DayStatus,
    tile_class: Option<&'static str>,
    can_add: bool,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn window(legacy: bool) -> DayWindow {
    if legacy {
        DayWindow::LEGACY
    } else {
        DayWindow::STANDARD
    }
}

fn zone(timezone: Option<&str>) -> Result<Box<dyn CalendarZone>, String> {
    match timezone {
        Some(name) => Zoned::from_name(name)
            .map(|z| Box::new(z) as Box<dyn CalendarZone>)
            .map_err(|e| e.to_string()),
        None => Ok(Box::new(Floating)),
    }
}

fn parse_day(day: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(day, "%Y-%m-%d").map_err(|e| format!("Invalid day '{}': {}", day, e))
}

/// Parse a JSON array of records, keeping each record next to its resolved
/// form. Malformed records are dropped, matching the day view.
fn parse_records(json: &str, zone: &dyn CalendarZone) -> Result<Vec<(ReservationRecord, Reservation)>, String> {
    let records: Vec<ReservationRecord> =
        serde_json::from_str(json).map_err(|e| format!("Invalid reservations JSON: {}", e))?;
    Ok(records
        .into_iter()
        .filter_map(|record| record.resolve(zone).ok().map(|resolved| (record, resolved)))
        .collect())
}

fn on_day(
    json: &str,
    day: &str,
    timezone: Option<&str>,
) -> Result<(NaiveDate, Vec<(ReservationRecord, Reservation)>), String> {
    let zone = zone(timezone)?;
    let day = parse_day(day)?;
    let mut pairs: Vec<(ReservationRecord, Reservation)> = parse_records(json, zone.as_ref())?
        .into_iter()
        .filter(|(_, r)| r.start.date() == day)
        .collect();
    pairs.sort_by_key(|(_, r)| r.start);
    Ok((day, pairs))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

// ---------------------------------------------------------------------------
// Boundary-free implementations (testable without a JS host)
// ---------------------------------------------------------------------------

fn reservations_on_day_impl(json: &str, day: &str, timezone: Option<&str>) -> Result<String, String> {
    let (_, pairs) = on_day(json, day, timezone)?;
    let records: Vec<ReservationRecord> = pairs.into_iter().map(|(record, _)| record).collect();
    to_json(&records)
}

fn is_fully_booked_impl(json: &str, day: &str, legacy: bool, timezone: Option<&str>) -> Result<bool, String> {
    let (day, pairs) = on_day(json, day, timezone)?;
    let reservations: Vec<Reservation> = pairs.into_iter().map(|(_, r)| r).collect();
    Ok(slot_engine::is_fully_booked(&reservations, day, &window(legacy)))
}

fn day_status_impl(json: &str, day: &str, legacy: bool, timezone: Option<&str>) -> Result<String, String> {
    let (day, pairs) = on_day(json, day, timezone)?;
    let reservations: Vec<Reservation> = pairs.into_iter().map(|(_, r)| r).collect();
    let status = slot_engine::day_status(&reservations, day, &window(legacy));
    to_json(&DayStatusDto {
        status,
        tile_class: status.tile_class(),
        can_add: status.can_add_reservation(),
    })
}

fn is_all_day_impl(start: &str, end: &str, legacy: bool, timezone: Option<&str>) -> Result<bool, String> {
    let zone = zone(timezone)?;
    let start = parse_timestamp(start, zone.as_ref()).map_err(|e| e.to_string())?;
    let end = parse_timestamp(end, zone.as_ref()).map_err(|e| e.to_string())?;
    Ok(is_all_day(&Reservation::new("", start, end), &window(legacy)))
}

fn format_time_range_impl(start: &str, end: &str, legacy: bool, timezone: Option<&str>) -> Result<String, String> {
    let zone = zone(timezone)?;
    Ok(format_raw_range(start, end, zone.as_ref(), &window(legacy)))
}

fn validate_new_slot_impl(day: &str, start: &str, end: &str, all_day: bool, legacy: bool) -> Result<String, String> {
    let day = parse_day(day)?;
    let outcome = match validate_new_slot(day, start, end, all_day, &window(legacy)) {
        Ok(slot) => SlotOutcomeDto {
            ok: true,
            start: Some(slot.start.format(slot_engine::reservation::TIMESTAMP_FORMAT).to_string()),
            end: Some(slot.end.format(slot_engine::reservation::TIMESTAMP_FORMAT).to_string()),
            all_day: Some(slot.all_day),
            error: None,
        },
        Err(e) => SlotOutcomeDto {
            ok: false,
            start: None,
            end: None,
            all_day: None,
            error: Some(e.to_string()),
        },
    };
    to_json(&outcome)
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Reservations starting on `day` (`YYYY-MM-DD`), sorted by start.
///
/// `reservations_json` is the service's JSON array; the matching records are
/// returned unchanged as a JSON array.
#[wasm_bindgen(js_name = "reservationsOnDay")]
pub fn reservations_on_day(
    reservations_json: &str,
    day: &str,
    timezone: Option<String>,
) -> Result<String, JsValue> {
    reservations_on_day_impl(reservations_json, day, timezone.as_deref()).map_err(|e| JsValue::from_str(&e))
}

/// Whether the reservations of `day` cover the whole window with no gaps.
#[wasm_bindgen(js_name = "isFullyBooked")]
pub fn is_fully_booked(
    reservations_json: &str,
    day: &str,
    legacy: bool,
    timezone: Option<String>,
) -> Result<bool, JsValue> {
    is_fully_booked_impl(reservations_json, day, legacy, timezone.as_deref()).map_err(|e| JsValue::from_str(&e))
}

/// `{status, tileClass, canAdd}` for a calendar tile.
#[wasm_bindgen(js_name = "dayStatus")]
pub fn day_status(
    reservations_json: &str,
    day: &str,
    legacy: bool,
    timezone: Option<String>,
) -> Result<String, JsValue> {
    day_status_impl(reservations_json, day, legacy, timezone.as_deref()).map_err(|e| JsValue::from_str(&e))
}

/// Whether a reservation spans exactly the window.
#[wasm_bindgen(js_name = "isAllDay")]
pub fn is_all_day_js(start: &str, end: &str, legacy: bool, timezone: Option<String>) -> Result<bool, JsValue> {
    is_all_day_impl(start, end, legacy, timezone.as_deref()).map_err(|e| JsValue::from_str(&e))
}

/// `"All Day"`, `"2:00 PM - 5:00 PM"`, or `"Invalid Time"` for malformed
/// timestamps. Fails only on an unknown timezone name.
#[wasm_bindgen(js_name = "formatTimeRange")]
pub fn format_time_range(
    start: &str,
    end: &str,
    legacy: bool,
    timezone: Option<String>,
) -> Result<String, JsValue> {
    format_time_range_impl(start, end, legacy, timezone.as_deref()).map_err(|e| JsValue::from_str(&e))
}

/// Validate a booking form. Returns `{ok, start, end, allDay}` or
/// `{ok: false, error}` as JSON.
#[wasm_bindgen(js_name = "validateNewSlot")]
pub fn validate_slot(day: &str, start: &str, end: &str, all_day: bool, legacy: bool) -> Result<String, JsValue> {
    validate_new_slot_impl(day, start, end, all_day, legacy).map_err(|e| JsValue::from_str(&e))
}

/// Time picker labels as a JSON array.
#[wasm_bindgen(js_name = "timeOptions")]
pub fn time_options_js(legacy: bool, step_minutes: u32) -> Result<String, JsValue> {
    to_json(&time_options(&window(legacy), step_minutes)).map_err(|e| JsValue::from_str(&e))
}
