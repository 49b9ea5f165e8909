//! # slot-engine
//!
//! Day availability for shared building reservations.
//!
//! Given a snapshot of reservations and a calendar day, the engine answers
//! which reservations fall on the day, whether they cover the whole bookable
//! window, how each one is labelled, and whether a user-entered slot is
//! acceptable. Everything is pure and synchronous; fetching the snapshot and
//! writing changes belong to the reservation service.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use slot_engine::{is_fully_booked, reservations_on_day, validate_new_slot, DayWindow, Reservation};
//!
//! let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let window = DayWindow::STANDARD;
//!
//! let slot = validate_new_slot(day, "8:00 AM", "11:00 PM", false, &window).unwrap();
//! let booked = vec![Reservation::new("r1", slot.start, slot.end)];
//!
//! let on_day = reservations_on_day(&booked, day);
//! assert!(is_fully_booked(&on_day, day, &window));
//! ```
//!
//! ## Modules
//!
//! - [`availability`]: day filtering, full-coverage check, day status
//! - [`display`]: "All Day" / `h:mm AM - h:mm PM` labels, picker options
//! - [`slot`]: validation of user-entered slots
//! - [`window`]: the bookable window policy
//! - [`zone`]: timestamp parsing and calendar-day mapping
//! - [`freebusy`]: remaining free gaps of a day
//! - [`conflict`]: overlaps between a candidate slot and existing ones
//! - [`schedule`]: per-day view over raw service records
//! - [`history`]: audit trail rows
//! - [`export`]: yearly day-by-month grids
//! - [`source`]: reservation service contract and in-memory source
//! - [`config`]: TOML configuration
//! - [`error`]: Error types

pub mod availability;
pub mod config;
pub mod conflict;
pub mod display;
pub mod error;
pub mod export;
pub mod freebusy;
pub mod history;
pub mod reservation;
pub mod schedule;
pub mod session;
pub mod slot;
pub mod source;
pub mod window;
pub mod zone;

pub use availability::{day_status, is_fully_booked, reservations_on_day, DayStatus};
pub use config::EngineConfig;
pub use conflict::find_conflicts;
pub use display::{format_clock, format_time_range, is_all_day, time_options};
pub use error::{SlotError, ValidationError};
pub use freebusy::free_gaps;
pub use reservation::{NewReservation, Reservation, ReservationRecord};
pub use schedule::DaySchedule;
pub use session::Session;
pub use slot::{validate_new_slot, SlotRequest};
pub use source::{MemorySource, ReservationSource};
pub use window::DayWindow;
pub use zone::{CalendarZone, Floating, Zoned};
