//! Error types for slot-engine operations.

use thiserror::Error;

use crate::window::DayWindow;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Reservation not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Rejections of a user-entered slot.
///
/// The `Display` output is the message shown inline next to the form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid time '{0}'. Use the h:mm AM/PM format.")]
    UnparseableTime(String),

    #[error("Reservations must fall within {window}.")]
    OutsideWindow { window: DayWindow },

    #[error("End time must be after start time.")]
    EndNotAfterStart,
}

pub type Result<T> = std::result::Result<T, SlotError>;
