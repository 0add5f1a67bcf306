//! # Error Types
//!
//! Domain-specific error types for reservease-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  reservease-core errors (this file)                                    │
//! │  ├── CoreError        - Booking, table and menu rule violations        │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  reservease app errors (separate crate)                                │
//! │  ├── ConfigError      - Config file / environment problems             │
//! │  └── ApiError         - What the frontend sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Frontend               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Most store operations are total and never produce these errors; lookups
//! of unknown ids return `None`. Errors only come from the checked booking
//! path and from form validation.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Booking rule errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Reservation id does not exist.
    #[error("Reservation not found: {0}")]
    ReservationNotFound(String),

    /// Table id does not exist.
    #[error("Table not found: {0}")]
    TableNotFound(String),

    /// Table cannot seat the party.
    #[error("Table {table_id} seats {capacity}, party of {guests} requested")]
    TableTooSmall {
        table_id: String,
        capacity: u32,
        guests: u32,
    },

    /// Another confirmed reservation already holds the table for the slot.
    ///
    /// ## User Workflow
    /// ```text
    /// Guest A and guest B both pick Table 3 for 19:00
    ///      │
    ///      ▼
    /// A submits first ──► confirmed
    ///      │
    ///      ▼
    /// B submits ──► TableUnavailable { table_id: "3", .. }
    ///      │
    ///      ▼
    /// Wizard returns B to the table step
    /// ```
    #[error("Table {table_id} is already booked on {date} at {time}")]
    TableUnavailable {
        table_id: String,
        date: String,
        time: String,
    },

    /// Another table already uses this number.
    #[error("Table {0} already exists")]
    DuplicateTable(String),

    /// Table still holds confirmed reservations.
    #[error("Table {0} still has confirmed reservations")]
    TableInUse(String),

    /// Menu item id does not exist.
    #[error("Menu item not found: {0}")]
    MenuItemNotFound(String),

    /// Time slot is unknown or closed for booking.
    #[error("Time slot {0} is not available")]
    SlotUnavailable(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These surface as per-field messages in the booking form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// A choice (date, time, table) has not been made.
    #[error("Please select a {field}")]
    NotSelected { field: String },

    /// A typed-in value (party size) has not been entered.
    #[error("Please enter {field}")]
    NotEntered { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., malformed email, unparsable date).
    #[error("Please enter a valid {field}")]
    InvalidFormat { field: String, reason: String },

    /// A date that already lies behind us.
    #[error("{field} cannot be in the past")]
    InPast { field: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
