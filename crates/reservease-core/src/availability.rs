//! # Availability
//!
//! Which tables can take a party at a given date and time.
//!
//! ## Occupancy Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Table T is AVAILABLE for (date, time, party) when                      │
//! │                                                                         │
//! │    T.capacity >= party                                                 │
//! │        AND                                                              │
//! │    no reservation R with                                               │
//! │        R.table_id == T.id                                              │
//! │        R.date == date, R.time == time                                  │
//! │        R.status == confirmed                                           │
//! │                                                                         │
//! │  Pending and cancelled reservations never block a table.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is a pure function over slices. The store owns the
//! collections and delegates to these functions.

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveTime};

use crate::error::{CoreError, CoreResult};
use crate::types::{format_slot_time, Reservation, Table, TableAvailability, TimeSlot};
use crate::validation::{validate_not_past, validate_party_size};
use crate::MAX_PARTY_SIZE;

// =============================================================================
// Booking Policy
// =============================================================================

/// Limits every checked booking respects, whatever table it asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingPolicy {
    pub max_party_size: u32,
    /// First bookable date, normally the current day. `None` accepts any date.
    pub earliest_date: Option<NaiveDate>,
}

impl Default for BookingPolicy {
    fn default() -> Self {
        BookingPolicy {
            max_party_size: MAX_PARTY_SIZE,
            earliest_date: None,
        }
    }
}

impl BookingPolicy {
    /// Party size in `1..=max_party_size`.
    pub fn check_party_size(&self, guests: u32) -> CoreResult<()> {
        Ok(validate_party_size(guests, self.max_party_size)?)
    }

    /// Date not before `earliest_date`.
    pub fn check_date(&self, date: NaiveDate) -> CoreResult<()> {
        match self.earliest_date {
            Some(earliest) => Ok(validate_not_past(date, earliest)?),
            None => Ok(()),
        }
    }
}

/// The open schedule slot at `time`.
///
/// Unknown times and slots closed on the schedule are `SlotUnavailable`.
pub fn check_slot(slots: &[TimeSlot], time: NaiveTime) -> CoreResult<&TimeSlot> {
    slots
        .iter()
        .find(|s| s.time == time && s.available)
        .ok_or_else(|| CoreError::SlotUnavailable(format_slot_time(time)))
}

// =============================================================================
// Table Availability
// =============================================================================

/// Ids of tables held by a confirmed reservation at (date, time).
pub fn occupied_table_ids(
    reservations: &[Reservation],
    date: NaiveDate,
    time: NaiveTime,
) -> HashSet<&str> {
    reservations
        .iter()
        .filter(|r| r.status.occupies_table() && r.is_at(date, time))
        .map(|r| r.table_id.as_str())
        .collect()
}

/// Tables that seat `party_size` and are not held at (date, time).
///
/// Order follows the table list.
pub fn available_tables(
    tables: &[Table],
    reservations: &[Reservation],
    date: NaiveDate,
    time: NaiveTime,
    party_size: u32,
) -> Vec<Table> {
    let occupied = occupied_table_ids(reservations, date, time);

    tables
        .iter()
        .filter(|t| t.seats(party_size) && !occupied.contains(t.id.as_str()))
        .cloned()
        .collect()
}

/// Every table with its derived availability for (date, time, party).
pub fn table_availability(
    tables: &[Table],
    reservations: &[Reservation],
    date: NaiveDate,
    time: NaiveTime,
    party_size: u32,
) -> Vec<TableAvailability> {
    let occupied = occupied_table_ids(reservations, date, time);

    tables
        .iter()
        .map(|t| TableAvailability {
            available: t.seats(party_size) && !occupied.contains(t.id.as_str()),
            table: t.clone(),
        })
        .collect()
}

/// Whether a confirmed reservation other than `exclude_id` holds `table_id`
/// at (date, time).
pub fn has_conflict(
    reservations: &[Reservation],
    table_id: &str,
    date: NaiveDate,
    time: NaiveTime,
    exclude_id: Option<&str>,
) -> bool {
    reservations
        .iter()
        .filter(|r| exclude_id != Some(r.id.as_str()))
        .any(|r| r.occupies(table_id, date, time))
}

/// True when no confirmed reservation references the table, at any time.
pub fn is_table_free(reservations: &[Reservation], table_id: &str) -> bool {
    !reservations
        .iter()
        .any(|r| r.status.occupies_table() && r.table_id == table_id)
}

/// Slots that are open on the schedule and still have a fitting free table.
pub fn open_time_slots(
    slots: &[TimeSlot],
    tables: &[Table],
    reservations: &[Reservation],
    date: NaiveDate,
    party_size: u32,
) -> Vec<TimeSlot> {
    slots
        .iter()
        .filter(|s| s.available)
        .filter(|s| {
            let occupied = occupied_table_ids(reservations, date, s.time);
            tables
                .iter()
                .any(|t| t.seats(party_size) && !occupied.contains(t.id.as_str()))
        })
        .cloned()
        .collect()
}

/// Checks that a table can take a booking.
///
/// ## Checks (in order)
/// 1. The table exists → `TableNotFound`
/// 2. It seats the party → `TableTooSmall`
/// 3. No confirmed reservation other than `exclude_id` holds it at
///    (date, time) → `TableUnavailable`
pub fn check_bookable<'a>(
    tables: &'a [Table],
    reservations: &[Reservation],
    table_id: &str,
    date: NaiveDate,
    time: NaiveTime,
    party_size: u32,
    exclude_id: Option<&str>,
) -> CoreResult<&'a Table> {
    let table = tables
        .iter()
        .find(|t| t.id == table_id)
        .ok_or_else(|| CoreError::TableNotFound(table_id.to_string()))?;

    if !table.seats(party_size) {
        return Err(CoreError::TableTooSmall {
            table_id: table.id.clone(),
            capacity: table.capacity,
            guests: party_size,
        });
    }

    if has_conflict(reservations, table_id, date, time, exclude_id) {
        return Err(CoreError::TableUnavailable {
            table_id: table.id.clone(),
            date: date.to_string(),
            time: format_slot_time(time),
        });
    }

    Ok(table)
}
