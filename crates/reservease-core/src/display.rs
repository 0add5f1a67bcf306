//! # Display Helpers
//!
//! Badges, labels and per-card view models the UI renders directly.
//!
//! ## Reservation Card
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  Anna Schmidt                [Confirmed] │
//! │  Res. #174428                            │
//! │                                          │
//! │  Tue, Apr 15, 2025                       │
//! │  19:00                                   │
//! │  2 guests                                │
//! │  Table 1                                 │
//! │                                          │
//! │  [Edit]  [Cancel]                        │  ← cancelled cards: [Delete]
//! └──────────────────────────────────────────┘
//! ```

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{
    format_slot_time, Reservation, ReservationStatus, TableAvailability, TableLocation, TimeSlot,
};

// =============================================================================
// Status Badge
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum BadgeVariant {
    Success,
    Warning,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StatusBadge {
    pub variant: BadgeVariant,
    pub label: String,
}

pub fn status_badge(status: ReservationStatus) -> StatusBadge {
    let (variant, label) = match status {
        ReservationStatus::Confirmed => (BadgeVariant::Success, "Confirmed"),
        ReservationStatus::Pending => (BadgeVariant::Warning, "Pending"),
        ReservationStatus::Cancelled => (BadgeVariant::Danger, "Cancelled"),
    };
    StatusBadge {
        variant,
        label: label.to_string(),
    }
}

// =============================================================================
// Labels
// =============================================================================

/// Capitalized location name for the selector legend.
pub fn location_label(location: TableLocation) -> &'static str {
    match location {
        TableLocation::Window => "Window",
        TableLocation::Center => "Center",
        TableLocation::Bar => "Bar",
        TableLocation::Outdoor => "Outdoor",
        TableLocation::Private => "Private",
    }
}

/// "Tuesday, April 15, 2025"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// "Tue, Apr 15, 2025"
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d, %Y").to_string()
}

pub fn guests_label(guests: u32) -> String {
    format!("{} guests", guests)
}

// =============================================================================
// Reservation Card
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CardAction {
    Edit,
    Cancel,
    Delete,
}

/// Active reservations can be edited or cancelled; cancelled ones can only
/// be deleted.
pub fn card_actions(status: ReservationStatus) -> Vec<CardAction> {
    match status {
        ReservationStatus::Cancelled => vec![CardAction::Delete],
        _ => vec![CardAction::Edit, CardAction::Cancel],
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ReservationCard {
    pub id: String,
    /// "Res. #174428"
    pub reference: String,
    pub customer_name: String,
    pub date_label: String,
    pub time_label: String,
    pub guests_label: String,
    pub table_label: String,
    pub badge: StatusBadge,
    pub actions: Vec<CardAction>,
}

impl ReservationCard {
    pub fn from_reservation(r: &Reservation) -> Self {
        ReservationCard {
            id: r.id.clone(),
            reference: format!("Res. #{}", r.short_ref()),
            customer_name: r.customer_name.clone(),
            date_label: format_short_date(r.date),
            time_label: format_slot_time(r.time),
            guests_label: guests_label(r.guests),
            table_label: format!("Table {}", r.table_id),
            badge: status_badge(r.status),
            actions: card_actions(r.status),
        }
    }
}

// =============================================================================
// Selectors
// =============================================================================

/// One button of the time-slot picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SlotButton {
    pub id: String,
    pub label: String,
    pub selected: bool,
    pub disabled: bool,
}

/// Buttons for the whole schedule.
///
/// Closed slots are always disabled. When `open` is given (the slots that
/// still have a fitting free table), every slot missing from it is disabled
/// as well.
pub fn slot_buttons(
    slots: &[TimeSlot],
    open: Option<&[TimeSlot]>,
    selected: Option<NaiveTime>,
) -> Vec<SlotButton> {
    slots
        .iter()
        .map(|s| {
            let full = open.is_some_and(|open| !open.iter().any(|o| o.time == s.time));
            SlotButton {
                id: s.id.clone(),
                label: s.label(),
                selected: selected == Some(s.time),
                disabled: !s.available || full,
            }
        })
        .collect()
}

/// One tile of the table selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TableTile {
    pub table_id: String,
    pub name: String,
    pub seats_label: String,
    pub location: TableLocation,
    pub selected: bool,
    /// Shown with a "Reserved" overlay and not clickable.
    pub reserved: bool,
}

pub fn table_tiles(tables: &[TableAvailability], selected: Option<&str>) -> Vec<TableTile> {
    tables
        .iter()
        .map(|t| TableTile {
            table_id: t.table.id.clone(),
            name: t.table.name.clone(),
            seats_label: format!("{} seats", t.table.capacity),
            location: t.table.location,
            selected: selected == Some(t.table.id.as_str()),
            reserved: !t.available,
        })
        .collect()
}
