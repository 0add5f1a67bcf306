//! # Domain Types
//!
//! Core domain types used throughout ReservEase.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  Reservation    │   │     Table       │   │    TimeSlot     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  customer_name  │──►│  name           │   │  time (HH:MM)   │       │
//! │  │  date, time     │   │  capacity       │   │  available      │       │
//! │  │  guests         │   │  location       │   └─────────────────┘       │
//! │  │  table_id       │   └─────────────────┘                             │
//! │  │  status         │                         ┌─────────────────┐       │
//! │  │  created_at     │                         │      User       │       │
//! │  └─────────────────┘                         │  id, name, role │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Occupancy Rule
//! A reservation holds its table for its (date, time) pair only while its
//! status is [`ReservationStatus::Confirmed`]. Tables carry no availability
//! flag of their own; see [`crate::availability`].

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::SHORT_REF_LEN;

// =============================================================================
// Slot Time Serialization
// =============================================================================

/// Serde adapter for slot times, which travel as `"HH:MM"`.
pub mod slot_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Wire format of a slot time.
    pub const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(raw.trim(), FORMAT).map_err(serde::de::Error::custom)
    }

    /// Same format for optional fields.
    pub mod option {
        use chrono::NaiveTime;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            time: &Option<NaiveTime>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match time {
                Some(t) => serializer.collect_str(&t.format(super::FORMAT)),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<NaiveTime>, D::Error> {
            let raw: Option<String> = Option::deserialize(deserializer)?;
            raw.map(|s| NaiveTime::parse_from_str(s.trim(), super::FORMAT))
                .transpose()
                .map_err(serde::de::Error::custom)
        }
    }
}

/// Formats a slot time the way it is shown and serialized (`19:00`).
pub fn format_slot_time(time: NaiveTime) -> String {
    time.format(slot_time::FORMAT).to_string()
}

// =============================================================================
// Reservation Status
// =============================================================================

/// The status of a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    /// Booking holds its table.
    #[default]
    Confirmed,
    /// Awaiting confirmation; does not hold a table.
    Pending,
    /// Cancelled by guest or staff; does not hold a table.
    Cancelled,
}

impl ReservationStatus {
    /// All statuses in display order.
    pub const ALL: [ReservationStatus; 3] = [
        ReservationStatus::Confirmed,
        ReservationStatus::Pending,
        ReservationStatus::Cancelled,
    ];

    /// Whether a reservation in this status occupies its table.
    #[inline]
    pub const fn occupies_table(&self) -> bool {
        matches!(self, ReservationStatus::Confirmed)
    }

    /// Lowercase wire name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::Pending => "pending",
            ReservationStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReservationStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "confirmed" => Ok(ReservationStatus::Confirmed),
            "pending" => Ok(ReservationStatus::Pending),
            "cancelled" | "canceled" => Ok(ReservationStatus::Cancelled),
            _ => Err(ValidationError::NotAllowed {
                field: "status".to_string(),
                allowed: ReservationStatus::ALL
                    .iter()
                    .map(|s| s.as_str().to_string())
                    .collect(),
            }),
        }
    }
}

// =============================================================================
// Table
// =============================================================================

/// Where a table sits in the restaurant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TableLocation {
    Window,
    Center,
    Bar,
    Outdoor,
    Private,
}

impl TableLocation {
    /// All locations in legend order.
    pub const ALL: [TableLocation; 5] = [
        TableLocation::Window,
        TableLocation::Center,
        TableLocation::Bar,
        TableLocation::Outdoor,
        TableLocation::Private,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            TableLocation::Window => "window",
            TableLocation::Center => "center",
            TableLocation::Bar => "bar",
            TableLocation::Outdoor => "outdoor",
            TableLocation::Private => "private",
        }
    }
}

impl fmt::Display for TableLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A seatable table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    /// Table identifier, referenced by `Reservation::table_id`.
    pub id: String,

    /// Display name ("Table 3").
    pub name: String,

    /// Number of seats.
    pub capacity: u32,

    /// Area of the restaurant.
    pub location: TableLocation,
}

impl Table {
    /// Checks if the table can seat a party of the given size.
    #[inline]
    pub fn seats(&self, party_size: u32) -> bool {
        self.capacity >= party_size
    }
}

/// Admin-supplied fields of a table. The table number doubles as its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TableDraft {
    pub number: u32,
    pub capacity: u32,
    pub location: TableLocation,
}

impl TableDraft {
    /// Id a table with this number is stored under.
    pub fn id(&self) -> String {
        self.number.to_string()
    }

    pub fn into_table(self) -> Table {
        Table {
            id: self.id(),
            name: format!("Table {}", self.number),
            capacity: self.capacity,
            location: self.location,
        }
    }
}

/// A table together with its derived availability for one slot.
///
/// The table selector shows every table and greys out the unavailable ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TableAvailability {
    pub table: Table,
    /// Seats the party and is not held by a confirmed reservation.
    pub available: bool,
}

// =============================================================================
// Time Slot
// =============================================================================

/// A bookable time of day.
///
/// `available` is a static flag from the restaurant's schedule (closed
/// slots). It is never recomputed from reservations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub id: String,
    #[serde(with = "slot_time")]
    #[ts(as = "String")]
    pub time: NaiveTime,
    pub available: bool,
}

impl TimeSlot {
    /// The slot time as `HH:MM`.
    pub fn label(&self) -> String {
        format_slot_time(self.time)
    }
}

// =============================================================================
// User
// =============================================================================

/// What a user is allowed to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Staff,
    Customer,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Staff, Role::Customer];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Staff => "staff",
            Role::Customer => "customer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "staff" => Ok(Role::Staff),
            "customer" => Ok(Role::Customer),
            _ => Err(ValidationError::NotAllowed {
                field: "role".to_string(),
                allowed: Role::ALL.iter().map(|r| r.as_str().to_string()).collect(),
            }),
        }
    }
}

/// A known user of the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: Role,
}

// =============================================================================
// Reservation
// =============================================================================

/// A booking linking a customer, a date/time, a party size and a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    /// Opaque identifier (UUID v4 for reservations made in-session).
    pub id: String,

    pub customer_name: String,
    pub email: String,
    pub phone: String,

    /// Requested calendar date.
    #[ts(as = "String")]
    pub date: NaiveDate,

    /// Requested slot time, `HH:MM` on the wire.
    #[serde(with = "slot_time")]
    #[ts(as = "String")]
    pub time: NaiveTime,

    /// Party size.
    pub guests: u32,

    /// Assigned table.
    pub table_id: String,

    /// Free-text note from the guest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,

    pub status: ReservationStatus,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    /// Checks if the reservation is for the given date and time.
    #[inline]
    pub fn is_at(&self, date: NaiveDate, time: NaiveTime) -> bool {
        self.date == date && self.time == time
    }

    /// Checks if the reservation currently holds `table_id` at (date, time).
    pub fn occupies(&self, table_id: &str, date: NaiveDate, time: NaiveTime) -> bool {
        self.status.occupies_table() && self.table_id == table_id && self.is_at(date, time)
    }

    /// Short human reference: the first few characters of the id.
    pub fn short_ref(&self) -> &str {
        match self.id.char_indices().nth(SHORT_REF_LEN) {
            Some((idx, _)) => &self.id[..idx],
            None => &self.id,
        }
    }
}

/// Caller-supplied fields of a new reservation.
///
/// The store fills in `id`, `status` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewReservation {
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    #[ts(as = "String")]
    pub date: NaiveDate,
    #[serde(with = "slot_time")]
    #[ts(as = "String")]
    pub time: NaiveTime,
    pub guests: u32,
    pub table_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
}

impl NewReservation {
    /// Builds the stored reservation. New bookings always start confirmed.
    pub fn into_reservation(self, id: String, created_at: DateTime<Utc>) -> Reservation {
        Reservation {
            id,
            customer_name: self.customer_name,
            email: self.email,
            phone: self.phone,
            date: self.date,
            time: self.time,
            guests: self.guests,
            table_id: self.table_id,
            special_requests: self.special_requests,
            status: ReservationStatus::Confirmed,
            created_at,
        }
    }
}

/// A partial set of reservation fields.
///
/// Only the fields that are `Some` are merged into the stored reservation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct ReservationUpdate {
    pub customer_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[ts(as = "Option<String>")]
    pub date: Option<NaiveDate>,
    #[serde(with = "slot_time::option")]
    #[ts(as = "Option<String>")]
    pub time: Option<NaiveTime>,
    pub guests: Option<u32>,
    pub table_id: Option<String>,
    pub special_requests: Option<String>,
    pub status: Option<ReservationStatus>,
}

impl ReservationUpdate {
    /// An update that only changes the status.
    pub fn status(status: ReservationStatus) -> Self {
        ReservationUpdate {
            status: Some(status),
            ..Default::default()
        }
    }

    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        *self == ReservationUpdate::default()
    }

    /// Merges the present fields into `reservation`.
    pub fn apply_to(self, reservation: &mut Reservation) {
        if let Some(v) = self.customer_name {
            reservation.customer_name = v;
        }
        if let Some(v) = self.email {
            reservation.email = v;
        }
        if let Some(v) = self.phone {
            reservation.phone = v;
        }
        if let Some(v) = self.date {
            reservation.date = v;
        }
        if let Some(v) = self.time {
            reservation.time = v;
        }
        if let Some(v) = self.guests {
            reservation.guests = v;
        }
        if let Some(v) = self.table_id {
            reservation.table_id = v;
        }
        if let Some(v) = self.special_requests {
            reservation.special_requests = Some(v);
        }
        if let Some(v) = self.status {
            reservation.status = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Reservation {
        NewReservation {
            customer_name: "Anna Schmidt".to_string(),
            email: "anna@example.com".to_string(),
            phone: "+1234567890".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 4, 15).unwrap(),
            time: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
            guests: 2,
            table_id: "1".to_string(),
            special_requests: None,
        }
        .into_reservation("1744282980000".to_string(), Utc::now())
    }

    #[test]
    fn test_new_reservation_starts_confirmed() {
        let r = sample();
        assert_eq!(r.status, ReservationStatus::Confirmed);
        assert!(r.occupies("1", r.date, r.time));
        assert!(!r.occupies("2", r.date, r.time));
    }

    #[test]
    fn test_only_confirmed_occupies() {
        let mut r = sample();
        r.status = ReservationStatus::Pending;
        assert!(!r.occupies("1", r.date, r.time));
        r.status = ReservationStatus::Cancelled;
        assert!(!r.occupies("1", r.date, r.time));
    }

    #[test]
    fn test_short_ref() {
        let r = sample();
        assert_eq!(r.short_ref(), "174428");

        let mut short = sample();
        short.id = "7".to_string();
        assert_eq!(short.short_ref(), "7");
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!(
            "Cancelled".parse::<ReservationStatus>().unwrap(),
            ReservationStatus::Cancelled
        );
        assert_eq!("pending".parse::<ReservationStatus>().unwrap(), ReservationStatus::Pending);
        assert!("maybe".parse::<ReservationStatus>().is_err());
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!("ADMIN".parse::<Role>().unwrap(), Role::Admin);
        assert!("owner".parse::<Role>().is_err());
    }

    #[test]
    fn test_update_merges_present_fields_only() {
        let mut r = sample();
        let update = ReservationUpdate {
            guests: Some(3),
            special_requests: Some("Window please".to_string()),
            ..Default::default()
        };
        update.apply_to(&mut r);

        assert_eq!(r.guests, 3);
        assert_eq!(r.special_requests.as_deref(), Some("Window please"));
        assert_eq!(r.customer_name, "Anna Schmidt");
        assert_eq!(r.status, ReservationStatus::Confirmed);
    }

    #[test]
    fn test_status_update() {
        let mut r = sample();
        assert!(!ReservationUpdate::status(ReservationStatus::Pending).is_empty());
        assert!(ReservationUpdate::default().is_empty());

        ReservationUpdate::status(ReservationStatus::Cancelled).apply_to(&mut r);
        assert_eq!(r.status, ReservationStatus::Cancelled);
    }

    #[test]
    fn test_table_draft_numbering() {
        let table = TableDraft {
            number: 9,
            capacity: 6,
            location: TableLocation::Outdoor,
        }
        .into_table();
        assert_eq!(table.id, "9");
        assert_eq!(table.name, "Table 9");
        assert!(table.seats(6));
        assert!(!table.seats(7));
    }

    #[test]
    fn test_json_shape() {
        let r = sample();
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["customerName"], "Anna Schmidt");
        assert_eq!(json["date"], "2025-04-15");
        assert_eq!(json["time"], "19:00");
        assert_eq!(json["tableId"], "1");
        assert_eq!(json["status"], "confirmed");
        assert!(json.get("specialRequests").is_none());
    }

    #[test]
    fn test_update_deserializes_partial_json() {
        let update: ReservationUpdate =
            serde_json::from_str(r#"{"status":"cancelled","time":"20:30"}"#).unwrap();
        assert_eq!(update.status, Some(ReservationStatus::Cancelled));
        assert_eq!(update.time, NaiveTime::from_hms_opt(20, 30, 0));
        assert_eq!(update.guests, None);
    }

    #[test]
    fn test_table_seats() {
        let table = Table {
            id: "3".to_string(),
            name: "Table 3".to_string(),
            capacity: 4,
            location: TableLocation::Center,
        };
        assert!(table.seats(4));
        assert!(table.seats(1));
        assert!(!table.seats(5));
    }
}
