//! # reservease-core: Pure Domain Logic for ReservEase
//!
//! This crate holds the reservation rules of ReservEase as pure functions
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       ReservEase Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Web Frontend                                 │   │
//! │  │   Home ──► Booking Wizard ──► Confirmation ──► Reservations    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            reservease (app): config, wizard, routes             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            reservease-store: ReservationStore, AuthStore        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ reservease-core (THIS CRATE) ★                  │   │
//! │  │                                                                 │   │
//! │  │   types · availability · filter · report · validation          │   │
//! │  │   calendar · display · menu · seed                              │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Reservation, Table, TimeSlot, User)
//! - [`availability`] - Which tables are free for a date, time and party
//! - [`filter`] - Search/status/date filtering and list ordering
//! - [`report`] - Dashboard counts and rankings
//! - [`menu`] - Menu items, dietary filters, prices
//! - [`validation`] - Input checks for the booking form
//! - [`calendar`] - Month grid for the date picker
//! - [`display`] - Badges, labels and card actions
//! - [`seed`] - The demo restaurant (tables, slots, users, reservations, menu)
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::{NaiveDate, NaiveTime};
//! use reservease_core::{availability, seed};
//!
//! let tables = seed::tables();
//! let reservations = seed::reservations();
//!
//! let date = NaiveDate::from_ymd_opt(2025, 4, 15).unwrap();
//! let time = NaiveTime::from_hms_opt(20, 0, 0).unwrap();
//!
//! // Table 3 holds a confirmed birthday booking at 20:00
//! let free = availability::available_tables(&tables, &reservations, date, time, 4);
//! assert!(free.iter().all(|t| t.id != "3"));
//! ```

pub mod availability;
pub mod calendar;
pub mod display;
pub mod error;
pub mod filter;
pub mod menu;
pub mod report;
pub mod seed;
pub mod types;
pub mod validation;

pub use error::{CoreError, CoreResult, ValidationError};
pub use availability::BookingPolicy;
pub use filter::{ReservationQuery, SortOrder, StatusFilter};
pub use menu::{MenuCategory, MenuFilter, MenuItem, MenuItemDraft, Price};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Largest party the booking form accepts.
///
/// The guest input clamps anything above this back down.
pub const MAX_PARTY_SIZE: u32 = 12;

/// Party size the booking form starts with.
pub const DEFAULT_PARTY_SIZE: u32 = 2;

/// Most seats a single table may have.
pub const MAX_TABLE_CAPACITY: u32 = 20;

/// Days a reservation is kept after its date before cleanup removes it.
pub const RETENTION_DAYS: i64 = 7;

/// Maximum length of a reservation search term.
pub const MAX_SEARCH_LEN: usize = 100;

/// Number of id characters shown as the reservation reference ("Res. #abc123").
pub const SHORT_REF_LEN: usize = 6;
