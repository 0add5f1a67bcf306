//! # reservease-store: Session State for ReservEase
//!
//! The mutable side of the system. Everything lives in memory for the
//! lifetime of the process; nothing is written anywhere.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       ReservEase Data Flow                              │
//! │                                                                         │
//! │  App command (submit_booking)                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 reservease-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────────────┐          ┌────────────────────┐       │   │
//! │  │   │  ReservationStore  │          │     AuthStore      │       │   │
//! │  │   │  (reservation.rs)  │          │     (auth.rs)      │       │   │
//! │  │   │                    │          │                    │       │   │
//! │  │   │  reservations      │          │  Authenticator     │       │   │
//! │  │   │  tables            │          │  current Identity  │       │   │
//! │  │   │  time slots        │          └────────────────────┘       │   │
//! │  │   │  booking policy    │          ┌────────────────────┐       │   │
//! │  │   │                    │          │     MenuStore      │       │   │
//! │  │   │                    │          │     (menu.rs)      │       │   │
//! │  │   └─────────┬──────────┘          └────────────────────┘       │   │
//! │  └─────────────┼───────────────────────────────────────────────────┘   │
//! │                ▼                                                        │
//! │  reservease-core::availability (pure rules)                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use chrono::{NaiveDate, NaiveTime};
//! use reservease_store::{AuthStore, ReservationStore};
//! use reservease_core::Role;
//!
//! let mut store = ReservationStore::seeded();
//! store.cancel_reservation("2");
//!
//! let date = NaiveDate::from_ymd_opt(2025, 4, 15).unwrap();
//! let time = NaiveTime::from_hms_opt(20, 0, 0).unwrap();
//! assert!(store.get_available_tables(date, time, 4).iter().any(|t| t.id == "3"));
//!
//! let mut auth = AuthStore::demo();
//! auth.login(Role::Admin);
//! assert!(auth.is_admin());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod auth;
pub mod menu;
pub mod reservation;

// =============================================================================
// Re-exports
// =============================================================================

pub use auth::{AuthStore, Authenticator, DemoRoleSelector, Identity, LoginRequest};
pub use menu::MenuStore;
pub use reservation::ReservationStore;
