//! # Commands Module
//!
//! Every operation the web frontend calls, one module per page.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs            ◄─── You are here (exports, access guards)
//! ├── home.rs           ◄─── Landing page content
//! ├── auth.rs           ◄─── Login, logout, session, navigation
//! ├── booking.rs        ◄─── Booking wizard, calendar, availability
//! ├── confirmation.rs   ◄─── Latest booking summary
//! ├── menu.rs           ◄─── Public menu, admin menu editor
//! ├── reservations.rs   ◄─── Reservation list, cancel, edit, delete, lookup
//! └── admin.rs          ◄─── Dashboard, status changes, reports, tables
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Frontend                                                               │
//! │  ────────                                                               │
//! │  const view = await call('select_date', { date: '2025-04-15' });        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Rust                                                                   │
//! │  ────                                                                   │
//! │  pub fn select_date(                                                    │
//! │      state: &AppState,   ◄── Session state                             │
//! │      date: &str,         ◄── From call params                          │
//! │  ) -> ApiResult<WizardView>                                             │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Frontend receives: WizardView or { code, message }                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod admin;
pub mod auth;
pub mod booking;
pub mod confirmation;
pub mod home;
pub mod menu;
pub mod reservations;

use reservease_core::{Role, User};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// The signed-in user, or `UNAUTHORIZED`.
pub(crate) fn require_user(state: &AppState) -> ApiResult<User> {
    state
        .auth
        .with_auth(|auth| auth.current_user().cloned())
        .ok_or_else(ApiError::unauthorized)
}

/// The signed-in admin, or `UNAUTHORIZED` / `FORBIDDEN`.
pub(crate) fn require_admin(state: &AppState) -> ApiResult<User> {
    let user = require_user(state)?;
    if user.role != Role::Admin {
        return Err(ApiError::forbidden());
    }
    Ok(user)
}
