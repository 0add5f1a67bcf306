//! # Reservation List Commands
//!
//! "Your Reservations" page. Requires a signed-in user.
//!
//! Guests can also look up their bookings by email with `find_by_email`.
//!
//! ## Card Actions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Res. #1         Anna Schmidt               [Confirmed]                │
//! │  Tue, Apr 15, 2025 · 19:00 · 2 guests · Table 1                        │
//! │                                     [ Edit ]  [ Cancel ]               │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │  Res. #4         David Fischer              [Cancelled]                │
//! │  Mon, Apr 14, 2025 · 19:30 · 2 guests · Table 7                        │
//! │                                               [ Delete ]               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::{debug, info};

use reservease_core::display::ReservationCard;
use reservease_core::filter::{sort_reservations, ReservationQuery, SortOrder, StatusFilter};
use reservease_core::validation::{validate_email, validate_search_query};
use reservease_core::{Reservation, ReservationUpdate};

use crate::commands::require_user;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationListView {
    pub cards: Vec<ReservationCard>,
    pub total: usize,
    /// Set when nothing matches.
    pub empty_message: Option<String>,
    /// Set when nothing matches and a filter is active.
    pub empty_hint: Option<String>,
}

/// Validates the free-text search before it reaches the filter.
pub(crate) fn sanitize_query(query: ReservationQuery) -> ApiResult<ReservationQuery> {
    let search = validate_search_query(&query.search)?;
    Ok(ReservationQuery { search, ..query })
}

fn is_filtered(query: &ReservationQuery) -> bool {
    !query.search.is_empty() || query.status != StatusFilter::All || query.date.is_some()
}

/// Lists reservations, newest date first and earliest time first within a day.
pub fn list_reservations(state: &AppState, query: ReservationQuery) -> ApiResult<ReservationListView> {
    require_user(state)?;
    let query = sanitize_query(query)?;
    debug!(?query, "list_reservations command");

    let matching = state
        .reservations
        .with_store(|store| query.apply(store.reservations(), SortOrder::DateDescTimeAsc));

    let cards: Vec<ReservationCard> = matching.iter().map(ReservationCard::from_reservation).collect();
    let empty = cards.is_empty();

    Ok(ReservationListView {
        total: cards.len(),
        cards,
        empty_message: empty.then(|| "No reservations found".to_string()),
        empty_hint: (empty && is_filtered(&query)).then(|| "Try clearing your filters".to_string()),
    })
}

pub fn cancel_reservation(state: &AppState, id: &str) -> ApiResult<ReservationCard> {
    require_user(state)?;
    debug!(id, "cancel_reservation command");

    let cancelled = state
        .reservations
        .with_store_mut(|store| store.cancel_reservation(id))
        .ok_or_else(|| ApiError::not_found("Reservation", id))?;

    info!(id, "Reservation cancelled");
    Ok(ReservationCard::from_reservation(&cancelled))
}

pub fn delete_reservation(state: &AppState, id: &str) -> ApiResult<Reservation> {
    require_user(state)?;
    debug!(id, "delete_reservation command");

    state
        .reservations
        .with_store_mut(|store| store.delete_reservation(id))
        .ok_or_else(|| ApiError::not_found("Reservation", id))
}

/// Changes a reservation's details.
///
/// The party size must stay within limits. A confirmed result must still
/// fit its table and must not collide with another confirmed booking of
/// that table.
pub fn edit_reservation(
    state: &AppState,
    id: &str,
    update: ReservationUpdate,
) -> ApiResult<ReservationCard> {
    require_user(state)?;
    debug!(id, "edit_reservation command");

    let updated = state
        .reservations
        .with_store_mut(|store| store.amend_reservation(id, update))?;
    Ok(ReservationCard::from_reservation(&updated))
}

/// A guest's own bookings, looked up by the email they booked with.
pub fn find_by_email(state: &AppState, email: &str) -> ApiResult<ReservationListView> {
    require_user(state)?;
    validate_email(email)?;
    debug!(email, "find_by_email command");

    let mut found = state
        .reservations
        .with_store(|store| store.reservations_by_email(email));
    sort_reservations(&mut found, SortOrder::DateDescTimeAsc);

    let cards: Vec<ReservationCard> = found.iter().map(ReservationCard::from_reservation).collect();
    let empty = cards.is_empty();
    Ok(ReservationListView {
        total: cards.len(),
        cards,
        empty_message: empty.then(|| format!("No reservations found for {}", email.trim())),
        empty_hint: None,
    })
}
