//! # Reservation Filtering
//!
//! Search, status and date filters for the reservation list and the admin
//! dashboard, plus the two list orderings.
//!
//! ## Filter Pipeline
//! ```text
//! reservations ──► search (name / id / email, case-insensitive)
//!              ──► status (exact, unless All)
//!              ──► date   (exact, when set)
//!              ──► sort   (DateDesc | DateDescTimeAsc, stable)
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::types::{Reservation, ReservationStatus};

// =============================================================================
// Status Filter
// =============================================================================

/// Status dropdown value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Confirmed,
    Pending,
    Cancelled,
}

impl StatusFilter {
    /// Whether a reservation with `status` passes.
    pub fn matches(&self, status: ReservationStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Confirmed => status == ReservationStatus::Confirmed,
            StatusFilter::Pending => status == ReservationStatus::Pending,
            StatusFilter::Cancelled => status == ReservationStatus::Cancelled,
        }
    }
}

impl From<ReservationStatus> for StatusFilter {
    fn from(status: ReservationStatus) -> Self {
        match status {
            ReservationStatus::Confirmed => StatusFilter::Confirmed,
            ReservationStatus::Pending => StatusFilter::Pending,
            ReservationStatus::Cancelled => StatusFilter::Cancelled,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("all"),
            StatusFilter::Confirmed => f.write_str("confirmed"),
            StatusFilter::Pending => f.write_str("pending"),
            StatusFilter::Cancelled => f.write_str("cancelled"),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() || s.trim().eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        s.parse::<ReservationStatus>().map(StatusFilter::from)
    }
}

// =============================================================================
// Sort Order
// =============================================================================

/// List ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Newest date first (admin dashboard).
    #[default]
    DateDesc,
    /// Newest date first, earlier time first within a day (reservation list).
    DateDescTimeAsc,
}

impl SortOrder {
    pub fn compare(&self, a: &Reservation, b: &Reservation) -> Ordering {
        match self {
            SortOrder::DateDesc => b.date.cmp(&a.date),
            SortOrder::DateDescTimeAsc => b.date.cmp(&a.date).then(a.time.cmp(&b.time)),
        }
    }
}

/// Sorts in place. Stable, so equal keys keep their store order.
pub fn sort_reservations(reservations: &mut [Reservation], order: SortOrder) {
    reservations.sort_by(|a, b| order.compare(a, b));
}

// =============================================================================
// Query
// =============================================================================

/// Filter criteria from the search box and dropdowns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct ReservationQuery {
    /// Free-text search term, matched as typed. Empty means no search.
    pub search: String,
    pub status: StatusFilter,
    #[ts(as = "Option<String>")]
    pub date: Option<NaiveDate>,
}

impl ReservationQuery {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Whether `reservation` passes every criterion.
    pub fn matches(&self, reservation: &Reservation) -> bool {
        self.matches_search(reservation)
            && self.status.matches(reservation.status)
            && self.date.map_or(true, |d| reservation.date == d)
    }

    fn matches_search(&self, reservation: &Reservation) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let term = self.search.to_lowercase();

        [
            reservation.customer_name.as_str(),
            reservation.id.as_str(),
            reservation.email.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
    }

    /// Filters and sorts a copy of `reservations`.
    pub fn apply(&self, reservations: &[Reservation], order: SortOrder) -> Vec<Reservation> {
        let mut matched: Vec<Reservation> = reservations
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect();
        sort_reservations(&mut matched, order);
        matched
    }
}
