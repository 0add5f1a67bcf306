//! # Admin Commands
//!
//! The admin dashboard. Every command requires the admin role.
//!
//! ## Dashboard Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Admin Dashboard                                                        │
//! │  Manage all restaurant reservations                                     │
//! │                                                                         │
//! │  [search______] [status: all ▾] [date: ____]                            │
//! │                                                                         │
//! │  ┌───────────────────────────────────────┐  ┌───────────────────────┐  │
//! │  │ Guest          Date/Time   Status     │  │ Reservation Details   │  │
//! │  │ Sofia Becker   2025-04-16  [Pending]  │─►│ Guest Information     │  │
//! │  │ Anna Schmidt   2025-04-15  [Confirmed]│  │ Status [pending ▾]    │  │
//! │  │ ...                                   │  │ [ Delete ]            │  │
//! │  └───────────────────────────────────────┘  └───────────────────────┘  │
//! │                                                                         │
//! │  dashboard()      → rows, newest date first                            │
//! │  update_status()  → status dropdown                                    │
//! │  delete()         → delete button, clears the selection                │
//! │  get_report()     → per-day counts, busiest tables                     │
//! │  cleanup_old_bookings() → drops bookings older than a week             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The table layout is managed here too: `list_tables`, `create_table`,
//! `update_table` and `delete_table`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use reservease_core::display::{status_badge, StatusBadge};
use reservease_core::filter::{ReservationQuery, SortOrder};
use reservease_core::report::{self, DailyCount, ReservationSummary, TableBookingCount};
use reservease_core::types::format_slot_time;
use reservease_core::{Reservation, ReservationStatus, Table, TableDraft, ValidationError};

use crate::commands::require_admin;
use crate::commands::reservations::sanitize_query;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Busiest tables listed in a report when no limit is given.
const DEFAULT_TOP_TABLES: usize = 5;

/// One row of the dashboard table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminRow {
    pub id: String,
    pub customer_name: String,
    pub email: String,
    pub date: NaiveDate,
    pub time: String,
    pub guests: u32,
    pub table_id: String,
    pub status: ReservationStatus,
    pub badge: StatusBadge,
}

impl From<&Reservation> for AdminRow {
    fn from(r: &Reservation) -> Self {
        AdminRow {
            id: r.id.clone(),
            customer_name: r.customer_name.clone(),
            email: r.email.clone(),
            date: r.date,
            time: format_slot_time(r.time),
            guests: r.guests,
            table_id: r.table_id.clone(),
            status: r.status,
            badge: status_badge(r.status),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboard {
    pub rows: Vec<AdminRow>,
    /// Totals over all reservations, not just the filtered rows.
    pub summary: ReservationSummary,
    pub status_options: Vec<ReservationStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub from: NaiveDate,
    pub to: NaiveDate,
    #[serde(default)]
    pub top_tables: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminReport {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub per_day: Vec<DailyCount>,
    pub top_tables: Vec<TableBookingCount>,
    pub confirmed: usize,
    pub pending: usize,
    pub cancelled: usize,
    /// Confirmed bookings on the current day, by time.
    pub today: Vec<AdminRow>,
}

pub fn dashboard(state: &AppState, query: ReservationQuery) -> ApiResult<AdminDashboard> {
    require_admin(state)?;
    let query = sanitize_query(query)?;
    debug!(?query, "admin dashboard command");

    let (rows, summary) = state.reservations.with_store(|store| {
        let rows: Vec<AdminRow> = query
            .apply(store.reservations(), SortOrder::DateDesc)
            .iter()
            .map(AdminRow::from)
            .collect();
        (rows, report::summarize(store.reservations()))
    });

    Ok(AdminDashboard {
        rows,
        summary,
        status_options: ReservationStatus::ALL.to_vec(),
    })
}

/// Full record for the details panel.
pub fn get_details(state: &AppState, id: &str) -> ApiResult<Reservation> {
    require_admin(state)?;

    state
        .reservations
        .with_store(|store| store.get_reservation(id).cloned())
        .ok_or_else(|| ApiError::not_found("Reservation", id))
}

/// Status dropdown. Not checked against other bookings.
pub fn update_status(
    state: &AppState,
    id: &str,
    status: ReservationStatus,
) -> ApiResult<Reservation> {
    let admin = require_admin(state)?;

    let updated = state
        .reservations
        .with_store_mut(|store| store.set_status(id, status))
        .ok_or_else(|| ApiError::not_found("Reservation", id))?;

    info!(id, %status, admin = %admin.id, "Reservation status changed");
    Ok(updated)
}

pub fn delete(state: &AppState, id: &str) -> ApiResult<Reservation> {
    let admin = require_admin(state)?;

    let removed = state
        .reservations
        .with_store_mut(|store| store.delete_reservation(id))
        .ok_or_else(|| ApiError::not_found("Reservation", id))?;

    info!(id, admin = %admin.id, "Reservation removed by admin");
    Ok(removed)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanupResult {
    pub removed: usize,
    pub removed_ids: Vec<String>,
}

/// Drops every booking dated more than a week before today.
pub fn cleanup_old_bookings(state: &AppState) -> ApiResult<CleanupResult> {
    let admin = require_admin(state)?;
    let today = state.today();

    let removed = state
        .reservations
        .with_store_mut(|store| store.cleanup_old_bookings(today));

    info!(removed = removed.len(), admin = %admin.id, "Old bookings cleanup");
    Ok(CleanupResult {
        removed: removed.len(),
        removed_ids: removed.into_iter().map(|r| r.id).collect(),
    })
}

// =============================================================================
// Table Layout
// =============================================================================

/// Tables seating at least `min_capacity`, smallest first. `None` lists all.
pub fn list_tables(state: &AppState, min_capacity: Option<u32>) -> ApiResult<Vec<Table>> {
    require_admin(state)?;
    Ok(state
        .reservations
        .with_store(|store| store.tables_by_min_capacity(min_capacity.unwrap_or(0))))
}

pub fn create_table(state: &AppState, draft: TableDraft) -> ApiResult<Table> {
    let admin = require_admin(state)?;
    debug!(?draft, admin = %admin.id, "create_table command");
    Ok(state.reservations.with_store_mut(|store| store.create_table(draft))?)
}

pub fn update_table(state: &AppState, id: &str, draft: TableDraft) -> ApiResult<Table> {
    let admin = require_admin(state)?;
    debug!(id, ?draft, admin = %admin.id, "update_table command");
    Ok(state
        .reservations
        .with_store_mut(|store| store.update_table(id, draft))?)
}

/// Fails with `CONFLICT` while a confirmed booking holds the table.
pub fn delete_table(state: &AppState, id: &str) -> ApiResult<Table> {
    let admin = require_admin(state)?;
    debug!(id, admin = %admin.id, "delete_table command");
    Ok(state.reservations.with_store_mut(|store| store.delete_table(id))?)
}

/// Counts and rankings for `[from, to]`.
pub fn get_report(state: &AppState, request: ReportRequest) -> ApiResult<AdminReport> {
    require_admin(state)?;

    if request.to < request.from {
        return Err(ValidationError::InvalidFormat {
            field: "date range".to_string(),
            reason: "end date is before start date".to_string(),
        }
        .into());
    }

    let limit = request.top_tables.unwrap_or(DEFAULT_TOP_TABLES);
    let (from, to, today) = (request.from, request.to, state.today());

    Ok(state.reservations.with_store(|store| {
        let all = store.reservations();
        AdminReport {
            from,
            to,
            per_day: report::reservations_per_day(all, from, to),
            top_tables: report::top_tables(all, from, to, limit),
            confirmed: report::count_with_status(all, ReservationStatus::Confirmed, from, to),
            pending: report::count_with_status(all, ReservationStatus::Pending, from, to),
            cancelled: report::count_with_status(all, ReservationStatus::Cancelled, from, to),
            today: report::confirmed_on(all, today).iter().map(AdminRow::from).collect(),
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::auth::login_as;
    use crate::config::AppConfig;
    use crate::error::ErrorCode;
    use reservease_core::filter::StatusFilter;
    use reservease_core::{Role, TableLocation};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, d).unwrap()
    }

    fn admin_state() -> AppState {
        let state = AppState::with_today(AppConfig::default(), day(15));
        login_as(&state, Role::Admin).unwrap();
        state
    }

    #[test]
    fn test_requires_admin() {
        let state = AppState::new(AppConfig::default());
        assert_eq!(
            dashboard(&state, ReservationQuery::default()).unwrap_err().code,
            ErrorCode::Unauthorized
        );

        login_as(&state, Role::Staff).unwrap();
        assert_eq!(
            dashboard(&state, ReservationQuery::default()).unwrap_err().code,
            ErrorCode::Forbidden
        );
    }

    #[test]
    fn test_dashboard_filters() {
        let state = admin_state();
        let all = dashboard(&state, ReservationQuery::default()).unwrap();
        let dates: Vec<NaiveDate> = all.rows.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![day(16), day(15), day(15), day(14)]);
        assert_eq!(all.summary.total, 4);

        let pending = dashboard(
            &state,
            ReservationQuery::default().with_status(StatusFilter::Pending),
        )
        .unwrap();
        assert_eq!(pending.rows.len(), 1);
        assert_eq!(pending.rows[0].badge.label, "Pending");

        let by_email = dashboard(&state, ReservationQuery::default().with_search("DAVID@")).unwrap();
        assert_eq!(by_email.rows[0].id, "4");
    }

    #[test]
    fn test_status_change_and_delete() {
        let state = admin_state();
        let updated = update_status(&state, "3", ReservationStatus::Confirmed).unwrap();
        assert_eq!(updated.status, ReservationStatus::Confirmed);
        assert_eq!(get_details(&state, "3").unwrap().status, ReservationStatus::Confirmed);

        delete(&state, "3").unwrap();
        assert_eq!(get_details(&state, "3").unwrap_err().code, ErrorCode::NotFound);
        assert_eq!(
            update_status(&state, "3", ReservationStatus::Pending).unwrap_err().code,
            ErrorCode::NotFound
        );
    }

    #[test]
    fn test_status_change_keeps_summary_sound() {
        let state = admin_state();
        let customer = state.share_reservations();
        login_as(&customer, Role::Customer).unwrap();

        let huge = reservease_core::ReservationUpdate {
            guests: Some(u32::MAX),
            ..Default::default()
        };
        let err = crate::commands::reservations::edit_reservation(&customer, "3", huge).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        update_status(&state, "3", ReservationStatus::Confirmed).unwrap();
        let view = dashboard(&state, ReservationQuery::default()).unwrap();
        assert_eq!(view.summary.confirmed_guests, 2 + 4 + 6);
    }

    #[test]
    fn test_cleanup_old_bookings() {
        let state = AppState::with_today(AppConfig::default(), day(22));
        login_as(&state, Role::Admin).unwrap();

        let result = cleanup_old_bookings(&state).unwrap();
        assert_eq!(result.removed, 1);
        assert_eq!(result.removed_ids, vec!["4"]);
        assert_eq!(cleanup_old_bookings(&state).unwrap().removed, 0);

        // Nothing is old yet on the 15th
        assert_eq!(cleanup_old_bookings(&admin_state()).unwrap().removed, 0);
    }

    #[test]
    fn test_table_management() {
        let state = admin_state();
        let draft = |number, capacity| TableDraft {
            number,
            capacity,
            location: TableLocation::Private,
        };

        let created = create_table(&state, draft(9, 10)).unwrap();
        assert_eq!(created.name, "Table 9");
        assert_eq!(list_tables(&state, Some(10)).unwrap(), vec![created]);
        assert_eq!(list_tables(&state, None).unwrap().len(), 9);

        assert_eq!(create_table(&state, draft(9, 4)).unwrap_err().code, ErrorCode::Conflict);
        assert_eq!(
            create_table(&state, draft(10, 0)).unwrap_err().code,
            ErrorCode::ValidationError
        );

        let renamed = update_table(&state, "9", draft(11, 12)).unwrap();
        assert_eq!(renamed.id, "11");
        assert_eq!(update_table(&state, "9", draft(9, 2)).unwrap_err().code, ErrorCode::NotFound);

        assert_eq!(delete_table(&state, "1").unwrap_err().code, ErrorCode::Conflict);
        assert_eq!(delete_table(&state, "11").unwrap().capacity, 12);
    }

    #[test]
    fn test_report() {
        let state = admin_state();
        let report = get_report(
            &state,
            ReportRequest {
                from: day(14),
                to: day(16),
                top_tables: Some(2),
            },
        )
        .unwrap();

        assert_eq!(report.per_day.len(), 3);
        assert_eq!(report.top_tables.len(), 2);
        assert_eq!(report.confirmed, 2);
        assert_eq!(report.pending, 1);
        assert_eq!(report.cancelled, 1);
        let today: Vec<&str> = report.today.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(today, vec!["1", "2"]);

        let backwards = ReportRequest {
            from: day(16),
            to: day(14),
            top_tables: None,
        };
        assert_eq!(
            get_report(&state, backwards).unwrap_err().code,
            ErrorCode::ValidationError
        );
    }
}
