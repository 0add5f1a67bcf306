//! # Booking Commands
//!
//! Drive the booking wizard and feed its pickers.
//!
//! ## Booking Page
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  (1) Details ─────── (2) Table ─────── (3) Your Details                │
//! │                                                                         │
//! │  Step 1                      Step 2                 Step 3              │
//! │  ┌─────────────────┐         ┌───┬───┬───┬───┐      name  ________     │
//! │  │   April 2025  ◄►│         │ 1 │ 2 │▓3▓│ 4 │      email ________     │
//! │  │ Su Mo Tu We ... │         ├───┼───┼───┼───┤      phone ________     │
//! │  └─────────────────┘         │ 5 │ 6 │ 7 │ 8 │      requests ____      │
//! │  [17:00][17:30][18:00]...    └───┴───┴───┴───┘                         │
//! │  guests [ 2 ]                ▓ = reserved           [ Confirm ]        │
//! │                                                                         │
//! │  select_date / select_time   select_table           update_customer    │
//! │  set_party_size / next_step  next_step / back       submit_booking     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every wizard command returns the full [`WizardView`] so the page can
//! re-render from one response.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use tracing::debug;

use reservease_core::calendar::{CalendarCell, CalendarMonth, DateBounds, WEEKDAY_LABELS};
use reservease_core::display::{self, SlotButton, TableTile};
use reservease_core::types::format_slot_time;
use reservease_core::validation::{parse_date, parse_slot_time};
use reservease_core::{Reservation, ValidationError};
use reservease_store::ReservationStore;

use crate::error::{ApiError, ApiResult};
use crate::state::{AppState, BookingWizard, CustomerDetails, FieldErrors, WizardStep};

// =============================================================================
// Views
// =============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardView {
    pub step: WizardStep,
    pub step_number: u8,
    pub date: Option<NaiveDate>,
    /// "Tuesday, April 15, 2025"
    pub date_label: Option<String>,
    pub time: Option<String>,
    pub guests: Option<u32>,
    pub max_party_size: u32,
    pub table_id: Option<String>,
    pub time_slots: Vec<SlotButton>,
    /// Every table for the chosen slot; unavailable ones are marked reserved.
    pub tables: Vec<TableTile>,
    pub customer: CustomerDetails,
    pub errors: FieldErrors,
    pub confirmation: Option<Reservation>,
}

impl WizardView {
    fn build(store: &ReservationStore, wizard: &BookingWizard) -> Self {
        let tables = match (wizard.date(), wizard.time(), wizard.guests()) {
            (Some(date), Some(time), Some(guests)) => {
                display::table_tiles(&store.table_availability(date, time, guests), wizard.table_id())
            }
            _ => Vec::new(),
        };
        // Slots without a fitting free table are greyed out once the day and
        // party are known.
        let open = match (wizard.date(), wizard.guests()) {
            (Some(date), Some(guests)) => Some(store.open_time_slots(date, guests)),
            _ => None,
        };

        WizardView {
            step: wizard.step(),
            step_number: wizard.step().number(),
            date: wizard.date(),
            date_label: wizard.date().map(display::format_long_date),
            time: wizard.time().map(format_slot_time),
            guests: wizard.guests(),
            max_party_size: wizard.settings().max_party_size,
            table_id: wizard.table_id().map(str::to_string),
            time_slots: display::slot_buttons(store.time_slots(), open.as_deref(), wizard.time()),
            tables,
            customer: wizard.customer().clone(),
            errors: wizard.errors().clone(),
            confirmation: wizard.confirmed().cloned(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarView {
    pub title: String,
    pub year: i32,
    pub month: u32,
    pub weekdays: Vec<String>,
    pub cells: Vec<CalendarCell>,
    pub previous: CalendarMonth,
    pub next: CalendarMonth,
}

/// Tables free at one slot.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotAvailability {
    pub time: String,
    /// Closed slots never list tables.
    pub open: bool,
    pub table_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityOverview {
    pub restaurant: String,
    pub date: NaiveDate,
    pub guests: u32,
    pub slots: Vec<SlotAvailability>,
}

// =============================================================================
// Helpers
// =============================================================================

/// Runs `f` on the wizard with read access to the store, then renders.
fn update_wizard<F>(state: &AppState, f: F) -> ApiResult<WizardView>
where
    F: FnOnce(&ReservationStore, &mut BookingWizard) -> ApiResult<()>,
{
    state.reservations.with_store(|store| {
        state.wizard.with_wizard_mut(|wizard| {
            f(store, wizard)?;
            Ok(WizardView::build(store, wizard))
        })
    })
}

// =============================================================================
// Wizard Commands
// =============================================================================

pub fn get_wizard(state: &AppState) -> WizardView {
    state
        .reservations
        .with_store(|store| state.wizard.with_wizard(|wizard| WizardView::build(store, wizard)))
}

/// Clears the form and starts on step 1.
pub fn start_booking(state: &AppState) -> WizardView {
    debug!("start_booking command");
    state.reservations.with_store(|store| {
        state.wizard.with_wizard_mut(|wizard| {
            wizard.reset();
            WizardView::build(store, wizard)
        })
    })
}

/// Picks a date given as `YYYY-MM-DD`.
pub fn select_date(state: &AppState, date: &str) -> ApiResult<WizardView> {
    debug!(date, "select_date command");
    let date = parse_date(date)?;
    update_wizard(state, |store, wizard| Ok(wizard.select_date(store, date)?))
}

/// Picks a time given as `HH:MM`.
pub fn select_time(state: &AppState, time: &str) -> ApiResult<WizardView> {
    debug!(time, "select_time command");
    let time = parse_slot_time(time)?;
    update_wizard(state, |store, wizard| Ok(wizard.select_time(store, time)?))
}

/// Takes the raw guests input; see [`BookingWizard::set_guests_input`].
pub fn set_party_size(state: &AppState, input: &str) -> WizardView {
    debug!(input, "set_party_size command");
    state.reservations.with_store(|store| {
        state.wizard.with_wizard_mut(|wizard| {
            wizard.set_guests_input(store, input);
            WizardView::build(store, wizard)
        })
    })
}

pub fn select_table(state: &AppState, table_id: &str) -> ApiResult<WizardView> {
    debug!(table_id, "select_table command");
    update_wizard(state, |store, wizard| Ok(wizard.select_table(store, table_id)?))
}

pub fn update_customer(state: &AppState, details: CustomerDetails) -> WizardView {
    debug!("update_customer command");
    state.reservations.with_store(|store| {
        state.wizard.with_wizard_mut(|wizard| {
            wizard.set_customer(details);
            WizardView::build(store, wizard)
        })
    })
}

/// Validates the current step and advances when it passes.
///
/// Failures are not errors here: they come back in `WizardView::errors`.
pub fn next_step(state: &AppState) -> WizardView {
    state.reservations.with_store(|store| {
        state.wizard.with_wizard_mut(|wizard| {
            if let Err(errors) = wizard.next(store) {
                debug!(%errors, "next_step blocked");
            }
            WizardView::build(store, wizard)
        })
    })
}

pub fn previous_step(state: &AppState) -> WizardView {
    state.reservations.with_store(|store| {
        state.wizard.with_wizard_mut(|wizard| {
            wizard.back();
            WizardView::build(store, wizard)
        })
    })
}

/// Books the reservation.
///
/// ## Returns
/// - The created reservation (the page then navigates to `/confirmation`)
/// - `VALIDATION_ERROR` when a field needs attention (see `get_wizard`)
/// - `CONFLICT` when the table was taken meanwhile; the wizard is back on
///   the table step
pub fn submit_booking(state: &AppState) -> ApiResult<Reservation> {
    debug!("submit_booking command");
    state.reservations.with_store_mut(|store| {
        state
            .wizard
            .with_wizard_mut(|wizard| wizard.submit(store).map_err(ApiError::from))
    })
}

// =============================================================================
// Pickers
// =============================================================================

/// The date picker grid for a month.
pub fn get_calendar(state: &AppState, year: i32, month: u32) -> ApiResult<CalendarView> {
    let shown = NaiveDate::from_ymd_opt(year, month, 1)
        .map(CalendarMonth::of)
        .ok_or_else(|| {
            ApiError::from(ValidationError::OutOfRange {
                field: "month".to_string(),
                min: 1,
                max: 12,
            })
        })?;

    let selected = state.wizard.with_wizard(|w| w.date());
    Ok(calendar_view(shown, selected, state.today(), state.date_bounds()))
}

/// The month of the selected date, or of today.
pub fn get_current_calendar(state: &AppState) -> CalendarView {
    let selected = state.wizard.with_wizard(|w| w.date());
    let shown = CalendarMonth::of(selected.unwrap_or_else(|| state.today()));
    calendar_view(shown, selected, state.today(), state.date_bounds())
}

fn calendar_view(
    shown: CalendarMonth,
    selected: Option<NaiveDate>,
    today: NaiveDate,
    bounds: DateBounds,
) -> CalendarView {
    CalendarView {
        title: shown.title(),
        year: shown.year,
        month: shown.month,
        weekdays: WEEKDAY_LABELS.iter().map(|d| d.to_string()).collect(),
        cells: shown.grid(selected, today, bounds),
        previous: shown.previous(),
        next: shown.next(),
    }
}

/// Free tables per slot for a day and party size.
pub fn availability_overview(state: &AppState, date: NaiveDate, guests: u32) -> AvailabilityOverview {
    let slots = state.reservations.with_store(|store| {
        store
            .time_slots()
            .iter()
            .map(|slot| {
                let table_ids = if slot.available {
                    free_table_ids(store, date, slot.time, guests)
                } else {
                    Vec::new()
                };
                SlotAvailability {
                    time: slot.label(),
                    open: slot.available,
                    table_ids,
                }
            })
            .collect()
    });

    AvailabilityOverview {
        restaurant: state.config.restaurant.name.clone(),
        date,
        guests,
        slots,
    }
}

fn free_table_ids(store: &ReservationStore, date: NaiveDate, time: NaiveTime, guests: u32) -> Vec<String> {
    store
        .get_available_tables(date, time, guests)
        .into_iter()
        .map(|t| t.id)
        .collect()
}
