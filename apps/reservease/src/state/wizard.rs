//! # Booking Wizard State
//!
//! The three-step booking form and its per-field errors.
//!
//! ## Wizard Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Booking Wizard                                       │
//! │                                                                         │
//! │  ┌──────────┐  next()  ┌──────────┐  next()  ┌──────────┐  submit()    │
//! │  │ Details  │─────────►│  Table   │─────────►│ Customer │──────────►   │
//! │  │ date     │◄─────────│ candidate│◄─────────│ name     │   Done       │
//! │  │ time     │  back()  │ tables   │  back()  │ email    │              │
//! │  │ guests   │          │          │          │ phone    │              │
//! │  └──────────┘          └──────────┘          └──────────┘              │
//! │       │                     ▲                      │                   │
//! │       │ date/time/guests    │ table taken at       │                   │
//! │       │ change: recompute   │ submit time          │                   │
//! │       ▼ candidates          └──────────────────────┘                   │
//! │                                                                         │
//! │  next() validates the current step; back() never validates.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The wizard never holds a lock of its own. Callers pass the
//! [`ReservationStore`] it should read candidates from and book into.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;
use tracing::{debug, info, warn};

use reservease_core::availability;
use reservease_core::calendar::DateBounds;
use reservease_core::validation::{
    parse_party_size, validate_customer_name, validate_date_in_range, validate_email,
    validate_party_size, validate_phone,
};
use reservease_core::{
    CoreError, CoreResult, NewReservation, Reservation, Table, ValidationError,
    DEFAULT_PARTY_SIZE, MAX_PARTY_SIZE,
};
use reservease_store::ReservationStore;

// =============================================================================
// Steps & Fields
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    Details,
    Table,
    Customer,
    Done,
}

impl WizardStep {
    /// 1-based position shown in the step indicator.
    pub fn number(self) -> u8 {
        match self {
            WizardStep::Details => 1,
            WizardStep::Table => 2,
            WizardStep::Customer => 3,
            WizardStep::Done => 4,
        }
    }

    fn previous(self) -> Self {
        match self {
            WizardStep::Details | WizardStep::Table => WizardStep::Details,
            WizardStep::Customer => WizardStep::Table,
            WizardStep::Done => WizardStep::Done,
        }
    }
}

/// Form fields that can carry an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WizardField {
    Date,
    Time,
    Guests,
    Table,
    Name,
    Email,
    Phone,
}

impl WizardField {
    pub fn as_str(&self) -> &'static str {
        match self {
            WizardField::Date => "date",
            WizardField::Time => "time",
            WizardField::Guests => "guests",
            WizardField::Table => "table",
            WizardField::Name => "name",
            WizardField::Email => "email",
            WizardField::Phone => "phone",
        }
    }
}

// =============================================================================
// Field Errors
// =============================================================================

/// Pending validation messages, one per field.
///
/// Serializes as `{ "date": "Please select a date", ... }`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<WizardField, ValidationError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: WizardField, error: ValidationError) {
        self.0.insert(field, error);
    }

    pub fn remove(&mut self, field: WizardField) -> Option<ValidationError> {
        self.0.remove(&field)
    }

    pub fn get(&self, field: WizardField) -> Option<&ValidationError> {
        self.0.get(&field)
    }

    /// Display text for `field`, if it has an error.
    pub fn message(&self, field: WizardField) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (WizardField, &ValidationError)> {
        self.0.iter().map(|(f, e)| (*f, e))
    }

    fn merge(&mut self, other: &FieldErrors) {
        for (field, error) in other.iter() {
            self.insert(field, error.clone());
        }
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.values().map(ToString::to_string).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(f, e)| (f.as_str(), e.to_string())))
    }
}

/// Why a submit did not produce a reservation.
#[derive(Debug, Error)]
pub enum WizardError {
    /// One or more fields need attention.
    #[error("{0}")]
    Invalid(FieldErrors),

    /// The store refused the booking.
    #[error(transparent)]
    Booking(#[from] CoreError),

    #[error("This booking has already been submitted")]
    Finished,
}

// =============================================================================
// Settings & Input
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardSettings {
    pub max_party_size: u32,
    pub default_party_size: u32,
    /// Dates outside the window cannot be picked.
    pub bounds: DateBounds,
}

impl Default for WizardSettings {
    fn default() -> Self {
        WizardSettings {
            max_party_size: MAX_PARTY_SIZE,
            default_party_size: DEFAULT_PARTY_SIZE,
            bounds: DateBounds::default(),
        }
    }
}

/// Customer step of the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerDetails {
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub special_requests: Option<String>,
}

// =============================================================================
// Booking Wizard
// =============================================================================

#[derive(Debug, Clone)]
pub struct BookingWizard {
    settings: WizardSettings,
    step: WizardStep,
    date: Option<NaiveDate>,
    time: Option<NaiveTime>,
    guests: Option<u32>,
    table_id: Option<String>,
    candidates: Vec<Table>,
    customer: CustomerDetails,
    errors: FieldErrors,
    confirmed: Option<Reservation>,
}

impl BookingWizard {
    pub fn new(settings: WizardSettings) -> Self {
        let guests = settings.default_party_size.clamp(1, settings.max_party_size.max(1));

        BookingWizard {
            settings,
            step: WizardStep::Details,
            date: None,
            time: None,
            guests: Some(guests),
            table_id: None,
            candidates: Vec::new(),
            customer: CustomerDetails::default(),
            errors: FieldErrors::new(),
            confirmed: None,
        }
    }

    /// Starts over with the same settings.
    pub fn reset(&mut self) {
        *self = Self::new(self.settings.clone());
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn settings(&self) -> &WizardSettings {
        &self.settings
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn time(&self) -> Option<NaiveTime> {
        self.time
    }

    pub fn guests(&self) -> Option<u32> {
        self.guests
    }

    pub fn table_id(&self) -> Option<&str> {
        self.table_id.as_deref()
    }

    /// Tables offered on the table step.
    pub fn candidates(&self) -> &[Table] {
        &self.candidates
    }

    pub fn customer(&self) -> &CustomerDetails {
        &self.customer
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// The reservation made by the last successful submit.
    pub fn confirmed(&self) -> Option<&Reservation> {
        self.confirmed.as_ref()
    }

    fn slot(&self) -> Option<(NaiveDate, NaiveTime, u32)> {
        Some((self.date?, self.time?, self.guests?))
    }

    // =========================================================================
    // Details Step
    // =========================================================================

    /// Picks the date. Dates outside the settings' bounds are refused.
    pub fn select_date(&mut self, store: &ReservationStore, date: NaiveDate) -> CoreResult<()> {
        let bounds = self.settings.bounds;
        validate_date_in_range(date, bounds.min, bounds.max)?;

        self.date = Some(date);
        self.errors.remove(WizardField::Date);
        self.refresh_candidates(store);
        Ok(())
    }

    /// Picks the time. Unknown or closed slots are refused.
    pub fn select_time(&mut self, store: &ReservationStore, time: NaiveTime) -> CoreResult<()> {
        availability::check_slot(store.time_slots(), time)?;

        self.time = Some(time);
        self.errors.remove(WizardField::Time);
        self.refresh_candidates(store);
        Ok(())
    }

    /// Takes the raw guests input.
    ///
    /// Blank input clears the party size. Anything else goes through
    /// [`parse_party_size`], so "abc" becomes 1 and "20" becomes the maximum.
    pub fn set_guests_input(&mut self, store: &ReservationStore, input: &str) -> Option<u32> {
        self.guests = if input.trim().is_empty() {
            None
        } else {
            Some(parse_party_size(input, self.settings.max_party_size))
        };

        self.errors.remove(WizardField::Guests);
        self.refresh_candidates(store);
        self.guests
    }

    /// Sets an already-numeric party size.
    pub fn set_guests(&mut self, store: &ReservationStore, guests: u32) -> CoreResult<()> {
        validate_party_size(guests, self.settings.max_party_size)?;

        self.guests = Some(guests);
        self.errors.remove(WizardField::Guests);
        self.refresh_candidates(store);
        Ok(())
    }

    // =========================================================================
    // Table Step
    // =========================================================================

    /// Picks a table from the candidates for the chosen slot.
    pub fn select_table(&mut self, store: &ReservationStore, table_id: &str) -> CoreResult<()> {
        let Some((date, time, guests)) = self.slot() else {
            let missing = self.validate_details();
            return Err(match missing.iter().next() {
                Some((_, e)) => CoreError::Validation(e.clone()),
                None => CoreError::TableNotFound(table_id.to_string()),
            });
        };

        availability::check_bookable(
            store.tables(),
            store.reservations(),
            table_id,
            date,
            time,
            guests,
            None,
        )?;

        self.table_id = Some(table_id.to_string());
        self.errors.remove(WizardField::Table);
        self.refresh_candidates(store);
        Ok(())
    }

    // =========================================================================
    // Customer Step
    // =========================================================================

    pub fn set_customer_name(&mut self, name: impl Into<String>) {
        self.customer.customer_name = name.into();
        self.errors.remove(WizardField::Name);
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.customer.email = email.into();
        self.errors.remove(WizardField::Email);
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.customer.phone = phone.into();
        self.errors.remove(WizardField::Phone);
    }

    /// Blank text is stored as `None`.
    pub fn set_special_requests(&mut self, text: Option<String>) {
        self.customer.special_requests = text.filter(|t| !t.trim().is_empty());
    }

    /// Replaces the whole customer step.
    pub fn set_customer(&mut self, details: CustomerDetails) {
        self.set_customer_name(details.customer_name);
        self.set_email(details.email);
        self.set_phone(details.phone);
        self.set_special_requests(details.special_requests);
    }

    // =========================================================================
    // Validation
    // =========================================================================

    pub fn validate_details(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if self.date.is_none() {
            errors.insert(
                WizardField::Date,
                ValidationError::NotSelected {
                    field: "date".to_string(),
                },
            );
        }
        if self.time.is_none() {
            errors.insert(
                WizardField::Time,
                ValidationError::NotSelected {
                    field: "time".to_string(),
                },
            );
        }
        if self.guests.is_none() {
            errors.insert(
                WizardField::Guests,
                ValidationError::NotEntered {
                    field: "number of guests".to_string(),
                },
            );
        }

        errors
    }

    pub fn validate_table(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        let chosen = self
            .table_id
            .as_deref()
            .is_some_and(|id| self.candidates.iter().any(|t| t.id == id));
        if !chosen {
            errors.insert(
                WizardField::Table,
                ValidationError::NotSelected {
                    field: "table".to_string(),
                },
            );
        }

        errors
    }

    pub fn validate_customer(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if let Err(e) = validate_customer_name(&self.customer.customer_name) {
            errors.insert(WizardField::Name, e);
        }
        if let Err(e) = validate_email(&self.customer.email) {
            errors.insert(WizardField::Email, e);
        }
        if let Err(e) = validate_phone(&self.customer.phone) {
            errors.insert(WizardField::Phone, e);
        }

        errors
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Validates the current step and moves forward when it passes.
    ///
    /// The customer step only moves on through [`submit`](Self::submit).
    pub fn next(&mut self, store: &ReservationStore) -> Result<WizardStep, FieldErrors> {
        let (errors, target) = match self.step {
            WizardStep::Details => (self.validate_details(), WizardStep::Table),
            WizardStep::Table => {
                self.refresh_candidates(store);
                (self.validate_table(), WizardStep::Customer)
            }
            WizardStep::Customer | WizardStep::Done => return Ok(self.step),
        };

        if !errors.is_empty() {
            debug!(step = ?self.step, count = errors.len(), "Wizard step incomplete");
            self.errors.merge(&errors);
            return Err(errors);
        }

        self.refresh_candidates(store);
        self.step = target;
        debug!(step = ?self.step, "Wizard advanced");
        Ok(self.step)
    }

    /// One step back, without validation.
    pub fn back(&mut self) -> WizardStep {
        self.step = self.step.previous();
        self.step
    }

    /// Books the reservation.
    ///
    /// ## Submit Check
    /// ```text
    /// submit(store)
    ///      │
    ///      ├── details invalid?   → Invalid, back to Details
    ///      ├── no table chosen?   → Invalid, back to Table
    ///      ├── customer invalid?  → Invalid, stay on Customer
    ///      ├── table taken since? → Booking(TableUnavailable), back to Table
    ///      │
    ///      └── Done, confirmed = reservation
    /// ```
    pub fn submit(&mut self, store: &mut ReservationStore) -> Result<Reservation, WizardError> {
        if self.step == WizardStep::Done {
            return Err(WizardError::Finished);
        }

        let checks = [
            (WizardStep::Details, self.validate_details()),
            (WizardStep::Table, self.validate_table()),
            (WizardStep::Customer, self.validate_customer()),
        ];
        for (step, errors) in checks {
            if !errors.is_empty() {
                self.errors.merge(&errors);
                self.step = step;
                return Err(WizardError::Invalid(errors));
            }
        }

        let (Some((date, time, guests)), Some(table_id)) = (self.slot(), self.table_id.clone())
        else {
            return Err(WizardError::Invalid(self.validate_details()));
        };

        let new = NewReservation {
            customer_name: self.customer.customer_name.trim().to_string(),
            email: self.customer.email.trim().to_string(),
            phone: self.customer.phone.trim().to_string(),
            date,
            time,
            guests,
            table_id,
            special_requests: self.customer.special_requests.clone(),
        };

        match store.book_reservation(new) {
            Ok(reservation) => {
                info!(id = %reservation.id, "Booking wizard completed");
                self.errors.clear();
                self.step = WizardStep::Done;
                self.confirmed = Some(reservation.clone());
                Ok(reservation)
            }
            Err(e) => {
                warn!(error = %e, "Booking wizard submit rejected");
                self.refresh_candidates(store);
                self.table_id = None;
                self.errors.insert(
                    WizardField::Table,
                    ValidationError::NotSelected {
                        field: "table".to_string(),
                    },
                );
                self.step = WizardStep::Table;
                Err(WizardError::Booking(e))
            }
        }
    }

    /// Recomputes candidates once date, time and party size are all set.
    fn refresh_candidates(&mut self, store: &ReservationStore) {
        let Some((date, time, guests)) = self.slot() else {
            return;
        };

        self.candidates = store.get_available_tables(date, time, guests);

        if let Some(id) = &self.table_id {
            if !self.candidates.iter().any(|t| &t.id == id) {
                debug!(table_id = %id, "Selected table no longer fits, clearing");
                self.table_id = None;
            }
        }
    }
}

impl Default for BookingWizard {
    fn default() -> Self {
        Self::new(WizardSettings::default())
    }
}

// =============================================================================
// Wizard State
// =============================================================================

/// Shared handle to the session's wizard.
///
/// ## Lock Order
/// Commands that also need the reservation store lock the store first,
/// then the wizard.
#[derive(Debug, Clone, Default)]
pub struct WizardState {
    wizard: Arc<Mutex<BookingWizard>>,
}

impl WizardState {
    pub fn new(settings: WizardSettings) -> Self {
        WizardState {
            wizard: Arc::new(Mutex::new(BookingWizard::new(settings))),
        }
    }

    /// Executes a function with read access to the wizard.
    pub fn with_wizard<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&BookingWizard) -> R,
    {
        let wizard = self.wizard.lock().expect("Wizard mutex poisoned");
        f(&wizard)
    }

    /// Executes a function with write access to the wizard.
    pub fn with_wizard_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut BookingWizard) -> R,
    {
        let mut wizard = self.wizard.lock().expect("Wizard mutex poisoned");
        f(&mut wizard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, day).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn ids(tables: &[Table]) -> Vec<&str> {
        tables.iter().map(|t| t.id.as_str()).collect()
    }

    /// Wizard on the table step for 2025-04-15 19:00, party of 4.
    fn at_table_step(store: &ReservationStore) -> BookingWizard {
        let mut wizard = BookingWizard::default();
        wizard.select_date(store, date(15)).unwrap();
        wizard.select_time(store, time(19, 0)).unwrap();
        wizard.set_guests_input(store, "4");
        wizard.next(store).unwrap();
        wizard
    }

    fn fill_customer(wizard: &mut BookingWizard) {
        wizard.set_customer(CustomerDetails {
            customer_name: "Mara Klein".to_string(),
            email: "mara@example.com".to_string(),
            phone: "+49301234567".to_string(),
            special_requests: Some("   ".to_string()),
        });
    }

    #[test]
    fn test_defaults() {
        let wizard = BookingWizard::default();
        assert_eq!(wizard.step(), WizardStep::Details);
        assert_eq!(wizard.guests(), Some(2));
        assert!(wizard.candidates().is_empty());
    }

    #[test]
    fn test_details_errors() {
        let store = ReservationStore::seeded();
        let mut wizard = BookingWizard::default();
        wizard.set_guests_input(&store, "  ");

        let errors = wizard.next(&store).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.message(WizardField::Date).unwrap(), "Please select a date");
        assert_eq!(errors.message(WizardField::Time).unwrap(), "Please select a time");
        assert_eq!(
            errors.message(WizardField::Guests).unwrap(),
            "Please enter number of guests"
        );
        assert_eq!(wizard.step(), WizardStep::Details);

        // Editing a field clears its error
        wizard.select_date(&store, date(15)).unwrap();
        assert!(wizard.errors().get(WizardField::Date).is_none());
        assert_eq!(wizard.errors().len(), 2);
    }

    #[test]
    fn test_candidates_follow_details() {
        let store = ReservationStore::seeded();
        let wizard = at_table_step(&store);

        assert_eq!(wizard.step(), WizardStep::Table);
        // Anna holds table 1 at 19:00; only tables seating four remain
        assert_eq!(ids(wizard.candidates()), vec!["2", "3", "4", "6", "8"]);
    }

    #[test]
    fn test_larger_party_clears_table() {
        let store = ReservationStore::seeded();
        let mut wizard = at_table_step(&store);
        wizard.select_table(&store, "2").unwrap();
        assert_eq!(wizard.table_id(), Some("2"));

        wizard.set_guests_input(&store, "6");
        assert_eq!(wizard.table_id(), None);
        assert_eq!(ids(wizard.candidates()), vec!["4", "6"]);
    }

    #[test]
    fn test_guests_input_parsing() {
        let store = ReservationStore::seeded();
        let mut wizard = BookingWizard::default();
        assert_eq!(wizard.set_guests_input(&store, "abc"), Some(1));
        assert_eq!(wizard.set_guests_input(&store, "20"), Some(12));
        assert_eq!(wizard.set_guests_input(&store, "5"), Some(5));

        assert!(wizard.set_guests(&store, 13).is_err());
        assert!(wizard.set_guests(&store, 0).is_err());
        assert_eq!(wizard.guests(), Some(5));
    }

    #[test]
    fn test_refused_selections() {
        let store = ReservationStore::seeded();
        let mut wizard = BookingWizard::new(WizardSettings {
            bounds: DateBounds::from_today(date(10), Some(30)),
            ..Default::default()
        });

        assert!(wizard.select_date(&store, date(9)).is_err());
        assert!(wizard
            .select_date(&store, NaiveDate::from_ymd_opt(2025, 5, 11).unwrap())
            .is_err());
        assert!(wizard
            .select_date(&store, NaiveDate::from_ymd_opt(2025, 5, 10).unwrap())
            .is_ok());

        assert!(matches!(
            wizard.select_time(&store, time(18, 30)),
            Err(CoreError::SlotUnavailable(_))
        ));
        assert!(wizard.select_time(&store, time(18, 45)).is_err());
        assert_eq!(wizard.time(), None);
    }

    #[test]
    fn test_table_must_be_a_candidate() {
        let store = ReservationStore::seeded();
        let mut wizard = BookingWizard::default();

        // No slot yet
        assert!(matches!(
            wizard.select_table(&store, "2"),
            Err(CoreError::Validation(_))
        ));

        wizard.select_date(&store, date(15)).unwrap();
        wizard.select_time(&store, time(20, 0)).unwrap();
        wizard.set_guests_input(&store, "4");

        assert!(matches!(
            wizard.select_table(&store, "3"),
            Err(CoreError::TableUnavailable { .. })
        ));
        assert!(matches!(
            wizard.select_table(&store, "5"),
            Err(CoreError::TableTooSmall { .. })
        ));
        assert!(matches!(
            wizard.select_table(&store, "99"),
            Err(CoreError::TableNotFound(_))
        ));
        assert_eq!(wizard.table_id(), None);
    }

    #[test]
    fn test_table_step_requires_table() {
        let store = ReservationStore::seeded();
        let mut wizard = at_table_step(&store);

        let errors = wizard.next(&store).unwrap_err();
        assert_eq!(errors.message(WizardField::Table).unwrap(), "Please select a table");

        wizard.select_table(&store, "8").unwrap();
        assert!(wizard.errors().is_empty());
        assert_eq!(wizard.next(&store).unwrap(), WizardStep::Customer);
    }

    #[test]
    fn test_back_never_validates() {
        let store = ReservationStore::seeded();
        let mut wizard = BookingWizard::default();
        assert_eq!(wizard.back(), WizardStep::Details);

        let mut wizard = at_table_step(&store);
        wizard.select_table(&store, "2").unwrap();
        wizard.next(&store).unwrap();
        assert_eq!(wizard.back(), WizardStep::Table);
        assert_eq!(wizard.back(), WizardStep::Details);
        assert_eq!(wizard.table_id(), Some("2"));
    }

    #[test]
    fn test_customer_errors() {
        let store = ReservationStore::seeded();
        let mut store_mut = store.clone();
        let mut wizard = at_table_step(&store);
        wizard.select_table(&store, "2").unwrap();
        wizard.next(&store).unwrap();

        wizard.set_email("mara@example");
        let err = wizard.submit(&mut store_mut).unwrap_err();
        let WizardError::Invalid(errors) = err else {
            panic!("expected field errors");
        };
        assert_eq!(errors.message(WizardField::Name).unwrap(), "Name is required");
        assert_eq!(errors.message(WizardField::Email).unwrap(), "Please enter a valid email");
        assert_eq!(
            errors.message(WizardField::Phone).unwrap(),
            "Phone number is required"
        );
        assert_eq!(wizard.step(), WizardStep::Customer);

        wizard.set_email("");
        assert!(wizard.errors().get(WizardField::Email).is_none());
        assert_eq!(
            wizard.validate_customer().message(WizardField::Email).unwrap(),
            "Email is required"
        );
    }

    #[test]
    fn test_submit_books_and_finishes() {
        let mut store = ReservationStore::seeded();
        let mut wizard = at_table_step(&store);
        wizard.select_table(&store, "2").unwrap();
        wizard.next(&store).unwrap();
        fill_customer(&mut wizard);

        let reservation = wizard.submit(&mut store).unwrap();
        assert_eq!(reservation.table_id, "2");
        assert_eq!(reservation.guests, 4);
        assert_eq!(reservation.special_requests, None);
        assert_eq!(wizard.step(), WizardStep::Done);
        assert_eq!(wizard.confirmed(), Some(&reservation));
        assert_eq!(store.reservations().len(), 5);

        assert!(matches!(wizard.submit(&mut store), Err(WizardError::Finished)));
        assert_eq!(wizard.back(), WizardStep::Done);

        wizard.reset();
        assert_eq!(wizard.step(), WizardStep::Details);
        assert!(wizard.confirmed().is_none());
    }

    #[test]
    fn test_conflict_at_submit_returns_to_table_step() {
        let mut store = ReservationStore::seeded();
        let mut wizard = at_table_step(&store);
        wizard.select_table(&store, "2").unwrap();
        wizard.next(&store).unwrap();
        fill_customer(&mut wizard);

        // Someone else takes table 2 first
        store
            .book_reservation(NewReservation {
                customer_name: "Other Guest".to_string(),
                email: "other@example.com".to_string(),
                phone: "+4930000000".to_string(),
                date: date(15),
                time: time(19, 0),
                guests: 3,
                table_id: "2".to_string(),
                special_requests: None,
            })
            .unwrap();

        let err = wizard.submit(&mut store).unwrap_err();
        assert!(matches!(
            err,
            WizardError::Booking(CoreError::TableUnavailable { .. })
        ));
        assert_eq!(wizard.step(), WizardStep::Table);
        assert_eq!(wizard.table_id(), None);
        assert!(wizard.errors().get(WizardField::Table).is_some());
        assert!(!ids(wizard.candidates()).contains(&"2"));
    }

    #[test]
    fn test_field_errors_serialize_by_name() {
        let store = ReservationStore::seeded();
        let mut wizard = BookingWizard::default();
        let errors = wizard.next(&store).unwrap_err();

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["date"], "Please select a date");
        assert_eq!(json["time"], "Please select a time");
        assert!(json.get("guests").is_none());
    }
}
