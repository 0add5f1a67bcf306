//! # Reservation Store
//!
//! The session's reservations, tables and time slots.
//!
//! ## Reservation Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Reservation Lifecycle                                │
//! │                                                                         │
//! │  1. CREATE                                                             │
//! │     ├── book_reservation() → policy + slot + table, then add           │
//! │     └── add_reservation()  → Reservation { status: Confirmed }         │
//! │                                                                         │
//! │  2. CHANGE                                                             │
//! │     ├── amend_reservation()  → checked merge (customer edits)          │
//! │     ├── update_reservation() → unchecked merge                         │
//! │     ├── set_status()         → admin dropdown                          │
//! │     └── cancel_reservation() → status: Cancelled (frees the table)     │
//! │                                                                         │
//! │  3. REMOVE                                                             │
//! │     ├── delete_reservation()   → gone from the session                 │
//! │     └── cleanup_old_bookings() → drops bookings past retention         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lookups of unknown ids return `None`. The checked operations return
//! `CoreResult` and leave the store untouched on error.

use chrono::{Duration, NaiveDate, NaiveTime, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use reservease_core::availability::{self, BookingPolicy};
use reservease_core::validation::validate_table_capacity;
use reservease_core::{
    seed, CoreError, CoreResult, NewReservation, Reservation, ReservationStatus,
    ReservationUpdate, Table, TableAvailability, TableDraft, TimeSlot, RETENTION_DAYS,
};

/// In-memory reservation collection with its restaurant layout.
#[derive(Debug, Clone, Default)]
pub struct ReservationStore {
    reservations: Vec<Reservation>,
    tables: Vec<Table>,
    time_slots: Vec<TimeSlot>,
    policy: BookingPolicy,
}

impl ReservationStore {
    /// Creates a store from explicit collections.
    pub fn new(tables: Vec<Table>, time_slots: Vec<TimeSlot>, reservations: Vec<Reservation>) -> Self {
        ReservationStore {
            reservations,
            tables,
            time_slots,
            policy: BookingPolicy::default(),
        }
    }

    /// Replaces the limits checked bookings must respect.
    pub fn with_policy(mut self, policy: BookingPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> &BookingPolicy {
        &self.policy
    }

    /// The demo restaurant with its sample reservations.
    pub fn seeded() -> Self {
        Self::new(seed::tables(), seed::time_slots(), seed::reservations())
    }

    /// The demo restaurant layout with no reservations.
    pub fn empty_layout() -> Self {
        Self::new(seed::tables(), seed::time_slots(), Vec::new())
    }

    // =========================================================================
    // Read Accessors
    // =========================================================================

    /// All reservations in insertion order.
    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn time_slots(&self) -> &[TimeSlot] {
        &self.time_slots
    }

    pub fn get_reservation(&self, id: &str) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.id == id)
    }

    pub fn get_table(&self, id: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.id == id)
    }

    /// Tables seating at least `min_capacity`, smallest first.
    ///
    /// Equal capacities keep layout order.
    pub fn tables_by_min_capacity(&self, min_capacity: u32) -> Vec<Table> {
        let mut tables: Vec<Table> = self
            .tables
            .iter()
            .filter(|t| t.seats(min_capacity))
            .cloned()
            .collect();
        tables.sort_by_key(|t| t.capacity);
        tables
    }

    /// Reservations whose email matches, ignoring case.
    pub fn reservations_by_email(&self, email: &str) -> Vec<Reservation> {
        let email = email.trim().to_lowercase();
        self.reservations
            .iter()
            .filter(|r| r.email.to_lowercase() == email)
            .cloned()
            .collect()
    }

    /// Most recently created reservation.
    ///
    /// Ties on `created_at` resolve to the later insertion.
    pub fn latest_reservation(&self) -> Option<&Reservation> {
        self.reservations
            .iter()
            .enumerate()
            .max_by_key(|(idx, r)| (r.created_at, *idx))
            .map(|(_, r)| r)
    }

    // =========================================================================
    // Availability
    // =========================================================================

    /// Tables that seat the party and are free at (date, time).
    pub fn get_available_tables(&self, date: NaiveDate, time: NaiveTime, party_size: u32) -> Vec<Table> {
        let tables =
            availability::available_tables(&self.tables, &self.reservations, date, time, party_size);
        debug!(%date, %time, party_size, count = tables.len(), "Available tables");
        tables
    }

    /// Every table with its derived availability at (date, time).
    pub fn table_availability(
        &self,
        date: NaiveDate,
        time: NaiveTime,
        party_size: u32,
    ) -> Vec<TableAvailability> {
        availability::table_availability(&self.tables, &self.reservations, date, time, party_size)
    }

    /// Open slots on `date` with at least one fitting free table.
    pub fn open_time_slots(&self, date: NaiveDate, party_size: u32) -> Vec<TimeSlot> {
        availability::open_time_slots(
            &self.time_slots,
            &self.tables,
            &self.reservations,
            date,
            party_size,
        )
    }

    pub fn has_conflict(
        &self,
        table_id: &str,
        date: NaiveDate,
        time: NaiveTime,
        exclude_id: Option<&str>,
    ) -> bool {
        availability::has_conflict(&self.reservations, table_id, date, time, exclude_id)
    }

    /// True when no confirmed reservation references the table.
    pub fn is_table_free(&self, table_id: &str) -> bool {
        availability::is_table_free(&self.reservations, table_id)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Appends a reservation without checking availability.
    ///
    /// The id is a fresh UUID, the status is always `Confirmed` and
    /// `created_at` is now.
    pub fn add_reservation(&mut self, new: NewReservation) -> Reservation {
        let id = Uuid::new_v4().to_string();
        let reservation = new.into_reservation(id, Utc::now());

        info!(
            id = %reservation.id,
            table_id = %reservation.table_id,
            date = %reservation.date,
            guests = reservation.guests,
            "Reservation created"
        );

        self.reservations.push(reservation.clone());
        reservation
    }

    /// Checked booking.
    ///
    /// ## Booking Check
    /// ```text
    /// book_reservation(new)
    ///      │
    ///      ├── guests 0 or over max?      → Validation
    ///      ├── date before today?         → Validation
    ///      ├── slot unknown or closed?    → SlotUnavailable
    ///      ├── table unknown?             → TableNotFound
    ///      ├── capacity < guests?         → TableTooSmall
    ///      ├── confirmed booking at slot? → TableUnavailable
    ///      │
    ///      └── add_reservation(new)
    /// ```
    ///
    /// Check and insert happen under the same `&mut self` borrow, so no other
    /// booking can slip in between.
    pub fn book_reservation(&mut self, new: NewReservation) -> CoreResult<Reservation> {
        let checked = self.policy.check_party_size(new.guests).and_then(|()| {
            self.check_schedule(new.date, new.time)?;
            availability::check_bookable(
                &self.tables,
                &self.reservations,
                &new.table_id,
                new.date,
                new.time,
                new.guests,
                None,
            )
            .map(|_| ())
        });

        if let Err(e) = checked {
            warn!(table_id = %new.table_id, date = %new.date, error = %e, "Booking rejected");
            return Err(e);
        }

        Ok(self.add_reservation(new))
    }

    fn check_schedule(&self, date: NaiveDate, time: NaiveTime) -> CoreResult<()> {
        self.policy.check_date(date)?;
        availability::check_slot(&self.time_slots, time)?;
        Ok(())
    }

    /// Checked merge of `update` into the reservation with `id`.
    ///
    /// The party size is always checked. A moved booking (new date or time)
    /// must land on an open slot that is not in the past. A result that
    /// holds its table must fit it and must not collide with another
    /// confirmed booking.
    pub fn amend_reservation(&mut self, id: &str, update: ReservationUpdate) -> CoreResult<Reservation> {
        let current = self
            .get_reservation(id)
            .ok_or_else(|| CoreError::ReservationNotFound(id.to_string()))?;

        let mut merged = current.clone();
        update.clone().apply_to(&mut merged);
        let moved = merged.date != current.date || merged.time != current.time;

        let checked = self.policy.check_party_size(merged.guests).and_then(|()| {
            if moved {
                self.check_schedule(merged.date, merged.time)?;
            }
            if merged.status.occupies_table() {
                availability::check_bookable(
                    &self.tables,
                    &self.reservations,
                    &merged.table_id,
                    merged.date,
                    merged.time,
                    merged.guests,
                    Some(id),
                )?;
            }
            Ok(())
        });

        if let Err(e) = checked {
            warn!(id, error = %e, "Reservation change rejected");
            return Err(e);
        }

        self.update_reservation(id, update)
            .ok_or_else(|| CoreError::ReservationNotFound(id.to_string()))
    }

    /// Merges `update` into the reservation with `id`.
    pub fn update_reservation(&mut self, id: &str, update: ReservationUpdate) -> Option<Reservation> {
        let reservation = self.reservations.iter_mut().find(|r| r.id == id)?;
        update.apply_to(reservation);

        info!(id = %id, status = %reservation.status, "Reservation updated");
        Some(reservation.clone())
    }

    pub fn set_status(&mut self, id: &str, status: ReservationStatus) -> Option<Reservation> {
        self.update_reservation(id, ReservationUpdate::status(status))
    }

    pub fn cancel_reservation(&mut self, id: &str) -> Option<Reservation> {
        self.set_status(id, ReservationStatus::Cancelled)
    }

    /// Removes and returns the reservation with `id`.
    pub fn delete_reservation(&mut self, id: &str) -> Option<Reservation> {
        let idx = self.reservations.iter().position(|r| r.id == id)?;
        let removed = self.reservations.remove(idx);

        info!(id = %id, table_id = %removed.table_id, "Reservation deleted");
        Some(removed)
    }

    /// Removes every reservation dated more than a week before `today`.
    ///
    /// Returns the removed reservations in their previous order.
    pub fn cleanup_old_bookings(&mut self, today: NaiveDate) -> Vec<Reservation> {
        let cutoff = today - Duration::days(RETENTION_DAYS);
        let (old, kept): (Vec<Reservation>, Vec<Reservation>) =
            std::mem::take(&mut self.reservations)
                .into_iter()
                .partition(|r| r.date < cutoff);
        self.reservations = kept;

        info!(%cutoff, removed = old.len(), "Old bookings cleaned up");
        old
    }

    // =========================================================================
    // Table Management
    // =========================================================================

    /// Adds a table. Table numbers are unique.
    pub fn create_table(&mut self, draft: TableDraft) -> CoreResult<Table> {
        validate_table_capacity(draft.capacity)?;
        if self.get_table(&draft.id()).is_some() {
            return Err(CoreError::DuplicateTable(draft.id()));
        }

        let table = draft.into_table();
        info!(id = %table.id, capacity = table.capacity, "Table created");
        self.tables.push(table.clone());
        Ok(table)
    }

    /// Replaces the table with `id`.
    ///
    /// Renumbering moves the table's reservations along with it. The new
    /// capacity must still seat every confirmed party on the table.
    pub fn update_table(&mut self, id: &str, draft: TableDraft) -> CoreResult<Table> {
        validate_table_capacity(draft.capacity)?;
        let idx = self
            .tables
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| CoreError::TableNotFound(id.to_string()))?;

        let new_id = draft.id();
        if new_id != id && self.get_table(&new_id).is_some() {
            return Err(CoreError::DuplicateTable(new_id));
        }

        let largest_party = self
            .reservations
            .iter()
            .filter(|r| r.table_id == id && r.status.occupies_table())
            .map(|r| r.guests)
            .max();
        if let Some(guests) = largest_party.filter(|g| *g > draft.capacity) {
            return Err(CoreError::TableTooSmall {
                table_id: id.to_string(),
                capacity: draft.capacity,
                guests,
            });
        }

        if new_id != id {
            for r in self.reservations.iter_mut().filter(|r| r.table_id == id) {
                r.table_id = new_id.clone();
            }
        }

        let table = draft.into_table();
        self.tables[idx] = table.clone();
        info!(old_id = %id, id = %table.id, capacity = table.capacity, "Table updated");
        Ok(table)
    }

    /// Removes a table that no confirmed reservation holds.
    pub fn delete_table(&mut self, id: &str) -> CoreResult<Table> {
        let idx = self
            .tables
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| CoreError::TableNotFound(id.to_string()))?;

        if !self.is_table_free(id) {
            warn!(id, "Table delete rejected: confirmed reservations");
            return Err(CoreError::TableInUse(id.to_string()));
        }

        let removed = self.tables.remove(idx);
        info!(id, "Table deleted");
        Ok(removed)
    }
}
