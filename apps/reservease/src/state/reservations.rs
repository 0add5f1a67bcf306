//! # Reservation State
//!
//! Shared handle to the session's [`ReservationStore`].
//!
//! ## Thread Safety
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Reservation State Operations                         │
//! │                                                                         │
//! │  Page Action              Command                  Store Call           │
//! │  ───────────              ───────                  ──────────           │
//! │                                                                         │
//! │  Confirm booking ────────► submit_booking() ─────► book_reservation()  │
//! │                                                                         │
//! │  Click Cancel ───────────► cancel_reservation() ─► set status          │
//! │                                                                         │
//! │  Change status ──────────► update_status() ──────► set_status()        │
//! │                                                                         │
//! │  Click Delete ───────────► delete_reservation() ─► remove              │
//! │                                                                         │
//! │  View list ──────────────► list_reservations() ──► (read only)         │
//! │                                                                         │
//! │  NOTE: One lock per command, so check-then-insert cannot interleave.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use reservease_store::ReservationStore;

#[derive(Debug, Clone, Default)]
pub struct ReservationState {
    store: Arc<Mutex<ReservationStore>>,
}

impl ReservationState {
    pub fn new(store: ReservationStore) -> Self {
        ReservationState {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = reservations.with_store(|s| s.reservations().len());
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ReservationStore) -> R,
    {
        let store = self.store.lock().expect("Reservation store mutex poisoned");
        f(&store)
    }

    /// Executes a function with write access to the store.
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ReservationStore) -> R,
    {
        let mut store = self.store.lock().expect("Reservation store mutex poisoned");
        f(&mut store)
    }
}
