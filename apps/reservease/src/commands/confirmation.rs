//! # Confirmation Commands
//!
//! Summary of the most recently created reservation.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     ✓  Reservation Confirmed                            │
//! │          Thank you, Mara Klein! Your table has been reserved.           │
//! │                                                                         │
//! │  Reservation Details                                                    │
//! │    Tuesday, April 15, 2025                                              │
//! │    19:00                                                                │
//! │    4 Guests                                                             │
//! │    Table 2                                                              │
//! │  ───────────────────────────────────────────                           │
//! │  Reservation ID: #3f2a9c1e                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! With no reservation in the session the page redirects to `/book`.

use serde::Serialize;
use tracing::debug;

use reservease_core::display::format_long_date;
use reservease_core::types::format_slot_time;
use reservease_core::Reservation;

use crate::routes::Route;
use crate::state::AppState;

/// Characters of the id shown as the reservation number.
const CONFIRMATION_REF_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationView {
    pub title: String,
    pub message: String,
    pub date_label: String,
    pub time_label: String,
    pub guests_label: String,
    pub table_label: String,
    pub special_requests: Option<String>,
    /// "#3f2a9c1e"
    pub reference: String,
    pub reservation: Reservation,
}

impl ConfirmationView {
    pub fn from_reservation(r: &Reservation) -> Self {
        let guests_label = if r.guests == 1 {
            "1 Guest".to_string()
        } else {
            format!("{} Guests", r.guests)
        };

        ConfirmationView {
            title: "Reservation Confirmed".to_string(),
            message: format!(
                "Thank you, {}! Your table has been reserved.",
                r.customer_name
            ),
            date_label: format_long_date(r.date),
            time_label: format_slot_time(r.time),
            guests_label,
            table_label: format!("Table {}", r.table_id),
            special_requests: r.special_requests.clone(),
            reference: format!("#{}", r.id.chars().take(CONFIRMATION_REF_LEN).collect::<String>()),
            reservation: r.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConfirmationPage {
    Show { confirmation: ConfirmationView },
    Redirect { to: String },
}

pub fn get_confirmation(state: &AppState) -> ConfirmationPage {
    debug!("get_confirmation command");

    let latest = state
        .reservations
        .with_store(|store| store.latest_reservation().cloned());

    match latest {
        Some(r) => ConfirmationPage::Show {
            confirmation: ConfirmationView::from_reservation(&r),
        },
        None => ConfirmationPage::Redirect {
            to: Route::Booking.path().to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn test_shows_latest_seed_reservation() {
        let state = AppState::new(AppConfig::default());
        let ConfirmationPage::Show { confirmation } = get_confirmation(&state) else {
            panic!("expected a confirmation");
        };
        assert_eq!(
            confirmation.message,
            "Thank you, Sofia Becker! Your table has been reserved."
        );
        assert_eq!(confirmation.date_label, "Wednesday, April 16, 2025");
        assert_eq!(confirmation.guests_label, "6 Guests");
        assert_eq!(confirmation.reference, "#3");
    }

    #[test]
    fn test_redirects_without_reservations() {
        let mut config = AppConfig::default();
        config.seed.load_demo_data = false;
        let state = AppState::new(config);

        assert_eq!(
            get_confirmation(&state),
            ConfirmationPage::Redirect {
                to: "/book".to_string()
            }
        );
    }
}
