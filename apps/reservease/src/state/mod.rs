//! # State Module
//!
//! Session state handed to every command.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                        AppState                                 │   │
//! │  │  config (read-only) · today (read-only)                        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │          ┌──────────────────┼──────────────────┬──────────────┐        │
//! │          ▼                  ▼                  ▼              ▼         │
//! │  ┌──────────────────┐ ┌──────────────┐ ┌──────────────┐ ┌───────────┐ │
//! │  │ ReservationState │ │  AuthState   │ │ WizardState  │ │ MenuState │ │
//! │  │                  │ │              │ │              │ │           │ │
//! │  │  Arc<Mutex<      │ │  Arc<Mutex<  │ │  Arc<Mutex<  │ │ Arc<Mutex<│ │
//! │  │   Reservation    │ │   AuthStore  │ │   Booking    │ │  MenuStore│ │
//! │  │   Store>>        │ │  >>          │ │   Wizard>>   │ │  >>       │ │
//! │  └──────────────────┘ └──────────────┘ └──────────────┘ └───────────┘ │
//! │                                                                         │
//! │  LOCK ORDER: reservations → auth → wizard → menu                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod auth;
mod menu;
mod reservations;
mod wizard;

pub use auth::AuthState;
pub use menu::MenuState;
pub use reservations::ReservationState;
pub use wizard::{
    BookingWizard, CustomerDetails, FieldErrors, WizardError, WizardField, WizardSettings,
    WizardState, WizardStep,
};

use chrono::NaiveDate;
use tracing::info;

use crate::config::AppConfig;
use reservease_core::calendar::DateBounds;
use reservease_core::BookingPolicy;
use reservease_store::{AuthStore, MenuStore, ReservationStore};

/// Everything one session needs.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub reservations: ReservationState,
    pub auth: AuthState,
    pub wizard: WizardState,
    pub menu: MenuState,
    today: NaiveDate,
}

impl AppState {
    /// Builds the session for the local calendar day.
    pub fn new(config: AppConfig) -> Self {
        Self::with_today(config, chrono::Local::now().date_naive())
    }

    /// Builds the session as if `today` were the current day.
    ///
    /// Checked bookings are held to the configured party size and may not
    /// start before `today`.
    pub fn with_today(config: AppConfig, today: NaiveDate) -> Self {
        let (store, menu) = if config.seed.load_demo_data {
            (ReservationStore::seeded(), MenuStore::seeded())
        } else {
            (ReservationStore::empty_layout(), MenuStore::empty())
        };
        let store = store.with_policy(BookingPolicy {
            max_party_size: config.booking.max_party_size,
            earliest_date: Some(today),
        });

        info!(
            restaurant = %config.restaurant.name,
            reservations = store.reservations().len(),
            menu_items = menu.items().len(),
            %today,
            "Session state ready"
        );

        let settings = wizard_settings(&config, today);

        AppState {
            config,
            reservations: ReservationState::new(store),
            auth: AuthState::new(AuthStore::demo()),
            wizard: WizardState::new(settings),
            menu: MenuState::new(menu),
            today,
        }
    }

    /// A second session over the same reservations.
    ///
    /// Sign-in and the booking form start fresh; the store and the menu
    /// are shared.
    pub fn share_reservations(&self) -> Self {
        AppState {
            config: self.config.clone(),
            reservations: self.reservations.clone(),
            auth: AuthState::new(AuthStore::demo()),
            wizard: WizardState::new(wizard_settings(&self.config, self.today)),
            menu: self.menu.clone(),
            today: self.today,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Dates the booking calendar accepts.
    pub fn date_bounds(&self) -> DateBounds {
        DateBounds::from_today(self.today, self.config.booking.booking_horizon_days)
    }
}

fn wizard_settings(config: &AppConfig, today: NaiveDate) -> WizardSettings {
    WizardSettings {
        max_party_size: config.booking.max_party_size,
        default_party_size: config.booking.default_party_size,
        bounds: DateBounds::from_today(today, config.booking.booking_horizon_days),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 10).unwrap()
    }

    #[test]
    fn test_seeded_session() {
        let state = AppState::with_today(AppConfig::default(), today());
        assert_eq!(state.reservations.with_store(|s| s.reservations().len()), 4);
        assert!(!state.auth.with_auth(|a| a.is_authenticated()));
        assert_eq!(state.wizard.with_wizard(|w| w.guests()), Some(2));
        assert_eq!(state.menu.with_menu(|m| m.items().len()), 12);

        let policy = state.reservations.with_store(|s| *s.policy());
        assert_eq!(policy.earliest_date, Some(today()));
        assert_eq!(policy.max_party_size, 12);
    }

    #[test]
    fn test_empty_session() {
        let mut config = AppConfig::default();
        config.seed.load_demo_data = false;
        config.booking.default_party_size = 4;
        config.booking.booking_horizon_days = Some(14);

        let state = AppState::with_today(config, today());
        assert!(state.reservations.with_store(|s| s.reservations().is_empty()));
        assert!(state.menu.with_menu(|m| m.items().is_empty()));
        assert_eq!(state.reservations.with_store(|s| s.tables().len()), 8);
        assert_eq!(state.wizard.with_wizard(|w| w.guests()), Some(4));
        assert_eq!(
            state.date_bounds().max,
            NaiveDate::from_ymd_opt(2025, 4, 24)
        );
    }

    #[test]
    fn test_shared_sessions() {
        let first = AppState::with_today(AppConfig::default(), today());
        first.auth.with_auth_mut(|a| {
            a.login(reservease_core::Role::Admin);
        });

        let second = first.share_reservations();
        assert!(!second.auth.with_auth(|a| a.is_authenticated()));

        second.reservations.with_store_mut(|s| s.delete_reservation("4"));
        assert_eq!(first.reservations.with_store(|s| s.reservations().len()), 3);
    }
}
