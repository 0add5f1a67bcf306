//! # Home Commands
//!
//! Landing page content.

use serde::Serialize;
use tracing::debug;

use crate::routes::Route;
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeStep {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeView {
    pub restaurant_name: String,
    pub headline: String,
    pub tagline: String,
    pub call_to_action: String,
    pub booking_path: String,
    pub steps: Vec<HomeStep>,
}

fn step(title: &str, description: &str) -> HomeStep {
    HomeStep {
        title: title.to_string(),
        description: description.to_string(),
    }
}

pub fn get_home(state: &AppState) -> HomeView {
    debug!("get_home command");

    HomeView {
        restaurant_name: state.config.restaurant.name.clone(),
        headline: "Reserve Your Perfect Dining Experience".to_string(),
        tagline: "Elegant table booking for your special moments. Quick, simple, and refined reservations."
            .to_string(),
        call_to_action: "Book a Table".to_string(),
        booking_path: Route::Booking.path().to_string(),
        steps: vec![
            step(
                "Choose Date & Time",
                "Select your preferred date and time for your reservation.",
            ),
            step(
                "Party Size & Table",
                "Tell us how many guests and choose your ideal table.",
            ),
            step(
                "Confirm & Enjoy",
                "Receive confirmation instantly and enjoy your dining experience.",
            ),
        ],
    }
}
