//! # ReservEase Application Library
//!
//! The application layer of ReservEase: configuration, session state and
//! the commands each page of the web frontend calls.
//!
//! ## Module Organization
//! ```text
//! reservease/
//! ├── lib.rs              ◄─── You are here (logging & run)
//! ├── config.rs           ◄─── TOML + environment configuration
//! ├── error.rs            ◄─── API error type for commands
//! ├── routes.rs           ◄─── Path → page, access guards, header links
//! ├── state/
//! │   ├── mod.rs          ◄─── AppState (one per session)
//! │   ├── reservations.rs ◄─── Reservation store handle
//! │   ├── auth.rs         ◄─── Auth store handle
//! │   ├── menu.rs         ◄─── Menu store handle
//! │   └── wizard.rs       ◄─── Booking wizard + handle
//! └── commands/
//!     ├── mod.rs          ◄─── Command exports, access guards
//!     ├── home.rs         ◄─── Landing page
//!     ├── auth.rs         ◄─── Login / logout / navigation
//!     ├── booking.rs      ◄─── Booking wizard & pickers
//!     ├── confirmation.rs ◄─── Latest booking summary
//!     ├── menu.rs         ◄─── Menu page & editor
//!     ├── reservations.rs ◄─── Reservation list actions
//!     └── admin.rs        ◄─── Admin dashboard, reports, tables
//! ```
//!
//! ## Example
//! ```rust
//! use reservease::commands::booking;
//! use reservease::config::AppConfig;
//! use reservease::state::AppState;
//!
//! let today = chrono::NaiveDate::from_ymd_opt(2025, 4, 10).unwrap();
//! let state = AppState::with_today(AppConfig::default(), today);
//!
//! booking::select_date(&state, "2025-04-15").unwrap();
//! let view = booking::select_time(&state, "20:00").unwrap();
//! assert_eq!(view.date_label.as_deref(), Some("Tuesday, April 15, 2025"));
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use std::error::Error;
use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::info;
use tracing_subscriber::EnvFilter;

use reservease_core::validation::{parse_date, parse_party_size};

use config::AppConfig;
use error::ApiError;
use state::AppState;

/// Command-line options of the `reservease` binary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub config_path: Option<PathBuf>,
    pub date: Option<NaiveDate>,
    pub guests: Option<String>,
    pub help: bool,
}

pub const USAGE: &str = "\
Usage: reservease [OPTIONS]

Prints free tables per time slot as JSON.

Options:
  -c, --config <PATH>   Config file (default: platform config dir)
  -d, --date <DATE>     Day to show, YYYY-MM-DD (default: today)
  -g, --guests <N>      Party size (default: configured default)
  -h, --help            Show this help";

impl RunOptions {
    pub fn parse<I>(args: I) -> Result<Self, ApiError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = RunOptions::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => options.help = true,
                "-c" | "--config" => {
                    options.config_path = Some(PathBuf::from(required_value(&arg, args.next())?));
                }
                "-d" | "--date" => {
                    options.date = Some(parse_date(&required_value(&arg, args.next())?)?);
                }
                "-g" | "--guests" => options.guests = Some(required_value(&arg, args.next())?),
                other => {
                    return Err(ApiError::validation(format!("Unknown argument: {}", other)));
                }
            }
        }

        Ok(options)
    }
}

fn required_value(flag: &str, value: Option<String>) -> Result<String, ApiError> {
    value.ok_or_else(|| ApiError::validation(format!("{} needs a value", flag)))
}

/// Installs the `tracing` subscriber.
///
/// `RUST_LOG` overrides the default `info,reservease=debug`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,reservease=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Runs the binary.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Parse arguments ──────────────────────────────────────────────────► │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter (RUST_LOG)                     │
/// │                                                                         │
/// │  3. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults → config.toml → RESERVEASE_* → validate                  │
/// │     • falls back to defaults with a warning                             │
/// │                                                                         │
/// │  4. Build Session State ──────────────────────────────────────────────► │
/// │     • demo data or an empty restaurant                                  │
/// │     • booking policy: party size limit, no dates before today           │
/// │                                                                         │
/// │  5. Print availability overview as JSON ──────────────────────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run<I>(args: I) -> Result<(), Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let options = RunOptions::parse(args)?;
    if options.help {
        println!("{}", USAGE);
        return Ok(());
    }

    init_tracing();
    info!("Starting ReservEase");

    let config = AppConfig::load_or_default(options.config_path);
    let state = AppState::new(config);

    let date = options.date.unwrap_or_else(|| state.today());
    let guests = options
        .guests
        .as_deref()
        .map(|g| parse_party_size(g, state.config.booking.max_party_size))
        .unwrap_or(state.config.booking.default_party_size);

    let overview = commands::booking::availability_overview(&state, date, guests);
    println!("{}", serde_json::to_string_pretty(&overview)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_options() {
        let options =
            RunOptions::parse(args(&["--date", "2025-04-15", "-g", "4", "-c", "/tmp/r.toml"]))
                .unwrap();
        assert_eq!(options.date, NaiveDate::from_ymd_opt(2025, 4, 15));
        assert_eq!(options.guests.as_deref(), Some("4"));
        assert_eq!(options.config_path, Some(PathBuf::from("/tmp/r.toml")));
        assert!(!options.help);

        assert!(RunOptions::parse(args(&["--help"])).unwrap().help);
        assert!(RunOptions::parse(args(&[])).unwrap() == RunOptions::default());
    }

    #[test]
    fn test_parse_errors() {
        assert!(RunOptions::parse(args(&["--date"])).is_err());
        assert!(RunOptions::parse(args(&["--date", "15.04.2025"])).is_err());
        assert!(RunOptions::parse(args(&["--verbose"])).is_err());
    }
}
