//! # Application Configuration
//!
//! Restaurant name, booking limits and demo-data switch.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     RESERVEASE_RESTAURANT_NAME="Trattoria Nord"                        │
//! │     RESERVEASE_MAX_PARTY_SIZE=10                                       │
//! │     RESERVEASE_DEFAULT_PARTY_SIZE=2                                    │
//! │     RESERVEASE_SEED=false                                              │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/reservease/config.toml (Linux)                           │
//! │     ~/Library/Application Support/com.reservease.app/config.toml       │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [restaurant]
//! name = "ReservEase"
//!
//! [booking]
//! max_party_size = 12
//! default_party_size = 2
//! booking_horizon_days = 90   # omit for no upper limit
//!
//! [seed]
//! load_demo_data = true
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use reservease_core::{DEFAULT_PARTY_SIZE, MAX_PARTY_SIZE};

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Sections
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantConfig {
    /// Shown in the header and on the home page.
    #[serde(default = "default_restaurant_name")]
    pub name: String,
}

fn default_restaurant_name() -> String {
    "ReservEase".to_string()
}

impl Default for RestaurantConfig {
    fn default() -> Self {
        RestaurantConfig {
            name: default_restaurant_name(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingConfig {
    #[serde(default = "default_max_party_size")]
    pub max_party_size: u32,

    #[serde(default = "default_party_size")]
    pub default_party_size: u32,

    /// How many days ahead a table can be booked. `None` means no limit.
    #[serde(default)]
    pub booking_horizon_days: Option<u32>,
}

fn default_max_party_size() -> u32 {
    MAX_PARTY_SIZE
}

fn default_party_size() -> u32 {
    DEFAULT_PARTY_SIZE
}

impl Default for BookingConfig {
    fn default() -> Self {
        BookingConfig {
            max_party_size: default_max_party_size(),
            default_party_size: default_party_size(),
            booking_horizon_days: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Start the session with the sample reservations.
    #[serde(default = "default_true")]
    pub load_demo_data: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SeedConfig {
    fn default() -> Self {
        SeedConfig {
            load_demo_data: true,
        }
    }
}

// =============================================================================
// App Config
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub restaurant: RestaurantConfig,

    #[serde(default)]
    pub booking: BookingConfig,

    #[serde(default)]
    pub seed: SeedConfig,
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`config_path`, or the platform default)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = Self::from_toml_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a TOML document. Missing sections and keys take defaults.
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.booking.max_party_size == 0 {
            return Err(ConfigError::Invalid(
                "max_party_size must be at least 1".into(),
            ));
        }

        if self.booking.default_party_size == 0 {
            return Err(ConfigError::Invalid(
                "default_party_size must be at least 1".into(),
            ));
        }

        if self.booking.default_party_size > self.booking.max_party_size {
            return Err(ConfigError::Invalid(format!(
                "default_party_size ({}) exceeds max_party_size ({})",
                self.booking.default_party_size, self.booking.max_party_size
            )));
        }

        if self.restaurant.name.trim().is_empty() {
            return Err(ConfigError::Invalid("restaurant name must not be empty".into()));
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies `RESERVEASE_*` overrides from `lookup`.
    ///
    /// Values that do not parse are ignored with a warning.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("RESERVEASE_RESTAURANT_NAME") {
            debug!(name = %name, "Overriding restaurant name from environment");
            self.restaurant.name = name;
        }

        if let Some(raw) = lookup("RESERVEASE_MAX_PARTY_SIZE") {
            match raw.trim().parse::<u32>() {
                Ok(n) => self.booking.max_party_size = n,
                Err(_) => warn!(value = %raw, "Ignoring invalid RESERVEASE_MAX_PARTY_SIZE"),
            }
        }

        if let Some(raw) = lookup("RESERVEASE_DEFAULT_PARTY_SIZE") {
            match raw.trim().parse::<u32>() {
                Ok(n) => self.booking.default_party_size = n,
                Err(_) => warn!(value = %raw, "Ignoring invalid RESERVEASE_DEFAULT_PARTY_SIZE"),
            }
        }

        if let Some(raw) = lookup("RESERVEASE_SEED") {
            match raw.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.seed.load_demo_data = true,
                "0" | "false" | "no" | "off" => self.seed.load_demo_data = false,
                _ => warn!(value = %raw, "Ignoring invalid RESERVEASE_SEED"),
            }
        }
    }

    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "reservease", "app")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.restaurant.name, "ReservEase");
        assert_eq!(config.booking.max_party_size, 12);
        assert_eq!(config.booking.default_party_size, 2);
        assert!(config.seed.load_demo_data);
    }

    #[test]
    fn test_partial_toml() {
        let config = AppConfig::from_toml_str(
            r#"
            [restaurant]
            name = "Trattoria Nord"

            [booking]
            max_party_size = 8
            booking_horizon_days = 30
            "#,
        )
        .unwrap();

        assert_eq!(config.restaurant.name, "Trattoria Nord");
        assert_eq!(config.booking.max_party_size, 8);
        assert_eq!(config.booking.default_party_size, 2);
        assert_eq!(config.booking.booking_horizon_days, Some(30));
        assert!(config.seed.load_demo_data);
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        let err = AppConfig::from_toml_str("[booking]\nmax_party_size = \"many\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("RESERVEASE_RESTAURANT_NAME", "Bistro Süd"),
            ("RESERVEASE_MAX_PARTY_SIZE", "6"),
            ("RESERVEASE_DEFAULT_PARTY_SIZE", "not-a-number"),
            ("RESERVEASE_SEED", "false"),
        ]);

        let mut config = AppConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.restaurant.name, "Bistro Süd");
        assert_eq!(config.booking.max_party_size, 6);
        assert_eq!(config.booking.default_party_size, 2);
        assert!(!config.seed.load_demo_data);
    }

    #[test]
    fn test_validation() {
        let mut config = AppConfig::default();
        config.booking.default_party_size = 13;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config.booking.default_party_size = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.booking.max_party_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("reservease-does-not-exist.toml");
        let config = AppConfig::load_or_default(Some(path));
        assert_eq!(config.booking.max_party_size, AppConfig::default().booking.max_party_size);
    }
}
