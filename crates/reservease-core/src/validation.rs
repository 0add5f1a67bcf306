//! # Validation Module
//!
//! Input validation for the booking form and the reservation search box.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend                                                     │
//! │  ├── Input widgets (date picker, slot picker, number field)            │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Booking wizard (app crate)                                   │
//! │  ├── Collects per-field errors, blocks step progression                │
//! │  └── THIS MODULE: the individual field rules                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: ReservationStore::book_reservation                           │
//! │  └── Table exists, seats the party, is free for the slot               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use reservease_core::validation::{parse_party_size, validate_email};
//!
//! assert!(validate_email("anna@example.com").is_ok());
//! assert_eq!(parse_party_size("20", 12), 12);
//! ```

use std::sync::OnceLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;

use crate::error::ValidationError;
use crate::types::slot_time;
use crate::{MAX_SEARCH_LEN, MAX_TABLE_CAPACITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Customer Details
// =============================================================================

/// Validates the customer name.
///
/// ## Rules
/// - Must not be blank
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "Name".to_string(),
        });
    }

    Ok(())
}

/// Validates an email address.
///
/// ## Rules
/// - Must not be blank ("Email is required")
/// - Must look like `something@something.something`
///
/// ## Example
/// ```rust
/// use reservease_core::validation::validate_email;
///
/// assert!(validate_email("anna@example.com").is_ok());
/// assert!(validate_email("").is_err());
/// assert!(validate_email("anna@example").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "Email".to_string(),
        });
    }

    if !is_plausible_email(email) {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "expected name@domain.tld".to_string(),
        });
    }

    Ok(())
}

/// Loose email shape used by the booking form.
const EMAIL_PATTERN: &str = r"\S+@\S+\.\S+";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

/// Whether `s` contains a run of the shape `X@Y.Z` with no whitespace.
///
/// A search, not a full match: surrounding text is accepted.
pub fn is_plausible_email(s: &str) -> bool {
    email_regex().is_match(s)
}

/// Validates a phone number.
///
/// ## Rules
/// - Must not be blank. No format is enforced.
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    if phone.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "Phone number".to_string(),
        });
    }

    Ok(())
}

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (no filtering)
/// - Maximum [`MAX_SEARCH_LEN`] characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_SEARCH_LEN {
        return Err(ValidationError::TooLong {
            field: "search".to_string(),
            max: MAX_SEARCH_LEN,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Party Size
// =============================================================================

/// Parses the guests number field.
///
/// The field never rejects input: anything that is not a positive integer
/// becomes 1, and the result is clamped into `1..=max`.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Booking: Number of Guests                                              │
/// │                                                                         │
/// │  User types "abc" ──► 1                                                │
/// │  User types "0"   ──► 1                                                │
/// │  User types "4"   ──► 4                                                │
/// │  User types "20"  ──► 12 (max)                                         │
/// │  User types "6 people" ──► 6 (leading digits)                          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn parse_party_size(input: &str, max: u32) -> u32 {
    let digits: String = input
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();

    let parsed = if digits.is_empty() {
        0
    } else {
        // Only overflow can fail here; treat it as "very large".
        digits.parse::<u64>().unwrap_or(u64::MAX)
    };
    let value = if parsed == 0 { 1 } else { parsed };

    value.min(u64::from(max.max(1))) as u32
}

/// Validates a party size against the configured maximum.
pub fn validate_party_size(guests: u32, max: u32) -> ValidationResult<()> {
    if guests == 0 || guests > max {
        return Err(ValidationError::OutOfRange {
            field: "guests".to_string(),
            min: 1,
            max: i64::from(max),
        });
    }

    Ok(())
}

/// Validates the seat count of a table.
pub fn validate_table_capacity(capacity: u32) -> ValidationResult<()> {
    if capacity == 0 || capacity > MAX_TABLE_CAPACITY {
        return Err(ValidationError::OutOfRange {
            field: "capacity".to_string(),
            min: 1,
            max: i64::from(MAX_TABLE_CAPACITY),
        });
    }

    Ok(())
}

// =============================================================================
// Date & Time
// =============================================================================

/// Parses an ISO `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> ValidationResult<NaiveDate> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ValidationError::NotSelected {
            field: "date".to_string(),
        });
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| ValidationError::InvalidFormat {
        field: "date".to_string(),
        reason: "expected YYYY-MM-DD".to_string(),
    })
}

/// Parses an `HH:MM` slot time.
pub fn parse_slot_time(input: &str) -> ValidationResult<NaiveTime> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ValidationError::NotSelected {
            field: "time".to_string(),
        });
    }

    NaiveTime::parse_from_str(input, slot_time::FORMAT).map_err(|_| {
        ValidationError::InvalidFormat {
            field: "time".to_string(),
            reason: "expected HH:MM".to_string(),
        }
    })
}

/// Checks that `date` lies within the optional `[min, max]` window.
pub fn validate_date_in_range(
    date: NaiveDate,
    min: Option<NaiveDate>,
    max: Option<NaiveDate>,
) -> ValidationResult<()> {
    let too_early = min.is_some_and(|m| date < m);
    let too_late = max.is_some_and(|m| date > m);

    if too_early || too_late {
        return Err(ValidationError::InvalidFormat {
            field: "date".to_string(),
            reason: "outside the bookable range".to_string(),
        });
    }

    Ok(())
}

/// Rejects dates before `today`.
pub fn validate_not_past(date: NaiveDate, today: NaiveDate) -> ValidationResult<()> {
    if date < today {
        return Err(ValidationError::InPast {
            field: "Date".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_customer_name() {
        assert!(validate_customer_name("Anna Schmidt").is_ok());
        let err = validate_customer_name("   ").unwrap_err();
        assert_eq!(err.to_string(), "Name is required");
    }

    #[test]
    fn test_validate_email_messages() {
        assert_eq!(validate_email("").unwrap_err().to_string(), "Email is required");
        assert_eq!(
            validate_email("anna").unwrap_err().to_string(),
            "Please enter a valid email"
        );
        assert!(validate_email("anna@example.com").is_ok());
    }

    #[test]
    fn test_is_plausible_email() {
        assert!(is_plausible_email("a@b.c"));
        assert!(is_plausible_email("first.last@mail.example.org"));
        assert!(is_plausible_email("contact: anna@example.com"));
        assert!(is_plausible_email("a@@b.c"));

        assert!(!is_plausible_email("@example.com"));
        assert!(!is_plausible_email("anna@example"));
        assert!(!is_plausible_email("anna@.com"));
        assert!(!is_plausible_email("anna@example."));
        assert!(!is_plausible_email("anna @example.com"));
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("+1234567890").is_ok());
        assert_eq!(
            validate_phone("").unwrap_err().to_string(),
            "Phone number is required"
        );
    }

    #[test]
    fn test_parse_party_size() {
        assert_eq!(parse_party_size("4", 12), 4);
        assert_eq!(parse_party_size("abc", 12), 1);
        assert_eq!(parse_party_size("", 12), 1);
        assert_eq!(parse_party_size("0", 12), 1);
        assert_eq!(parse_party_size("-3", 12), 1);
        assert_eq!(parse_party_size("20", 12), 12);
        assert_eq!(parse_party_size(" 6 people", 12), 6);
        assert_eq!(parse_party_size("99999999999999999999999", 12), 12);
    }

    #[test]
    fn test_validate_party_size() {
        assert!(validate_party_size(1, 12).is_ok());
        assert!(validate_party_size(12, 12).is_ok());
        assert!(validate_party_size(0, 12).is_err());
        assert!(validate_party_size(13, 12).is_err());
    }

    #[test]
    fn test_parse_date_and_time() {
        assert_eq!(
            parse_date("2025-04-15").unwrap(),
            NaiveDate::from_ymd_opt(2025, 4, 15).unwrap()
        );
        assert_eq!(parse_date("").unwrap_err().to_string(), "Please select a date");
        assert!(parse_date("15/04/2025").is_err());

        assert_eq!(
            parse_slot_time("19:30").unwrap(),
            NaiveTime::from_hms_opt(19, 30, 0).unwrap()
        );
        assert_eq!(parse_slot_time("").unwrap_err().to_string(), "Please select a time");
        assert!(parse_slot_time("7pm").is_err());
    }

    #[test]
    fn test_validate_date_in_range() {
        let d = |day| NaiveDate::from_ymd_opt(2025, 4, day).unwrap();
        assert!(validate_date_in_range(d(15), Some(d(10)), None).is_ok());
        assert!(validate_date_in_range(d(10), Some(d(10)), Some(d(10))).is_ok());
        assert!(validate_date_in_range(d(9), Some(d(10)), None).is_err());
        assert!(validate_date_in_range(d(20), None, Some(d(19))).is_err());
        assert!(validate_date_in_range(d(1), None, None).is_ok());
    }

    #[test]
    fn test_validate_table_capacity() {
        assert!(validate_table_capacity(1).is_ok());
        assert!(validate_table_capacity(MAX_TABLE_CAPACITY).is_ok());
        assert!(validate_table_capacity(0).is_err());
        assert!(validate_table_capacity(MAX_TABLE_CAPACITY + 1).is_err());
    }

    #[test]
    fn test_validate_not_past() {
        let d = |day| NaiveDate::from_ymd_opt(2025, 4, day).unwrap();
        assert!(validate_not_past(d(10), d(10)).is_ok());
        assert!(validate_not_past(d(11), d(10)).is_ok());
        assert_eq!(
            validate_not_past(d(9), d(10)).unwrap_err().to_string(),
            "Date cannot be in the past"
        );
    }

    #[test]
    fn test_validate_search_query() {
        assert_eq!(validate_search_query("  anna ").unwrap(), "anna");
        assert_eq!(validate_search_query("").unwrap(), "");
        assert!(validate_search_query(&"x".repeat(101)).is_err());
    }
}
