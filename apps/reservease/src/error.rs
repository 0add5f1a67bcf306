//! # API Error Type
//!
//! Unified error type for application commands.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in ReservEase                             │
//! │                                                                         │
//! │  Command Function → Result<T, ApiError>                                │
//! │         │                                                               │
//! │         ├── Unknown id?          → NOT_FOUND                           │
//! │         ├── Form / wizard input? → VALIDATION_ERROR                    │
//! │         ├── Not signed in?       → UNAUTHORIZED                        │
//! │         ├── Wrong role?          → FORBIDDEN                           │
//! │         ├── Table already taken? → CONFLICT                            │
//! │         └── Anything else        → INTERNAL                            │
//! │                                                                         │
//! │  Frontend receives { "code": "CONFLICT", "message": "Table 3 is ..." } │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use crate::config::ConfigError;
use crate::state::WizardError;
use reservease_core::{CoreError, ValidationError};

/// Error returned from commands.
///
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Reservation not found: 42"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (404)
    NotFound,

    /// Input validation failed (400)
    ValidationError,

    /// Sign-in required (401)
    Unauthorized,

    /// Signed in, but the role may not do this (403)
    Forbidden,

    /// Table already booked for the slot, duplicate table number,
    /// or a table still in use (409)
    Conflict,

    /// Internal error (500)
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn unauthorized() -> Self {
        ApiError::new(ErrorCode::Unauthorized, "Please sign in to continue")
    }

    pub fn forbidden() -> Self {
        ApiError::new(
            ErrorCode::Forbidden,
            "You need administrator privileges to access this page.",
        )
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ReservationNotFound(id) => ApiError::not_found("Reservation", &id),
            CoreError::TableNotFound(id) => ApiError::not_found("Table", &id),
            CoreError::MenuItemNotFound(id) => ApiError::not_found("Menu item", &id),
            e @ (CoreError::TableUnavailable { .. }
            | CoreError::DuplicateTable(_)
            | CoreError::TableInUse(_)) => ApiError::new(ErrorCode::Conflict, e.to_string()),
            e @ CoreError::TableTooSmall { .. } => ApiError::validation(e.to_string()),
            e @ CoreError::SlotUnavailable(_) => ApiError::validation(e.to_string()),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<WizardError> for ApiError {
    fn from(err: WizardError) -> Self {
        match err {
            WizardError::Invalid(errors) => ApiError::validation(errors.to_string()),
            WizardError::Booking(e) => e.into(),
            e @ WizardError::Finished => ApiError::new(ErrorCode::Conflict, e.to_string()),
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        tracing::error!("Configuration error: {}", err);
        ApiError::internal(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Result alias for commands.
pub type ApiResult<T> = Result<T, ApiError>;
