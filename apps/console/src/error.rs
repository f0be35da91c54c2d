//! # Console Error Type
//!
//! The one error type the command loop sees.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Console                            │
//! │                                                                         │
//! │  "abc" typed for an id ─────────► AppError INPUT_ERROR                  │
//! │                                                                         │
//! │  service call                                                          │
//! │    ├── CoreError::Validation ───► AppError VALIDATION_ERROR            │
//! │    ├── CoreError::InvalidRef ───► AppError REFERENCE_ERROR             │
//! │    └── DbError ─────────────────► AppError STORAGE_ERROR               │
//! │                                                                         │
//! │  Command loop prints "[CODE] message" and reads the next choice.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use bookstore_core::CoreError;
use bookstore_db::DbError;
use bookstore_service::ServiceError;
use thiserror::Error;

/// Error reported to the user.
#[derive(Debug, Clone, Error)]
#[error("[{code}] {message}")]
pub struct AppError {
    /// Machine-readable category
    pub code: ErrorCode,

    /// Human-readable message
    pub message: String,
}

/// Error categories shown in brackets before the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// One or more fields failed validation
    ValidationError,

    /// A purchase names a client or book that does not exist
    ReferenceError,

    /// The database failed or rejected the operation
    StorageError,

    /// Typed text could not be parsed (id, year, price, menu choice)
    InputError,

    /// Reading stdin or writing stdout failed
    IoError,

    /// Configuration could not be loaded
    ConfigError,

    /// A money total is too large to compute
    AmountError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::ReferenceError => "REFERENCE_ERROR",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::InputError => "INPUT_ERROR",
            ErrorCode::IoError => "IO_ERROR",
            ErrorCode::ConfigError => "CONFIG_ERROR",
            ErrorCode::AmountError => "AMOUNT_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Creates an input error.
    pub fn input(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::InputError, message)
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::ConfigError, message)
    }
}

/// Converts database errors to console errors.
impl From<DbError> for AppError {
    fn from(err: DbError) -> Self {
        match &err {
            DbError::DuplicateKey { .. } | DbError::NotFound { .. } => {}
            other => tracing::error!("Database error: {}", other),
        }
        AppError::new(ErrorCode::StorageError, err.to_string())
    }
}

/// Converts domain errors to console errors.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(errors) => {
                AppError::new(ErrorCode::ValidationError, errors.to_string())
            }
            err @ CoreError::InvalidReference { .. } => {
                AppError::new(ErrorCode::ReferenceError, err.to_string())
            }
            err @ CoreError::AmountOverflow { .. } => {
                AppError::new(ErrorCode::AmountError, err.to_string())
            }
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Core(e) => e.into(),
            ServiceError::Storage(e) => e.into(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::new(ErrorCode::IoError, err.to_string())
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::config(format!("Invalid config file: {}", err))
    }
}

/// Result type for console operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use bookstore_core::{ValidationError, ValidationErrors};

    #[test]
    fn test_display_has_code_prefix() {
        let err = AppError::input("Client id must be a whole number, got 'x'");
        assert_eq!(
            err.to_string(),
            "[INPUT_ERROR] Client id must be a whole number, got 'x'"
        );
    }

    #[test]
    fn test_service_errors_map_to_codes() {
        let validation: ServiceError = ValidationErrors::from(ValidationError::Required {
            field: "library".to_string(),
        })
        .into();
        let err = AppError::from(validation);
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "library is required");

        let reference: ServiceError = CoreError::InvalidReference {
            client_id: 1,
            book_id: 2,
        }
        .into();
        assert_eq!(AppError::from(reference).code, ErrorCode::ReferenceError);

        let overflow: ServiceError = CoreError::AmountOverflow {
            what: "money spent by client 1".to_string(),
        }
        .into();
        assert_eq!(
            AppError::from(overflow).to_string(),
            "[AMOUNT_ERROR] Amount overflow while totaling money spent by client 1"
        );

        let storage: ServiceError = DbError::duplicate("Book id", "2").into();
        let err = AppError::from(storage);
        assert_eq!(err.code, ErrorCode::StorageError);
        assert_eq!(err.to_string(), "[STORAGE_ERROR] Duplicate Book id: '2' already exists");
    }
}
