//! # Error Types
//!
//! Domain-specific error types for bookstore-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bookstore-core errors (this file)                                     │
//! │  ├── CoreError         - Domain rule violations, amount overflow       │
//! │  ├── ValidationErrors  - Every invalid field of one entity             │
//! │  └── ValidationError   - One field, one reason                         │
//! │                                                                         │
//! │  bookstore-db errors (separate crate)                                  │
//! │  └── DbError           - Database operation failures                   │
//! │                                                                         │
//! │  bookstore-service errors                                              │
//! │  └── ServiceError      - CoreError | DbError                           │
//! │                                                                         │
//! │  Console errors                                                        │
//! │  └── AppError          - What the user sees: "[CODE] message"          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, ids)
//! 3. Errors are enum variants, never String

use std::fmt;

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Domain rule violations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// One or more fields failed validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    /// A purchase references a client or book that does not exist.
    ///
    /// ## When This Occurs
    /// - Adding a purchase for a deleted (or never created) client
    /// - Updating a purchase to point at an unknown book
    ///
    /// Checked before field validation, so a purchase with both a missing
    /// client and an empty library reports this error.
    #[error("Invalid book id and/or client id (client {client_id}, book {book_id})")]
    InvalidReference { client_id: i64, book_id: i64 },

    /// A money total went past what `Money` can hold.
    ///
    /// ## When This Occurs
    /// - Summing what a client spent on very expensive books
    #[error("Amount overflow while totaling {what}")]
    AmountOverflow { what: String },
}

// =============================================================================
// Validation Error
// =============================================================================

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },
}

impl ValidationError {
    /// Name of the field this error is about.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::MustBePositive { field }
            | ValidationError::Negative { field } => field,
        }
    }
}

/// All validation failures for one entity.
///
/// Validators never stop at the first problem; the console prints the
/// whole list so the user can fix everything in one go.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        ValidationErrors::default()
    }

    /// Records a failure.
    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Field names in the order they were reported.
    pub fn fields(&self) -> Vec<&str> {
        self.errors.iter().map(ValidationError::field).collect()
    }

    /// `Ok(())` when nothing was recorded, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        ValidationErrors {
            errors: vec![error],
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
