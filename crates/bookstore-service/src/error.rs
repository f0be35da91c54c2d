//! # Service Error Types
//!
//! One error type for every service call: either a domain rule was broken
//! (nothing was written) or the store failed.

use bookstore_core::{CoreError, ValidationErrors};
use bookstore_db::DbError;
use thiserror::Error;

/// Errors returned by the services.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Validation or reference check failed. Nothing was persisted.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The database rejected or failed the operation.
    #[error(transparent)]
    Storage(#[from] DbError),
}

impl ServiceError {
    /// Whether one or more fields failed validation.
    pub fn is_validation(&self) -> bool {
        matches!(self, ServiceError::Core(CoreError::Validation(_)))
    }

    /// Whether a purchase referenced an unknown client or book.
    pub fn is_reference(&self) -> bool {
        matches!(self, ServiceError::Core(CoreError::InvalidReference { .. }))
    }

    /// The failed fields, if this is a validation error.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            ServiceError::Core(CoreError::Validation(errors)) => Some(errors),
            _ => None,
        }
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        ServiceError::Core(CoreError::Validation(errors))
    }
}

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use bookstore_core::ValidationError;

    #[test]
    fn test_classification() {
        let err: ServiceError = ValidationErrors::from(ValidationError::Required {
            field: "title".to_string(),
        })
        .into();
        assert!(err.is_validation());
        assert!(!err.is_reference());
        assert_eq!(err.validation_errors().unwrap().fields(), vec!["title"]);

        let err: ServiceError = CoreError::InvalidReference {
            client_id: 1,
            book_id: 2,
        }
        .into();
        assert!(err.is_reference());
        assert!(err.validation_errors().is_none());

        let err: ServiceError = DbError::PoolExhausted.into();
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "Connection pool exhausted");
    }
}
