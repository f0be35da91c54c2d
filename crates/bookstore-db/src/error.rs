//! # Database Error Types
//!
//! Error types for database operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError (this module) ← Adds context and categorization               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ServiceError::Storage (bookstore-service)                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AppError "[STORAGE_ERROR] ..." printed by the console loop            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::error::ErrorKind;
use thiserror::Error;

/// Database operation errors.
///
/// These errors wrap sqlx errors and provide additional context
/// for debugging and user feedback.
#[derive(Debug, Error)]
pub enum DbError {
    /// Entity not found in database.
    ///
    /// Lookups return `Option` and updates/deletes on missing ids are
    /// no-ops, so this only surfaces from `fetch_one` style queries.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Primary key (or other UNIQUE) collision.
    ///
    /// ## When This Occurs
    /// - Adding a client or book with an id that is already taken
    #[error("Duplicate {field}: '{value}' already exists")]
    DuplicateKey { field: String, value: String },

    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file can't be created
    /// - File permissions issue
    /// - Disk full
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Transaction could not be started or committed.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Creates a DuplicateKey error.
    pub fn duplicate(field: impl Into<String>, value: impl Into<String>) -> Self {
        DbError::DuplicateKey {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Whether this error is a key collision.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, DbError::DuplicateKey { .. })
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::RowNotFound             → DbError::NotFound
/// Database error, UniqueViolation kind → DbError::DuplicateKey
/// Database error, other kinds          → DbError::QueryFailed
/// sqlx::Error::PoolTimedOut            → DbError::PoolExhausted
/// Other                                → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DbError::NotFound {
                entity: "Record".to_string(),
                id: "unknown".to_string(),
            },

            sqlx::Error::Database(db_err) => {
                let msg = db_err.message().to_string();

                // SQLite: "UNIQUE constraint failed: <table>.<column>"
                let unique = matches!(db_err.kind(), ErrorKind::UniqueViolation)
                    || msg.contains("UNIQUE constraint failed");

                if unique {
                    let field = msg
                        .split("UNIQUE constraint failed: ")
                        .nth(1)
                        .unwrap_or("unknown")
                        .to_string();
                    DbError::DuplicateKey {
                        field,
                        value: "unknown".to_string(),
                    }
                } else {
                    DbError::QueryFailed(msg)
                }
            }

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DbError::duplicate("Client id", "3");
        assert_eq!(err.to_string(), "Duplicate Client id: '3' already exists");
        assert!(err.is_duplicate());

        let err = DbError::not_found("Book", "9");
        assert_eq!(err.to_string(), "Book not found: 9");
        assert!(!err.is_duplicate());
    }

    #[test]
    fn test_pool_errors_map() {
        assert!(matches!(
            DbError::from(sqlx::Error::PoolTimedOut),
            DbError::PoolExhausted
        ));
        assert!(matches!(
            DbError::from(sqlx::Error::RowNotFound),
            DbError::NotFound { .. }
        ));
    }
}
