//! # Validation Module
//!
//! Field validation for clients, books and purchases.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console                                                      │
//! │  ├── Parsing (ids, years, prices must be numbers)                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Services                                                     │
//! │  ├── Reference check (purchases only, needs the database)              │
//! │  └── THIS MODULE: field rules, every violation collected               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── PRIMARY KEY uniqueness (duplicate ids)                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Accumulating Errors
//! Each validator walks every rule and returns all failures at once:
//!
//! ```rust
//! use bookstore_core::validation::validate_client;
//! use bookstore_core::Client;
//!
//! let client = Client {
//!     id: 1,
//!     first_name: "".to_string(),
//!     last_name: "Lovelace".to_string(),
//!     address: " ".to_string(),
//! };
//! let errors = validate_client(&client).unwrap_err();
//! assert_eq!(errors.fields(), vec!["first_name", "address"]);
//! ```

use chrono::Datelike;

use crate::error::{ValidationError, ValidationErrors};
use crate::types::{Book, Client, NewPurchase};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationErrors>;

// =============================================================================
// Field Rules
// =============================================================================

fn require(errors: &mut ValidationErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(ValidationError::Required {
            field: field.to_string(),
        });
    }
}

fn require_positive(errors: &mut ValidationErrors, field: &str, value: i64) {
    if value <= 0 {
        errors.push(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }
}

/// The current calendar year (UTC), upper bound for publication years.
pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}

// =============================================================================
// Entity Validators
// =============================================================================

/// Validates a client.
///
/// ## Rules
/// - first_name, last_name, address: non-blank (whitespace-only is rejected)
pub fn validate_client(client: &Client) -> ValidationResult<()> {
    let mut errors = ValidationErrors::new();

    require(&mut errors, "first_name", &client.first_name);
    require(&mut errors, "last_name", &client.last_name);
    require(&mut errors, "address", &client.address);

    errors.into_result()
}

/// Validates a book against the current year.
pub fn validate_book(book: &Book) -> ValidationResult<()> {
    validate_book_at(book, current_year())
}

/// Validates a book against an explicit current year.
///
/// ## Rules
/// - title, author, publisher: non-blank (whitespace-only is rejected)
/// - publication_year: in `1..=current_year`
/// - price: zero or more (free books are allowed)
pub fn validate_book_at(book: &Book, current_year: i32) -> ValidationResult<()> {
    let mut errors = ValidationErrors::new();

    require(&mut errors, "title", &book.title);
    require(&mut errors, "author", &book.author);
    require(&mut errors, "publisher", &book.publisher);

    if book.publication_year <= 0 || book.publication_year > current_year {
        errors.push(ValidationError::OutOfRange {
            field: "publication_year".to_string(),
            min: 1,
            max: i64::from(current_year),
        });
    }

    if book.price().is_negative() {
        errors.push(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    errors.into_result()
}

/// Validates the structural fields of a purchase.
///
/// ## Rules
/// - library: non-empty
/// - client_id, book_id: positive
///
/// Whether the ids exist is NOT checked here; that needs the database and
/// happens in the purchase service, before this function runs.
pub fn validate_purchase(purchase: &NewPurchase) -> ValidationResult<()> {
    let mut errors = ValidationErrors::new();

    require_positive(&mut errors, "client_id", purchase.client_id);
    require_positive(&mut errors, "book_id", purchase.book_id);
    require(&mut errors, "library", &purchase.library);

    errors.into_result()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const YEAR: i32 = 2024;

    fn valid_book() -> Book {
        Book {
            id: 1,
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            publisher: "Chilton".to_string(),
            publication_year: 1965,
            price_cents: 1299,
        }
    }

    fn valid_client() -> Client {
        Client {
            id: 1,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            address: "12 Marylebone Rd".to_string(),
        }
    }

    #[test]
    fn test_valid_book_passes() {
        assert!(validate_book_at(&valid_book(), YEAR).is_ok());

        let free = Book {
            price_cents: 0,
            ..valid_book()
        };
        assert!(validate_book_at(&free, YEAR).is_ok());

        let this_year = Book {
            publication_year: YEAR,
            ..valid_book()
        };
        assert!(validate_book_at(&this_year, YEAR).is_ok());
    }

    #[test]
    fn test_single_invalid_book_field_reports_only_that_field() {
        let cases: Vec<(Book, &str)> = vec![
            (
                Book {
                    title: "".to_string(),
                    ..valid_book()
                },
                "title",
            ),
            (
                Book {
                    author: "  ".to_string(),
                    ..valid_book()
                },
                "author",
            ),
            (
                Book {
                    publisher: "".to_string(),
                    ..valid_book()
                },
                "publisher",
            ),
            (
                Book {
                    publication_year: 0,
                    ..valid_book()
                },
                "publication_year",
            ),
            (
                Book {
                    publication_year: YEAR + 1,
                    ..valid_book()
                },
                "publication_year",
            ),
            (
                Book {
                    price_cents: -1,
                    ..valid_book()
                },
                "price",
            ),
        ];

        for (book, field) in cases {
            let errors = validate_book_at(&book, YEAR).unwrap_err();
            assert_eq!(errors.fields(), vec![field], "book: {:?}", book);
        }
    }

    #[test]
    fn test_book_reports_every_violation() {
        let book = Book {
            id: 1,
            title: "".to_string(),
            author: "".to_string(),
            publisher: "".to_string(),
            publication_year: -4,
            price_cents: -100,
        };
        let errors = validate_book_at(&book, YEAR).unwrap_err();
        assert_eq!(
            errors.fields(),
            vec!["title", "author", "publisher", "publication_year", "price"]
        );
    }

    #[test]
    fn test_validate_client() {
        assert!(validate_client(&valid_client()).is_ok());

        let blank = Client {
            id: 2,
            first_name: "".to_string(),
            last_name: "".to_string(),
            address: "".to_string(),
        };
        let errors = validate_client(&blank).unwrap_err();
        assert_eq!(errors.fields(), vec!["first_name", "last_name", "address"]);

        let spaces = Client {
            first_name: "   ".to_string(),
            ..valid_client()
        };
        let errors = validate_client(&spaces).unwrap_err();
        assert_eq!(errors.fields(), vec!["first_name"]);
    }

    #[test]
    fn test_validate_purchase() {
        assert!(validate_purchase(&NewPurchase::new(1, 2, "Downtown")).is_ok());

        let errors = validate_purchase(&NewPurchase::new(0, -3, "")).unwrap_err();
        assert_eq!(errors.fields(), vec!["client_id", "book_id", "library"]);

        let errors = validate_purchase(&NewPurchase::new(1, 2, " ")).unwrap_err();
        assert_eq!(errors.fields(), vec!["library"]);
    }

    #[test]
    fn test_current_year_is_sane() {
        assert!(current_year() >= 2024);
    }
}
