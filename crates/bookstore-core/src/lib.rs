//! # bookstore-core: Pure Domain Logic for the Bookstore Tracker
//!
//! This crate holds the entity types and every rule that can be checked
//! without touching the database: field validation, filter predicates,
//! money arithmetic and top-N ranking.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Bookstore Tracker Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Console (apps/console)                       │   │
//! │  │      menu 0-16 ──► prompts ──► service call ──► print result    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    bookstore-service                            │   │
//! │  │     ClientService, BookService, PurchaseService                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bookstore-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  report   │  │ validation│  │   │
//! │  │   │  Client   │  │   Money   │  │  top_n    │  │   rules   │  │   │
//! │  │   │  Book     │  │           │  │           │  │           │  │   │
//! │  │   │  Purchase │  │           │  │           │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  bookstore-db (Database Layer)                  │   │
//! │  │              SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Entities (Client, Book, Purchase) and report rows
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Field validation, accumulating every violation
//! - [`report`] - Stable top-N ranking used by the reports
//!
//! ## Example Usage
//!
//! ```rust
//! use bookstore_core::money::Money;
//! use bookstore_core::types::Book;
//! use bookstore_core::validation::validate_book_at;
//!
//! let book = Book {
//!     id: 1,
//!     title: "The Go Programming Language".to_string(),
//!     author: "Donovan".to_string(),
//!     publisher: "Addison-Wesley".to_string(),
//!     publication_year: 2015,
//!     price_cents: Money::from_major_minor(34, 99).cents(),
//! };
//!
//! assert!(validate_book_at(&book, 2024).is_ok());
//! assert!(book.matches("Go"));
//! assert!(!book.matches("go"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError, ValidationErrors};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of entries returned by the top-N reports.
pub const REPORT_SIZE: usize = 3;
