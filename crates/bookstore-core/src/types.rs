//! # Domain Types
//!
//! Core domain types used throughout the bookstore tracker.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Client      │   │    Purchase     │   │      Book       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │◄──│  client_id      │   │  id             │       │
//! │  │  first_name     │   │  book_id        │──►│  title          │       │
//! │  │  last_name      │   │  library        │   │  author         │       │
//! │  │  address        │   │  id             │   │  publisher      │       │
//! │  └─────────────────┘   └─────────────────┘   │  publication_yr │       │
//! │                                              │  price_cents    │       │
//! │                                              └─────────────────┘       │
//! │                                                                         │
//! │  Report rows: ClientSpending (client, spent), BookSales (book, sales)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## References Without Foreign Keys
//! The arrows above are NOT enforced by the schema. The purchase service
//! checks them before every insert and update.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Client
// =============================================================================

/// A bookstore customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Client {
    /// Identifier chosen when the client is added.
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
}

impl Client {
    /// Case-sensitive substring match over first name, last name and address.
    ///
    /// An empty needle matches every client.
    pub fn matches(&self, needle: &str) -> bool {
        self.first_name.contains(needle)
            || self.last_name.contains(needle)
            || self.address.contains(needle)
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Client #{}: {} {}, {}",
            self.id, self.first_name, self.last_name, self.address
        )
    }
}

// =============================================================================
// Book
// =============================================================================

/// A book on sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Book {
    /// Identifier chosen when the book is added.
    pub id: i64,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub publication_year: i32,
    /// Price in cents (smallest currency unit).
    pub price_cents: i64,
}

impl Book {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Case-sensitive substring match over title, author and publisher.
    ///
    /// ## Example
    /// ```rust
    /// use bookstore_core::Book;
    ///
    /// let book = Book {
    ///     id: 1,
    ///     title: "The Go Programming Language".to_string(),
    ///     author: "Alan Donovan".to_string(),
    ///     publisher: "Addison-Wesley".to_string(),
    ///     publication_year: 2015,
    ///     price_cents: 3499,
    /// };
    /// assert!(book.matches("Go"));
    /// assert!(!book.matches("go"));
    /// ```
    pub fn matches(&self, needle: &str) -> bool {
        self.title.contains(needle)
            || self.author.contains(needle)
            || self.publisher.contains(needle)
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Book #{}: \"{}\" by {} ({}, {}) {}",
            self.id,
            self.title,
            self.author,
            self.publisher,
            self.publication_year,
            self.price()
        )
    }
}

// =============================================================================
// Purchase
// =============================================================================

/// A purchase that has not been stored yet; the store assigns its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPurchase {
    pub client_id: i64,
    pub book_id: i64,
    /// Branch that made the sale.
    pub library: String,
}

impl NewPurchase {
    pub fn new(client_id: i64, book_id: i64, library: impl Into<String>) -> Self {
        NewPurchase {
            client_id,
            book_id,
            library: library.into(),
        }
    }

    /// Attaches the id assigned by the store.
    pub fn with_id(self, id: i64) -> Purchase {
        Purchase {
            id,
            client_id: self.client_id,
            book_id: self.book_id,
            library: self.library,
        }
    }
}

/// A stored purchase: one copy of `book_id` sold to `client_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Purchase {
    pub id: i64,
    pub client_id: i64,
    pub book_id: i64,
    pub library: String,
}

impl From<&Purchase> for NewPurchase {
    fn from(p: &Purchase) -> Self {
        NewPurchase {
            client_id: p.client_id,
            book_id: p.book_id,
            library: p.library.clone(),
        }
    }
}

impl fmt::Display for Purchase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Purchase #{}: client {} bought book {} at {}",
            self.id, self.client_id, self.book_id, self.library
        )
    }
}

// =============================================================================
// Report Rows
// =============================================================================

/// One row of the "top clients by money spent" report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSpending {
    pub client: Client,
    pub spent: Money,
}

/// One row of the "best-selling books" report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSales {
    pub book: Book,
    /// Number of purchase records referencing the book.
    pub sales: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================
