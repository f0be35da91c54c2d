//! # bookstore-db: Database Layer for the Bookstore Tracker
//!
//! This crate provides database access for the bookstore tracker.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Bookstore Tracker Data Flow                        │
//! │                                                                         │
//! │  PurchaseService::cascade_delete_book(7)                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   bookstore-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────┐   ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories  │   │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │                │   │  (embedded)  │  │   │
//! │  │   │               │    │ ClientRepo     │   │              │  │   │
//! │  │   │ SqlitePool    │◄───│ BookRepo       │   │ 001_initial  │  │   │
//! │  │   │ begin() → tx  │    │ PurchaseRepo   │   │   _schema    │  │   │
//! │  │   └───────────────┘    └────────────────┘   └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │          ~/.local/share/bookstore/bookstore.db (Linux)          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation, configuration, transactions
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (client, book, purchase)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bookstore_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("bookstore.db")).await?;
//! let books = db.books().find_all().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig, DbTransaction};

// Repository re-exports for convenience
pub use repository::book::BookRepository;
pub use repository::client::ClientRepository;
pub use repository::purchase::PurchaseRepository;
